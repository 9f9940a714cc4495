use videoclone_kv::KVError;

/// Failure to obtain a usable feed page.
///
/// Always recovered by the caller: loading is cleared and the displayed
/// posts stay as they were.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid page {0}: pages start at 1")]
    InvalidPage(u32),

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("decode: {0}")]
    Decode(String),
}

/// Failure reading or writing a preference value.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The stored bytes are not the expected JSON. Readers treat this as
    /// "no data".
    #[error("malformed value under '{key}': {reason}")]
    Parse { key: &'static str, reason: String },

    #[error("encode '{key}': {reason}")]
    Encode { key: &'static str, reason: String },

    #[error(transparent)]
    Storage(#[from] KVError),
}
