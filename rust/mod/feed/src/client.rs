//! Feed Fetcher.
//!
//! [`FeedSource`] is the seam the handlers depend on; [`FeedClient`] is the
//! HTTP implementation against the remote feed API.
//!
//! ```ignore
//! let client = FeedClient::new(DEFAULT_BASE_URL, Some(Duration::from_secs(30)))?;
//! let page = client.fetch_page(1).await?;
//! ```

use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::FetchError;
use crate::model::{FeedPage, Post};

/// Base URL of the public feed service.
pub const DEFAULT_BASE_URL: &str = "https://internship-service.onrender.com";

// ── FeedSource ──────────────────────────────────────────────────────

/// Anything that can produce a page of the feed.
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync + 'static {
    /// Fetch one page. Pages are numbered from 1.
    async fn fetch_page(&self, page: u32) -> Result<FeedPage, FetchError>;
}

// ── FeedClient ──────────────────────────────────────────────────────

/// HTTP client for `GET <base>/videos?page=<n>`.
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    /// Build a client. `timeout` bounds each whole request; `None` leaves
    /// requests unbounded.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page_url(&self, page: u32) -> String {
        format!("{}/videos?page={}", self.base_url, page)
    }
}

#[async_trait::async_trait]
impl FeedSource for FeedClient {
    async fn fetch_page(&self, page: u32) -> Result<FeedPage, FetchError> {
        if page == 0 {
            return Err(FetchError::InvalidPage(page));
        }

        let url = self.page_url(page);
        debug!("GET {}", url);
        let resp = self.http.get(&url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let bytes = resp.bytes().await?;
        let feed = decode_page(&bytes)?;
        info!(page, posts = feed.posts.len(), total_pages = feed.total_pages, "feed page fetched");
        Ok(feed)
    }
}

// ── Envelope decoding ───────────────────────────────────────────────

#[derive(Deserialize)]
struct Envelope {
    data: EnvelopeData,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeData {
    posts: Vec<serde_json::Value>,
    total_pages: i64,
}

/// Decode a response body into a validated [`FeedPage`].
///
/// The envelope `{ data: { posts: [...], totalPages } }` must parse. Inside
/// it, records that do not decode as a post or carry an empty `postId` are
/// dropped; repeated ids keep their first occurrence. Derived flags from
/// the wire are discarded. `totalPages` is required and must be a positive
/// integer.
pub fn decode_page(bytes: &[u8]) -> Result<FeedPage, FetchError> {
    let envelope: Envelope =
        serde_json::from_slice(bytes).map_err(|e| FetchError::Decode(e.to_string()))?;

    let raw = envelope.data.posts;
    let mut seen = HashSet::with_capacity(raw.len());
    let mut posts = Vec::with_capacity(raw.len());

    for (index, value) in raw.into_iter().enumerate() {
        let post: Post = match serde_json::from_value(value) {
            Ok(p) => p,
            Err(e) => {
                warn!(index, "dropping malformed post record: {}", e);
                continue;
            }
        };
        if post.post_id.trim().is_empty() {
            warn!(index, "dropping post record with empty postId");
            continue;
        }
        if !seen.insert(post.post_id.clone()) {
            warn!(index, post_id = %post.post_id, "dropping duplicate post record");
            continue;
        }
        posts.push(post.snapshot());
    }

    let raw_total = envelope.data.total_pages;
    let total_pages = u32::try_from(raw_total)
        .ok()
        .filter(|n| *n >= 1)
        .ok_or_else(|| {
            FetchError::Decode(format!("totalPages must be positive, got {}", raw_total))
        })?;

    Ok(FeedPage { posts, total_pages })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(v: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&v).unwrap()
    }

    #[test]
    fn decodes_envelope() {
        let page = decode_page(&body(json!({
            "data": {
                "posts": [
                    {"postId": "a", "submission": {"title": "A"}},
                    {"postId": "b"}
                ],
                "totalPages": 9
            }
        })))
        .unwrap();

        assert_eq!(page.total_pages, 9);
        let ids: Vec<_> = page.posts.iter().map(|p| p.post_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(page.posts[0].submission.title, "A");
    }

    #[test]
    fn wire_flags_are_not_trusted() {
        let page = decode_page(&body(json!({
            "data": {"posts": [{"postId": "a", "isLiked": true, "isSaved": true}], "totalPages": 1}
        })))
        .unwrap();
        assert!(!page.posts[0].is_liked);
        assert!(!page.posts[0].is_saved);
    }

    #[test]
    fn bad_records_are_dropped() {
        let page = decode_page(&body(json!({
            "data": {
                "posts": [
                    {"postId": "a"},
                    {"postId": ""},
                    {"creator": {"name": "no id"}},
                    42,
                    {"postId": "b", "reaction": {"count": "many"}},
                    {"postId": "c"}
                ],
                "totalPages": 2
            }
        })))
        .unwrap();
        let ids: Vec<_> = page.posts.iter().map(|p| p.post_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let page = decode_page(&body(json!({
            "data": {
                "posts": [
                    {"postId": "a", "submission": {"title": "first"}},
                    {"postId": "a", "submission": {"title": "second"}}
                ],
                "totalPages": 1
            }
        })))
        .unwrap();
        assert_eq!(page.posts.len(), 1);
        assert_eq!(page.posts[0].submission.title, "first");
    }

    #[test]
    fn total_pages_must_be_positive() {
        for raw in [json!(0), json!(-3), json!(null), json!(2.5), json!("4")] {
            let result = decode_page(&body(json!({"data": {"posts": [], "totalPages": raw}})));
            assert!(matches!(result, Err(FetchError::Decode(_))), "totalPages {raw}");
        }
        let missing = decode_page(&body(json!({"data": {"posts": []}})));
        assert!(matches!(missing, Err(FetchError::Decode(_))));

        let one = decode_page(&body(json!({"data": {"posts": [], "totalPages": 1}}))).unwrap();
        assert_eq!(one.total_pages, 1);
    }

    #[test]
    fn envelope_mismatch_is_decode_error() {
        for raw in [
            br#"not json"#.to_vec(),
            body(json!({"posts": []})),
            body(json!({"data": {"totalPages": 3}})),
            body(json!({"data": {"posts": {"postId": "a"}}})),
        ] {
            assert!(matches!(decode_page(&raw), Err(FetchError::Decode(_))));
        }
    }

    #[test]
    fn page_url_trims_trailing_slash() {
        let c = FeedClient::new("http://localhost:9/", None).unwrap();
        assert_eq!(c.base_url(), "http://localhost:9");
        assert_eq!(c.page_url(3), "http://localhost:9/videos?page=3");
    }

    #[tokio::test]
    async fn page_zero_rejected_without_network() {
        // Port 9 (discard) is never contacted: the check happens first.
        let c = FeedClient::new("http://127.0.0.1:9", None).unwrap();
        let err = c.fetch_page(0).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidPage(0)));
    }
}
