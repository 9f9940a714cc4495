use crate::error::KVError;

/// KVStore is the durable key-value contract the preference layer writes through.
///
/// Keys are flat strings (`likedPosts`, `savedPosts`, `darkMode`). A successful
/// `set` is visible to every subsequent `get` in the same process.
pub trait KVStore: Send + Sync {
    /// Get the value for a key. Returns None if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVError>;

    /// Set a key-value pair, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), KVError>;
}
