//! Persistent preference store.
//!
//! Wraps an injected [`KVStore`] and owns three keys:
//!
//! | key          | value                     | when absent/malformed |
//! |--------------|---------------------------|-----------------------|
//! | `likedPosts` | JSON array of `Post`      | empty list            |
//! | `savedPosts` | JSON array of `Post`      | empty list            |
//! | `darkMode`   | JSON boolean              | `false`               |
//!
//! Plain reads never fail: corrupt values are logged and replaced by the
//! default. `update` only overwrites a list it could actually read or one
//! that is corrupt; a backend read error is returned untouched. Writes go
//! straight to the backend and are visible to the next read.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::warn;
use videoclone_kv::KVStore;

use crate::error::StoreError;
use crate::model::Post;
use crate::toggle;

pub const LIKED_POSTS_KEY: &str = "likedPosts";
pub const SAVED_POSTS_KEY: &str = "savedPosts";
pub const DARK_MODE_KEY: &str = "darkMode";

/// One of the two persisted preference lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefList {
    Liked,
    Saved,
}

impl PrefList {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Liked => LIKED_POSTS_KEY,
            Self::Saved => SAVED_POSTS_KEY,
        }
    }
}

pub struct Preferences {
    kv: Arc<dyn KVStore>,
    /// Serializes read-modify-write cycles in `update`.
    write_lock: Mutex<()>,
}

impl Preferences {
    pub fn new(kv: Arc<dyn KVStore>) -> Self {
        Self {
            kv,
            write_lock: Mutex::new(()),
        }
    }

    /// Read a preference list, substituting an empty list for anything
    /// missing or unreadable.
    pub fn read(&self, which: PrefList) -> Vec<Post> {
        match self.try_read(which) {
            Ok(posts) => posts,
            Err(e) => {
                warn!(key = which.key(), error = %e, "preference list unreadable, using empty list");
                Vec::new()
            }
        }
    }

    /// Read a preference list, reporting corruption instead of hiding it.
    /// A missing key is an empty list, not an error.
    pub fn try_read(&self, which: PrefList) -> Result<Vec<Post>, StoreError> {
        let key = which.key();
        match self.kv.get(key)? {
            Some(bytes) => decode_list(key, &bytes),
            None => Ok(Vec::new()),
        }
    }

    /// Replace a preference list.
    pub fn write(&self, which: PrefList, posts: &[Post]) -> Result<(), StoreError> {
        let key = which.key();
        let bytes = serde_json::to_vec(posts).map_err(|e| StoreError::Encode {
            key,
            reason: e.to_string(),
        })?;
        self.kv.set(key, &bytes)?;
        Ok(())
    }

    /// Read, transform and write back a list as one step. Concurrent
    /// updates through the same `Preferences` are serialized.
    ///
    /// A corrupt stored list is replaced. A failed backend read aborts
    /// before anything is written.
    pub fn update<F>(&self, which: PrefList, f: F) -> Result<Vec<Post>, StoreError>
    where
        F: FnOnce(&[Post]) -> Vec<Post>,
    {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let current = match self.try_read(which) {
            Ok(posts) => posts,
            Err(e @ StoreError::Parse { .. }) => {
                warn!(key = which.key(), error = %e, "preference list corrupt, replacing it");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        let next = f(&current);
        self.write(which, &next)?;
        Ok(next)
    }

    pub fn dark_mode(&self) -> bool {
        let bytes = match self.kv.get(DARK_MODE_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return false,
            Err(e) => {
                warn!(key = DARK_MODE_KEY, error = %e, "theme flag unreadable");
                return false;
            }
        };
        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            warn!(key = DARK_MODE_KEY, error = %e, "theme flag malformed, using light theme");
            false
        })
    }

    pub fn set_dark_mode(&self, dark: bool) -> Result<(), StoreError> {
        let bytes = if dark { b"true".as_slice() } else { b"false".as_slice() };
        self.kv.set(DARK_MODE_KEY, bytes)?;
        Ok(())
    }
}

fn decode_list(key: &'static str, bytes: &[u8]) -> Result<Vec<Post>, StoreError> {
    let posts: Vec<Post> = serde_json::from_slice(bytes).map_err(|e| StoreError::Parse {
        key,
        reason: e.to_string(),
    })?;
    // Stored data written by something else may repeat ids.
    Ok(toggle::dedup(posts))
}
