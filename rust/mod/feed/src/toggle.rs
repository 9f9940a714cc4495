//! Like/save toggling.
//!
//! A preference list is a set keyed by `post_id` that remembers insertion
//! order. Toggling removes the entry with the same id if there is one, and
//! otherwise appends a snapshot of the post.

use std::collections::HashSet;

use tracing::debug;

use crate::error::StoreError;
use crate::model::Post;
use crate::prefs::{PrefList, Preferences};

/// Result of a toggle that has been written through the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Toggled {
    pub list: Vec<Post>,
    /// True if the post was added, false if it was removed.
    pub added: bool,
}

pub fn contains(list: &[Post], post_id: &str) -> bool {
    list.iter().any(|p| p.post_id == post_id)
}

/// Flip membership of `post` in `list`. Returns the new list and whether
/// the post is now a member.
pub fn flip(list: &[Post], post: &Post) -> (Vec<Post>, bool) {
    if contains(list, &post.post_id) {
        let kept = list
            .iter()
            .filter(|p| p.post_id != post.post_id)
            .cloned()
            .collect();
        (kept, false)
    } else {
        let mut grown = list.to_vec();
        grown.push(post.snapshot());
        (grown, true)
    }
}

/// Drop later entries that repeat an earlier `post_id`.
pub fn dedup(list: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::new();
    list.into_iter()
        .filter(|p| seen.insert(p.post_id.clone()))
        .collect()
}

/// Toggle `post` in the liked list and persist the result.
pub fn toggle_like(prefs: &Preferences, post: &Post) -> Result<Toggled, StoreError> {
    toggle(prefs, PrefList::Liked, post)
}

/// Toggle `post` in the saved list and persist the result.
pub fn toggle_save(prefs: &Preferences, post: &Post) -> Result<Toggled, StoreError> {
    toggle(prefs, PrefList::Saved, post)
}

fn toggle(prefs: &Preferences, which: PrefList, post: &Post) -> Result<Toggled, StoreError> {
    let mut added = false;
    let list = prefs.update(which, |current| {
        let (next, now_member) = flip(current, post);
        added = now_member;
        next
    })?;
    debug!(list = which.key(), post_id = %post.post_id, added, "preference toggled");
    Ok(Toggled { list, added })
}
