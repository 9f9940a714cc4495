//! Like / save handlers.
//!
//! Write-then-reflect: the preference list is persisted first, then the
//! mirrors, the feed flags, the open player and the toast are updated. If
//! the write fails nothing visible changes.

use tracing::{debug, error};
use videoclone_flux::StateStore;

use crate::model::Post;
use crate::prefs::{PrefList, Preferences};
use crate::reconcile::annotate;
use crate::reducer::{FeedAction, reduce};
use crate::request::{ToggleLikeReq, ToggleSaveReq};
use crate::state::*;
use crate::toggle::{self, Toggled};

/// Handle `post/like`.
pub fn handle_toggle_like(req: &ToggleLikeReq, store: &StateStore, prefs: &Preferences) {
    handle_toggle(PrefList::Liked, &req.post_id, store, prefs);
}

/// Handle `post/save`.
pub fn handle_toggle_save(req: &ToggleSaveReq, store: &StateStore, prefs: &Preferences) {
    handle_toggle(PrefList::Saved, &req.post_id, store, prefs);
}

fn handle_toggle(which: PrefList, post_id: &str, store: &StateStore, prefs: &Preferences) {
    let Some(post) = find_post(post_id, store, prefs) else {
        debug!(post_id, "toggle for unknown post ignored");
        return;
    };

    let result = match which {
        PrefList::Liked => toggle::toggle_like(prefs, &post),
        PrefList::Saved => toggle::toggle_save(prefs, &post),
    };
    let Toggled { list, added } = match result {
        Ok(t) => t,
        Err(e) => {
            error!(list = which.key(), post_id, error = %e, "failed to persist toggle");
            return;
        }
    };

    let (liked, saved) = match which {
        PrefList::Liked => (list, prefs.read(PrefList::Saved)),
        PrefList::Saved => (prefs.read(PrefList::Liked), list),
    };

    store.write(LikedPosts(liked.clone()));
    store.write(SavedPosts(saved.clone()));
    refresh_player(store, &liked, &saved);
    store.update::<FeedState, _>(|s| reduce(s, FeedAction::PreferencesChanged { liked, saved }));
    store.update::<ToastState, _>(|t| t.show(toast_message(which, added)));
}

/// Locate a post the user can currently see: the feed first, then the
/// stored lists.
fn find_post(post_id: &str, store: &StateStore, prefs: &Preferences) -> Option<Post> {
    if let Some(post) = store
        .read::<FeedState>()
        .and_then(|s| s.find(post_id).cloned())
    {
        return Some(post);
    }
    [PrefList::Liked, PrefList::Saved]
        .into_iter()
        .flat_map(|which| prefs.read(which))
        .find(|p| p.post_id == post_id)
}

fn refresh_player(store: &StateStore, liked: &[Post], saved: &[Post]) {
    if let Some(post) = store.read::<PlayerModal>().and_then(|m| m.post) {
        store.write(PlayerModal {
            post: Some(annotate(&post, liked, saved)),
        });
    }
}

pub fn toast_message(which: PrefList, added: bool) -> &'static str {
    match (which, added) {
        (PrefList::Liked, true) => "Added to liked videos",
        (PrefList::Liked, false) => "Removed from liked videos",
        (PrefList::Saved, true) => "Added to saved videos",
        (PrefList::Saved, false) => "Removed from saved videos",
    }
}
