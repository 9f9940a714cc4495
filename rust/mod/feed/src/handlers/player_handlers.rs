//! Player modal handlers.

use tracing::debug;
use videoclone_flux::StateStore;

use crate::prefs::{PrefList, Preferences};
use crate::reconcile::annotate;
use crate::request::OpenPlayerReq;
use crate::state::*;

/// Handle `player/open`. The post must be visible in the current view;
/// unknown ids are ignored.
pub fn handle_open(req: &OpenPlayerReq, store: &StateStore, prefs: &Preferences) {
    let route = store.read::<AppRoute>().unwrap_or_default().0;
    let visible = match route {
        Route::Feed => store.read::<FeedState>().unwrap_or_default().posts,
        Route::Liked => prefs.read(PrefList::Liked),
        Route::Saved => prefs.read(PrefList::Saved),
        Route::NotFound(_) => Vec::new(),
    };

    let Some(post) = visible.iter().find(|p| p.post_id == req.post_id) else {
        debug!(post_id = %req.post_id, ?route, "open for post not in view ignored");
        return;
    };

    let liked = prefs.read(PrefList::Liked);
    let saved = prefs.read(PrefList::Saved);
    store.write(PlayerModal {
        post: Some(annotate(post, &liked, &saved)),
    });
}

/// Handle `player/close`.
pub fn handle_close(store: &StateStore) {
    store.write(PlayerModal::default());
}
