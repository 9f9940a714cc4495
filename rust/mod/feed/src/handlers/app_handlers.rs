//! App lifecycle, navigation and theme handlers.

use tracing::{debug, error};
use videoclone_flux::StateStore;

use crate::handlers::FeedContext;
use crate::handlers::feed_handlers;
use crate::prefs::{PrefList, Preferences};
use crate::request::{InitializeReq, NavigateReq};
use crate::state::*;

/// Handle `app/initialize`: mirror stored preferences into state, then
/// load the requested page.
pub async fn handle_initialize(req: &InitializeReq, store: &StateStore, ctx: &FeedContext) {
    store.write(AppRoute(Route::Feed));
    store.write(ThemeState {
        dark: ctx.prefs.dark_mode(),
    });
    store.write(LikedPosts(ctx.prefs.read(PrefList::Liked)));
    store.write(SavedPosts(ctx.prefs.read(PrefList::Saved)));
    store.write(ToastState::default());
    store.write(PlayerModal::default());
    store.write(FeedState::default());

    if let Some(page) = req.page {
        feed_handlers::handle_load(page, store, ctx).await;
    }
}

/// Handle `app/navigate`.
pub fn handle_navigate(req: &NavigateReq, store: &StateStore) {
    let route = Route::parse(&req.path);
    debug!(path = %req.path, ?route, "navigate");
    close_player(store);
    store.write(AppRoute(route));
}

/// Handle `app/toggle-theme`. The new flag is persisted before it is shown.
///
/// The flip and the write happen under the store's update lock, so two
/// toggles never read the same starting value.
pub fn handle_toggle_theme(store: &StateStore, prefs: &Preferences) {
    store.update::<ThemeState, _>(|current| {
        let next = ThemeState { dark: !current.dark };
        match prefs.set_dark_mode(next.dark) {
            Ok(()) => next,
            Err(e) => {
                error!(error = %e, "failed to persist theme");
                current
            }
        }
    });
}

/// Handle `app/dismiss-toast`.
pub fn handle_dismiss_toast(store: &StateStore) {
    store.update::<ToastState, _>(|t| t.dismissed());
}

/// Close the player modal if it is open.
pub(crate) fn close_player(store: &StateStore) {
    if store.read::<PlayerModal>().is_some_and(|m| m.is_open()) {
        store.write(PlayerModal::default());
    }
}
