//! Feed pagination handlers.

use tracing::{debug, warn};
use videoclone_flux::StateStore;

use crate::handlers::FeedContext;
use crate::handlers::app_handlers::close_player;
use crate::model::FeedPage;
use crate::prefs::PrefList;
use crate::reconcile::reconcile;
use crate::reducer::{FeedAction, reduce};
use crate::state::FeedState;

/// Handle `feed/load`.
///
/// Issues a ticket, fetches, reconciles against the stored preference
/// lists, and applies the result only if no newer load was issued
/// meanwhile. A failure clears loading and leaves the posts as they were.
pub async fn handle_load(page: u32, store: &StateStore, ctx: &FeedContext) {
    if page == 0 {
        debug!("ignoring load of page 0");
        return;
    }

    close_player(store);
    let ticket = store
        .update::<FeedState, _>(|s| reduce(s, FeedAction::Requested { page }))
        .ticket;
    debug!(page, ticket, "feed load issued");

    let action = match ctx.source.fetch_page(page).await {
        Ok(fetched) => {
            let liked = ctx.prefs.read(PrefList::Liked);
            let saved = ctx.prefs.read(PrefList::Saved);
            FeedAction::Loaded {
                ticket,
                page: FeedPage {
                    posts: reconcile(&fetched.posts, &liked, &saved),
                    total_pages: fetched.total_pages,
                },
            }
        }
        Err(e) => {
            warn!(page, ticket, error = %e, "feed load failed");
            FeedAction::Failed {
                ticket,
                error: e.to_string(),
            }
        }
    };

    store.update::<FeedState, _>(|s| reduce(s, action));
}

/// Handle `feed/next`. A no-op on the last page.
pub async fn handle_next(store: &StateStore, ctx: &FeedContext) {
    let state = store.read::<FeedState>().unwrap_or_default();
    match state.next_page() {
        Some(page) => handle_load(page, store, ctx).await,
        None => debug!(page = state.page, "already on last page"),
    }
}

/// Handle `feed/prev`. A no-op on page 1.
pub async fn handle_prev(store: &StateStore, ctx: &FeedContext) {
    let state = store.read::<FeedState>().unwrap_or_default();
    match state.prev_page() {
        Some(page) => handle_load(page, store, ctx).await,
        None => debug!("already on first page"),
    }
}
