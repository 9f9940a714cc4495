//! Pure transitions of [`FeedState`].
//!
//! Handlers apply these through `StateStore::update`, so each transition
//! runs atomically against the latest stored value.

use tracing::debug;

use crate::model::{FeedPage, Post};
use crate::reconcile::reconcile;
use crate::state::FeedState;

#[derive(Debug, Clone)]
pub enum FeedAction {
    /// A fetch for `page` was issued. Issues a new ticket.
    Requested { page: u32 },
    /// A fetch resolved. `page.posts` are already reconciled.
    Loaded { ticket: u64, page: FeedPage },
    /// A fetch failed.
    Failed { ticket: u64, error: String },
    /// A preference list changed; re-derive the flags on displayed posts.
    PreferencesChanged { liked: Vec<Post>, saved: Vec<Post> },
}

pub fn reduce(state: FeedState, action: FeedAction) -> FeedState {
    match action {
        FeedAction::Requested { page } => FeedState {
            page,
            loading: true,
            ticket: state.ticket + 1,
            error: None,
            ..state
        },

        FeedAction::Loaded { ticket, page } => {
            if ticket != state.ticket {
                debug!(ticket, latest = state.ticket, "discarding stale feed page");
                return state;
            }
            FeedState {
                total_pages: page.total_pages.max(1),
                loading: false,
                posts: page.posts,
                error: None,
                ..state
            }
        }

        FeedAction::Failed { ticket, error } => {
            if ticket != state.ticket {
                debug!(ticket, latest = state.ticket, "discarding stale feed failure");
                return state;
            }
            FeedState {
                loading: false,
                error: Some(error),
                ..state
            }
        }

        FeedAction::PreferencesChanged { liked, saved } => FeedState {
            posts: reconcile(&state.posts, &liked, &saved),
            ..state
        },
    }
}
