//! View state definitions.
//!
//! Each file defines state types stored at well-known Flux paths. The
//! front-end only reads these; handlers are the only writers.

pub mod app;
pub mod feed;
pub mod player;
pub mod prefs;

pub use app::{AppRoute, Route, ToastState};
pub use feed::FeedState;
pub use player::PlayerModal;
pub use prefs::{LikedPosts, SavedPosts, ThemeState};
