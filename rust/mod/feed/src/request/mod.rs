//! Request definitions.
//!
//! Each struct is a typed request payload with a `PATH`. The front-end only
//! emits these; the handlers in [`crate::handlers`] do the work.

pub mod app;
pub mod feed;
pub mod player;
pub mod post;

pub use app::{DismissToastReq, InitializeReq, NavigateReq, ToggleThemeReq};
pub use feed::{LoadPageReq, NextPageReq, PrevPageReq};
pub use player::{ClosePlayerReq, OpenPlayerReq};
pub use post::{ToggleLikeReq, ToggleSaveReq};
