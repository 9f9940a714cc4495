//! Flux: the client state engine.
//!
//! Rust owns all view state and the logic that changes it; a front-end only
//! renders what it reads here and emits requests back.
//!
//! # Primitives
//!
//! - `read::<S>()` / `get(path)`: read state at a path (Arc, zero-copy)
//! - `emit(request)`: route a typed request to its handler(s)
//! - `subscribe(pattern)`: observe state changes
//!
//! # Path Addressing
//!
//! State and requests share a flat, `/`-separated namespace:
//! `feed/state`, `app/route`, `post/like`.
//!
//! Subscriptions accept patterns: an exact path, `+` for one level
//! (`app/+`) and a trailing `#` for any number of levels (`feed/#`, `#`).
//! Typed handlers are registered at their request's exact path.
//!
//! # Example
//!
//! ```ignore
//! use videoclone_flux::{Flux, Request, State};
//!
//! let flux = Flux::new();
//! flux.handle(|req: Arc<NavigateReq>, store| async move {
//!     store.write(AppRoute(Route::parse(&req.path)));
//! });
//! flux.subscribe(AppRoute::PATH, |_, _| println!("route changed"));
//! flux.emit(NavigateReq { path: "/saved".into() }).await;
//! ```

pub mod app;
pub mod pattern;
pub mod router;
pub mod store;
pub mod value;

pub use app::Flux;
pub use router::{BoxFuture, Payload, Router};
pub use store::{ChangeHandler, StateStore};
pub use value::{Request, State, StateValue, SubscriptionId};
