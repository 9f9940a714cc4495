//! VideoClone feed: application state and behaviour.
//!
//! Fetches a paginated video feed, keeps liked/saved preference lists in a
//! [`KVStore`](videoclone_kv::KVStore), and exposes everything the view
//! needs as typed state on a [`Flux`](videoclone_flux::Flux) instance.
//!
//! ```ignore
//! let flux = Flux::new();
//! let ctx = FeedContext::new(Arc::new(client), Arc::new(Preferences::new(kv)));
//! register_handlers(&flux, Arc::new(ctx));
//! flux.emit(InitializeReq::default()).await;
//! let feed = flux.read::<FeedState>();
//! ```

pub mod client;
pub mod error;
pub mod handlers;
pub mod model;
pub mod prefs;
pub mod reconcile;
pub mod reducer;
pub mod request;
pub mod state;
pub mod toggle;

pub use client::{DEFAULT_BASE_URL, FeedClient, FeedSource, decode_page};
pub use error::{FetchError, StoreError};
pub use handlers::{FeedContext, register_handlers};
pub use model::{FeedPage, Post};
pub use prefs::{PrefList, Preferences};
pub use reconcile::reconcile;
