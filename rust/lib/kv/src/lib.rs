//! Durable string-keyed storage for client-side preferences.
//!
//! Two backends share the [`KVStore`] interface: [`RedbStore`] persists to a
//! single redb file, [`MemoryStore`] lives only as long as the process.

pub mod error;
pub mod memory;
pub mod redb;
pub mod traits;

pub use error::KVError;
pub use memory::MemoryStore;
pub use redb::RedbStore;
pub use traits::KVStore;
