//! Storage backend trait abstraction
//!
//! Async domain traits for the entry catalog, implemented by the in-memory
//! store and by PostgreSQL, and dispatched through `StorageBackend`.

pub mod entry;
pub mod phonetic;

pub use entry::EntryStore;
pub use phonetic::{PhoneticIndexStore, PhoneticUpdate};
