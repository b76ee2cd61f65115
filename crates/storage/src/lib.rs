//! Storage layer for catalog-lookup
//!
//! Entry store traits plus an in-memory backend and a PostgreSQL backend,
//! unified behind the `StorageBackend` enum.

mod backend;
pub mod error;
mod memory;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
pub use traits::{EntryStore, PhoneticIndexStore, PhoneticUpdate};
