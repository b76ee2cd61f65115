//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use catalog_lookup_core::{Entry, EntryField};

use crate::error::StorageError;
use crate::traits::{EntryStore, PhoneticIndexStore, PhoneticUpdate};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Memory(s) => <crate::MemoryStorage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Memory(crate::MemoryStorage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(crate::MemoryStorage::new())
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// Short backend name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

// ── EntryStore ───────────────────────────────────────────────────

#[async_trait]
impl EntryStore for StorageBackend {
    async fn find_exact(
        &self,
        field: EntryField,
        value: &str,
    ) -> Result<Vec<Entry>, StorageError> {
        dispatch!(self, EntryStore, find_exact(field, value))
    }

    async fn find_substring(
        &self,
        field: EntryField,
        value: &str,
        limit: usize,
    ) -> Result<Vec<Entry>, StorageError> {
        dispatch!(self, EntryStore, find_substring(field, value, limit))
    }

    async fn find_substring_ids(
        &self,
        field: EntryField,
        value: &str,
    ) -> Result<Vec<i64>, StorageError> {
        dispatch!(self, EntryStore, find_substring_ids(field, value))
    }

    async fn upsert_entries(&self, entries: &[Entry]) -> Result<usize, StorageError> {
        dispatch!(self, EntryStore, upsert_entries(entries))
    }

    async fn delete_all(&self) -> Result<usize, StorageError> {
        dispatch!(self, EntryStore, delete_all())
    }

    async fn count_entries(&self) -> Result<usize, StorageError> {
        dispatch!(self, EntryStore, count_entries())
    }
}

// ── PhoneticIndexStore ───────────────────────────────────────────

#[async_trait]
impl PhoneticIndexStore for StorageBackend {
    async fn get_pending_phonetic(
        &self,
        after_id: i64,
        limit: usize,
    ) -> Result<Vec<Entry>, StorageError> {
        dispatch!(self, PhoneticIndexStore, get_pending_phonetic(after_id, limit))
    }

    async fn store_phonetic_names(
        &self,
        updates: &[PhoneticUpdate],
    ) -> Result<usize, StorageError> {
        dispatch!(self, PhoneticIndexStore, store_phonetic_names(updates))
    }
}
