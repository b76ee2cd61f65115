use async_trait::async_trait;
use catalog_lookup_core::Entry;

use crate::error::StorageError;

/// A computed phonetic key for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticUpdate {
    pub id: i64,
    /// The `normalized_name` the key was computed from.
    pub normalized_name: String,
    pub phonetic_name: String,
}

/// Access to rows whose phonetic key is still pending.
#[async_trait]
pub trait PhoneticIndexStore: Send + Sync {
    /// Rows with an empty `phonetic_name` and `id > after_id`, ascending by id.
    async fn get_pending_phonetic(
        &self,
        after_id: i64,
        limit: usize,
    ) -> Result<Vec<Entry>, StorageError>;

    /// Write phonetic keys. A key is only stored if the row's key is still
    /// empty and its `normalized_name` still matches the one it was derived
    /// from. Returns the number of rows updated.
    async fn store_phonetic_names(&self, updates: &[PhoneticUpdate])
    -> Result<usize, StorageError>;
}
