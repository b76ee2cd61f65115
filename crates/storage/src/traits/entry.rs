use async_trait::async_trait;
use catalog_lookup_core::{Entry, EntryField};

use crate::error::StorageError;

/// Lookup and bulk-write operations on catalog entries.
///
/// Every read returns rows in ascending `id` order.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Rows whose `field` equals `value` exactly (code-point equality).
    async fn find_exact(&self, field: EntryField, value: &str)
    -> Result<Vec<Entry>, StorageError>;

    /// Rows whose `field` contains `value` as a case-sensitive substring,
    /// at most `limit` of them.
    async fn find_substring(
        &self,
        field: EntryField,
        value: &str,
        limit: usize,
    ) -> Result<Vec<Entry>, StorageError>;

    /// Ids of every row whose `field` contains `value`, uncapped.
    ///
    /// Same matching rule as [`find_substring`](Self::find_substring); used to
    /// count matches without materializing them.
    async fn find_substring_ids(
        &self,
        field: EntryField,
        value: &str,
    ) -> Result<Vec<i64>, StorageError>;

    /// Insert or replace entries by `id`. Returns the number of rows written.
    ///
    /// An incoming empty `phonetic_name` keeps the stored key only while the
    /// stored `normalized_name` is unchanged; a renamed row is re-blanked.
    async fn upsert_entries(&self, entries: &[Entry]) -> Result<usize, StorageError>;

    /// Remove every entry. Returns the number of rows deleted.
    async fn delete_all(&self) -> Result<usize, StorageError>;

    /// Total number of entries.
    async fn count_entries(&self) -> Result<usize, StorageError>;
}
