//! In-process entry store backed by an id-ordered map.
//!
//! Used when the catalog is loaded from a file for a single run, and by tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use catalog_lookup_core::{Entry, EntryField};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::{EntryStore, PhoneticIndexStore, PhoneticUpdate};

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<BTreeMap<i64, Entry>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Applies the upsert rule for a single row: keep the stored phonetic key
/// when the incoming one is pending and the normalized name did not change.
pub(crate) fn merge_upsert(stored: Option<&Entry>, mut incoming: Entry) -> Entry {
    if incoming.phonetic_name.is_empty() {
        if let Some(prev) = stored.filter(|prev| prev.normalized_name == incoming.normalized_name) {
            incoming.phonetic_name.clone_from(&prev.phonetic_name);
        }
    }
    incoming
}

#[async_trait]
impl EntryStore for MemoryStorage {
    async fn find_exact(
        &self,
        field: EntryField,
        value: &str,
    ) -> Result<Vec<Entry>, StorageError> {
        let entries = self.entries.read().await;
        Ok(entries.values().filter(|e| e.field(field) == value).cloned().collect())
    }

    async fn find_substring(
        &self,
        field: EntryField,
        value: &str,
        limit: usize,
    ) -> Result<Vec<Entry>, StorageError> {
        let entries = self.entries.read().await;
        Ok(entries
            .values()
            .filter(|e| e.field(field).contains(value))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_substring_ids(
        &self,
        field: EntryField,
        value: &str,
    ) -> Result<Vec<i64>, StorageError> {
        let entries = self.entries.read().await;
        Ok(entries.values().filter(|e| e.field(field).contains(value)).map(|e| e.id).collect())
    }

    async fn upsert_entries(&self, batch: &[Entry]) -> Result<usize, StorageError> {
        let mut entries = self.entries.write().await;
        for entry in batch {
            let merged = merge_upsert(entries.get(&entry.id), entry.clone());
            entries.insert(merged.id, merged);
        }
        Ok(batch.len())
    }

    async fn delete_all(&self) -> Result<usize, StorageError> {
        let mut entries = self.entries.write().await;
        let removed = entries.len();
        entries.clear();
        Ok(removed)
    }

    async fn count_entries(&self) -> Result<usize, StorageError> {
        Ok(self.entries.read().await.len())
    }
}

#[async_trait]
impl PhoneticIndexStore for MemoryStorage {
    async fn get_pending_phonetic(
        &self,
        after_id: i64,
        limit: usize,
    ) -> Result<Vec<Entry>, StorageError> {
        let Some(start) = after_id.checked_add(1) else {
            return Ok(Vec::new());
        };
        let entries = self.entries.read().await;
        Ok(entries
            .range(start..)
            .map(|(_, e)| e)
            .filter(|e| e.is_phonetic_pending())
            .take(limit)
            .cloned()
            .collect())
    }

    async fn store_phonetic_names(
        &self,
        updates: &[PhoneticUpdate],
    ) -> Result<usize, StorageError> {
        let mut entries = self.entries.write().await;
        let mut written = 0;
        for update in updates {
            let Some(entry) = entries.get_mut(&update.id) else {
                continue;
            };
            if entry.is_phonetic_pending() && entry.normalized_name == update.normalized_name {
                entry.phonetic_name.clone_from(&update.phonetic_name);
                written += 1;
            }
        }
        Ok(written)
    }
}
