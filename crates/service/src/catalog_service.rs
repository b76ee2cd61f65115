use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use catalog_lookup_core::{CATALOG_EVENT_CAPACITY, Entry, EntryInput};
use catalog_lookup_storage::{EntryStore, StorageBackend};
use tokio::sync::broadcast;

use crate::ServiceError;

/// Change notifications published by [`CatalogService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEvent {
    /// A refresh was written to the store. Carries no payload; listeners
    /// re-read whatever they need.
    Refreshed,
}

/// Parse a catalog file: a JSON array of entry records.
pub fn load_catalog_file(path: &Path) -> Result<Vec<EntryInput>, ServiceError> {
    let raw = std::fs::read_to_string(path)?;
    let inputs: Vec<EntryInput> = serde_json::from_str(&raw)?;
    tracing::debug!(path = %path.display(), count = inputs.len(), "catalog file parsed");
    Ok(inputs)
}

/// Writes the catalog and announces each successful refresh.
pub struct CatalogService {
    storage: Arc<StorageBackend>,
    event_tx: broadcast::Sender<CatalogEvent>,
}

impl CatalogService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        let (event_tx, _) = broadcast::channel(CATALOG_EVENT_CAPACITY);
        Self { storage, event_tx }
    }

    /// A receiver for refresh events published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CatalogEvent> {
        self.event_tx.subscribe()
    }

    /// Validate and upsert `inputs`, then publish [`CatalogEvent::Refreshed`].
    ///
    /// The whole batch is rejected before any write if an id is non-positive
    /// or repeated. New and renamed rows start with a pending phonetic key;
    /// the event does not wait for them to be indexed.
    pub async fn refresh(&self, inputs: Vec<EntryInput>) -> Result<usize, ServiceError> {
        let mut seen = HashSet::with_capacity(inputs.len());
        let mut entries = Vec::with_capacity(inputs.len());
        for input in inputs {
            if !seen.insert(input.id) {
                return Err(ServiceError::InvalidInput(format!(
                    "duplicate entry id {}",
                    input.id
                )));
            }
            entries.push(Entry::from_input(input)?);
        }

        let written = self.storage.upsert_entries(&entries).await?;
        tracing::info!(written, backend = self.storage.kind(), "catalog refreshed");

        // No subscribers is fine: nobody needs to react.
        if self.event_tx.send(CatalogEvent::Refreshed).is_err() {
            tracing::debug!("catalog refresh event had no subscribers");
        }
        Ok(written)
    }

    /// Read and refresh from a catalog file.
    pub async fn refresh_from_file(&self, path: &Path) -> Result<usize, ServiceError> {
        let inputs = load_catalog_file(path)?;
        self.refresh(inputs).await
    }

    pub async fn clear(&self) -> Result<usize, ServiceError> {
        let removed = self.storage.delete_all().await?;
        tracing::info!(removed, "catalog cleared");
        Ok(removed)
    }

    pub async fn count(&self) -> Result<usize, ServiceError> {
        Ok(self.storage.count_entries().await?)
    }
}
