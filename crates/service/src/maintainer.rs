//! Background job that fills in pending phonetic keys.

use std::sync::Arc;

use catalog_lookup_phonetic::SharedPhonetics;
use catalog_lookup_storage::{PhoneticIndexStore, PhoneticUpdate, StorageBackend};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::{CatalogEvent, ServiceError};

pub struct PhoneticIndexMaintainer {
    storage: Arc<StorageBackend>,
    phonetics: Option<SharedPhonetics>,
    batch_size: usize,
}

impl PhoneticIndexMaintainer {
    #[must_use]
    pub fn new(
        storage: Arc<StorageBackend>,
        phonetics: Option<SharedPhonetics>,
        batch_size: usize,
    ) -> Self {
        Self { storage, phonetics, batch_size: batch_size.max(1) }
    }

    /// Compute and store keys for every row whose phonetic key is empty.
    ///
    /// Pages through pending rows by ascending id, so rows that fail to
    /// encode are passed over instead of being fetched again. Returns the
    /// number of keys written; a second run right after a clean one writes 0.
    pub async fn backfill(&self) -> Result<usize, ServiceError> {
        let Some(provider) = self.phonetics.as_ref().filter(|p| p.is_available()) else {
            tracing::debug!("phonetic capability unavailable, skipping backfill");
            return Ok(0);
        };

        let mut after_id = 0_i64;
        let mut written = 0_usize;
        let mut skipped = 0_usize;
        loop {
            let page = self.storage.get_pending_phonetic(after_id, self.batch_size).await?;
            let Some(last) = page.last() else {
                break;
            };
            after_id = last.id;
            let full_page = page.len() == self.batch_size;

            let mut updates = Vec::with_capacity(page.len());
            for entry in page {
                match provider.phoneticize(&entry.normalized_name) {
                    Ok(key) if !key.is_empty() => updates.push(PhoneticUpdate {
                        id: entry.id,
                        normalized_name: entry.normalized_name,
                        phonetic_name: key,
                    }),
                    Ok(_) => {
                        tracing::debug!(id = entry.id, "empty phonetic key, leaving row pending");
                        skipped += 1;
                    },
                    Err(e) => {
                        tracing::warn!(id = entry.id, error = %e, "failed to compute phonetic key");
                        skipped += 1;
                    },
                }
            }

            if !updates.is_empty() {
                written += self.storage.store_phonetic_names(&updates).await?;
            }
            if !full_page {
                break;
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, "rows left without a phonetic key");
        }
        if written > 0 {
            tracing::info!(written, "phonetic backfill complete");
        }
        Ok(written)
    }

    /// Run one backfill now and one after every catalog refresh.
    ///
    /// A lagged receiver still means at least one refresh happened, so it
    /// triggers a single backfill. The task ends when every sender is dropped.
    pub fn spawn(self: Arc<Self>, mut events: broadcast::Receiver<CatalogEvent>) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run_logged("startup").await;
            loop {
                match events.recv().await {
                    Ok(CatalogEvent::Refreshed) => self.run_logged("refresh").await,
                    Err(RecvError::Lagged(n)) => {
                        tracing::warn!("phonetic maintainer lagged by {} events", n);
                        self.run_logged("refresh").await;
                    },
                    Err(RecvError::Closed) => break,
                }
            }
            tracing::debug!("catalog event channel closed, phonetic maintainer stopping");
        })
    }

    async fn run_logged(&self, trigger: &'static str) {
        match self.backfill().await {
            Ok(written) => tracing::debug!(trigger, written, "phonetic backfill ran"),
            Err(e) => tracing::warn!(trigger, error = %e, "phonetic backfill failed"),
        }
    }
}
