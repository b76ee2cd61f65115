use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use catalog_lookup_core::LookupSettings;
use catalog_lookup_phonetic::{SharedPhonetics, init_phonetics};
use catalog_lookup_service::{CatalogService, LookupService, PhoneticIndexMaintainer};
use catalog_lookup_storage::StorageBackend;

/// Backend, phonetic capability and settings shared by every command.
pub(crate) struct AppContext {
    pub(crate) storage: Arc<StorageBackend>,
    pub(crate) phonetics: Option<SharedPhonetics>,
    pub(crate) settings: LookupSettings,
}

impl AppContext {
    /// With `catalog`, loads that file into an in-memory store and indexes it.
    /// Otherwise connects to `DATABASE_URL`.
    pub(crate) async fn open(catalog: Option<&Path>) -> Result<Self> {
        let settings = LookupSettings::from_env();
        let phonetics = init_phonetics(settings.phonetic_enabled);

        let storage = match catalog {
            Some(_) => Arc::new(StorageBackend::new_memory()),
            None => {
                let url = std::env::var("DATABASE_URL").map_err(|_| {
                    anyhow::anyhow!("DATABASE_URL must be set, or pass --catalog <FILE>")
                })?;
                Arc::new(StorageBackend::new_postgres(&url).await?)
            },
        };
        tracing::debug!(backend = storage.kind(), "storage ready");

        let ctx = Self { storage, phonetics, settings };
        if let Some(path) = catalog {
            let loaded = ctx
                .catalog()
                .refresh_from_file(path)
                .await
                .with_context(|| format!("loading catalog {}", path.display()))?;
            let indexed = ctx.maintainer().backfill().await?;
            tracing::debug!(loaded, indexed, "in-memory catalog ready");
        }
        Ok(ctx)
    }

    pub(crate) fn catalog(&self) -> CatalogService {
        CatalogService::new(Arc::clone(&self.storage))
    }

    pub(crate) fn maintainer(&self) -> PhoneticIndexMaintainer {
        PhoneticIndexMaintainer::new(
            Arc::clone(&self.storage),
            self.phonetics.clone(),
            self.settings.backfill_batch,
        )
    }

    pub(crate) fn lookup(&self) -> LookupService {
        LookupService::new(Arc::clone(&self.storage), self.phonetics.clone(), self.settings.clone())
    }
}
