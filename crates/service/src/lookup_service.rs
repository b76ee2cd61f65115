use std::sync::Arc;

use catalog_lookup_core::{Entry, LookupSettings, MatchTier};
use catalog_lookup_phonetic::SharedPhonetics;
use catalog_lookup_search::{CatalogSearch, SearchOutcome};
use catalog_lookup_storage::StorageBackend;
use serde::Serialize;

use crate::ServiceError;

/// What a lookup produced: a single resolved entry or ranked candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LookupOutcome {
    Resolved(Entry),
    Candidates(SearchOutcome),
}

/// Read-side facade: resolve, search, or resolve falling back to search.
///
/// `None` for a tier or limit means the configured default.
pub struct LookupService {
    search: CatalogSearch,
    settings: LookupSettings,
}

impl LookupService {
    #[must_use]
    pub fn new(
        storage: Arc<StorageBackend>,
        phonetics: Option<SharedPhonetics>,
        settings: LookupSettings,
    ) -> Self {
        Self { search: CatalogSearch::new(storage, phonetics), settings }
    }

    #[must_use]
    pub fn settings(&self) -> &LookupSettings {
        &self.settings
    }

    pub async fn resolve(
        &self,
        query: &str,
        max_tier: Option<MatchTier>,
    ) -> Result<Option<Entry>, ServiceError> {
        let tier = max_tier.unwrap_or(self.settings.max_tier);
        Ok(self.search.resolve(query, tier).await?)
    }

    pub async fn search(
        &self,
        keyword: &str,
        limit: Option<usize>,
        max_tier: Option<MatchTier>,
    ) -> Result<SearchOutcome, ServiceError> {
        let limit = limit.unwrap_or(self.settings.default_limit);
        let tier = max_tier.unwrap_or(self.settings.max_tier);
        Ok(self.search.search(keyword, limit, tier).await?)
    }

    /// Resolve `query`; when nothing resolves, search for it instead.
    pub async fn lookup(
        &self,
        query: &str,
        limit: Option<usize>,
        max_tier: Option<MatchTier>,
    ) -> Result<LookupOutcome, ServiceError> {
        if let Some(entry) = self.resolve(query, max_tier).await? {
            return Ok(LookupOutcome::Resolved(entry));
        }
        tracing::debug!(query, "not resolved, falling back to search");
        let candidates = self.search(query, limit, max_tier).await?;
        Ok(LookupOutcome::Candidates(candidates))
    }
}
