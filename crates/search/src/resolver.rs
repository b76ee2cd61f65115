//! Single-result resolution: the first tier with an exact hit wins.

use catalog_lookup_core::{Entry, MatchTier};
use catalog_lookup_storage::EntryStore;

use crate::{CatalogSearch, SearchError};

impl<S: EntryStore + ?Sized> CatalogSearch<S> {
    /// Resolve `query` to a single entry, trying tiers from `Strict` up to
    /// `max_tier` and stopping at the first tier with an exact match.
    ///
    /// `Ok(None)` means no permitted tier matched. A failing tier query
    /// aborts the resolution instead of falling through to looser tiers.
    pub async fn resolve(
        &self,
        query: &str,
        max_tier: MatchTier,
    ) -> Result<Option<Entry>, SearchError> {
        for (tier, strategy) in self.plan(max_tier) {
            let key = self.key_for(query, strategy.transform)?;
            if key.is_empty() {
                tracing::debug!(%tier, "empty lookup key, skipping tier");
                continue;
            }
            let rows = self.storage.find_exact(strategy.field, &key).await?;
            if let Some(entry) = rows.into_iter().next() {
                tracing::debug!(%tier, id = entry.id, "resolved");
                return Ok(Some(entry));
            }
            tracing::debug!(%tier, field = %strategy.field, "no exact match");
        }
        Ok(None)
    }
}
