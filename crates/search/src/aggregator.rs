//! Multi-tier substring search merged by tier priority.

use std::collections::HashSet;

use catalog_lookup_core::{CoreError, Entry, MAX_QUERY_LIMIT, MatchTier};
use catalog_lookup_storage::EntryStore;
use serde::Serialize;

use crate::{CatalogSearch, SearchError};

/// An entry together with the strictest tier that found it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub tier: MatchTier,
    pub entry: Entry,
}

/// Result of a search: the first `limit` merged hits plus the distinct total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Number of distinct entries matched across all tiers, independent of the limit.
    pub total: usize,
    pub hits: Vec<SearchHit>,
}

impl SearchOutcome {
    /// True when no tier matched anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Whether more entries matched than were materialized.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.total > self.hits.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.hits.iter().map(|hit| &hit.entry)
    }
}

/// Accumulates per-tier result lists into one id-deduplicated sequence.
///
/// Tiers must be added stricter first. Each tier's new ids form a bucket in
/// that tier's order; an id already seen in an earlier bucket is ignored and
/// the earlier occurrence keeps both its data and its position.
///
/// The distinct total is tracked apart from the hits, so a tier can report
/// every id it matched while only a capped prefix of its rows is kept.
#[derive(Debug, Default)]
pub struct PriorityMerge {
    seen: HashSet<i64>,
    matched: HashSet<i64>,
    hits: Vec<SearchHit>,
}

impl PriorityMerge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the entries of `tier` that no stricter tier produced.
    /// Returns how many were new.
    pub fn add_tier(&mut self, tier: MatchTier, rows: Vec<Entry>) -> usize {
        let before = self.hits.len();
        for entry in rows {
            self.matched.insert(entry.id);
            if self.seen.insert(entry.id) {
                self.hits.push(SearchHit { tier, entry });
            }
        }
        self.hits.len() - before
    }

    /// Counts ids a tier matched beyond the rows it returned.
    pub fn count_matches(&mut self, ids: impl IntoIterator<Item = i64>) {
        self.matched.extend(ids);
    }

    /// Distinct entries matched so far, whether or not their rows were kept.
    #[must_use]
    pub fn total(&self) -> usize {
        self.matched.len()
    }

    /// Final ordered outcome, materializing at most `limit` hits.
    #[must_use]
    pub fn into_outcome(mut self, limit: usize) -> SearchOutcome {
        let total = self.total();
        self.hits.truncate(limit);
        SearchOutcome { total, hits: self.hits }
    }
}

impl<S: EntryStore + ?Sized> CatalogSearch<S> {
    /// Substring search across tiers `Strict..=max_tier`.
    ///
    /// Each tier's row query is capped at `limit` on its own, so up to one
    /// `limit` per tier is fetched before merging. A tier that fills its cap
    /// is also asked for all of its matching ids, so the distinct total does
    /// not depend on `limit`. Results are ordered by the tier that first found them, then by
    /// store order within that tier.
    pub async fn search(
        &self,
        keyword: &str,
        limit: usize,
        max_tier: MatchTier,
    ) -> Result<SearchOutcome, SearchError> {
        if limit == 0 {
            return Err(CoreError::InvalidLimit(limit).into());
        }
        let limit = limit.min(MAX_QUERY_LIMIT);

        let mut merge = PriorityMerge::new();
        for (tier, strategy) in self.plan(max_tier) {
            let key = self.key_for(keyword, strategy.transform)?;
            if key.is_empty() {
                tracing::debug!(%tier, "empty lookup key, skipping tier");
                continue;
            }
            let rows = self.storage.find_substring(strategy.field, &key, limit).await?;
            let fetched = rows.len();
            let added = merge.add_tier(tier, rows);
            if fetched == limit {
                // Capped: rows past the cap still count toward the total.
                merge.count_matches(self.storage.find_substring_ids(strategy.field, &key).await?);
            }
            tracing::debug!(%tier, fetched, added, total = merge.total(), "tier searched");
        }

        let outcome = merge.into_outcome(limit);
        tracing::debug!(total = outcome.total, shown = outcome.hits.len(), "search finished");
        Ok(outcome)
    }
}
