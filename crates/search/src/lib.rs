//! Tiered resolution and priority-merged search over the entry catalog
//!
//! Both operations walk the match tiers from strictest to loosest:
//! 1. `resolve(query, max_tier)` → first exact hit wins, no further tiers
//! 2. `search(keyword, limit, max_tier)` → substring hits from every tier,
//!    merged so that entries found by a stricter tier come first
//!
//! The homophone tier needs the phonetic capability. Without it the tier
//! uses the normal strategy, so callers asking for homophone matching get
//! normal-quality results instead of nothing.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod aggregator;
pub mod error;
mod resolver;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use catalog_lookup_core::{KeyTransform, MatchTier, TierStrategy, normalize, strategy_for};
use catalog_lookup_phonetic::{SharedPhonetics, is_available};
use catalog_lookup_storage::StorageBackend;

pub use aggregator::{PriorityMerge, SearchHit, SearchOutcome};
pub use error::SearchError;

/// Search facade over an entry store and an optional phonetic capability.
///
/// Generic over the store so tests can substitute their own; production code
/// uses the default `StorageBackend`.
pub struct CatalogSearch<S: ?Sized = StorageBackend> {
    storage: Arc<S>,
    phonetics: Option<SharedPhonetics>,
}

impl<S: ?Sized> CatalogSearch<S> {
    #[must_use]
    pub fn new(storage: Arc<S>, phonetics: Option<SharedPhonetics>) -> Self {
        Self { storage, phonetics }
    }

    /// Whether the homophone tier currently has its own strategy.
    #[must_use]
    pub fn has_phonetics(&self) -> bool {
        is_available(self.phonetics.as_ref())
    }

    /// Tiers up to `max_tier` with their strategies, stricter first.
    ///
    /// Capability availability is sampled once so every tier of one call sees
    /// the same answer. A downgraded tier that repeats an earlier strategy is
    /// dropped: it would re-issue the identical query.
    pub(crate) fn plan(&self, max_tier: MatchTier) -> Vec<(MatchTier, TierStrategy)> {
        let phonetic_available = self.has_phonetics();
        let mut plan: Vec<(MatchTier, TierStrategy)> =
            Vec::with_capacity(MatchTier::ALL_VARIANTS.len());
        for tier in MatchTier::up_to(max_tier) {
            let strategy = strategy_for(tier, phonetic_available);
            if plan.iter().any(|(_, planned)| *planned == strategy) {
                tracing::debug!(%tier, "tier downgraded to an already planned strategy");
                continue;
            }
            plan.push((tier, strategy));
        }
        plan
    }

    /// Lookup key for `query` under `transform`. An empty key means the tier
    /// cannot match anything meaningful and should be skipped.
    pub(crate) fn key_for(
        &self,
        query: &str,
        transform: KeyTransform,
    ) -> Result<String, SearchError> {
        match transform {
            KeyTransform::Identity => Ok(query.to_owned()),
            KeyTransform::Normalize => Ok(normalize(query)),
            KeyTransform::Phonetic => match &self.phonetics {
                Some(provider) => Ok(provider.phoneticize(&normalize(query))?),
                None => Ok(normalize(query)),
            },
        }
    }
}
