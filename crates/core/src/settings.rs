//! Runtime settings read from the environment.

use crate::constants::{DEFAULT_BACKFILL_BATCH, DEFAULT_SEARCH_LIMIT, MAX_QUERY_LIMIT};
use crate::env_config::{env_flag, env_parse_with_default};
use crate::tier::MatchTier;

/// Lookup defaults shared by the binary and the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSettings {
    /// Result cap applied when the caller gives none (`CATALOG_SEARCH_LIMIT`).
    pub default_limit: usize,
    /// Loosest tier tried when the caller gives none (`CATALOG_MAX_TIER`).
    pub max_tier: MatchTier,
    /// Whether the phonetic capability should be started (`CATALOG_PHONETIC_ENABLED`).
    pub phonetic_enabled: bool,
    /// Rows per backfill page (`CATALOG_BACKFILL_BATCH`).
    pub backfill_batch: usize,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_SEARCH_LIMIT,
            max_tier: MatchTier::Homophone,
            phonetic_enabled: true,
            backfill_batch: DEFAULT_BACKFILL_BATCH,
        }
    }
}

impl LookupSettings {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let tier_raw = env_parse_with_default("CATALOG_MAX_TIER", defaults.max_tier.to_string());
        let max_tier = tier_raw.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid CATALOG_MAX_TIER, using default");
            defaults.max_tier
        });
        Self {
            default_limit: env_parse_with_default("CATALOG_SEARCH_LIMIT", defaults.default_limit)
                .clamp(1, MAX_QUERY_LIMIT),
            max_tier,
            phonetic_enabled: env_flag("CATALOG_PHONETIC_ENABLED", defaults.phonetic_enabled),
            backfill_batch: env_parse_with_default("CATALOG_BACKFILL_BATCH", defaults.backfill_batch)
                .max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_allow_every_tier() {
        let settings = LookupSettings::default();
        assert_eq!(settings.max_tier, MatchTier::Homophone);
        assert!(settings.phonetic_enabled);
        assert_eq!(settings.default_limit, DEFAULT_SEARCH_LIMIT);
    }
}
