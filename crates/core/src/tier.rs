//! Match tier enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Strictness level for matching a query against catalog names.
///
/// Ordered from strictest to loosest: `Strict < Normal < Homophone`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// Byte-for-byte equality with the display name.
    Strict,
    /// Equality after punctuation, symbols and whitespace are stripped.
    Normal,
    /// Equality of romanized phonetic keys.
    #[default]
    Homophone,
}

impl MatchTier {
    pub const ALL_VARIANTS: &'static [MatchTier] =
        &[MatchTier::Strict, MatchTier::Normal, MatchTier::Homophone];

    pub const ALL_VARIANTS_STR: &'static str = "strict|normal|homophone";

    /// Tiers from `Strict` up to and including `max`, stricter first.
    pub fn up_to(max: MatchTier) -> impl Iterator<Item = MatchTier> {
        Self::ALL_VARIANTS.iter().copied().take_while(move |tier| *tier <= max)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Strict => "strict",
            Self::Normal => "normal",
            Self::Homophone => "homophone",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchTier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "normal" => Ok(Self::Normal),
            "homophone" => Ok(Self::Homophone),
            other => Err(CoreError::InvalidMatchTier(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered_strict_first() {
        assert!(MatchTier::Strict < MatchTier::Normal);
        assert!(MatchTier::Normal < MatchTier::Homophone);
    }

    #[test]
    fn up_to_is_inclusive_and_ascending() {
        let strict: Vec<_> = MatchTier::up_to(MatchTier::Strict).collect();
        assert_eq!(strict, vec![MatchTier::Strict]);

        let all: Vec<_> = MatchTier::up_to(MatchTier::Homophone).collect();
        assert_eq!(all, vec![MatchTier::Strict, MatchTier::Normal, MatchTier::Homophone]);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Normal".parse::<MatchTier>(), Ok(MatchTier::Normal));
        assert_eq!(" HOMOPHONE ".parse::<MatchTier>(), Ok(MatchTier::Homophone));
        assert_eq!(
            "fuzzy".parse::<MatchTier>(),
            Err(CoreError::InvalidMatchTier("fuzzy".to_owned()))
        );
    }

    #[test]
    fn parse_error_lists_accepted_names() {
        let err = "fuzzy".parse::<MatchTier>().unwrap_err();
        assert!(err.to_string().ends_with("(expected strict|normal|homophone)"), "{err}");
        for name in MatchTier::ALL_VARIANTS_STR.split('|') {
            assert!(name.parse::<MatchTier>().is_ok(), "{name}");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for tier in MatchTier::ALL_VARIANTS {
            assert_eq!(tier.to_string().parse::<MatchTier>(), Ok(*tier));
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&MatchTier::Homophone).unwrap();
        assert_eq!(json, "\"homophone\"");
    }
}
