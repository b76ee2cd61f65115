//! Tier strategy table: which key transform and which indexed field each tier uses.

use crate::entry::EntryField;
use crate::tier::MatchTier;

/// How a query is turned into a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyTransform {
    /// Query used verbatim.
    Identity,
    /// Query passed through [`crate::normalize`].
    Normalize,
    /// Query normalized, then romanized by the phonetic capability.
    Phonetic,
}

/// Key transform plus the field that key is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TierStrategy {
    pub transform: KeyTransform,
    pub field: EntryField,
}

impl TierStrategy {
    const STRICT: Self = Self { transform: KeyTransform::Identity, field: EntryField::Name };
    const NORMAL: Self =
        Self { transform: KeyTransform::Normalize, field: EntryField::NormalizedName };
    const HOMOPHONE: Self =
        Self { transform: KeyTransform::Phonetic, field: EntryField::PhoneticName };
}

/// Strategy for `tier` given whether the phonetic capability is usable.
///
/// Without the capability `Homophone` behaves exactly like `Normal`.
#[must_use]
pub const fn strategy_for(tier: MatchTier, phonetic_available: bool) -> TierStrategy {
    match tier {
        MatchTier::Strict => TierStrategy::STRICT,
        MatchTier::Normal => TierStrategy::NORMAL,
        MatchTier::Homophone if phonetic_available => TierStrategy::HOMOPHONE,
        MatchTier::Homophone => TierStrategy::NORMAL,
    }
}
