use thiserror::Error;

/// Errors raised by core domain validation and parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid match tier: {0} (expected {expected})", expected = crate::MatchTier::ALL_VARIANTS_STR)]
    InvalidMatchTier(String),

    #[error("invalid entry id {0}: ids must be positive")]
    InvalidEntryId(i64),

    #[error("invalid limit {0}: must be at least 1")]
    InvalidLimit(usize),
}
