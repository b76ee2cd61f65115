//! Typed error enum for resolution and search.

use catalog_lookup_core::CoreError;
use catalog_lookup_phonetic::PhoneticError;
use catalog_lookup_storage::StorageError;
use thiserror::Error;

/// A tier query failed; the whole resolution or search is abandoned.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    #[error("phonetic: {0}")]
    Phonetic(#[from] PhoneticError),

    #[error("invalid input: {0}")]
    InvalidInput(#[from] CoreError),
}

impl SearchError {
    /// Whether re-issuing the same call may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_transient())
    }
}
