//! Typed error enum for the service layer.
//!
//! Unifies storage, search, and catalog input failures so callers can match
//! on the failure mode instead of downcasting.

use catalog_lookup_core::CoreError;
use catalog_lookup_search::SearchError;
use catalog_lookup_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Resolution or search failed.
    #[error("search: {0}")]
    Search(#[from] SearchError),

    /// A catalog record failed validation.
    #[error("invalid entry: {0}")]
    InvalidEntry(#[from] CoreError),

    /// Caller provided invalid input (duplicate ids and the like).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Catalog file could not be read.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not a JSON array of entries.
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            Self::Search(e) => e.is_transient(),
            _ => false,
        }
    }
}
