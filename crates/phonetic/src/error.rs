//! Typed error enum for the phonetic crate.

use thiserror::Error;

/// Errors from phonetic key generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhoneticError {
    #[error("phonetic capability unavailable")]
    Unavailable,
    #[error("phonetic encoding failed for {input:?}: {reason}")]
    Encoding { input: String, reason: String },
}
