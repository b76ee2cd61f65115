//! Phonetic keys for homophone matching
//!
//! The resolver treats phonetic romanization as an optional capability: when
//! no provider is configured (or it reports itself unavailable) the homophone
//! tier falls back to normalized matching.

pub mod error;
mod metaphone;

use std::sync::Arc;

pub use error::PhoneticError;
pub use metaphone::MetaphoneProvider;

/// Converts a normalized name into a lowercase romanized key.
///
/// Implementations must be deterministic: the same input always yields the
/// same key, because keys are computed once at index time and again at query
/// time.
pub trait PhoneticProvider: Send + Sync {
    /// Whether the provider can currently produce keys.
    fn is_available(&self) -> bool {
        true
    }

    /// Phonetic key for an already-normalized string.
    fn phoneticize(&self, normalized: &str) -> Result<String, PhoneticError>;
}

pub type SharedPhonetics = Arc<dyn PhoneticProvider>;

/// Whether `provider` is present and usable.
#[must_use]
pub fn is_available(provider: Option<&SharedPhonetics>) -> bool {
    provider.is_some_and(|p| p.is_available())
}

/// Starts the default provider unless disabled by configuration.
#[must_use]
pub fn init_phonetics(enabled: bool) -> Option<SharedPhonetics> {
    if enabled {
        tracing::info!("Phonetic capability initialized (double metaphone)");
        Some(Arc::new(MetaphoneProvider::new()))
    } else {
        tracing::info!("Phonetic capability disabled, homophone tier downgrades to normal");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Offline;

    impl PhoneticProvider for Offline {
        fn is_available(&self) -> bool {
            false
        }

        fn phoneticize(&self, _normalized: &str) -> Result<String, PhoneticError> {
            Err(PhoneticError::Unavailable)
        }
    }

    #[test]
    fn availability_requires_a_live_provider() {
        assert!(!is_available(None));

        let offline: SharedPhonetics = Arc::new(Offline);
        assert!(!is_available(Some(&offline)));

        let live: SharedPhonetics = Arc::new(MetaphoneProvider::new());
        assert!(is_available(Some(&live)));
    }

    #[test]
    fn init_respects_switch() {
        assert!(init_phonetics(false).is_none());
        assert!(init_phonetics(true).is_some());
    }
}
