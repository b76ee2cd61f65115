//! Core types for catalog-lookup
//!
//! Domain types shared across all other crates: catalog entries, match tiers,
//! the name normalizer and the per-tier lookup strategies.

pub mod constants;
pub mod env_config;
mod entry;
mod error;
mod normalize;
mod settings;
mod strategy;
mod tier;

pub use constants::*;
pub use entry::{Entry, EntryField, EntryInput};
pub use error::CoreError;
pub use normalize::normalize;
pub use settings::LookupSettings;
pub use strategy::{KeyTransform, TierStrategy, strategy_for};
pub use tier::MatchTier;
