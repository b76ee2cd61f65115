//! Service layer for catalog-lookup
//!
//! Sits between callers (the CLI) and the storage/search crates: catalog
//! refresh with change notification, the phonetic index backfill job, and
//! resolve-or-search lookups.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod catalog_service;
pub mod error;
mod lookup_service;
mod maintainer;

pub use catalog_service::{CatalogEvent, CatalogService, load_catalog_file};
pub use error::ServiceError;
pub use lookup_service::{LookupOutcome, LookupService};
pub use maintainer::PhoneticIndexMaintainer;
