//! Shared constants for catalog-lookup.
//!
//! Centralizes magic numbers used by more than one crate.

/// Maximum number of results for any query (DoS protection).
pub const MAX_QUERY_LIMIT: usize = 1000;

/// Default number of search results when the caller gives no limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Rows fetched per page by the phonetic backfill.
pub const DEFAULT_BACKFILL_BATCH: usize = 500;

/// Buffered catalog notifications before slow subscribers start lagging.
pub const CATALOG_EVENT_CAPACITY: usize = 16;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;
