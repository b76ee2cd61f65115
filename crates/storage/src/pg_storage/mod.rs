//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by trait.

mod entries;
mod phonetic;

use catalog_lookup_core::{
    Entry, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;

use super::pg_migrations::run_pg_migrations;

const ENTRY_COLUMNS: &str =
    "id, name, description, normalized_name, phonetic_name, audio_urls";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

pub(crate) fn usize_to_i64(val: usize) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

pub(crate) fn row_to_entry(row: &sqlx::postgres::PgRow) -> Result<Entry, StorageError> {
    let audio_urls: serde_json::Value = row.try_get("audio_urls")?;
    Ok(Entry {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        normalized_name: row.try_get("normalized_name")?,
        phonetic_name: row.try_get("phonetic_name")?,
        audio_urls: serde_json::from_value(audio_urls)?,
    })
}
