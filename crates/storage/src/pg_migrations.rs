//! PostgreSQL schema migrations for the entry catalog.

use sqlx::PgPool;

/// Run all PostgreSQL migrations. Every statement is idempotent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS catalog_entries (
            id BIGINT PRIMARY KEY CHECK (id > 0),
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            normalized_name TEXT NOT NULL,
            phonetic_name TEXT NOT NULL DEFAULT '',
            audio_urls JSONB NOT NULL DEFAULT '[]',
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_entries_name ON catalog_entries (name)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_entries_normalized ON catalog_entries (normalized_name)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_entries_phonetic ON catalog_entries (phonetic_name)",
    )
    .execute(pool)
    .await?;

    // Backfill scans only rows whose key is still pending.
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_entries_phonetic_pending
            ON catalog_entries (id) WHERE phonetic_name = ''",
    )
    .execute(pool)
    .await?;

    tracing::debug!("catalog_entries migrations applied");
    Ok(())
}
