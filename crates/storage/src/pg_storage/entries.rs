//! EntryStore implementation for PgStorage.

use async_trait::async_trait;
use catalog_lookup_core::{Entry, EntryField};

use super::{ENTRY_COLUMNS, PgStorage, row_to_entry, usize_to_i64};
use crate::error::StorageError;
use crate::traits::EntryStore;

#[async_trait]
impl EntryStore for PgStorage {
    async fn find_exact(
        &self,
        field: EntryField,
        value: &str,
    ) -> Result<Vec<Entry>, StorageError> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM catalog_entries WHERE {} = $1 ORDER BY id",
            field.column()
        );
        let rows = sqlx::query(&sql).bind(value).fetch_all(&self.pool).await?;
        rows.iter().map(row_to_entry).collect()
    }

    async fn find_substring(
        &self,
        field: EntryField,
        value: &str,
        limit: usize,
    ) -> Result<Vec<Entry>, StorageError> {
        // strpos is case-sensitive and treats % and _ literally, unlike LIKE.
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM catalog_entries
              WHERE strpos({}, $1) > 0
              ORDER BY id
              LIMIT $2",
            field.column()
        );
        let rows = sqlx::query(&sql)
            .bind(value)
            .bind(usize_to_i64(limit))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_entry).collect()
    }

    async fn find_substring_ids(
        &self,
        field: EntryField,
        value: &str,
    ) -> Result<Vec<i64>, StorageError> {
        let sql = format!(
            "SELECT id FROM catalog_entries WHERE strpos({}, $1) > 0 ORDER BY id",
            field.column()
        );
        Ok(sqlx::query_scalar(&sql).bind(value).fetch_all(&self.pool).await?)
    }

    async fn upsert_entries(&self, entries: &[Entry]) -> Result<usize, StorageError> {
        let mut tx = self.pool.begin().await?;
        for entry in entries {
            let audio_urls = serde_json::to_value(&entry.audio_urls)?;
            sqlx::query(
                "INSERT INTO catalog_entries
                    (id, name, description, normalized_name, phonetic_name, audio_urls, updated_at)
                 VALUES ($1, $2, $3, $4, $5, $6, NOW())
                 ON CONFLICT (id) DO UPDATE SET
                    name = EXCLUDED.name,
                    description = EXCLUDED.description,
                    normalized_name = EXCLUDED.normalized_name,
                    phonetic_name = CASE
                        WHEN EXCLUDED.phonetic_name = ''
                             AND catalog_entries.normalized_name = EXCLUDED.normalized_name
                        THEN catalog_entries.phonetic_name
                        ELSE EXCLUDED.phonetic_name
                    END,
                    audio_urls = EXCLUDED.audio_urls,
                    updated_at = NOW()",
            )
            .bind(entry.id)
            .bind(&entry.name)
            .bind(&entry.description)
            .bind(&entry.normalized_name)
            .bind(&entry.phonetic_name)
            .bind(audio_urls)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(entries.len())
    }

    async fn delete_all(&self) -> Result<usize, StorageError> {
        let result = sqlx::query("DELETE FROM catalog_entries").execute(&self.pool).await?;
        Ok(usize::try_from(result.rows_affected()).unwrap_or(usize::MAX))
    }

    async fn count_entries(&self) -> Result<usize, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM catalog_entries")
            .fetch_one(&self.pool)
            .await?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}
