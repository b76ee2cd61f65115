//! PhoneticIndexStore implementation for PgStorage.

use async_trait::async_trait;
use catalog_lookup_core::Entry;

use super::{ENTRY_COLUMNS, PgStorage, row_to_entry, usize_to_i64};
use crate::error::StorageError;
use crate::traits::{PhoneticIndexStore, PhoneticUpdate};

#[async_trait]
impl PhoneticIndexStore for PgStorage {
    async fn get_pending_phonetic(
        &self,
        after_id: i64,
        limit: usize,
    ) -> Result<Vec<Entry>, StorageError> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM catalog_entries
              WHERE phonetic_name = '' AND id > $1
              ORDER BY id
              LIMIT $2"
        );
        let rows = sqlx::query(&sql)
            .bind(after_id)
            .bind(usize_to_i64(limit))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_entry).collect()
    }

    async fn store_phonetic_names(
        &self,
        updates: &[PhoneticUpdate],
    ) -> Result<usize, StorageError> {
        let mut tx = self.pool.begin().await?;
        let mut written: u64 = 0;
        for update in updates {
            let result = sqlx::query(
                "UPDATE catalog_entries
                    SET phonetic_name = $1
                  WHERE id = $2 AND phonetic_name = '' AND normalized_name = $3",
            )
            .bind(&update.phonetic_name)
            .bind(update.id)
            .bind(&update.normalized_name)
            .execute(&mut *tx)
            .await?;
            written = written.saturating_add(result.rows_affected());
        }
        tx.commit().await?;
        Ok(usize::try_from(written).unwrap_or(usize::MAX))
    }
}
