//! # Storage Slot Repository
//!
//! A key/value table. Each key holds one opaque text blob; writing a key
//! replaces its previous value.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for storage slot operations.
#[derive(Debug, Clone)]
pub struct SlotRepository {
    pool: SqlitePool,
}

impl SlotRepository {
    /// Creates a new SlotRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SlotRepository { pool }
    }

    /// Reads the value stored under `key`.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>(
            "SELECT value FROM storage_slots WHERE key = ?1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(value)
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub async fn put(&self, key: &str, value: &str) -> DbResult<()> {
        let now = Utc::now();

        debug!(key = %key, bytes = value.len(), "Writing storage slot");

        sqlx::query(
            r#"
            INSERT INTO storage_slots (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists every stored key, sorted.
    pub async fn list_keys(&self) -> DbResult<Vec<String>> {
        let keys = sqlx::query_scalar::<_, String>("SELECT key FROM storage_slots ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_get_missing_slot() {
        let db = test_db().await;
        assert!(db.slots().get("font-store-cart").await.unwrap().is_none());
        assert!(db.slots().list_keys().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_put_then_overwrite() {
        let db = test_db().await;
        let slots = db.slots();

        slots.put("font-store-cart", "first").await.unwrap();
        assert_eq!(
            slots.get("font-store-cart").await.unwrap().as_deref(),
            Some("first")
        );

        slots.put("font-store-cart", "second").await.unwrap();
        assert_eq!(
            slots.get("font-store-cart").await.unwrap().as_deref(),
            Some("second")
        );

        assert_eq!(slots.list_keys().await.unwrap(), vec!["font-store-cart"]);
    }

    #[tokio::test]
    async fn test_list_keys_sorted() {
        let db = test_db().await;
        let slots = db.slots();

        slots.put("b", "2").await.unwrap();
        slots.put("a", "1").await.unwrap();
        slots.put("b", "3").await.unwrap();
        assert_eq!(slots.list_keys().await.unwrap(), vec!["a", "b"]);
    }
}
