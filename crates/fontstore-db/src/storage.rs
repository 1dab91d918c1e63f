//! # SQLite Cart Storage
//!
//! Synchronous [`CartStorage`] over the async slot repository.
//!
//! ```text
//! ┌──────────────┐  save(key, blob)  ┌──────────────────────────────────┐
//! │  CartStore   │ ────────────────► │ SqliteCartStorage                │
//! │  (sync)      │                   │   runtime.block_on(              │
//! │              │ ◄──────────────── │     db.slots().put(key, blob))   │
//! └──────────────┘   Ok / Err        └──────────────────────────────────┘
//! ```
//!
//! The adapter owns a private current-thread tokio runtime. It must not be
//! called from inside another tokio runtime (`block_on` panics there); the
//! storefront runs its async commerce calls first and touches the cart
//! store afterwards.

use fontstore_core::{CartStorage, StorageError};
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::pool::{Database, DbConfig};

/// State of an opened cart database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageStatus {
    pub healthy: bool,
    pub migrations_applied: usize,
    pub migrations_total: usize,
    /// Keys currently stored, sorted.
    pub slots: Vec<String>,
}

/// Cart storage backed by a SQLite file.
#[derive(Debug)]
pub struct SqliteCartStorage {
    // Dropped before the runtime that drives it.
    db: Database,
    runtime: Runtime,
}

impl SqliteCartStorage {
    /// Opens (creating if needed) the database and runs migrations.
    ///
    /// Fails if the fresh connection cannot execute a query.
    pub fn open(config: DbConfig) -> DbResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        let db = runtime.block_on(Database::new(config))?;
        let storage = SqliteCartStorage { db, runtime };

        let status = storage.status()?;
        if !status.healthy {
            return Err(DbError::ConnectionFailed(
                "database does not answer queries".to_string(),
            ));
        }
        info!(
            migrations_applied = status.migrations_applied,
            migrations_total = status.migrations_total,
            slots = status.slots.len(),
            "Cart database ready"
        );

        Ok(storage)
    }

    /// Health, migration state and stored keys.
    pub fn status(&self) -> DbResult<StorageStatus> {
        self.runtime.block_on(async {
            let healthy = self.db.health_check().await;
            let (migrations_total, migrations_applied) =
                migrations::migration_status(self.db.pool()).await?;
            let slots = self.db.slots().list_keys().await?;

            Ok::<_, DbError>(StorageStatus {
                healthy,
                migrations_applied,
                migrations_total,
                slots,
            })
        })
    }
}

impl CartStorage for SqliteCartStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self.runtime.block_on(self.db.slots().get(key))?;
        debug!(key = %key, found = value.is_some(), "Loaded storage slot");
        Ok(value)
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.runtime.block_on(self.db.slots().put(key, blob))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontstore_core::{CartStore, Font, LicenseTier, Money, CART_STORAGE_KEY};

    fn font(id: &str, cents: i64) -> Font {
        Font::new(id, format!("Font {}", id), "Display", Money::from_cents(cents))
    }

    #[test]
    fn test_load_save_raw() {
        let storage = SqliteCartStorage::open(DbConfig::in_memory()).unwrap();

        assert!(storage.load("k").unwrap().is_none());
        storage.save("k", "v1").unwrap();
        storage.save("k", "v2").unwrap();
        assert_eq!(storage.load("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.status().unwrap().slots, vec!["k"]);
    }

    #[test]
    fn test_open_reports_status() {
        let storage = SqliteCartStorage::open(DbConfig::in_memory()).unwrap();
        let status = storage.status().unwrap();

        assert!(status.healthy);
        assert_eq!(status.migrations_applied, status.migrations_total);
        assert!(status.slots.is_empty());

        let mut store = CartStore::open(storage);
        store.add_item(&font("62", 2900), LicenseTier::Personal);
        let status = store.into_storage().status().unwrap();
        assert_eq!(status.slots, vec![CART_STORAGE_KEY]);
    }

    #[test]
    fn test_cart_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fontstore.db");

        let before = {
            let storage = SqliteCartStorage::open(DbConfig::new(&path)).unwrap();
            let mut store = CartStore::open(storage);
            store.add_item(&font("62", 2900), LicenseTier::Commercial);
            store.add_item(&font("45", 4500), LicenseTier::Extended);
            store.update_quantity("62", 3);
            store.cart().clone()
        };

        let storage = SqliteCartStorage::open(DbConfig::new(&path)).unwrap();
        let store = CartStore::open(storage);

        assert_eq!(store.cart(), &before);
        // 29.00 × 2 × 3 + 45.00 × 5
        assert_eq!(store.total_price().cents(), 17400 + 22500);
        assert_eq!(store.total_items(), 4);
    }

    #[test]
    fn test_corrupt_row_gives_empty_cart() {
        let storage = SqliteCartStorage::open(DbConfig::in_memory()).unwrap();
        storage.save(CART_STORAGE_KEY, "{\"version\":1").unwrap();

        let store = CartStore::open(storage);
        assert!(store.cart().is_empty());
    }
}
