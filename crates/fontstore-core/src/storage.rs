//! # Durable Storage
//!
//! The cart store's only external interface: a synchronous get/set-by-key
//! slot scoped to one client profile.
//!
//! ```text
//! ┌──────────────────────┐   load(key)  ┌──────────────────────────────┐
//! │      CartStore       │ ───────────► │  impl CartStorage            │
//! │                      │ ◄─────────── │                              │
//! │                      │  Option<blob>│  MemoryStorage (this file)   │
//! │                      │              │  SqliteCartStorage           │
//! │                      │ save(key, b) │    (fontstore-db)            │
//! │                      │ ───────────► │                              │
//! └──────────────────────┘              └──────────────────────────────┘
//! ```
//!
//! Implementations report failures; the store decides what to do with them
//! (log and carry on).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;

/// Synchronous key-value slot used to persist the cart.
pub trait CartStorage {
    /// Reads the blob stored under `key`, or `None` if nothing was saved.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `blob` under `key`, replacing any previous value.
    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError>;
}

impl<S: CartStorage + ?Sized> CartStorage for &S {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        (**self).save(key, blob)
    }
}

impl<S: CartStorage + ?Sized> CartStorage for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        (**self).save(key, blob)
    }
}

// =============================================================================
// In-Memory Storage
// =============================================================================

/// In-process storage.
///
/// Clones share the same slots, so a test can hand one clone to a store,
/// drop it, and open a fresh store on another clone to simulate a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates empty storage.
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Writes a raw value directly, bypassing the cart store.
    pub fn insert_raw(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        self.save(key, blob)
    }

    /// Reads a raw value directly.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.load(key).ok().flatten()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self
            .slots
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        slots.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.load("cart").unwrap().is_none());

        storage.save("cart", "{}").unwrap();
        assert_eq!(storage.load("cart").unwrap().as_deref(), Some("{}"));

        storage.save("cart", "[]").unwrap();
        assert_eq!(storage.get_raw("cart").as_deref(), Some("[]"));
    }

    #[test]
    fn test_clones_share_slots() {
        let a = MemoryStorage::new();
        let b = a.clone();

        a.save("cart", "x").unwrap();
        assert_eq!(b.get_raw("cart").as_deref(), Some("x"));
        assert!(b.get_raw("other").is_none());
    }
}
