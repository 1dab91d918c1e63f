//! # fontstore-db: SQLite Storage for the Font Store
//!
//! Durable storage for the cart. The cart store only knows the
//! [`CartStorage`](fontstore_core::CartStorage) trait; this crate implements
//! it on top of a small SQLite key/value table.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Font Store Data Flow                             │
//! │                                                                         │
//! │  CartStore::add_item(...)                                              │
//! │       │  encode snapshot                                                │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  fontstore-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐  ┌───────────────┐  ┌──────────────┐  │   │
//! │  │   │ SqliteCartStorage  │  │ SlotRepository│  │  Migrations  │  │   │
//! │  │   │  (storage.rs)      │  │ (slot.rs)     │  │  (embedded)  │  │   │
//! │  │   │                    │  │               │  │              │  │   │
//! │  │   │ sync load/save ────┼─►│ get / put     │  │ 001_storage_ │  │   │
//! │  │   │ private runtime    │  │ list_keys     │  │   slots.sql  │  │   │
//! │  │   └────────────────────┘  └───────┬───────┘  └──────────────┘  │   │
//! │  │                                   │ Database (pool.rs)          │   │
//! │  └───────────────────────────────────┼─────────────────────────────┘   │
//! │                                      ▼                                  │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ~/.local/share/fontstore/fontstore.db                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Slot repository
//! - [`storage`] - `CartStorage` implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fontstore_core::CartStore;
//! use fontstore_db::{DbConfig, SqliteCartStorage};
//!
//! let storage = SqliteCartStorage::open(DbConfig::new("fontstore.db"))?;
//! let mut store = CartStore::open(storage);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::slot::SlotRepository;
pub use storage::{SqliteCartStorage, StorageStatus};
