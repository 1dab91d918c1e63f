//! # Repository Module
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SqliteCartStorage                                                     │
//! │       │                                                                 │
//! │       │  db.slots().put("font-store-cart", blob)                       │
//! │       ▼                                                                 │
//! │  SlotRepository                                                        │
//! │  ├── get(&self, key)                                                   │
//! │  ├── put(&self, key, value)                                            │
//! │  └── list_keys(&self)                                                  │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  storage_slots table                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`SlotRepository`](slot::SlotRepository) - Key/value storage slots

pub mod slot;
