//! # fontstore-core: Pure Business Logic for the Font Store
//!
//! This crate is the **heart** of the storefront. It owns the shopping cart,
//! the license-tiered pricing rule and the persisted cart format, with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Font Store Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront surfaces (CLI)                       │   │
//! │  │    Catalog ──► Product detail ──► Cart ──► Checkout ──► Orders  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut CartStore                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ fontstore-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  money   │ │ license  │ │   cart   │ │ store + snapshot │  │   │
//! │  │   │  Money   │ │ ×1 ×2 ×5 │ │ CartLine │ │  CartStorage     │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartStorage (load / save)              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              fontstore-db (SQLite storage slot)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Font, OrderStatus)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`license`] - License tiers and the unit price rule
//! - [`cart`] - The cart entity and its mutation rules
//! - [`snapshot`] - Versioned, strictly decoded persisted cart format
//! - [`storage`] - The durable storage trait and an in-memory implementation
//! - [`store`] - `CartStore`: cart + persistence after every mutation
//! - [`validation`] - Caller-side input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use fontstore_core::{CartStore, Font, LicenseTier, MemoryStorage, Money};
//!
//! let font = Font::new("1", "Montserrat Pro", "Sans Serif", Money::from_cents(1000));
//! let mut store = CartStore::open(MemoryStorage::new());
//!
//! store.add_item(&font, LicenseTier::Commercial);
//! store.add_item(&font, LicenseTier::Commercial);
//! store.add_item(&font, LicenseTier::Commercial);
//!
//! // $10.00 × 2 (commercial) × 3
//! assert_eq!(store.total_price().cents(), 6000);
//! assert_eq!(store.total_items(), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod license;
pub mod money;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals};
pub use error::{CoreError, StorageError, ValidationError};
pub use license::LicenseTier;
pub use money::Money;
pub use snapshot::SnapshotError;
pub use storage::{CartStorage, MemoryStorage};
pub use store::CartStore;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key the cart is persisted under.
///
/// One slot per client profile; every store instance opened against the same
/// storage and key sees the same cart.
pub const CART_STORAGE_KEY: &str = "font-store-cart";

/// Version tag written into every persisted cart snapshot.
///
/// Bump when the snapshot layout changes. Snapshots with any other version
/// are rejected on load and the session starts with an empty cart.
pub const CART_SCHEMA_VERSION: u32 = 1;

/// Largest accepted base price, in cents ($1,000,000.00).
///
/// At this bound an extended-license line at `u32::MAX` units still fits in
/// an i64 cent total.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;
