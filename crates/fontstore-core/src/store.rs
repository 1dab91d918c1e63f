//! # Cart Store
//!
//! Owns the shopper's cart, applies mutations, derives totals, and mirrors
//! the cart into durable storage after every mutation.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Lifecycle                                 │
//! │                                                                         │
//! │  CartStore::open(storage)                                              │
//! │       │                                                                 │
//! │       ├── slot empty ─────────────────────► empty cart                 │
//! │       ├── slot decodes ───────────────────► restored cart              │
//! │       └── read fails / corrupt ─ warn! ───► empty cart                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  add_item / remove_item / update_quantity / clear_cart                 │
//! │       │                                                                 │
//! │       ├── mutate Cart in memory                                        │
//! │       └── encode + storage.save(key) ── on failure: warn!, keep going  │
//! │                                                                         │
//! │  total_price / total_items / is_in_cart   (read only, computed fresh)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! There is exactly one store per session. Surfaces borrow it
//! (`&CartStore` to read, `&mut CartStore` to mutate); nobody holds a copy
//! of the cart and nobody edits lines directly.
//!
//! ## Concurrency
//! Everything runs synchronously on the caller's stack. Two stores writing
//! the same slot (two processes, two tabs) is last-writer-wins.

use tracing::{debug, info, warn};

use crate::cart::{Cart, CartLine, CartTotals};
use crate::error::CoreResult;
use crate::license::LicenseTier;
use crate::money::Money;
use crate::snapshot;
use crate::storage::CartStorage;
use crate::types::Font;
use crate::CART_STORAGE_KEY;

/// The cart plus its persistence contract.
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    storage: S,
    key: String,
}

impl<S: CartStorage> CartStore<S> {
    /// Opens the store on the default slot ([`CART_STORAGE_KEY`]).
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, CART_STORAGE_KEY)
    }

    /// Opens the store on a specific slot.
    ///
    /// Never fails: a missing slot, a storage read error or a corrupt
    /// snapshot all start the session with an empty cart.
    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();

        let cart = match restore(&storage, &key) {
            Ok(Some(cart)) => {
                info!(key = %key, lines = cart.line_count(), "Restored saved cart");
                cart
            }
            Ok(None) => {
                debug!(key = %key, "No saved cart, starting empty");
                Cart::new()
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Could not restore saved cart, starting empty");
                Cart::new()
            }
        };

        CartStore { cart, storage, key }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of `product` under `license`, then persists.
    pub fn add_item(&mut self, product: &Font, license: LicenseTier) {
        debug!(product_id = %product.id, license = %license, "add_item");
        self.cart.add_item(product, license);
        self.persist();
    }

    /// Removes every line of `product_id` (all licenses), then persists.
    pub fn remove_item(&mut self, product_id: &str) {
        let removed = self.cart.remove_item(product_id);
        debug!(product_id = %product_id, removed, "remove_item");
        self.persist();
    }

    /// Sets the quantity of every line of `product_id`; `<= 0` removes.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        debug!(product_id = %product_id, quantity, "update_quantity");
        self.cart.update_quantity(product_id, quantity);
        self.persist();
    }

    /// Empties the cart, then persists.
    pub fn clear_cart(&mut self) {
        debug!("clear_cart");
        self.cart.clear();
        self.persist();
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// Total across all lines under the license pricing rule.
    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    /// Total units in the cart.
    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    /// True if any line carries `product_id`.
    pub fn is_in_cart(&self, product_id: &str) -> bool {
        self.cart.is_in_cart(product_id)
    }

    /// Lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Read-only view of the whole cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Totals summary.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&self.cart)
    }

    /// Storage slot this store writes to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Gives the storage back, e.g. to reopen a fresh store on it.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Best effort: a failed save leaves the in-memory cart authoritative.
    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            warn!(key = %self.key, error = %e, "Failed to persist cart");
        }
    }

    fn try_persist(&self) -> CoreResult<()> {
        let blob = snapshot::encode(&self.cart)?;
        self.storage.save(&self.key, &blob)?;
        Ok(())
    }
}

fn restore<S: CartStorage>(storage: &S, key: &str) -> CoreResult<Option<Cart>> {
    let Some(blob) = storage.load(key)? else {
        return Ok(None);
    };
    Ok(Some(snapshot::decode(&blob)?))
}

// =============================================================================
// Unit Tests
// =============================================================================
