//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │          │     │  placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                 │              │
//! │                   cart add                          cart cleared        │
//! │                   cart update                       (checkout.rs)       │
//! │                   cart remove                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   cart clear ──────────────────► (back to empty)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation is persisted by the [`CartStore`] before the handler
//! returns; the next invocation restores the same cart.

use fontstore_commerce::{font_from_product, CommerceApi};
use fontstore_core::validation::{validate_font, validate_product_id};
use fontstore_core::{Cart, CartLine, CartStorage, CartStore, CartTotals, LicenseTier};
use serde::Serialize;
use std::fmt::Write as _;
use tokio::runtime::Runtime;
use tracing::{debug, info};

use super::{truncate, Render};
use crate::config::StorefrontConfig;
use crate::error::CliResult;

/// Cart lines with totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Current cart contents.
pub fn show<S: CartStorage>(store: &CartStore<S>) -> CartResponse {
    debug!("cart show");
    CartResponse::from(store.cart())
}

/// Fetches a product and adds one unit under `license`.
///
/// ## Behavior
/// - Same font and license already in cart: quantity increases
/// - Otherwise a new line is added with the current catalog price
pub fn add<A, S>(
    rt: &Runtime,
    api: &A,
    store: &mut CartStore<S>,
    product_id: u64,
    license: LicenseTier,
) -> CliResult<CartResponse>
where
    A: CommerceApi + ?Sized,
    S: CartStorage,
{
    let product = rt.block_on(api.get_product(product_id))?;
    let font = font_from_product(&product)?;
    validate_font(&font)?;

    store.add_item(&font, license);
    info!(product_id = %font.id, license = %license, "Added to cart");

    Ok(CartResponse::from(store.cart()))
}

/// Removes every line for `product_id`.
pub fn remove<S: CartStorage>(store: &mut CartStore<S>, product_id: &str) -> CliResult<CartResponse> {
    validate_product_id(product_id)?;
    store.remove_item(product_id);
    Ok(CartResponse::from(store.cart()))
}

/// Sets the quantity of every line for `product_id`; zero or less removes.
pub fn update<S: CartStorage>(
    store: &mut CartStore<S>,
    product_id: &str,
    quantity: i64,
) -> CliResult<CartResponse> {
    validate_product_id(product_id)?;
    store.update_quantity(product_id, quantity);
    Ok(CartResponse::from(store.cart()))
}

pub fn clear<S: CartStorage>(store: &mut CartStore<S>) -> CartResponse {
    store.clear_cart();
    CartResponse::from(store.cart())
}

impl Render for CartResponse {
    fn render(&self, config: &StorefrontConfig) -> String {
        if self.lines.is_empty() {
            return "Your cart is empty.\n".to_string();
        }

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>6}  {:<24} {:<11} {:>4} {:>10} {:>11}",
            "ID", "FONT", "LICENSE", "QTY", "UNIT", "TOTAL"
        );
        for line in &self.lines {
            let _ = writeln!(
                out,
                "{:>6}  {:<24} {:<11} {:>4} {:>10} {:>11}",
                line.product_id(),
                truncate(&line.product.name, 24),
                line.license.as_str(),
                line.quantity,
                config.format_currency(line.unit_price()),
                config.format_currency(line.line_total())
            );
        }
        let _ = writeln!(
            out,
            "\n{} item(s) · Total {}",
            self.totals.total_items,
            config.format_currency(self.totals.total_price)
        );
        out
    }
}
