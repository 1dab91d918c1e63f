//! # Cart
//!
//! The shopping cart entity and its mutation rules. Pure data: persistence
//! is layered on top by [`crate::store::CartStore`].
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shopper Action           Operation                  Effect             │
//! │  ──────────────           ─────────                  ──────             │
//! │                                                                         │
//! │  "Add to cart" ─────────► add_item(font, lic) ─────► qty += 1 on        │
//! │                                                      (id, lic) or push │
//! │                                                                         │
//! │  Change quantity ───────► update_quantity(id, n) ──► n <= 0: remove    │
//! │                                                      else qty = n on    │
//! │                                                      EVERY line of id   │
//! │                                                                         │
//! │  Click remove ──────────► remove_item(id) ─────────► drop EVERY line   │
//! │                                                      of id              │
//! │                                                                         │
//! │  Order placed ──────────► clear() ─────────────────► lines.clear()     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Id-only keying
//! Lines are unique by `(product id, license)`, but removal and quantity
//! updates match on the product id alone. Removing one license of a font
//! removes every license of it. This is long-standing storefront behaviour
//! and is kept as-is.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::license::LicenseTier;
use crate::money::Money;
use crate::types::Font;

// =============================================================================
// Cart Line
// =============================================================================

/// One `(font, license, quantity)` record in the cart.
///
/// ## Design Notes
/// `product` is a frozen copy of the font taken when it was added. Totals
/// are always computed from this copy, never from a live catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Font snapshot at time of adding (frozen).
    pub product: Font,

    /// License selected for this line.
    pub license: LicenseTier,

    /// Units in cart, always >= 1.
    pub quantity: u32,
}

impl CartLine {
    /// Creates a new line with quantity 1.
    pub fn new(product: &Font, license: LicenseTier) -> Self {
        CartLine {
            product: product.clone(),
            license,
            quantity: 1,
        }
    }

    /// Product identifier of this line.
    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Price of a single unit under this line's license.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.license.unit_price(self.product.price)
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price() * i64::from(self.quantity)
    }

    fn matches(&self, product_id: &str, license: LicenseTier) -> bool {
        self.product.id == product_id && self.license == license
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per `(product id, license)`
/// - Every quantity is >= 1; a mutation to <= 0 removes instead
/// - Line order is insertion order (display order only)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Builds a cart from lines that already satisfy the invariants.
    ///
    /// Only the snapshot decoder calls this, after checking them.
    pub(crate) fn from_lines(lines: Vec<CartLine>) -> Self {
        Cart { lines }
    }

    /// Lines in display order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Adds one unit of `product` under `license`.
    ///
    /// ## Behavior
    /// - Same `(id, license)` already present: quantity increases by exactly 1
    /// - Otherwise: a new line with quantity 1 is appended
    ///
    /// The product is not validated.
    pub fn add_item(&mut self, product: &Font, license: LicenseTier) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(&product.id, license))
        {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }

        self.lines.push(CartLine::new(product, license));
    }

    /// Removes every line whose product id matches, regardless of license.
    ///
    /// Returns the number of lines removed; removing an absent id is a no-op.
    pub fn remove_item(&mut self, product_id: &str) -> usize {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        before - self.lines.len()
    }

    /// Sets the quantity of every line whose product id matches.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: exactly `remove_item(product_id)`
    /// - Otherwise every matching line (all licenses) gets `quantity`,
    ///   clamped to `u32::MAX`
    /// - No matching line: no-op
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.lines
            .iter_mut()
            .filter(|l| l.product.id == product_id)
            .for_each(|l| l.quantity = quantity);
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `unit_price × quantity` over all lines.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities (units, not distinct lines).
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// True if any line carries this product id.
    pub fn is_in_cart(&self, product_id: &str) -> bool {
        self.lines.iter().any(|l| l.product.id == product_id)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Cart totals summary for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    pub total_items: u64,
    pub total_price: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_font(id: &str, price_cents: i64) -> Font {
        Font::new(id, format!("Font {}", id), "Sans Serif", Money::from_cents(price_cents))
    }

    #[test]
    fn test_repeated_add_merges_into_one_line() {
        let mut cart = Cart::new();
        let font = test_font("1", 1000);

        for _ in 0..4 {
            cart.add_item(&font, LicenseTier::Personal);
        }

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn test_different_license_creates_distinct_line() {
        let mut cart = Cart::new();
        let font = test_font("1", 1000);

        cart.add_item(&font, LicenseTier::Personal);
        cart.add_item(&font, LicenseTier::Commercial);

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.lines()[0].license, LicenseTier::Personal);
        assert_eq!(cart.lines()[1].license, LicenseTier::Commercial);
    }

    #[test]
    fn test_remove_drops_every_license_of_product() {
        let mut cart = Cart::new();
        let font = test_font("1", 1000);
        let other = test_font("2", 500);

        cart.add_item(&font, LicenseTier::Personal);
        cart.add_item(&font, LicenseTier::Commercial);
        cart.add_item(&other, LicenseTier::Extended);

        assert_eq!(cart.remove_item("1"), 2);
        assert_eq!(cart.line_count(), 1);
        assert!(!cart.is_in_cart("1"));
        assert!(cart.is_in_cart("2"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_font("1", 1000), LicenseTier::Personal);

        assert_eq!(cart.remove_item("missing"), 0);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_update_to_zero_equals_remove() {
        let font = test_font("1", 1000);
        let mut updated = Cart::new();
        updated.add_item(&font, LicenseTier::Personal);
        updated.add_item(&font, LicenseTier::Extended);
        let mut removed = updated.clone();

        updated.update_quantity("1", 0);
        removed.remove_item("1");

        assert_eq!(updated, removed);
        assert!(updated.is_empty());
    }

    #[test]
    fn test_update_negative_removes() {
        let mut cart = Cart::new();
        cart.add_item(&test_font("1", 1000), LicenseTier::Personal);

        cart.update_quantity("1", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_sets_every_license_line() {
        let mut cart = Cart::new();
        let font = test_font("1", 1000);
        cart.add_item(&font, LicenseTier::Personal);
        cart.add_item(&font, LicenseTier::Commercial);
        cart.add_item(&font, LicenseTier::Commercial);

        cart.update_quantity("1", 7);

        assert!(cart.lines().iter().all(|l| l.quantity == 7));
        assert_eq!(cart.total_items(), 14);
    }

    #[test]
    fn test_update_clamps_huge_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&test_font("1", 1), LicenseTier::Personal);

        cart.update_quantity("1", i64::MAX);
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }

    #[test]
    fn test_total_price_saturates_instead_of_overflowing() {
        let mut cart = Cart::new();
        let pricey = Font::new(
            "1",
            "Pricey",
            "Serif",
            Money::parse_decimal("5000000").unwrap(),
        );
        cart.add_item(&pricey, LicenseTier::Extended);
        cart.add_item(&test_font("2", 100), LicenseTier::Personal);

        cart.update_quantity("1", 10_000_000_000);

        assert_eq!(cart.lines()[0].quantity, u32::MAX);
        assert_eq!(cart.lines()[0].line_total().cents(), i64::MAX);
        assert_eq!(cart.total_price().cents(), i64::MAX);
    }

    #[test]
    fn test_total_price_uses_license_multiplier() {
        let mut cart = Cart::new();
        let font = test_font("1", 1000); // $10.00

        for _ in 0..3 {
            cart.add_item(&font, LicenseTier::Commercial);
        }

        // 10 × 2 × 3
        assert_eq!(cart.total_price(), Money::from_cents(6000));
    }

    #[test]
    fn test_total_price_mixed_tiers() {
        let mut cart = Cart::new();
        let font = test_font("1", 2900);
        cart.add_item(&font, LicenseTier::Personal);
        cart.add_item(&font, LicenseTier::Extended);

        // 29 + 29 × 5
        assert_eq!(cart.total_price().cents(), 17400);
    }

    #[test]
    fn test_total_price_uses_frozen_snapshot() {
        let mut cart = Cart::new();
        let mut font = test_font("1", 1000);
        cart.add_item(&font, LicenseTier::Personal);

        // Catalog price changes after adding; the line keeps its copy.
        font.price = Money::from_cents(9999);
        assert_eq!(cart.total_price().cents(), 1000);
    }

    #[test]
    fn test_total_items_counts_units() {
        let mut cart = Cart::new();
        let a = test_font("1", 1000);
        let b = test_font("2", 1000);
        cart.add_item(&a, LicenseTier::Personal);
        cart.add_item(&b, LicenseTier::Personal);
        cart.update_quantity("1", 2);
        cart.update_quantity("2", 3);

        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_is_in_cart() {
        let mut cart = Cart::new();
        assert!(!cart.is_in_cart("1"));

        cart.add_item(&test_font("1", 1000), LicenseTier::Extended);
        assert!(cart.is_in_cart("1"));
    }

    #[test]
    fn test_clear_and_totals() {
        let mut cart = Cart::new();
        cart.add_item(&test_font("1", 1500), LicenseTier::Commercial);

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 1);
        assert_eq!(totals.total_items, 1);
        assert_eq!(totals.total_price.cents(), 3000);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Money::zero());
    }
}
