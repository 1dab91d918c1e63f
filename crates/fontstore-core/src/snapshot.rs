//! # Cart Snapshot
//!
//! The persisted form of the cart. Written after every mutation, read once
//! when a store opens.
//!
//! ## Layout (version 1)
//! ```json
//! {
//!   "version": 1,
//!   "savedAt": "2024-05-01T10:30:00Z",
//!   "lines": [
//!     {
//!       "productId": "62",
//!       "license": "commercial",
//!       "quantity": 2,
//!       "product": {
//!         "id": "62",
//!         "name": "Montserrat Pro",
//!         "category": "Sans Serif",
//!         "designer": "Juliet Martinez",
//!         "priceCents": 2900,
//!         "fileFormats": ["OTF", "TTF"]
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! ## Strict Decoding
//! Nothing in the slot is trusted. Decoding rejects:
//! - anything that is not JSON, or has unknown fields
//! - a missing or different `version`
//! - a quantity of 0
//! - a negative price, or one above [`MAX_PRICE_CENTS`]
//! - `productId` disagreeing with `product.id`
//! - two lines for the same `(productId, license)`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

use crate::cart::{Cart, CartLine};
use crate::license::LicenseTier;
use crate::money::Money;
use crate::types::Font;
use crate::{CART_SCHEMA_VERSION, MAX_PRICE_CENTS};

// =============================================================================
// Errors
// =============================================================================

/// Reasons a persisted cart is refused.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Not JSON, wrong shape, or unknown fields.
    #[error("Malformed cart snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// No `version` tag at the top level.
    #[error("Cart snapshot has no version tag")]
    MissingVersion,

    /// Written by a different schema version.
    #[error("Unsupported cart snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u64, expected: u32 },

    /// A line with quantity 0.
    #[error("Line for product {product_id} has quantity 0")]
    InvalidQuantity { product_id: String },

    /// A product snapshot with a negative price.
    #[error("Product {product_id} has a negative price")]
    InvalidPrice { product_id: String },

    /// A product snapshot priced above [`MAX_PRICE_CENTS`].
    #[error("Product {product_id} price {cents} exceeds the {max} cent limit")]
    PriceOutOfRange {
        product_id: String,
        cents: i64,
        max: i64,
    },

    /// `productId` does not match the embedded product.
    #[error("Line product id {line} does not match snapshot id {product}")]
    ProductIdMismatch { line: String, product: String },

    /// The `(product, license)` uniqueness invariant is broken.
    #[error("Duplicate line for product {product_id} ({license})")]
    DuplicateLine {
        product_id: String,
        license: LicenseTier,
    },
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CartSnapshot {
    version: u32,
    saved_at: DateTime<Utc>,
    lines: Vec<SnapshotLine>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SnapshotLine {
    product_id: String,
    license: LicenseTier,
    quantity: u32,
    product: ProductSnapshot,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ProductSnapshot {
    id: String,
    name: String,
    category: String,
    designer: String,
    price_cents: i64,
    file_formats: BTreeSet<String>,
}

impl From<&CartLine> for SnapshotLine {
    fn from(line: &CartLine) -> Self {
        let product = &line.product;
        SnapshotLine {
            product_id: product.id.clone(),
            license: line.license,
            quantity: line.quantity,
            product: ProductSnapshot {
                id: product.id.clone(),
                name: product.name.clone(),
                category: product.category.clone(),
                designer: product.designer.clone(),
                price_cents: product.price.cents(),
                file_formats: product.file_formats.clone(),
            },
        }
    }
}

// =============================================================================
// Encode / Decode
// =============================================================================

/// Serializes the cart into the current snapshot format.
pub fn encode(cart: &Cart) -> Result<String, SnapshotError> {
    encode_at(cart, Utc::now())
}

/// Like [`encode`] with an explicit save timestamp.
pub fn encode_at(cart: &Cart, saved_at: DateTime<Utc>) -> Result<String, SnapshotError> {
    let snapshot = CartSnapshot {
        version: CART_SCHEMA_VERSION,
        saved_at,
        lines: cart.lines().iter().map(SnapshotLine::from).collect(),
    };
    Ok(serde_json::to_string(&snapshot)?)
}

/// Decodes and checks a persisted cart.
pub fn decode(blob: &str) -> Result<Cart, SnapshotError> {
    let value: serde_json::Value = serde_json::from_str(blob)?;

    let found = value
        .get("version")
        .and_then(serde_json::Value::as_u64)
        .ok_or(SnapshotError::MissingVersion)?;
    if found != u64::from(CART_SCHEMA_VERSION) {
        return Err(SnapshotError::UnsupportedVersion {
            found,
            expected: CART_SCHEMA_VERSION,
        });
    }

    let snapshot: CartSnapshot = serde_json::from_value(value)?;

    let mut seen = HashSet::with_capacity(snapshot.lines.len());
    let mut lines = Vec::with_capacity(snapshot.lines.len());

    for line in snapshot.lines {
        if line.product_id != line.product.id {
            return Err(SnapshotError::ProductIdMismatch {
                line: line.product_id,
                product: line.product.id,
            });
        }
        if line.quantity == 0 {
            return Err(SnapshotError::InvalidQuantity {
                product_id: line.product_id,
            });
        }
        if line.product.price_cents < 0 {
            return Err(SnapshotError::InvalidPrice {
                product_id: line.product_id,
            });
        }
        if line.product.price_cents > MAX_PRICE_CENTS {
            return Err(SnapshotError::PriceOutOfRange {
                product_id: line.product_id,
                cents: line.product.price_cents,
                max: MAX_PRICE_CENTS,
            });
        }
        if !seen.insert((line.product_id.clone(), line.license)) {
            return Err(SnapshotError::DuplicateLine {
                product_id: line.product_id,
                license: line.license,
            });
        }

        let p = line.product;
        lines.push(CartLine {
            product: Font {
                id: p.id,
                name: p.name,
                category: p.category,
                designer: p.designer,
                price: Money::from_cents(p.price_cents),
                file_formats: p.file_formats,
            },
            license: line.license,
            quantity: line.quantity,
        });
    }

    Ok(Cart::from_lines(lines))
}

// =============================================================================
// Unit Tests
// =============================================================================
