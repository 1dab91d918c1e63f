//! # Domain Types
//!
//! Core domain types shared by the cart, the commerce client and the
//! storefront surfaces.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Font       │   │   LicenseTier   │   │   OrderStatus   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (string)    │   │  Personal  ×1   │   │  Pending        │       │
//! │  │  name           │   │  Commercial ×2  │   │  Processing     │       │
//! │  │  category       │   │  Extended  ×5   │   │  Completed ...  │       │
//! │  │  price (base)   │   │  (license.rs)   │   │                 │       │
//! │  │  file_formats   │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `Font` is owned by the remote catalog. The cart copies it into the line
//! at add time and never re-fetches it, so prices in the cart stay frozen at
//! the value the shopper saw.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Font
// =============================================================================

/// A font product as the cart sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Font {
    /// Catalog identifier (the commerce backend's numeric id, as a string).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Category shown in the catalog ("Sans Serif", "Script", ...).
    pub category: String,

    /// Type designer credited on the product page.
    pub designer: String,

    /// Base price: the personal-license price.
    pub price: Money,

    /// Downloadable formats (OTF, TTF, WOFF, ...).
    pub file_formats: BTreeSet<String>,
}

impl Font {
    /// Creates a font with an unknown designer and no listed formats.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Font {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            designer: "Unknown".to_string(),
            price,
            file_formats: BTreeSet::new(),
        }
    }

    /// Sets the designer.
    pub fn with_designer(mut self, designer: impl Into<String>) -> Self {
        self.designer = designer.into();
        self
    }

    /// Adds file formats, normalised to upper case.
    pub fn with_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.file_formats.extend(
            formats
                .into_iter()
                .map(|f| f.as_ref().trim().to_uppercase())
                .filter(|f| !f.is_empty()),
        );
        self
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Status of an order placed with the commerce backend.
///
/// ## Mapping
/// The backend sends free-form status strings. Anything we don't recognise
/// is shown as `Pending`, matching what the order history page has always
/// done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Awaiting payment.
    Pending,
    /// Paid, being fulfilled.
    Processing,
    /// Fonts delivered.
    Completed,
    /// Cancelled by shopper or admin.
    Cancelled,
    /// Money returned.
    Refunded,
    /// Payment failed.
    Failed,
}

impl OrderStatus {
    /// Maps a backend status string; unknown values become `Pending`.
    pub fn from_api(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "processing" => OrderStatus::Processing,
            "completed" => OrderStatus::Completed,
            "cancelled" => OrderStatus::Cancelled,
            "refunded" => OrderStatus::Refunded,
            "failed" => OrderStatus::Failed,
            _ => OrderStatus::Pending,
        }
    }

    /// Human-readable label for order history.
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending Payment",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
            OrderStatus::Failed => "Failed",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
