//! # Commerce Models
//!
//! The subset of the WooCommerce v3 representations the storefront reads
//! and writes. Every inbound struct is `#[serde(default)]`, so missing
//! fields decode to empty values instead of failing the whole response.
//!
//! ```text
//! ┌──────────────────────┐        ┌──────────────────────┐
//! │ RemoteProduct        │        │ NewOrder (outbound)  │
//! │  id, name, price…    │        │  payment_method      │
//! │  categories[]  ──────┼─► Category                    │
//! │  tags[]        ──────┼─► Tag   billing / shipping ──► Address
//! │  attributes[]        │        │  line_items[] ──────► NewLineItem
//! └──────────────────────┘        └──────────┬───────────┘
//!                                            │ POST orders
//!                                            ▼
//!                                 ┌──────────────────────┐
//!                                 │ RemoteOrder          │
//!                                 │  status, total…      │
//!                                 └──────────────────────┘
//! ```

use chrono::NaiveDateTime;
use fontstore_core::{Money, OrderStatus, ValidationError};
use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog
// =============================================================================

/// A product as returned by `GET products`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteProduct {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub permalink: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub status: String,
    pub featured: bool,
    pub description: String,
    pub short_description: String,
    pub sku: String,
    /// Current price as a decimal string (may be empty).
    pub price: String,
    pub regular_price: String,
    pub sale_price: String,
    pub on_sale: bool,
    pub total_sales: u64,
    /// Average rating as a decimal string, e.g. `"4.80"`.
    pub average_rating: String,
    pub rating_count: u32,
    pub date_created: Option<NaiveDateTime>,
    pub stock_status: String,
    pub categories: Vec<TermRef>,
    pub tags: Vec<TermRef>,
    pub images: Vec<Image>,
    pub attributes: Vec<Attribute>,
    pub downloads: Vec<Download>,
}

impl RemoteProduct {
    /// Options of the attribute called `name` (case-insensitive).
    pub fn attribute_options(&self, name: &str) -> Option<&[String]> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.options.as_slice())
    }

    /// Average rating as a number, 0.0 when absent or malformed.
    pub fn rating(&self) -> f64 {
        self.average_rating.trim().parse().unwrap_or(0.0)
    }
}

/// Category or tag reference embedded in a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermRef {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

/// Product image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub id: u64,
    pub src: String,
    pub name: String,
    pub alt: String,
}

/// Product attribute such as `Designer` or `Formats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    pub id: u64,
    pub name: String,
    pub position: u32,
    pub visible: bool,
    pub variation: bool,
    pub options: Vec<String>,
}

/// Downloadable file attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Download {
    pub id: String,
    pub name: String,
    pub file: String,
}

/// A product category from `GET products/categories`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub parent: u64,
    pub description: String,
    pub count: u64,
}

/// A product tag from `GET products/tags`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub count: u64,
}

// =============================================================================
// Orders
// =============================================================================

/// Billing or shipping address.
///
/// Shipping addresses carry no email or phone; those fields are omitted
/// from the payload when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub address_1: String,
    pub address_2: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Line-item meta key carrying the selected license tier.
pub const LICENSE_META_KEY: &str = "license";

/// Free-form key/value attached to an order line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaData {
    pub key: String,
    pub value: String,
}

/// An order as returned by `GET orders` / `POST orders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteOrder {
    pub id: u64,
    pub parent_id: u64,
    pub number: String,
    pub order_key: String,
    pub status: String,
    pub currency: String,
    pub date_created: Option<NaiveDateTime>,
    pub date_paid: Option<NaiveDateTime>,
    pub date_completed: Option<NaiveDateTime>,
    pub shipping_total: String,
    pub total: String,
    pub customer_note: String,
    pub billing: Address,
    pub shipping: Address,
    pub payment_method: String,
    pub payment_method_title: String,
    pub line_items: Vec<OrderLineItem>,
    pub set_paid: bool,
}

impl RemoteOrder {
    /// Status as the storefront understands it; unknown values are pending.
    pub fn order_status(&self) -> OrderStatus {
        OrderStatus::from_api(&self.status)
    }

    /// Order total as money.
    pub fn total_amount(&self) -> Result<Money, ValidationError> {
        Money::parse_decimal(&self.total)
    }
}

/// A line on an existing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderLineItem {
    pub id: u64,
    pub name: String,
    pub product_id: u64,
    pub variation_id: u64,
    pub quantity: u32,
    pub subtotal: String,
    pub total: String,
    pub sku: String,
    pub meta_data: Vec<MetaData>,
}

/// Payload of `POST orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub payment_method: String,
    pub payment_method_title: String,
    pub set_paid: bool,
    pub billing: Address,
    pub shipping: Address,
    pub line_items: Vec<NewLineItem>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub customer_note: String,
}

/// One requested line of a new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLineItem {
    pub product_id: u64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meta_data: Vec<MetaData>,
}

impl NewLineItem {
    /// Value of the meta entry called `key`.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.meta_data
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_tolerates_missing_fields() {
        let json = r#"{"id": 62, "name": "Montserrat Pro", "price": "29.00",
                       "categories": [{"id": 3, "name": "Sans Serif"}],
                       "date_created": "2024-01-15T10:30:00",
                       "meta_data": [{"id": 1, "key": "_x", "value": {"nested": true}}]}"#;
        let product: RemoteProduct = serde_json::from_str(json).unwrap();

        assert_eq!(product.id, 62);
        assert_eq!(product.price, "29.00");
        assert_eq!(product.categories[0].name, "Sans Serif");
        assert_eq!(product.categories[0].slug, "");
        assert!(product.date_created.is_some());
        assert!(product.attributes.is_empty());
    }

    #[test]
    fn test_attribute_lookup_is_case_insensitive() {
        let product = RemoteProduct {
            attributes: vec![Attribute {
                name: "Designer".into(),
                options: vec!["Sophia Chen".into()],
                ..Default::default()
            }],
            ..Default::default()
        };

        assert_eq!(
            product.attribute_options("designer"),
            Some(&["Sophia Chen".to_string()][..])
        );
        assert!(product.attribute_options("Formats").is_none());
    }

    #[test]
    fn test_order_helpers() {
        let json = r#"{"id": 81, "status": "on-hold", "total": "54.00",
                       "date_completed": null,
                       "line_items": [{"product_id": 45, "quantity": 2, "price": 24.5}]}"#;
        let order: RemoteOrder = serde_json::from_str(json).unwrap();

        assert_eq!(order.order_status(), OrderStatus::Pending);
        assert_eq!(order.total_amount().unwrap(), Money::from_cents(5400));
        assert_eq!(order.line_items[0].quantity, 2);
    }

    #[test]
    fn test_new_order_payload_shape() {
        let order = NewOrder {
            payment_method: "cod".into(),
            payment_method_title: "Cash on Delivery".into(),
            set_paid: true,
            billing: Address {
                email: Some("ada@example.com".into()),
                ..Default::default()
            },
            shipping: Address::default(),
            line_items: vec![NewLineItem {
                product_id: 62,
                quantity: 1,
                meta_data: vec![],
            }],
            customer_note: String::new(),
        };
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["billing"]["email"], "ada@example.com");
        assert!(json["shipping"].get("email").is_none());
        assert!(json["line_items"][0].get("meta_data").is_none());
        assert!(json.get("customer_note").is_none());
    }

    #[test]
    fn test_license_meta_lookup() {
        let line = NewLineItem {
            product_id: 62,
            quantity: 1,
            meta_data: vec![
                MetaData {
                    key: "_gift".into(),
                    value: "yes".into(),
                },
                MetaData {
                    key: LICENSE_META_KEY.into(),
                    value: "extended".into(),
                },
            ],
        };
        let json = serde_json::to_value(&line).unwrap();

        assert_eq!(line.meta(LICENSE_META_KEY), Some("extended"));
        assert_eq!(json["meta_data"][1]["key"], "license");
        assert!(line.meta("missing").is_none());
    }
}
