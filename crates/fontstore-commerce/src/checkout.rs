//! # Checkout
//!
//! Turns the cart plus the shopper's details into a commerce order.
//!
//! ## Flow
//! ```text
//! ┌──────────────────┐   validate()   ┌──────────────┐  build_order()  ┌───────────┐
//! │ CheckoutDetails  │ ─────────────► │ every field  │ ──────────────► │ NewOrder  │
//! │ + Cart           │                │ present,     │  one line per   │ cod, paid │
//! └──────────────────┘                │ email shaped │  cart line      └─────┬─────┘
//!                                     └──────────────┘                       │
//!                                                        create_order() ◄────┘
//! ```
//!
//! Placing the order does not touch the cart. The caller clears it once the
//! order id is in hand, so a failed submission leaves the cart intact.

use fontstore_core::validation::validate_email;
use fontstore_core::Cart;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::CommerceApi;
use crate::error::{CommerceError, CommerceResult};
use crate::models::{Address, MetaData, NewLineItem, NewOrder, RemoteOrder, LICENSE_META_KEY};

/// Payment method recorded on every storefront order.
pub const PAYMENT_METHOD: &str = "cod";

/// Display title of [`PAYMENT_METHOD`].
pub const PAYMENT_METHOD_TITLE: &str = "Cash on Delivery";

/// What the shopper enters on the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutDetails {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    /// Optional; many countries have no state or province.
    pub state: Option<String>,
    pub postcode: String,
    pub country: String,
    pub phone: String,
}

impl CheckoutDetails {
    /// Checks every required field, reporting all missing ones at once.
    pub fn validate(&self) -> CommerceResult<()> {
        let required = [
            ("email", &self.email),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
            ("postcode", &self.postcode),
            ("country", &self.country),
            ("phone", &self.phone),
        ];

        let missing: Vec<String> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(CommerceError::MissingFields(missing));
        }

        validate_email(self.email.trim())?;
        Ok(())
    }

    fn address(&self) -> Address {
        Address {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            address_1: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self
                .state
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            postcode: self.postcode.trim().to_string(),
            country: self.country.trim().to_string(),
            ..Default::default()
        }
    }
}

/// Builds the order payload for `cart`.
///
/// Each cart line becomes one order line carrying its license tier as
/// `license` meta data. Cart product ids must be positive integers.
pub fn build_order(cart: &Cart, details: &CheckoutDetails) -> CommerceResult<NewOrder> {
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let line_items = cart
        .lines()
        .iter()
        .map(|line| {
            let product_id = line
                .product_id()
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|id| *id > 0)
                .ok_or_else(|| CommerceError::InvalidProductId(line.product_id().to_string()))?;

            Ok(NewLineItem {
                product_id,
                quantity: line.quantity,
                meta_data: vec![MetaData {
                    key: LICENSE_META_KEY.to_string(),
                    value: line.license.as_str().to_string(),
                }],
            })
        })
        .collect::<CommerceResult<Vec<_>>>()?;

    let shipping = details.address();
    let billing = Address {
        email: Some(details.email.trim().to_string()),
        phone: Some(details.phone.trim().to_string()),
        ..shipping.clone()
    };

    Ok(NewOrder {
        payment_method: PAYMENT_METHOD.to_string(),
        payment_method_title: PAYMENT_METHOD_TITLE.to_string(),
        set_paid: true,
        billing,
        shipping,
        line_items,
        customer_note: String::new(),
    })
}

/// Validates, builds and submits the order for `cart`.
pub async fn place_order<A>(
    api: &A,
    cart: &Cart,
    details: &CheckoutDetails,
) -> CommerceResult<RemoteOrder>
where
    A: CommerceApi + ?Sized,
{
    details.validate()?;
    let order = build_order(cart, details)?;

    let created = api.create_order(&order).await?;
    info!(
        order_id = created.id,
        lines = order.line_items.len(),
        total = %created.total,
        "Order placed"
    );

    Ok(created)
}
