//! # Checkout Command
//!
//! Places the order for the current cart, then clears the cart. A failed
//! submission leaves the cart untouched so the shopper can retry.

use fontstore_commerce::{place_order, CheckoutDetails, CommerceApi};
use fontstore_core::{CartStorage, CartStore, Money, OrderStatus};
use serde::Serialize;
use tokio::runtime::Runtime;
use tracing::info;

use super::Render;
use crate::cli::CheckoutArgs;
use crate::config::StorefrontConfig;
use crate::error::CliResult;

/// Confirmation shown after a successful order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub order_id: u64,
    pub order_number: String,
    pub status: OrderStatus,
    /// Total as reported by the shop; `None` if it sent something unparsable.
    pub total: Option<Money>,
    pub email: String,
}

impl From<CheckoutArgs> for CheckoutDetails {
    fn from(args: CheckoutArgs) -> Self {
        CheckoutDetails {
            email: args.email,
            first_name: args.first_name,
            last_name: args.last_name,
            address: args.address,
            city: args.city,
            state: args.state.filter(|s| !s.trim().is_empty()),
            postcode: args.postcode,
            country: args.country,
            phone: args.phone,
        }
    }
}

pub fn run<A, S>(
    rt: &Runtime,
    api: &A,
    store: &mut CartStore<S>,
    details: &CheckoutDetails,
) -> CliResult<CheckoutResponse>
where
    A: CommerceApi + ?Sized,
    S: CartStorage,
{
    let order = rt.block_on(place_order(api, store.cart(), details))?;

    store.clear_cart();
    info!(order_id = order.id, "Cart cleared after checkout");

    Ok(CheckoutResponse {
        order_id: order.id,
        order_number: if order.number.is_empty() {
            order.id.to_string()
        } else {
            order.number.clone()
        },
        status: order.order_status(),
        total: order.total_amount().ok(),
        email: details.email.trim().to_string(),
    })
}

impl Render for CheckoutResponse {
    fn render(&self, config: &StorefrontConfig) -> String {
        let total = self
            .total
            .map(|t| config.format_currency(t))
            .unwrap_or_else(|| "-".to_string());
        format!(
            "Order #{} placed ({}).\nTotal: {}\nA confirmation will be sent to {}.\n",
            self.order_number, self.status, total, self.email
        )
    }
}
