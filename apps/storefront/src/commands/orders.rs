//! Order history.

use chrono::NaiveDateTime;
use fontstore_commerce::{CommerceApi, OrderQuery, RemoteOrder};
use fontstore_core::validation::validate_page;
use fontstore_core::{Money, OrderStatus};
use serde::Serialize;
use std::fmt::Write as _;
use tokio::runtime::Runtime;

use super::Render;
use crate::cli::PageArgs;
use crate::config::StorefrontConfig;
use crate::error::CliResult;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    pub orders: Vec<OrderSummary>,
    pub page: u32,
}

/// One row of the order history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: u64,
    pub status: OrderStatus,
    pub date_created: Option<NaiveDateTime>,
    pub total: Option<Money>,
    pub items: Vec<String>,
}

impl From<&RemoteOrder> for OrderSummary {
    fn from(order: &RemoteOrder) -> Self {
        OrderSummary {
            id: order.id,
            status: order.order_status(),
            date_created: order.date_created,
            total: order.total_amount().ok(),
            items: order
                .line_items
                .iter()
                .map(|line| format!("{} × {}", line.name, line.quantity))
                .collect(),
        }
    }
}

pub fn list<A: CommerceApi + ?Sized>(rt: &Runtime, api: &A, args: PageArgs) -> CliResult<OrdersResponse> {
    validate_page(args.page.unwrap_or(1), args.per_page.unwrap_or(10))?;

    let mut query = OrderQuery::new();
    query.page = args.page;
    query.per_page = args.per_page;

    let orders = rt.block_on(api.list_orders(&query))?;

    Ok(OrdersResponse {
        orders: orders.iter().map(OrderSummary::from).collect(),
        page: query.effective_page(),
    })
}

impl Render for OrdersResponse {
    fn render(&self, config: &StorefrontConfig) -> String {
        if self.orders.is_empty() {
            return "No orders yet.\n".to_string();
        }

        let mut out = String::new();
        for order in &self.orders {
            let date = order
                .date_created
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            let total = order
                .total
                .map(|t| config.format_currency(t))
                .unwrap_or_else(|| "-".to_string());

            let _ = writeln!(
                out,
                "#{:<6} {:<16} {:<16} {:>10}",
                order.id,
                date,
                order.status.label(),
                total
            );
            for item in &order.items {
                let _ = writeln!(out, "        {}", item);
            }
        }
        out
    }
}
