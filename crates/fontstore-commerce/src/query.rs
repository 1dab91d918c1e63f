//! # Query Parameters
//!
//! Typed builders for the `products` and `orders` list endpoints. Only the
//! parameters that were set reach the query string, always in the same
//! order, so identical queries produce identical URLs.

use fontstore_core::{Money, ValidationError};
use std::fmt;
use std::str::FromStr;

/// Page used when none is requested.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when none is requested.
pub const DEFAULT_PER_PAGE: u32 = 10;

// =============================================================================
// Sorting
// =============================================================================

/// Product sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBy {
    Date,
    Id,
    Title,
    Price,
    Popularity,
    Rating,
}

impl OrderBy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Date => "date",
            OrderBy::Id => "id",
            OrderBy::Title => "title",
            OrderBy::Price => "price",
            OrderBy::Popularity => "popularity",
            OrderBy::Rating => "rating",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderBy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(OrderBy::Date),
            "id" => Ok(OrderBy::Id),
            "title" => Ok(OrderBy::Title),
            "price" => Ok(OrderBy::Price),
            "popularity" => Ok(OrderBy::Popularity),
            "rating" => Ok(OrderBy::Rating),
            _ => Err(ValidationError::NotAllowed {
                field: "orderby".to_string(),
                allowed: ["date", "id", "title", "price", "popularity", "rating"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            }),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ValidationError::NotAllowed {
                field: "order".to_string(),
                allowed: vec!["asc".to_string(), "desc".to_string()],
            }),
        }
    }
}

// =============================================================================
// Product Query
// =============================================================================

/// Filters, sorting and pagination for `GET products`.
///
/// ## Example
/// ```rust
/// use fontstore_commerce::query::{OrderBy, ProductQuery, SortOrder};
///
/// let query = ProductQuery::new()
///     .category("serif")
///     .order_by(OrderBy::Price, SortOrder::Desc)
///     .page(2);
///
/// assert_eq!(
///     query.to_query_string(),
///     "page=2&category=serif&orderby=price&order=desc"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub status: Option<String>,
    pub product_type: Option<String>,
    pub featured: Option<bool>,
    pub on_sale: Option<bool>,
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
    pub stock_status: Option<String>,
    pub orderby: Option<OrderBy>,
    pub order: Option<SortOrder>,
}

impl ProductQuery {
    pub fn new() -> Self {
        ProductQuery::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn on_sale(mut self, on_sale: bool) -> Self {
        self.on_sale = Some(on_sale);
        self
    }

    pub fn price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn order_by(mut self, orderby: OrderBy, order: SortOrder) -> Self {
        self.orderby = Some(orderby);
        self.order = Some(order);
        self
    }

    /// Page to serve (1 when unset).
    pub fn effective_page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE).max(1)
    }

    /// Page size to serve (10 when unset).
    pub fn effective_per_page(&self) -> u32 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1)
    }

    /// Set parameters as `(name, value)` pairs in a stable order.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        push(&mut pairs, "page", self.page);
        push(&mut pairs, "per_page", self.per_page);
        push(&mut pairs, "search", self.search.as_ref());
        push(&mut pairs, "category", self.category.as_ref());
        push(&mut pairs, "tag", self.tag.as_ref());
        push(&mut pairs, "status", self.status.as_ref());
        push(&mut pairs, "type", self.product_type.as_ref());
        push(&mut pairs, "featured", self.featured);
        push(&mut pairs, "on_sale", self.on_sale);
        push(&mut pairs, "min_price", self.min_price.map(|m| m.to_decimal_string()));
        push(&mut pairs, "max_price", self.max_price.map(|m| m.to_decimal_string()));
        push(&mut pairs, "stock_status", self.stock_status.as_ref());
        push(&mut pairs, "orderby", self.orderby);
        push(&mut pairs, "order", self.order);

        pairs
    }

    /// Set parameters joined as `a=1&b=2` (values are not percent-encoded).
    pub fn to_query_string(&self) -> String {
        join_pairs(&self.to_query_pairs())
    }
}

// =============================================================================
// Order Query
// =============================================================================

/// Pagination for `GET orders`. `per_page` is always sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl OrderQuery {
    pub fn new() -> Self {
        OrderQuery::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn effective_page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE).max(1)
    }

    pub fn effective_per_page(&self) -> u32 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1)
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push(&mut pairs, "page", self.page);
        pairs.push(("per_page", self.effective_per_page().to_string()));
        pairs
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn push<T: ToString>(pairs: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<T>) {
    if let Some(value) = value {
        pairs.push((name, value.to_string()));
    }
}

fn join_pairs(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// Slice of `items` for a 1-based page.
pub(crate) fn paginate<T: Clone>(items: &[T], page: u32, per_page: u32) -> Vec<T> {
    let start = (page.max(1) as usize - 1).saturating_mul(per_page as usize);
    items
        .iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect()
}
