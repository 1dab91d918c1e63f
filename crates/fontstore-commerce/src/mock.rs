//! # Fixture Backend
//!
//! [`MockCommerce`] serves a fixed six-font catalog and two historical
//! orders without touching the network. Filtering, sorting and pagination
//! follow the live endpoint's parameters, so the storefront behaves the same
//! against either backend.
//!
//! ## Query Pipeline
//! ```text
//! fixtures ──► filter ──► sort ──► paginate ──► Vec<RemoteProduct>
//!              search       orderby    page
//!              category     order      per_page
//!              tag
//!              featured / on_sale
//!              min / max price
//! ```
//!
//! Orders created here are kept in memory for the lifetime of the backend
//! and listed ahead of the fixture orders.

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use fontstore_core::{LicenseTier, Money};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::client::CommerceApi;
use crate::error::{CommerceError, CommerceResult};
use crate::models::{
    Address, Attribute, Category, NewOrder, OrderLineItem, RemoteOrder, RemoteProduct, Tag,
    TermRef, LICENSE_META_KEY,
};
use crate::query::{paginate, OrderBy, OrderQuery, ProductQuery, SortOrder};

/// Id given to the first order created against the fixture backend.
const FIRST_CREATED_ORDER_ID: u64 = 82;

// =============================================================================
// Backend
// =============================================================================

/// In-process commerce backend over fixture data.
#[derive(Debug)]
pub struct MockCommerce {
    products: Vec<RemoteProduct>,
    orders: Mutex<OrderBook>,
}

#[derive(Debug)]
struct OrderBook {
    next_id: u64,
    /// Oldest first.
    created: Vec<RemoteOrder>,
    fixtures: Vec<RemoteOrder>,
}

impl MockCommerce {
    pub fn new() -> Self {
        MockCommerce {
            products: fixture_products(),
            orders: Mutex::new(OrderBook {
                next_id: FIRST_CREATED_ORDER_ID,
                created: Vec::new(),
                fixtures: fixture_orders(),
            }),
        }
    }

    /// The full, unfiltered fixture catalog.
    pub fn products(&self) -> &[RemoteProduct] {
        &self.products
    }

    fn find_product(&self, id: u64) -> CommerceResult<&RemoteProduct> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CommerceError::not_found("Product", id))
    }
}

impl Default for MockCommerce {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommerceApi for MockCommerce {
    async fn list_products(&self, query: &ProductQuery) -> CommerceResult<Vec<RemoteProduct>> {
        let mut matched: Vec<RemoteProduct> = self
            .products
            .iter()
            .filter(|p| matches_query(p, query))
            .cloned()
            .collect();

        if let Some(orderby) = query.orderby {
            let order = query.order.unwrap_or_default();
            matched.sort_by(|a, b| {
                let ord = compare_by(a, b, orderby);
                match order {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                }
            });
        }

        let page = paginate(&matched, query.effective_page(), query.effective_per_page());
        debug!(matched = matched.len(), returned = page.len(), "Fixture product query");
        Ok(page)
    }

    async fn get_product(&self, id: u64) -> CommerceResult<RemoteProduct> {
        self.find_product(id).cloned()
    }

    async fn list_categories(&self) -> CommerceResult<Vec<Category>> {
        let mut categories: Vec<Category> = Vec::new();
        for term in self.products.iter().flat_map(|p| &p.categories) {
            match categories.iter_mut().find(|c| c.id == term.id) {
                Some(existing) => existing.count += 1,
                None => categories.push(Category {
                    id: term.id,
                    name: term.name.clone(),
                    slug: term.slug.clone(),
                    count: 1,
                    ..Default::default()
                }),
            }
        }
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn list_tags(&self) -> CommerceResult<Vec<Tag>> {
        let mut tags: Vec<Tag> = Vec::new();
        for term in self.products.iter().flat_map(|p| &p.tags) {
            match tags.iter_mut().find(|t| t.id == term.id) {
                Some(existing) => existing.count += 1,
                None => tags.push(Tag {
                    id: term.id,
                    name: term.name.clone(),
                    slug: term.slug.clone(),
                    count: 1,
                    ..Default::default()
                }),
            }
        }
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    async fn create_order(&self, order: &NewOrder) -> CommerceResult<RemoteOrder> {
        let mut line_items = Vec::with_capacity(order.line_items.len());
        let mut total = Money::zero();

        for (index, line) in order.line_items.iter().enumerate() {
            let product = self.find_product(line.product_id)?;
            let base = Money::parse_decimal(&product.price).map_err(|_| {
                CommerceError::InvalidPrice {
                    product_id: product.id.to_string(),
                    value: product.price.clone(),
                }
            })?;
            let license = match line.meta(LICENSE_META_KEY) {
                Some(raw) => raw.parse::<LicenseTier>()?,
                None => LicenseTier::Personal,
            };
            let line_total = license.unit_price(base) * i64::from(line.quantity);
            total += line_total;

            line_items.push(OrderLineItem {
                id: index as u64 + 1,
                name: product.name.clone(),
                product_id: product.id,
                quantity: line.quantity,
                subtotal: line_total.to_decimal_string(),
                total: line_total.to_decimal_string(),
                sku: product.sku.clone(),
                meta_data: line.meta_data.clone(),
                ..Default::default()
            });
        }

        let now = Utc::now().naive_utc();
        let mut book = self.orders.lock().await;
        let id = book.next_id;
        book.next_id += 1;

        let created = RemoteOrder {
            id,
            number: id.to_string(),
            order_key: format!("wc_order_{}", uuid::Uuid::new_v4().simple()),
            status: "processing".to_string(),
            currency: "USD".to_string(),
            date_created: Some(now),
            date_paid: order.set_paid.then_some(now),
            shipping_total: "0.00".to_string(),
            total: total.to_decimal_string(),
            customer_note: order.customer_note.clone(),
            billing: order.billing.clone(),
            shipping: order.shipping.clone(),
            payment_method: order.payment_method.clone(),
            payment_method_title: order.payment_method_title.clone(),
            line_items,
            set_paid: order.set_paid,
            ..Default::default()
        };
        book.created.push(created.clone());

        info!(order_id = id, total = %total, lines = created.line_items.len(), "Fixture order created");
        Ok(created)
    }

    async fn list_orders(&self, query: &OrderQuery) -> CommerceResult<Vec<RemoteOrder>> {
        let book = self.orders.lock().await;
        let all: Vec<RemoteOrder> = book
            .created
            .iter()
            .rev()
            .chain(book.fixtures.iter())
            .cloned()
            .collect();
        Ok(paginate(&all, query.effective_page(), query.effective_per_page()))
    }
}

// =============================================================================
// Filtering & Sorting
// =============================================================================

fn matches_query(product: &RemoteProduct, query: &ProductQuery) -> bool {
    if let Some(term) = query.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        let term = term.to_lowercase();
        let hit = [&product.name, &product.description, &product.short_description]
            .iter()
            .any(|field| field.to_lowercase().contains(&term));
        if !hit {
            return false;
        }
    }

    if let Some(category) = query.category.as_deref() {
        let hit = product
            .categories
            .iter()
            .any(|c| c.slug == category || c.name.eq_ignore_ascii_case(category));
        if !hit {
            return false;
        }
    }

    if let Some(tag) = query.tag.as_deref() {
        let hit = product
            .tags
            .iter()
            .any(|t| t.slug == tag || t.id.to_string() == tag);
        if !hit {
            return false;
        }
    }

    if query.featured.is_some_and(|f| f != product.featured) {
        return false;
    }
    if query.on_sale.is_some_and(|s| s != product.on_sale) {
        return false;
    }

    if query.min_price.is_some() || query.max_price.is_some() {
        let Ok(price) = Money::parse_decimal(&product.price) else {
            return false;
        };
        if query.min_price.is_some_and(|min| price < min) {
            return false;
        }
        if query.max_price.is_some_and(|max| price > max) {
            return false;
        }
    }

    true
}

fn compare_by(a: &RemoteProduct, b: &RemoteProduct, orderby: OrderBy) -> Ordering {
    match orderby {
        OrderBy::Title => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        OrderBy::Price => price_cents(a).cmp(&price_cents(b)),
        OrderBy::Date => a.date_created.cmp(&b.date_created),
        OrderBy::Popularity => a.total_sales.cmp(&b.total_sales),
        OrderBy::Rating => a.rating().total_cmp(&b.rating()),
        OrderBy::Id => a.id.cmp(&b.id),
    }
}

/// Unparsable prices sort first.
fn price_cents(product: &RemoteProduct) -> i64 {
    Money::parse_decimal(&product.price)
        .map(|m| m.cents())
        .unwrap_or(i64::MIN)
}

// =============================================================================
// Fixtures
// =============================================================================

struct FixtureFont {
    id: u64,
    name: &'static str,
    category: (u64, &'static str, &'static str),
    designer: &'static str,
    price: &'static str,
    regular_price: &'static str,
    featured: bool,
    formats: &'static [&'static str],
    tags: &'static [(u64, &'static str)],
    rating: &'static str,
    total_sales: u64,
    created: (i32, u32, u32),
    description: &'static str,
}

const FIXTURE_FONTS: &[FixtureFont] = &[
    FixtureFont {
        id: 62,
        name: "Montserrat Pro",
        category: (15, "Sans Serif", "sans-serif"),
        designer: "Juliet Martinez",
        price: "29.00",
        regular_price: "29.00",
        featured: true,
        formats: &["OTF", "TTF", "WOFF", "WOFF2"],
        tags: &[(20, "modern"), (21, "clean"), (22, "versatile")],
        rating: "4.80",
        total_sales: 15234,
        created: (2024, 1, 15),
        description: "A clean, modern sans-serif font perfect for both headlines and body text. Excellent readability across all sizes.",
    },
    FixtureFont {
        id: 45,
        name: "Elegant Script",
        category: (16, "Script", "script"),
        designer: "Sophia Chen",
        price: "45.00",
        regular_price: "45.00",
        featured: false,
        formats: &["OTF", "TTF", "WOFF"],
        tags: &[(23, "elegant"), (24, "calligraphy"), (25, "wedding")],
        rating: "4.90",
        total_sales: 8921,
        created: (2024, 2, 20),
        description: "Beautiful calligraphic script font with flowing lines and elegant curves. Perfect for wedding invitations and luxury branding.",
    },
    FixtureFont {
        id: 51,
        name: "Tech Sans",
        category: (17, "Display", "display"),
        designer: "Alex Thompson",
        price: "39.00",
        regular_price: "39.00",
        featured: false,
        formats: &["OTF", "TTF", "WOFF2"],
        tags: &[(26, "futuristic"), (27, "tech"), (28, "bold")],
        rating: "4.70",
        total_sales: 6543,
        created: (2024, 3, 10),
        description: "Bold, futuristic display font designed for technology brands and sci-fi projects. Strong geometric shapes.",
    },
    FixtureFont {
        id: 47,
        name: "Classic Serif",
        category: (18, "Serif", "serif"),
        designer: "Robert Williams",
        price: "35.00",
        regular_price: "35.00",
        featured: true,
        formats: &["OTF", "TTF", "WOFF", "WOFF2"],
        tags: &[(29, "classic"), (23, "elegant"), (30, "editorial")],
        rating: "4.60",
        total_sales: 9876,
        created: (2024, 1, 5),
        description: "Timeless serif font with traditional elegance. Perfect for editorial design and luxury publications.",
    },
    FixtureFont {
        id: 58,
        name: "Playful Rounded",
        category: (17, "Display", "display"),
        designer: "Emma Davis",
        price: "25.00",
        regular_price: "30.00",
        featured: false,
        formats: &["OTF", "TTF", "WOFF"],
        tags: &[(31, "playful"), (32, "rounded"), (33, "friendly")],
        rating: "4.50",
        total_sales: 5432,
        created: (2024, 4, 1),
        description: "Fun, rounded font perfect for children's products, food branding, and playful designs. Friendly approachable style.",
    },
    FixtureFont {
        id: 64,
        name: "Minimal Mono",
        category: (19, "Monospace", "monospace"),
        designer: "David Kim",
        price: "32.00",
        regular_price: "32.00",
        featured: false,
        formats: &["OTF", "TTF", "WOFF", "WOFF2"],
        tags: &[(34, "minimal"), (35, "coding"), (36, "technical")],
        rating: "4.40",
        total_sales: 7654,
        created: (2024, 2, 15),
        description: "Clean monospace font for coding, technical documentation, and minimalist design projects.",
    },
];

fn fixture_products() -> Vec<RemoteProduct> {
    FIXTURE_FONTS.iter().map(fixture_product).collect()
}

fn fixture_product(f: &FixtureFont) -> RemoteProduct {
    let slug = slugify(f.name);
    let on_sale = f.price != f.regular_price;
    let (cat_id, cat_name, cat_slug) = f.category;

    RemoteProduct {
        id: f.id,
        name: f.name.to_string(),
        permalink: format!("/product/{}/", slug),
        sku: format!("FONT-{}", f.id),
        slug,
        product_type: "simple".to_string(),
        status: "publish".to_string(),
        featured: f.featured,
        description: f.description.to_string(),
        short_description: f.description.split(". ").next().unwrap_or_default().to_string(),
        price: f.price.to_string(),
        regular_price: f.regular_price.to_string(),
        sale_price: if on_sale { f.price.to_string() } else { String::new() },
        on_sale,
        total_sales: f.total_sales,
        average_rating: f.rating.to_string(),
        rating_count: (f.total_sales / 100) as u32,
        date_created: date(f.created),
        stock_status: "instock".to_string(),
        categories: vec![TermRef {
            id: cat_id,
            name: cat_name.to_string(),
            slug: cat_slug.to_string(),
        }],
        tags: f
            .tags
            .iter()
            .map(|(id, name)| TermRef {
                id: *id,
                name: name.to_string(),
                slug: name.to_string(),
            })
            .collect(),
        attributes: vec![
            Attribute {
                id: 1,
                name: "Designer".to_string(),
                visible: true,
                options: vec![f.designer.to_string()],
                ..Default::default()
            },
            Attribute {
                id: 2,
                name: "Formats".to_string(),
                position: 1,
                visible: true,
                options: f.formats.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}

fn fixture_orders() -> Vec<RemoteOrder> {
    let jakarta = Address {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        address_1: "Jl. Sudirman No. 1".to_string(),
        city: "Jakarta".to_string(),
        state: "JK".to_string(),
        postcode: "10220".to_string(),
        country: "ID".to_string(),
        ..Default::default()
    };
    let bandung = Address {
        first_name: "Jane".to_string(),
        last_name: "Smith".to_string(),
        company: "Design Studio".to_string(),
        address_1: "Jl. Braga No. 12".to_string(),
        city: "Bandung".to_string(),
        state: "JB".to_string(),
        postcode: "40111".to_string(),
        country: "ID".to_string(),
        ..Default::default()
    };

    vec![
        RemoteOrder {
            id: 81,
            number: "81".to_string(),
            order_key: "wc_order_fixture81".to_string(),
            status: "completed".to_string(),
            currency: "USD".to_string(),
            date_created: timestamp((2024, 1, 15), (10, 30, 0)),
            date_completed: timestamp((2024, 1, 15), (12, 0, 0)),
            shipping_total: "0.00".to_string(),
            total: "29.00".to_string(),
            billing: Address {
                email: Some("john.doe@example.com".to_string()),
                phone: Some("+62 812 0000 0001".to_string()),
                ..jakarta.clone()
            },
            shipping: jakarta,
            payment_method: "cod".to_string(),
            payment_method_title: "Cash on Delivery".to_string(),
            line_items: vec![OrderLineItem {
                id: 1,
                name: "Montserrat Pro".to_string(),
                product_id: 62,
                quantity: 1,
                subtotal: "29.00".to_string(),
                total: "29.00".to_string(),
                sku: "FONT-62".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        },
        RemoteOrder {
            id: 80,
            number: "80".to_string(),
            order_key: "wc_order_fixture80".to_string(),
            status: "processing".to_string(),
            currency: "USD".to_string(),
            date_created: timestamp((2024, 1, 14), (15, 45, 0)),
            shipping_total: "5.00".to_string(),
            total: "40.00".to_string(),
            customer_note: "Please deliver after 5 PM".to_string(),
            billing: Address {
                email: Some("jane.smith@example.com".to_string()),
                phone: Some("+62 812 0000 0002".to_string()),
                ..bandung.clone()
            },
            shipping: bandung,
            payment_method: "cod".to_string(),
            payment_method_title: "Cash on Delivery".to_string(),
            line_items: vec![OrderLineItem {
                id: 1,
                name: "Classic Serif".to_string(),
                product_id: 47,
                quantity: 1,
                subtotal: "35.00".to_string(),
                total: "35.00".to_string(),
                sku: "FONT-47".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        },
    ]
}

fn slugify(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

fn date(ymd: (i32, u32, u32)) -> Option<NaiveDateTime> {
    timestamp(ymd, (0, 0, 0))
}

fn timestamp((y, m, d): (i32, u32, u32), (h, min, s): (u32, u32, u32)) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(y, m, d)?.and_hms_opt(h, min, s)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MetaData, NewLineItem};

    fn names(products: &[RemoteProduct]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    fn order_for(lines: Vec<NewLineItem>) -> NewOrder {
        NewOrder {
            payment_method: "cod".into(),
            payment_method_title: "Cash on Delivery".into(),
            set_paid: true,
            billing: Address::default(),
            shipping: Address::default(),
            line_items: lines,
            customer_note: String::new(),
        }
    }

    #[tokio::test]
    async fn test_default_listing_is_first_page_of_ten() {
        let mock = MockCommerce::new();
        let all = mock.list_products(&ProductQuery::new()).await.unwrap();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].name, "Montserrat Pro");
    }

    #[tokio::test]
    async fn test_search_covers_description() {
        let mock = MockCommerce::new();
        let found = mock
            .list_products(&ProductQuery::new().search("WEDDING"))
            .await
            .unwrap();
        assert_eq!(names(&found), vec!["Elegant Script"]);
    }

    #[tokio::test]
    async fn test_category_by_slug_or_name() {
        let mock = MockCommerce::new();
        let by_slug = mock
            .list_products(&ProductQuery::new().category("display"))
            .await
            .unwrap();
        let by_name = mock
            .list_products(&ProductQuery::new().category("DISPLAY"))
            .await
            .unwrap();
        assert_eq!(names(&by_slug), vec!["Tech Sans", "Playful Rounded"]);
        assert_eq!(by_slug, by_name);
    }

    #[tokio::test]
    async fn test_tag_by_id_or_slug() {
        let mock = MockCommerce::new();
        let by_slug = mock.list_products(&ProductQuery::new().tag("elegant")).await.unwrap();
        let by_id = mock.list_products(&ProductQuery::new().tag("23")).await.unwrap();
        assert_eq!(names(&by_slug), vec!["Elegant Script", "Classic Serif"]);
        assert_eq!(by_slug, by_id);
    }

    #[tokio::test]
    async fn test_flags_and_price_range() {
        let mock = MockCommerce::new();

        let featured = mock.list_products(&ProductQuery::new().featured(true)).await.unwrap();
        assert_eq!(names(&featured), vec!["Montserrat Pro", "Classic Serif"]);

        let sale = mock.list_products(&ProductQuery::new().on_sale(true)).await.unwrap();
        assert_eq!(names(&sale), vec!["Playful Rounded"]);

        let mid = mock
            .list_products(&ProductQuery::new().price_range(
                Some(Money::from_cents(3000)),
                Some(Money::from_cents(3900)),
            ))
            .await
            .unwrap();
        assert_eq!(names(&mid), vec!["Tech Sans", "Classic Serif", "Minimal Mono"]);
    }

    #[tokio::test]
    async fn test_sorting() {
        let mock = MockCommerce::new();

        let cheapest = mock
            .list_products(&ProductQuery::new().order_by(OrderBy::Price, SortOrder::Asc))
            .await
            .unwrap();
        assert_eq!(cheapest[0].name, "Playful Rounded");
        assert_eq!(cheapest[5].name, "Elegant Script");

        let popular = mock
            .list_products(&ProductQuery::new().order_by(OrderBy::Popularity, SortOrder::Desc))
            .await
            .unwrap();
        assert_eq!(popular[0].name, "Montserrat Pro");

        let rated = mock
            .list_products(&ProductQuery::new().order_by(OrderBy::Rating, SortOrder::Desc))
            .await
            .unwrap();
        assert_eq!(rated[0].name, "Elegant Script");

        let titles = mock
            .list_products(&ProductQuery::new().order_by(OrderBy::Title, SortOrder::Asc))
            .await
            .unwrap();
        assert_eq!(titles[0].name, "Classic Serif");

        let newest = mock
            .list_products(&ProductQuery::new().order_by(OrderBy::Date, SortOrder::Desc))
            .await
            .unwrap();
        assert_eq!(newest[0].name, "Playful Rounded");
    }

    #[tokio::test]
    async fn test_pagination() {
        let mock = MockCommerce::new();
        let query = ProductQuery::new().order_by(OrderBy::Id, SortOrder::Asc).per_page(4);

        let first = mock.list_products(&query.clone().page(1)).await.unwrap();
        let second = mock.list_products(&query.clone().page(2)).await.unwrap();
        let third = mock.list_products(&query.page(3)).await.unwrap();

        assert_eq!(first.len(), 4);
        assert_eq!(first[0].id, 45);
        assert_eq!(second.len(), 2);
        assert!(third.is_empty());
    }

    #[tokio::test]
    async fn test_get_product_and_not_found() {
        let mock = MockCommerce::new();
        assert_eq!(mock.get_product(58).await.unwrap().regular_price, "30.00");
        assert!(matches!(
            mock.get_product(999).await,
            Err(CommerceError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_terms_are_counted() {
        let mock = MockCommerce::new();

        let categories = mock.list_categories().await.unwrap();
        let display = categories.iter().find(|c| c.slug == "display").unwrap();
        assert_eq!(categories.len(), 5);
        assert_eq!(display.count, 2);

        let tags = mock.list_tags().await.unwrap();
        let elegant = tags.iter().find(|t| t.slug == "elegant").unwrap();
        assert_eq!(elegant.count, 2);
    }

    #[tokio::test]
    async fn test_create_order_prices_license_and_lists_it_first() {
        let mock = MockCommerce::new();
        let order = order_for(vec![
            NewLineItem {
                product_id: 62,
                quantity: 2,
                meta_data: vec![MetaData {
                    key: LICENSE_META_KEY.into(),
                    value: "commercial".into(),
                }],
            },
            NewLineItem {
                product_id: 45,
                quantity: 1,
                meta_data: vec![],
            },
        ]);

        let created = mock.create_order(&order).await.unwrap();
        // 29.00 × 2 × 2 + 45.00
        assert_eq!(created.total, "161.00");
        assert_eq!(created.id, 82);
        assert_eq!(created.status, "processing");
        assert!(created.order_key.starts_with("wc_order_"));
        assert!(created.date_paid.is_some());

        let second = mock.create_order(&order).await.unwrap();
        assert_eq!(second.id, 83);

        let orders = mock.list_orders(&OrderQuery::new()).await.unwrap();
        let ids: Vec<u64> = orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![83, 82, 81, 80]);
    }

    #[tokio::test]
    async fn test_create_order_rejects_unknown_product() {
        let mock = MockCommerce::new();
        let order = order_for(vec![NewLineItem {
            product_id: 7,
            quantity: 1,
            meta_data: vec![],
        }]);

        assert!(matches!(
            mock.create_order(&order).await,
            Err(CommerceError::NotFound { .. })
        ));
        assert_eq!(mock.list_orders(&OrderQuery::new()).await.unwrap().len(), 2);
    }
}
