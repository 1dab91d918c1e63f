//! # Catalog Commands
//!
//! Listing, detail, categories and tags.
//!
//! ## Product Detail
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Montserrat Pro (#62)                                                   │
//! │  Sans Serif · by Juliet Martinez · OTF TTF WOFF WOFF2                  │
//! │                                                                         │
//! │  Personal      $29.00                                                   │
//! │  Commercial    $58.00                                                   │
//! │  Extended     $145.00                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use fontstore_commerce::models::{Category, Tag};
use fontstore_commerce::{fonts_from_products, font_from_product, CommerceApi, ProductQuery};
use fontstore_core::validation::{validate_page, validate_search_query};
use fontstore_core::{Font, LicenseTier, Money};
use serde::Serialize;
use std::fmt::Write as _;
use tokio::runtime::Runtime;
use tracing::debug;

use super::{truncate, Render};
use crate::cli::{ListArgs, PageArgs};
use crate::config::StorefrontConfig;
use crate::error::{CliError, CliResult};

// =============================================================================
// Responses
// =============================================================================

/// A page of fonts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub fonts: Vec<Font>,
    pub page: u32,
    pub per_page: u32,
}

/// One font with everything the detail page shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub font: Font,
    pub description: String,
    pub tags: Vec<String>,
    pub on_sale: bool,
    /// Pre-sale price, when on sale.
    pub regular_price: Option<Money>,
    pub rating: f64,
    pub prices: Vec<LicensePrice>,
}

/// Unit price of a font under one license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LicensePrice {
    pub license: LicenseTier,
    pub price: Money,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<Tag>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Builds the product query from command-line filters.
pub fn product_query(args: &ListArgs) -> CliResult<ProductQuery> {
    let mut query = ProductQuery::new();

    let PageArgs { page, per_page } = args.paging;
    validate_page(page.unwrap_or(1), per_page.unwrap_or(10))?;
    query.page = page;
    query.per_page = per_page;

    if let Some(search) = &args.search {
        let search = validate_search_query(search)?;
        if !search.is_empty() {
            query.search = Some(search);
        }
    }
    query.category = args.category.clone();
    query.tag = args.tag.clone();
    query.featured = args.featured.then_some(true);
    query.on_sale = args.on_sale.then_some(true);
    query.min_price = parse_price("min-price", args.min_price.as_deref())?;
    query.max_price = parse_price("max-price", args.max_price.as_deref())?;
    query.orderby = args.orderby;
    query.order = args.order;

    Ok(query)
}

fn parse_price(flag: &str, raw: Option<&str>) -> CliResult<Option<Money>> {
    match raw {
        None => Ok(None),
        Some(raw) => Money::parse_decimal(raw)
            .map(Some)
            .map_err(|e| CliError::validation(format!("--{}: {}", flag, e))),
    }
}

/// Lists fonts matching the filters.
pub fn list<A: CommerceApi + ?Sized>(
    rt: &Runtime,
    api: &A,
    args: &ListArgs,
) -> CliResult<CatalogResponse> {
    let query = product_query(args)?;
    debug!(query = %query.to_query_string(), "catalog list");

    let products = rt.block_on(api.list_products(&query))?;

    Ok(CatalogResponse {
        fonts: fonts_from_products(&products),
        page: query.effective_page(),
        per_page: query.effective_per_page(),
    })
}

/// Shows one font with its price under every license.
pub fn show<A: CommerceApi + ?Sized>(rt: &Runtime, api: &A, id: u64) -> CliResult<ProductResponse> {
    let product = rt.block_on(api.get_product(id))?;
    let font = font_from_product(&product)?;

    let regular_price = if product.on_sale {
        Money::parse_decimal(&product.regular_price).ok()
    } else {
        None
    };

    Ok(ProductResponse {
        prices: LicenseTier::ALL
            .iter()
            .map(|license| LicensePrice {
                license: *license,
                price: license.unit_price(font.price),
            })
            .collect(),
        description: product.description.clone(),
        tags: product.tags.iter().map(|t| t.name.clone()).collect(),
        on_sale: product.on_sale,
        regular_price,
        rating: product.rating(),
        font,
    })
}

pub fn categories<A: CommerceApi + ?Sized>(rt: &Runtime, api: &A) -> CliResult<CategoriesResponse> {
    Ok(CategoriesResponse {
        categories: rt.block_on(api.list_categories())?,
    })
}

pub fn tags<A: CommerceApi + ?Sized>(rt: &Runtime, api: &A) -> CliResult<TagsResponse> {
    Ok(TagsResponse {
        tags: rt.block_on(api.list_tags())?,
    })
}

// =============================================================================
// Rendering
// =============================================================================

impl Render for CatalogResponse {
    fn render(&self, config: &StorefrontConfig) -> String {
        if self.fonts.is_empty() {
            return format!("No fonts found (page {}).\n", self.page);
        }

        let mut out = String::new();
        let _ = writeln!(out, "{:>6}  {:<24} {:<12} {:<18} {:>10}", "ID", "NAME", "CATEGORY", "DESIGNER", "FROM");
        for font in &self.fonts {
            let _ = writeln!(
                out,
                "{:>6}  {:<24} {:<12} {:<18} {:>10}",
                font.id,
                truncate(&font.name, 24),
                truncate(&font.category, 12),
                truncate(&font.designer, 18),
                config.format_currency(font.price)
            );
        }
        let _ = writeln!(out, "\nPage {} · {} per page", self.page, self.per_page);
        out
    }
}

impl Render for ProductResponse {
    fn render(&self, config: &StorefrontConfig) -> String {
        let font = &self.font;
        let mut out = String::new();

        let _ = writeln!(out, "{} (#{})", font.name, font.id);
        let formats: Vec<&str> = font.file_formats.iter().map(String::as_str).collect();
        let _ = writeln!(
            out,
            "{} · by {} · {}",
            font.category,
            font.designer,
            formats.join(" ")
        );
        if self.rating > 0.0 {
            let _ = writeln!(out, "Rated {:.1}", self.rating);
        }
        if !self.tags.is_empty() {
            let _ = writeln!(out, "Tags: {}", self.tags.join(", "));
        }
        if !self.description.is_empty() {
            let _ = writeln!(out, "\n{}", self.description);
        }

        out.push('\n');
        for LicensePrice { license, price } in &self.prices {
            let label = match license {
                LicenseTier::Personal => "Personal",
                LicenseTier::Commercial => "Commercial",
                LicenseTier::Extended => "Extended",
            };
            let _ = writeln!(out, "{:<12} {:>10}", label, config.format_currency(*price));
        }
        if let Some(regular) = self.regular_price {
            let _ = writeln!(out, "On sale (was {})", config.format_currency(regular));
        }
        out
    }
}

impl Render for CategoriesResponse {
    fn render(&self, _config: &StorefrontConfig) -> String {
        let mut out = String::new();
        for c in &self.categories {
            let _ = writeln!(out, "{:<16} {:<16} {:>4}", c.name, c.slug, c.count);
        }
        out
    }
}

impl Render for TagsResponse {
    fn render(&self, _config: &StorefrontConfig) -> String {
        let mut out = String::new();
        for t in &self.tags {
            let _ = writeln!(out, "{:>4}  {:<16} {:>4}", t.id, t.slug, t.count);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontstore_commerce::{MockCommerce, OrderBy, SortOrder};
    use std::path::PathBuf;

    fn config() -> StorefrontConfig {
        StorefrontConfig {
            db_path: PathBuf::from("unused.db"),
            currency_symbol: "$".into(),
        }
    }

    #[test]
    fn test_product_query_from_args() {
        let args = ListArgs {
            search: Some("  sans ".into()),
            featured: true,
            min_price: Some("25".into()),
            orderby: Some(OrderBy::Price),
            order: Some(SortOrder::Desc),
            paging: PageArgs {
                page: Some(2),
                per_page: None,
            },
            ..Default::default()
        };

        let query = product_query(&args).unwrap();
        assert_eq!(
            query.to_query_string(),
            "page=2&search=sans&featured=true&min_price=25.00&orderby=price&order=desc"
        );
    }

    #[test]
    fn test_product_query_rejects_bad_input() {
        let bad_price = ListArgs {
            max_price: Some("cheap".into()),
            ..Default::default()
        };
        assert!(product_query(&bad_price).is_err());

        let bad_page = ListArgs {
            paging: PageArgs {
                page: Some(1),
                per_page: Some(500),
            },
            ..Default::default()
        };
        assert!(product_query(&bad_page).is_err());
    }

    #[test]
    fn test_list_and_render() {
        let rt = Runtime::new().unwrap();
        let api = MockCommerce::new();
        let args = ListArgs {
            category: Some("display".into()),
            ..Default::default()
        };

        let response = list(&rt, &api, &args).unwrap();
        assert_eq!(response.fonts.len(), 2);

        let text = response.render(&config());
        assert!(text.contains("Tech Sans"));
        assert!(text.contains("$25.00"));
    }

    #[test]
    fn test_show_lists_license_prices() {
        let rt = Runtime::new().unwrap();
        let api = MockCommerce::new();

        let response = show(&rt, &api, 58).unwrap();
        let prices: Vec<i64> = response.prices.iter().map(|p| p.price.cents()).collect();
        assert_eq!(prices, vec![2500, 5000, 12500]);
        assert_eq!(response.regular_price, Some(Money::from_cents(3000)));

        let text = response.render(&config());
        assert!(text.contains("Extended"));
        assert!(text.contains("$125.00"));
        assert!(text.contains("was $30.00"));
    }

    #[test]
    fn test_show_unknown_product() {
        let rt = Runtime::new().unwrap();
        let err = show(&rt, &MockCommerce::new(), 404).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
    }

    #[test]
    fn test_terms() {
        let rt = Runtime::new().unwrap();
        let api = MockCommerce::new();

        assert_eq!(categories(&rt, &api).unwrap().categories.len(), 5);
        let tags = tags(&rt, &api).unwrap();
        assert!(tags.render(&config()).contains("calligraphy"));
    }
}
