//! Mapping from commerce products to storefront [`Font`]s.

use fontstore_core::validation::validate_font;
use fontstore_core::{Font, Money};
use tracing::warn;

use crate::error::{CommerceError, CommerceResult};
use crate::models::RemoteProduct;

/// Category used when a product has none.
pub const FALLBACK_CATEGORY: &str = "Font";

/// Designer used when a product carries no `Designer` attribute.
pub const FALLBACK_DESIGNER: &str = "Unknown";

/// Formats assumed when a product carries no `Formats` attribute.
pub const FALLBACK_FORMATS: [&str; 3] = ["OTF", "TTF", "WOFF"];

/// Builds the storefront view of a product.
///
/// The base price is `price`, falling back to `regular_price` when the shop
/// sends an empty current price. A product with neither is not sellable.
pub fn font_from_product(product: &RemoteProduct) -> CommerceResult<Font> {
    let id = product.id.to_string();

    let raw_price = [&product.price, &product.regular_price]
        .into_iter()
        .map(|p| p.trim())
        .find(|p| !p.is_empty())
        .unwrap_or_default();
    let price = Money::parse_decimal(raw_price).map_err(|_| CommerceError::InvalidPrice {
        product_id: id.clone(),
        value: raw_price.to_string(),
    })?;

    let category = product
        .categories
        .first()
        .map(|c| c.name.as_str())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(FALLBACK_CATEGORY);

    let designer = product
        .attribute_options("Designer")
        .and_then(|options| options.first())
        .map(String::as_str)
        .unwrap_or(FALLBACK_DESIGNER);

    let font = Font::new(id.clone(), product.name.clone(), category, price).with_designer(designer);
    let font = match product.attribute_options("Formats") {
        Some(formats) if !formats.is_empty() => font.with_formats(formats),
        _ => font.with_formats(FALLBACK_FORMATS),
    };

    validate_font(&font).map_err(|source| CommerceError::InvalidProduct {
        product_id: id,
        source,
    })?;

    Ok(font)
}

/// Converts every sellable product, skipping (and logging) the rest.
pub fn fonts_from_products(products: &[RemoteProduct]) -> Vec<Font> {
    products
        .iter()
        .filter_map(|product| match font_from_product(product) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!(product_id = product.id, error = %e, "Skipping unsellable product");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockCommerce;
    use crate::models::{Attribute, TermRef};

    fn product(price: &str, regular: &str) -> RemoteProduct {
        RemoteProduct {
            id: 9,
            name: "Draft Grotesk".into(),
            price: price.into(),
            regular_price: regular.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_fixture_product_maps_every_field() {
        let mock = MockCommerce::new();
        let font = font_from_product(&mock.products()[0]).unwrap();

        assert_eq!(font.id, "62");
        assert_eq!(font.name, "Montserrat Pro");
        assert_eq!(font.category, "Sans Serif");
        assert_eq!(font.designer, "Juliet Martinez");
        assert_eq!(font.price, Money::from_cents(2900));
        assert_eq!(font.file_formats.len(), 4);
        assert!(font.file_formats.contains("WOFF2"));
    }

    #[test]
    fn test_fallbacks() {
        let font = font_from_product(&product("", "19.50")).unwrap();

        assert_eq!(font.price, Money::from_cents(1950));
        assert_eq!(font.category, FALLBACK_CATEGORY);
        assert_eq!(font.designer, FALLBACK_DESIGNER);
        assert_eq!(
            font.file_formats.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["OTF", "TTF", "WOFF"]
        );
    }

    #[test]
    fn test_attributes_override_fallbacks() {
        let mut p = product("10", "");
        p.categories = vec![TermRef {
            id: 1,
            name: "Serif".into(),
            slug: "serif".into(),
        }];
        p.attributes = vec![Attribute {
            name: "formats".into(),
            options: vec!["ttf".into()],
            ..Default::default()
        }];

        let font = font_from_product(&p).unwrap();
        assert_eq!(font.category, "Serif");
        assert_eq!(font.file_formats.iter().collect::<Vec<_>>(), vec!["TTF"]);
    }

    #[test]
    fn test_missing_or_bad_price_is_rejected() {
        assert!(matches!(
            font_from_product(&product("", "")),
            Err(CommerceError::InvalidPrice { .. })
        ));
        assert!(matches!(
            font_from_product(&product("free", "")),
            Err(CommerceError::InvalidPrice { ref value, .. }) if value == "free"
        ));
    }

    #[test]
    fn test_unsellable_products_are_skipped() {
        let mut nameless = product("12.00", "");
        nameless.name = String::new();

        let fonts = fonts_from_products(&[product("5.00", ""), nameless, product("", "")]);
        assert_eq!(fonts.len(), 1);
    }
}
