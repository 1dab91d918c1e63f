//! # Validation Module
//!
//! Input checks for the storefront surfaces.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI argument parsing (clap)                                  │
//! │  └── Types only: integers are integers, licenses are licenses          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Product ids, names, prices coming back from the catalog           │
//! │  ├── Search text and pagination                                        │
//! │  └── Checkout contact fields                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: CartStore                                                    │
//! │  └── Trusts its input; only keeps the cart invariants                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fontstore_core::validation::{validate_font, validate_page};
//! use fontstore_core::{Font, Money};
//!
//! let font = Font::new("62", "Montserrat Pro", "Sans Serif", Money::from_cents(2900));
//! assert!(validate_font(&font).is_ok());
//! assert!(validate_page(0, 10).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Font;
use crate::MAX_PRICE_CENTS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product id accepted from the catalog.
pub const MAX_PRODUCT_ID_LEN: usize = 64;

/// Longest font name accepted.
pub const MAX_FONT_NAME_LEN: usize = 200;

/// Longest free-text search query.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

/// Largest page size the commerce API serves.
pub const MAX_PER_PAGE: u32 = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a catalog product id.
///
/// ## Rules
/// - Must not be empty or blank
/// - At most 64 characters
/// - No whitespace or control characters
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::required("product id"));
    }

    if id.len() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "product id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::invalid_format(
            "product id",
            "must not contain whitespace",
        ));
    }

    Ok(())
}

/// Validates a font display name.
///
/// ## Example
/// ```rust
/// use fontstore_core::validation::validate_font_name;
///
/// assert!(validate_font_name("Elegant Script").is_ok());
/// assert!(validate_font_name("  ").is_err());
/// ```
pub fn validate_font_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    if name.chars().count() > MAX_FONT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_FONT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (no filter)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

/// Validates a checkout email address.
///
/// Only a shape check: one `@` with something on both sides and a dot in
/// the domain. Deliverability is the shop's problem.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::required("email"));
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if !valid {
        return Err(ValidationError::invalid_format(
            "email",
            "must look like name@example.com",
        ));
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a base price.
///
/// Zero is allowed (free fonts exist). Negative prices and prices above
/// [`MAX_PRICE_CENTS`] are not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates pagination parameters.
///
/// ## Rules
/// - `page` starts at 1
/// - `per_page` is between 1 and 100
pub fn validate_page(page: u32, per_page: u32) -> ValidationResult<()> {
    if page == 0 {
        return Err(ValidationError::OutOfRange {
            field: "page".to_string(),
            min: 1,
            max: i64::from(u32::MAX),
        });
    }

    if per_page == 0 || per_page > MAX_PER_PAGE {
        return Err(ValidationError::OutOfRange {
            field: "per_page".to_string(),
            min: 1,
            max: i64::from(MAX_PER_PAGE),
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates a catalog font before it goes into the cart.
pub fn validate_font(font: &Font) -> ValidationResult<()> {
    validate_product_id(&font.id)?;
    validate_font_name(&font.name)?;
    validate_price(font.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("62").is_ok());
        assert!(validate_product_id("wc-font_12").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id("6 2").is_err());
        assert!(validate_product_id(&"9".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_font_name() {
        assert!(validate_font_name("Montserrat Pro").is_ok());
        assert!(validate_font_name("").is_err());
        assert!(validate_font_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_search_query_trims() {
        assert_eq!(validate_search_query("  serif ").unwrap(), "serif");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email(" ada@mail.example.org ").is_ok());

        assert!(matches!(
            validate_email(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(validate_email("ada").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ada@localhost").is_err());
        assert!(validate_email("ada@@example.com").is_err());
        assert!(validate_email("ada@example.").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(2900)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());

        assert!(validate_price(Money::from_cents(MAX_PRICE_CENTS)).is_ok());
        let too_high = Money::parse_decimal("5000000").unwrap();
        assert!(matches!(
            validate_price(too_high),
            Err(ValidationError::OutOfRange { max: MAX_PRICE_CENTS, .. })
        ));
    }

    #[test]
    fn test_validate_page() {
        assert!(validate_page(1, 10).is_ok());
        assert!(validate_page(3, 100).is_ok());

        assert!(validate_page(0, 10).is_err());
        assert!(validate_page(1, 0).is_err());
        assert!(validate_page(1, 101).is_err());
    }

    #[test]
    fn test_validate_font() {
        let font = Font::new("62", "Montserrat Pro", "Sans Serif", Money::from_cents(2900));
        assert!(validate_font(&font).is_ok());

        let free = Font::new("7", "Free Grotesk", "Sans Serif", Money::zero());
        assert!(validate_font(&free).is_ok());

        let bad = Font::new("", "Nameless", "Serif", Money::from_cents(100));
        assert!(validate_font(&bad).is_err());

        let negative = Font::new("8", "Odd", "Serif", Money::from_cents(-5));
        assert!(validate_font(&negative).is_err());
    }
}
