//! # Commerce Error Types
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Commerce Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Response            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Config         │  │  Http           │  │  Api { status, body }   │ │
//! │  │                 │  │  Timeout        │  │  NotFound               │ │
//! │  │                 │  │                 │  │  InvalidResponse        │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────────────────────────────────┐  │
//! │  │    Mapping      │  │     Checkout                                │  │
//! │  │                 │  │                                             │  │
//! │  │  InvalidPrice   │  │  MissingFields   EmptyCart                  │  │
//! │  │  InvalidProduct │  │  Validation      InvalidProductId           │  │
//! │  └─────────────────┘  └─────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use fontstore_core::ValidationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for commerce operations.
pub type CommerceResult<T> = Result<T, CommerceError>;

/// Everything that can go wrong talking to the shop backend.
#[derive(Debug, Error)]
pub enum CommerceError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid or incomplete commerce configuration.
    #[error("Commerce configuration error: {0}")]
    Config(#[from] ConfigError),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request never produced an HTTP response.
    #[error("Request failed: {0}")]
    Http(String),

    /// The backend did not answer in time.
    #[error("Request timed out: {0}")]
    Timeout(String),

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// Non-2xx response from the backend.
    #[error("Commerce API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The requested entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The backend answered 2xx with a body we could not decode.
    #[error("Invalid response from commerce API: {0}")]
    InvalidResponse(String),

    // =========================================================================
    // Mapping Errors
    // =========================================================================
    /// A product price string that is not a decimal amount.
    #[error("Product {product_id} has an invalid price: '{value}'")]
    InvalidPrice { product_id: String, value: String },

    /// A catalog product that fails the storefront's own checks.
    #[error("Product {product_id} is not sellable: {source}")]
    InvalidProduct {
        product_id: String,
        #[source]
        source: ValidationError,
    },

    // =========================================================================
    // Checkout Errors
    // =========================================================================
    /// Required checkout fields left empty.
    #[error("Missing required checkout fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Checkout attempted with nothing in the cart.
    #[error("Cannot place an order for an empty cart")]
    EmptyCart,

    /// A cart line whose product id is not a positive integer.
    #[error("Product id '{0}' is not a valid commerce product id")]
    InvalidProductId(String),

    /// Input that failed a validation rule.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CommerceError {
    /// Creates a NotFound error.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        CommerceError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Returns true if repeating the same request later might succeed.
    ///
    /// ## Retryable Errors
    /// - Transport failures and timeouts
    /// - 5xx and 429 responses
    pub fn is_retryable(&self) -> bool {
        match self {
            CommerceError::Http(_) | CommerceError::Timeout(_) => true,
            CommerceError::Api { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Returns true if the shopper can fix this by changing their input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CommerceError::MissingFields(_)
                | CommerceError::EmptyCart
                | CommerceError::Validation(_)
                | CommerceError::InvalidProductId(_)
        )
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for CommerceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CommerceError::Timeout(err.to_string())
        } else if err.is_decode() {
            CommerceError::InvalidResponse(err.to_string())
        } else {
            CommerceError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(err: serde_json::Error) -> Self {
        CommerceError::InvalidResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(CommerceError::Http("connection refused".into()).is_retryable());
        assert!(CommerceError::Timeout("30s".into()).is_retryable());
        assert!(CommerceError::Api { status: 503, body: String::new() }.is_retryable());
        assert!(CommerceError::Api { status: 429, body: String::new() }.is_retryable());

        assert!(!CommerceError::Api { status: 401, body: String::new() }.is_retryable());
        assert!(!CommerceError::EmptyCart.is_retryable());
        assert!(!CommerceError::not_found("Product", 7).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = CommerceError::MissingFields(vec!["email".into(), "city".into()]);
        assert_eq!(err.to_string(), "Missing required checkout fields: email, city");

        let err = CommerceError::not_found("Product", 999);
        assert_eq!(err.to_string(), "Product not found: 999");

        let err = CommerceError::Api {
            status: 401,
            body: "woocommerce_rest_cannot_view".into(),
        };
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_user_errors() {
        assert!(CommerceError::EmptyCart.is_user_error());
        assert!(CommerceError::InvalidProductId("abc".into()).is_user_error());
        assert!(!CommerceError::Http("dns".into()).is_user_error());
    }
}
