//! # Command Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command handler: CliResult<T>                                          │
//! │         │                                                               │
//! │         ├── CommerceError::NotFound ──────────► NOT_FOUND               │
//! │         ├── CommerceError::MissingFields ─────► VALIDATION_ERROR        │
//! │         ├── CommerceError::Http / Api ────────► COMMERCE_ERROR          │
//! │         ├── DbError ──────────────────────────► DATABASE_ERROR          │
//! │         └── ValidationError ──────────────────► VALIDATION_ERROR        │
//! │                                                                         │
//! │  main() prints "[CODE] message" (or the JSON form with --json)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use fontstore_commerce::CommerceError;
use fontstore_core::ValidationError;
use fontstore_db::DbError;
use serde::Serialize;

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Error returned from a command.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 999"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or order doesn't exist
    NotFound,

    /// Input rejected before anything was sent
    ValidationError,

    /// Checkout attempted on an empty cart
    CartError,

    /// The commerce backend failed or answered unexpectedly
    CommerceError,

    /// The cart database failed
    DatabaseError,

    /// Configuration is incomplete
    ConfigError,
}

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::ValidationError, message)
    }
}

impl From<CommerceError> for CliError {
    fn from(err: CommerceError) -> Self {
        let code = match &err {
            CommerceError::NotFound { .. } => ErrorCode::NotFound,
            CommerceError::EmptyCart => ErrorCode::CartError,
            CommerceError::Config(_) => ErrorCode::ConfigError,
            CommerceError::MissingFields(_)
            | CommerceError::Validation(_)
            | CommerceError::InvalidProductId(_)
            | CommerceError::InvalidProduct { .. } => ErrorCode::ValidationError,
            CommerceError::Http(_)
            | CommerceError::Timeout(_)
            | CommerceError::Api { .. }
            | CommerceError::InvalidResponse(_)
            | CommerceError::InvalidPrice { .. } => {
                tracing::error!(error = %err, retryable = err.is_retryable(), "Commerce request failed");
                ErrorCode::CommerceError
            }
        };
        CliError::new(code, err.to_string())
    }
}

impl From<DbError> for CliError {
    fn from(err: DbError) -> Self {
        tracing::error!(error = %err, "Database operation failed");
        CliError::new(ErrorCode::DatabaseError, err.to_string())
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::validation(err.to_string())
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commerce_error_codes() {
        assert_eq!(
            CliError::from(CommerceError::not_found("Product", 999)).code,
            ErrorCode::NotFound
        );
        assert_eq!(CliError::from(CommerceError::EmptyCart).code, ErrorCode::CartError);
        assert_eq!(
            CliError::from(CommerceError::MissingFields(vec!["email".into()])).code,
            ErrorCode::ValidationError
        );
        assert_eq!(
            CliError::from(CommerceError::Api { status: 502, body: String::new() }).code,
            ErrorCode::CommerceError
        );
    }

    #[test]
    fn test_display_and_json() {
        let err = CliError::from(CommerceError::not_found("Product", 999));
        assert_eq!(err.to_string(), "[NotFound] Product not found: 999");

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 999");
    }
}
