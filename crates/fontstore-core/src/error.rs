//! # Error Types
//!
//! Domain-specific error types for fontstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fontstore-core errors (this file)                                     │
//! │  ├── CoreError        - Umbrella for cart restore failures             │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  ├── StorageError     - Durable slot read/write failures               │
//! │  └── SnapshotError    - Persisted cart decode failures (snapshot.rs)   │
//! │                                                                         │
//! │  fontstore-db errors (separate crate)                                  │
//! │  └── DbError          - SQLite failures, mapped to StorageError        │
//! │                                                                         │
//! │  Flow: SnapshotError/StorageError → CoreError → warn! + empty cart     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these reach the shopper: the cart store recovers every storage
//! and decode failure locally.

use thiserror::Error;

use crate::snapshot::SnapshotError;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The durable storage slot could not be read or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The persisted cart could not be decoded.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// The cart store itself never validates; callers run these checks first.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a price that is not a decimal number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Creates a `Required` error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an `InvalidFormat` error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Storage Error
// =============================================================================

/// Failures of the durable key-value slot behind the cart.
///
/// ## When This Occurs
/// - The backing database file is locked, missing or unwritable
/// - The in-memory slot map was poisoned by a panicking writer
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage backend could not be reached at all.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The backend was reached but the read or write failed.
    #[error("Storage backend failed: {0}")]
    Backend(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("product id");
        assert_eq!(err.to_string(), "product id is required");

        let err = ValidationError::invalid_format("price", "not a number");
        assert_eq!(err.to_string(), "price has invalid format: not a number");
    }

    #[test]
    fn test_storage_converts_to_core_error() {
        let err: CoreError = StorageError::Backend("disk full".to_string()).into();
        assert!(matches!(err, CoreError::Storage(_)));
        assert_eq!(
            err.to_string(),
            "Storage error: Storage backend failed: disk full"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("name").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
