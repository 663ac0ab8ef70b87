//! # Error Types
//!
//! Domain-specific error types for scorecard-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  scorecard-core errors (this file)                                     │
//! │  ├── CoreError        - Why an analysis run was refused or aborted     │
//! │  └── ValidationError  - Which field of the input was wrong and how     │
//! │                                                                         │
//! │  scorecard-cli errors (separate crate)                                 │
//! │  └── CliError         - File, parse and configuration failures         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → exit status            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## When Each Error Occurs
//! Validation errors are raised before any accumulation begins. The only
//! error that can occur mid-run is [`CoreError::ProductNotFound`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by the analysis pipeline.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The dataset bundle is absent, or one of its three lists is missing,
    /// not list-shaped, or empty.
    #[error("Invalid input data: {0}")]
    InvalidData(ValidationError),

    /// The options bundle is absent or one of the two policies is missing.
    #[error("Invalid analysis options: {0}")]
    InvalidConfig(ValidationError),

    /// A purchase line references a SKU that is not in the product list.
    ///
    /// ## When This Occurs
    /// ```text
    /// Receipt (seller_1)
    ///   item: SKU_999 ──► product index lookup ──► miss
    ///                                                │
    ///                                                ▼
    ///            ProductNotFound { sku: "SKU_999", seller_id: "seller_1" }
    /// ```
    #[error("Product not found: {sku} (sold by {seller_id})")]
    ProductNotFound { sku: String, seller_id: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level input problems.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required value is absent.
    #[error("{field} is required")]
    Required { field: String },

    /// A list is present but has no elements.
    #[error("{field} must not be empty")]
    Empty { field: String },

    /// A value that must be a list is some other JSON type.
    #[error("{field} must be a list")]
    NotAList { field: String },

    /// A value has the right outer shape but its contents don't deserialize.
    #[error("{field} is malformed: {reason}")]
    Malformed { field: String, reason: String },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::Empty { field }
            | ValidationError::NotAList { field }
            | ValidationError::Malformed { field, .. } => field,
        }
    }
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
    fn test_error_messages() {
        let err = CoreError::ProductNotFound {
            sku: "SKU_999".to_string(),
            seller_id: "seller_1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Product not found: SKU_999 (sold by seller_1)"
        );

        let err = CoreError::InvalidData(ValidationError::Empty {
            field: "products".to_string(),
        });
        assert_eq!(err.to_string(), "Invalid input data: products must not be empty");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "options".to_string(),
        };
        assert_eq!(err.to_string(), "options is required");

        let err = ValidationError::NotAList {
            field: "sellers".to_string(),
        };
        assert_eq!(err.to_string(), "sellers must be a list");
    }

    #[test]
    fn test_validation_error_field() {
        let err = ValidationError::Malformed {
            field: "purchase_records".to_string(),
            reason: "missing field `items`".to_string(),
        };
        assert_eq!(err.field(), "purchase_records");
    }
}
