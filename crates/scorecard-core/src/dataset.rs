//! # Dataset Validation
//!
//! Precondition checks run before any other stage of the pipeline.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shape (from_json)                                            │
//! │  ├── bundle present and an object                                      │
//! │  ├── sellers / products / purchase_records present and lists           │
//! │  └── every element deserializes into its typed form                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Content (validate_dataset)                                   │
//! │  ├── bundle present                                                    │
//! │  └── none of the three lists is empty                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Pipeline: index → accumulate → rank → report                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure here is a [`CoreError::InvalidData`].
//!
//! ## Usage
//! ```rust
//! use scorecard_core::SalesDataset;
//!
//! let err = SalesDataset::from_json_str(r#"{ "sellers": [], "products": [], "purchase_records": [] }"#)
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "Invalid input data: sellers must not be empty");
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::SalesDataset;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const DATA_FIELD: &str = "data";
const SELLERS_FIELD: &str = "sellers";
const PRODUCTS_FIELD: &str = "products";
const RECORDS_FIELD: &str = "purchase_records";

// =============================================================================
// Content Validation
// =============================================================================

/// Checks that the bundle is present and all three lists are non-empty.
///
/// ## Example
/// ```rust
/// use scorecard_core::dataset::validate_dataset;
/// use scorecard_core::CoreError;
///
/// assert!(matches!(validate_dataset(None), Err(CoreError::InvalidData(_))));
/// ```
pub fn validate_dataset(data: Option<&SalesDataset>) -> CoreResult<&SalesDataset> {
    let data = data.ok_or_else(|| {
        CoreError::InvalidData(ValidationError::Required {
            field: DATA_FIELD.to_string(),
        })
    })?;

    require_non_empty(SELLERS_FIELD, data.sellers.len()).map_err(CoreError::InvalidData)?;
    require_non_empty(PRODUCTS_FIELD, data.products.len()).map_err(CoreError::InvalidData)?;
    require_non_empty(RECORDS_FIELD, data.purchase_records.len())
        .map_err(CoreError::InvalidData)?;

    Ok(data)
}

fn require_non_empty(field: &str, len: usize) -> ValidationResult<()> {
    if len == 0 {
        return Err(ValidationError::Empty {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Shape Validation
// =============================================================================

impl SalesDataset {
    /// Builds a dataset from loosely typed JSON, reporting shape problems
    /// as [`CoreError::InvalidData`] naming the offending field.
    ///
    /// ## Example
    /// ```rust
    /// use scorecard_core::{CoreError, SalesDataset, ValidationError};
    /// use serde_json::json;
    ///
    /// let value = json!({ "sellers": {}, "products": [], "purchase_records": [] });
    /// match SalesDataset::from_json(&value) {
    ///     Err(CoreError::InvalidData(ValidationError::NotAList { field })) => {
    ///         assert_eq!(field, "sellers");
    ///     }
    ///     other => panic!("unexpected: {other:?}"),
    /// }
    /// ```
    pub fn from_json(value: &Value) -> CoreResult<SalesDataset> {
        let bundle = match value {
            Value::Object(bundle) => bundle,
            Value::Null => {
                return Err(CoreError::InvalidData(ValidationError::Required {
                    field: DATA_FIELD.to_string(),
                }))
            }
            _ => {
                return Err(CoreError::InvalidData(ValidationError::Malformed {
                    field: DATA_FIELD.to_string(),
                    reason: "must be an object".to_string(),
                }))
            }
        };

        let dataset = SalesDataset {
            sellers: parse_list(bundle, SELLERS_FIELD).map_err(CoreError::InvalidData)?,
            products: parse_list(bundle, PRODUCTS_FIELD).map_err(CoreError::InvalidData)?,
            purchase_records: parse_list(bundle, RECORDS_FIELD)
                .map_err(CoreError::InvalidData)?,
        };

        Ok(dataset)
    }

    /// Parses JSON text, then applies [`SalesDataset::from_json`].
    pub fn from_json_str(json: &str) -> CoreResult<SalesDataset> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            CoreError::InvalidData(ValidationError::Malformed {
                field: DATA_FIELD.to_string(),
                reason: e.to_string(),
            })
        })?;
        Self::from_json(&value)
    }
}

/// Extracts `bundle[field]` as a non-empty list of `T`.
fn parse_list<T: DeserializeOwned>(
    bundle: &Map<String, Value>,
    field: &str,
) -> ValidationResult<Vec<T>> {
    let items = match bundle.get(field) {
        None | Some(Value::Null) => {
            return Err(ValidationError::Required {
                field: field.to_string(),
            })
        }
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(ValidationError::NotAList {
                field: field.to_string(),
            })
        }
    };

    require_non_empty(field, items.len())?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            T::deserialize(item).map_err(|e| ValidationError::Malformed {
                field: format!("{}[{}]", field, index),
                reason: e.to_string(),
            })
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
