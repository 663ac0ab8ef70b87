//! # Domain Types
//!
//! Input entities consumed by the analysis pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         SalesDataset                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │     Seller      │   │     Product     │   │   PurchaseRecord    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id             │◄──┼─────────────────┼───│  seller_id          │   │
//! │  │  first_name     │   │  sku            │◄──│  items[].sku        │   │
//! │  │  last_name      │   │  purchase_price │   │  items[].quantity   │   │
//! │  └─────────────────┘   └─────────────────┘   │  items[].sale_price │   │
//! │                                              │  items[].discount   │   │
//! │                                              └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All input types are immutable for the duration of a run. Descriptive
//! fields marked optional are carried for diagnostics only.

use serde::{Deserialize, Serialize};

// =============================================================================
// Seller
// =============================================================================

/// A salesperson whose receipts are analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Unique seller identifier, referenced by purchase records.
    pub id: String,

    pub first_name: String,

    pub last_name: String,

    /// Employment start date as given by the source (not parsed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Job title, e.g. "Senior Seller".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Seller {
    /// Creates a seller with only the fields the pipeline needs.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Seller {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            start_date: None,
            position: None,
        }
    }

    /// Name shown in reports: `"{first_name} {last_name}"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry. Only `sku` and `purchase_price` drive the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stock Keeping Unit - unique product key.
    pub sku: String,

    /// Cost price per unit, in currency units.
    pub purchase_price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// List price per unit. Receipts carry their own `sale_price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
}

impl Product {
    /// Creates a product with only the fields the pipeline needs.
    pub fn new(sku: impl Into<String>, purchase_price: f64) -> Self {
        Product {
            sku: sku.into(),
            purchase_price,
            name: None,
            category: None,
            sale_price: None,
        }
    }

    /// Cost of `quantity` units at the purchase price.
    #[inline]
    pub fn cost_of(&self, quantity: u64) -> f64 {
        self.purchase_price * quantity as f64
    }
}

// =============================================================================
// Purchase Record
// =============================================================================

/// A line on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseItem {
    pub sku: String,

    /// Units sold on this line.
    pub quantity: u64,

    /// Unit sale price before discount, in currency units.
    pub sale_price: f64,

    /// Discount percentage, normally 0–100.
    #[serde(default)]
    pub discount: f64,
}

impl PurchaseItem {
    pub fn new(sku: impl Into<String>, quantity: u64, sale_price: f64, discount: f64) -> Self {
        PurchaseItem {
            sku: sku.into(),
            quantity,
            sale_price,
            discount,
        }
    }
}

/// One receipt ("check") issued by a seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,

    /// Lines in the order they were rung up.
    pub items: Vec<PurchaseItem>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Receipt total as printed by the till. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_discount: Option<f64>,
}

impl PurchaseRecord {
    pub fn new(seller_id: impl Into<String>, items: Vec<PurchaseItem>) -> Self {
        PurchaseRecord {
            seller_id: seller_id.into(),
            items,
            receipt_id: None,
            date: None,
            customer_id: None,
            total_amount: None,
            total_discount: None,
        }
    }

    /// Attaches a receipt id (used in log output).
    pub fn with_receipt_id(mut self, receipt_id: impl Into<String>) -> Self {
        self.receipt_id = Some(receipt_id.into());
        self
    }

    /// Receipt id for diagnostics, or `"-"` when the source has none.
    pub fn receipt_label(&self) -> &str {
        self.receipt_id.as_deref().unwrap_or("-")
    }
}

// =============================================================================
// Sales Dataset
// =============================================================================

/// The data bundle handed to [`crate::analyze_sales_data`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesDataset {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesDataset {
    pub fn new(
        sellers: Vec<Seller>,
        products: Vec<Product>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        SalesDataset {
            sellers,
            products,
            purchase_records,
        }
    }

    /// Total number of receipt lines across all records.
    pub fn item_count(&self) -> usize {
        self.purchase_records.iter().map(|r| r.items.len()).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let seller = Seller::new("seller_1", "Alexey", "Petrov");
        assert_eq!(seller.display_name(), "Alexey Petrov");
    }

    #[test]
    fn test_cost_of() {
        let product = Product::new("SKU_001", 50.0);
        assert_eq!(product.cost_of(2), 100.0);
        assert_eq!(product.cost_of(0), 0.0);
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "receipt_id": "receipt_1",
            "date": "2023-12-04",
            "seller_id": "seller_1",
            "customer_id": "customer_73",
            "items": [
                { "name": "Milk", "sku": "SKU_007", "quantity": 3, "sale_price": 12.5, "discount": 10 }
            ],
            "total_amount": 33.75,
            "total_discount": 3.75
        }"#;

        let record: PurchaseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.seller_id, "seller_1");
        assert_eq!(record.receipt_label(), "receipt_1");
        assert_eq!(record.items.len(), 1);
        assert_eq!(record.items[0].quantity, 3);
        assert_eq!(record.items[0].discount, 10.0);
    }

    #[test]
    fn test_discount_defaults_to_zero() {
        let item: PurchaseItem =
            serde_json::from_str(r#"{ "sku": "SKU_001", "quantity": 1, "sale_price": 5 }"#)
                .unwrap();
        assert_eq!(item.discount, 0.0);
    }

    #[test]
    fn test_receipt_label_without_id() {
        let record = PurchaseRecord::new("seller_1", vec![]);
        assert_eq!(record.receipt_label(), "-");
        assert_eq!(record.with_receipt_id("r-9").receipt_label(), "r-9");
    }

    #[test]
    fn test_item_count() {
        let data = SalesDataset::new(
            vec![Seller::new("s1", "A", "B")],
            vec![Product::new("P1", 1.0)],
            vec![
                PurchaseRecord::new("s1", vec![PurchaseItem::new("P1", 1, 2.0, 0.0)]),
                PurchaseRecord::new(
                    "s1",
                    vec![
                        PurchaseItem::new("P1", 1, 2.0, 0.0),
                        PurchaseItem::new("P1", 4, 2.0, 5.0),
                    ],
                ),
            ],
        );
        assert_eq!(data.item_count(), 3);
    }
}
