//! # Report Records
//!
//! The immutable output of a run, one [`SellerReport`] per seller in rank
//! order. These types are exported to TypeScript for the dashboard.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::round_currency;
use crate::ranking::TOP_PRODUCTS_LIMIT;
use crate::stats::SellerStat;

/// A SKU and the cumulative quantity a seller sold of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// Final per-seller performance record.
///
/// Monetary fields are in currency units rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SellerReport {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    /// At most 10 entries, by descending quantity.
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}

impl SellerReport {
    /// Shapes a ranked, bonus-assigned accumulator into its report record.
    pub fn from_stat(stat: &SellerStat) -> Self {
        SellerReport {
            seller_id: stat.seller_id.clone(),
            name: stat.name.clone(),
            revenue: stat.revenue.to_currency(),
            profit: round_currency(stat.profit),
            sales_count: stat.sales_count,
            top_products: stat.products_sold.top(TOP_PRODUCTS_LIMIT),
            bonus: round_currency(stat.bonus),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
