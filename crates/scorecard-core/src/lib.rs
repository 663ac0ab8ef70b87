//! # scorecard-core: Pure Sales Analytics for Seller Scorecard
//!
//! Computes per-seller revenue, profit, bonus and best-selling products from
//! sellers, products and purchase records, in one synchronous pass with
//! zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Seller Scorecard Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 scorecard-cli (data source + output)            │   │
//! │  │    dataset.json ──► SalesDataset        SellerReport ──► table  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ scorecard-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌────────────┐  ┌──────────┐    │   │
//! │  │   │ dataset  │  │  index   │  │ accumulate │  │ ranking  │    │   │
//! │  │   │ validate │─►│ sellers  │─►│ revenue    │─►│ bonus    │─►  │   │
//! │  │   │          │  │ products │  │ profit     │  │ top-10   │    │   │
//! │  │   └──────────┘  └──────────┘  └────────────┘  └──────────┘    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Input entities (Seller, Product, PurchaseRecord)
//! - [`money`] - Integer-cent revenue accumulation and 2-decimal rounding
//! - [`dataset`] - Input validation
//! - [`policy`] - Injectable revenue and bonus rules
//! - [`index`] - Seller and product lookups
//! - [`stats`] - Per-seller working accumulator
//! - [`accumulate`] - Revenue/profit accumulation
//! - [`ranking`] - Profit ranking and bonus assignment
//! - [`report`] - Output records
//! - [`analysis`] - The pipeline entry point
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use scorecard_core::{analyze_sales_data, AnalysisOptions, SalesDataset};
//!
//! let data = SalesDataset::from_json_str(r#"{
//!     "sellers": [{ "id": "seller_1", "first_name": "Alexey", "last_name": "Petrov" }],
//!     "products": [{ "sku": "SKU_001", "purchase_price": 50 }],
//!     "purchase_records": [{
//!         "seller_id": "seller_1",
//!         "items": [{ "sku": "SKU_001", "quantity": 2, "sale_price": 100, "discount": 0 }]
//!     }]
//! }"#).unwrap();
//!
//! let reports = analyze_sales_data(Some(&data), Some(&AnalysisOptions::reference())).unwrap();
//! assert_eq!(reports[0].name, "Alexey Petrov");
//! assert_eq!(reports[0].revenue, 200.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod accumulate;
pub mod analysis;
pub mod dataset;
pub mod error;
pub mod index;
pub mod money;
pub mod policy;
pub mod ranking;
pub mod report;
pub mod stats;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use analysis::{analyze_sales_data, run_analysis, SalesAnalysis};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use policy::{AnalysisOptions, BonusPolicy, BonusTiers, ProfitRankBonus, RevenuePolicy, SimpleRevenue};
pub use report::{SellerReport, TopProduct};
pub use stats::SellerStat;
pub use types::*;
