//! # Sales Analysis Pipeline
//!
//! The single entry point that turns a [`SalesDataset`] into ranked
//! [`SellerReport`]s.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  validate ──► index ──► accumulate ──► rank + bonus ──► report          │
//! │                                                                         │
//! │  dataset::      index::   accumulate::   ranking::       report::      │
//! │  validate_      Seller/   accumulate     rank_sellers    SellerReport  │
//! │  dataset        Product                  assign_bonuses  ::from_stat   │
//! │  options.       Index                                                   │
//! │  validate                                                               │
//! │                                                                         │
//! │  Validation errors are raised before any accumulation begins.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each call owns its accumulators, so independent runs can proceed on
//! separate threads without coordination.

use tracing::info;

use crate::accumulate::{accumulate, AccumulationSummary};
use crate::dataset::validate_dataset;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::index::{ProductIndex, SellerIndex};
use crate::policy::AnalysisOptions;
use crate::ranking::{assign_bonuses, rank_sellers};
use crate::report::SellerReport;
use crate::types::SalesDataset;

/// Reports plus the counters of the run that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesAnalysis {
    /// One record per input seller, by descending profit.
    pub reports: Vec<SellerReport>,
    pub summary: AccumulationSummary,
}

/// Computes per-seller revenue, profit, bonus and top products.
///
/// ## Errors
/// - [`CoreError::InvalidData`]: `data` is `None` or a list is empty
/// - [`CoreError::InvalidConfig`]: `options` is `None` or lacks a policy
/// - [`CoreError::ProductNotFound`]: a receipt line names an unknown SKU
///
/// ## Example
/// ```rust
/// use scorecard_core::{
///     analyze_sales_data, AnalysisOptions, Product, PurchaseItem, PurchaseRecord, SalesDataset,
///     Seller,
/// };
///
/// let data = SalesDataset::new(
///     vec![Seller::new("seller_1", "Alexey", "Petrov")],
///     vec![Product::new("SKU_001", 50.0)],
///     vec![PurchaseRecord::new("seller_1", vec![PurchaseItem::new("SKU_001", 2, 100.0, 0.0)])],
/// );
///
/// let reports = analyze_sales_data(Some(&data), Some(&AnalysisOptions::reference())).unwrap();
/// assert_eq!(reports[0].revenue, 200.0);
/// assert_eq!(reports[0].profit, 100.0);
/// assert_eq!(reports[0].bonus, 15.0);
/// ```
pub fn analyze_sales_data(
    data: Option<&SalesDataset>,
    options: Option<&AnalysisOptions<'_>>,
) -> CoreResult<Vec<SellerReport>> {
    run_analysis(data, options).map(|analysis| analysis.reports)
}

/// Same as [`analyze_sales_data`] but also returns the run counters.
pub fn run_analysis(
    data: Option<&SalesDataset>,
    options: Option<&AnalysisOptions<'_>>,
) -> CoreResult<SalesAnalysis> {
    let data = validate_dataset(data)?;
    let options = options.ok_or_else(|| {
        CoreError::InvalidConfig(ValidationError::Required {
            field: "options".to_string(),
        })
    })?;
    let (revenue_policy, bonus_policy) = options.validate()?;

    let mut sellers = SellerIndex::build(&data.sellers);
    let products = ProductIndex::build(&data.products);

    let summary = accumulate(&mut sellers, &products, &data.purchase_records, revenue_policy)?;

    let mut ranked = rank_sellers(sellers.into_stats());
    assign_bonuses(&mut ranked, bonus_policy);

    let reports: Vec<SellerReport> = ranked.iter().map(SellerReport::from_stat).collect();

    info!(
        sellers = reports.len(),
        products = products.len(),
        records = data.purchase_records.len(),
        skipped = summary.skipped_records,
        items = summary.items,
        "Sales analysis complete"
    );

    Ok(SalesAnalysis { reports, summary })
}

// =============================================================================
// Unit Tests
// =============================================================================
