//! # Revenue and Profit Accumulation
//!
//! Folds every purchase record into its seller's accumulator.
//!
//! ## Per-Receipt Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  record.seller_id ──► SellerIndex ──► miss? skip whole record          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  sales_count += 1                                                      │
//! │        │                                                                │
//! │        ▼  for each item, in order                                      │
//! │  ┌───────────────────────────────────────────────────────────────┐     │
//! │  │ product  = ProductIndex[item.sku]      (miss → ProductNotFound)│     │
//! │  │ cost     = purchase_price × quantity                           │     │
//! │  │ revenue  = RevenuePolicy(item, product)                        │     │
//! │  │ check   += Money::from_revenue(revenue)    (cents)             │     │
//! │  │ profit  += revenue − cost                  (unrounded)         │     │
//! │  │ sold[sku] += quantity                                          │     │
//! │  └───────────────────────────────────────────────────────────────┘     │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  seller.revenue += check                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, trace, warn};

use crate::error::{CoreError, CoreResult};
use crate::index::{ProductIndex, SellerIndex};
use crate::money::Money;
use crate::policy::RevenuePolicy;
use crate::types::PurchaseRecord;

/// Counters describing one accumulation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccumulationSummary {
    /// Records attributed to a known seller.
    pub applied_records: usize,
    /// Records whose seller id was not in the seller list.
    pub skipped_records: usize,
    /// Receipt lines processed across applied records.
    pub items: usize,
}

/// Applies `records` to the seller accumulators in input order.
///
/// ## Errors
/// [`CoreError::ProductNotFound`] when a line's SKU is not in `products`.
/// The run is abandoned at that point.
pub fn accumulate(
    sellers: &mut SellerIndex<'_>,
    products: &ProductIndex<'_>,
    records: &[PurchaseRecord],
    revenue_policy: &dyn RevenuePolicy,
) -> CoreResult<AccumulationSummary> {
    let mut summary = AccumulationSummary::default();

    for record in records {
        let Some(seller) = sellers.get_mut(&record.seller_id) else {
            debug!(
                seller_id = %record.seller_id,
                receipt = record.receipt_label(),
                "Skipping record for unknown seller"
            );
            summary.skipped_records += 1;
            continue;
        };

        seller.sales_count += 1;
        let mut check_total = Money::zero();

        for item in &record.items {
            let product = products.get(&item.sku).ok_or_else(|| {
                warn!(
                    sku = %item.sku,
                    seller_id = %record.seller_id,
                    receipt = record.receipt_label(),
                    "Receipt line references unknown product"
                );
                CoreError::ProductNotFound {
                    sku: item.sku.clone(),
                    seller_id: record.seller_id.clone(),
                }
            })?;

            let cost = product.cost_of(item.quantity);
            let revenue = revenue_policy.revenue(item, product);

            check_total += Money::from_revenue(revenue);
            seller.profit += revenue - cost;
            seller.products_sold.add(&item.sku, item.quantity);
        }

        trace!(
            seller_id = %record.seller_id,
            receipt = record.receipt_label(),
            total = %check_total,
            "Applied receipt"
        );
        seller.revenue += check_total;
        summary.applied_records += 1;
        summary.items += record.items.len();
    }

    Ok(summary)
}

// =============================================================================
// Unit Tests
// =============================================================================
