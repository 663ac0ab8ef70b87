//! # Seller Statistics
//!
//! The per-seller working accumulator. One [`SellerStat`] exists per input
//! seller for the lifetime of a single run and is never exposed in the
//! report; [`crate::report::SellerReport`] is built from it at the end.

use std::collections::HashMap;

use crate::money::Money;
use crate::report::TopProduct;
use crate::types::Seller;

// =============================================================================
// Sold Quantities
// =============================================================================

/// SKU → cumulative quantity tally that remembers first-seen order.
///
/// First-seen order is the tie-break for [`SoldQuantities::top`], so a plain
/// `HashMap` is not enough.
#[derive(Debug, Clone, Default)]
pub struct SoldQuantities {
    entries: Vec<(String, u64)>,
    positions: HashMap<String, usize>,
}

impl SoldQuantities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units to `sku`, starting from 0 on first sight.
    pub fn add(&mut self, sku: &str, quantity: u64) {
        match self.positions.get(sku) {
            Some(&slot) => self.entries[slot].1 += quantity,
            None => {
                self.positions.insert(sku.to_string(), self.entries.len());
                self.entries.push((sku.to_string(), quantity));
            }
        }
    }

    /// Cumulative quantity for `sku`, if it was ever sold.
    pub fn get(&self, sku: &str) -> Option<u64> {
        self.positions.get(sku).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct SKUs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `limit` best-selling SKUs, by descending quantity.
    ///
    /// The sort is stable, so equal quantities keep first-seen order.
    ///
    /// ## Example
    /// ```rust
    /// use scorecard_core::stats::SoldQuantities;
    ///
    /// let mut sold = SoldQuantities::new();
    /// sold.add("A", 1);
    /// sold.add("B", 5);
    /// sold.add("C", 1);
    ///
    /// let top: Vec<_> = sold.top(2).into_iter().map(|p| p.sku).collect();
    /// assert_eq!(top, vec!["B", "A"]);
    /// ```
    pub fn top(&self, limit: usize) -> Vec<TopProduct> {
        let mut ranked: Vec<TopProduct> = self
            .entries
            .iter()
            .map(|(sku, quantity)| TopProduct {
                sku: sku.clone(),
                quantity: *quantity,
            })
            .collect();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(limit);
        ranked
    }
}

// =============================================================================
// Seller Stat
// =============================================================================

/// Mutable accumulator for one seller, owned by a single pipeline run.
#[derive(Debug, Clone)]
pub struct SellerStat {
    pub seller_id: String,

    /// `"{first_name} {last_name}"`.
    pub name: String,

    /// Receipt totals, quantized to cents per line before summing.
    pub revenue: Money,

    /// Unrounded profit in currency units.
    pub profit: f64,

    /// Number of receipts attributed to this seller.
    pub sales_count: u64,

    /// Set by the ranking stage; 0 until then.
    pub bonus: f64,

    pub products_sold: SoldQuantities,
}

impl SellerStat {
    /// Zeroed accumulator for `seller`.
    pub fn new(seller: &Seller) -> Self {
        SellerStat {
            seller_id: seller.id.clone(),
            name: seller.display_name(),
            revenue: Money::zero(),
            profit: 0.0,
            sales_count: 0,
            bonus: 0.0,
            products_sold: SoldQuantities::new(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stat_is_zeroed() {
        let stat = SellerStat::new(&Seller::new("seller_1", "Ivan", "Sidorov"));
        assert_eq!(stat.seller_id, "seller_1");
        assert_eq!(stat.name, "Ivan Sidorov");
        assert!(stat.revenue.is_zero());
        assert_eq!(stat.profit, 0.0);
        assert_eq!(stat.sales_count, 0);
        assert_eq!(stat.bonus, 0.0);
        assert!(stat.products_sold.is_empty());
    }

    #[test]
    fn test_sold_quantities_accumulate() {
        let mut sold = SoldQuantities::new();
        sold.add("SKU_001", 2);
        sold.add("SKU_002", 1);
        sold.add("SKU_001", 3);

        assert_eq!(sold.len(), 2);
        assert_eq!(sold.get("SKU_001"), Some(5));
        assert_eq!(sold.get("SKU_002"), Some(1));
        assert_eq!(sold.get("SKU_003"), None);

        let top = sold.top(10);
        let order: Vec<&str> = top.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(order, vec!["SKU_001", "SKU_002"]);
    }

    #[test]
    fn test_zero_quantity_still_registers_sku() {
        let mut sold = SoldQuantities::new();
        sold.add("SKU_010", 0);
        assert_eq!(sold.get("SKU_010"), Some(0));
        assert_eq!(sold.len(), 1);
    }

    #[test]
    fn test_top_truncates_and_orders() {
        let mut sold = SoldQuantities::new();
        for i in 0..15u64 {
            sold.add(&format!("SKU_{:03}", i), i);
        }

        let top = sold.top(10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].sku, "SKU_014");
        assert_eq!(top[0].quantity, 14);
        assert_eq!(top[9].sku, "SKU_005");
        assert!(top.windows(2).all(|w| w[0].quantity >= w[1].quantity));
    }

    #[test]
    fn test_top_ties_keep_first_seen_order() {
        let mut sold = SoldQuantities::new();
        sold.add("Z", 3);
        sold.add("M", 7);
        sold.add("A", 3);
        sold.add("Q", 3);

        let skus: Vec<String> = sold.top(10).into_iter().map(|p| p.sku).collect();
        assert_eq!(skus, vec!["M", "Z", "A", "Q"]);
    }

    #[test]
    fn test_top_of_empty_is_empty() {
        assert!(SoldQuantities::new().top(10).is_empty());
    }
}
