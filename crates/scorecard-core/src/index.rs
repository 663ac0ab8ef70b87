//! # Indexes
//!
//! Lookup structures built once per run, in a single pass each.
//!
//! ```text
//! sellers  ──► SellerIndex  { stats: [SellerStat; n], by_id: id → slot }
//! products ──► ProductIndex { by_sku: sku → &Product }
//! ```
//!
//! The seller side is an arena: exactly one accumulator per input seller,
//! preallocated in seller-list order. Duplicate ids or SKUs are not
//! rejected; the later entry wins the lookup.

use std::collections::HashMap;

use crate::stats::SellerStat;
use crate::types::{Product, Seller};

// =============================================================================
// Seller Index
// =============================================================================

/// Seller accumulators plus an id → slot lookup.
#[derive(Debug)]
pub struct SellerIndex<'a> {
    stats: Vec<SellerStat>,
    by_id: HashMap<&'a str, usize>,
}

impl<'a> SellerIndex<'a> {
    pub fn build(sellers: &'a [Seller]) -> Self {
        let mut stats = Vec::with_capacity(sellers.len());
        let mut by_id = HashMap::with_capacity(sellers.len());

        for (slot, seller) in sellers.iter().enumerate() {
            stats.push(SellerStat::new(seller));
            by_id.insert(seller.id.as_str(), slot);
        }

        SellerIndex { stats, by_id }
    }

    /// Accumulator for `seller_id`, if that seller exists.
    pub fn get_mut(&mut self, seller_id: &str) -> Option<&mut SellerStat> {
        let slot = *self.by_id.get(seller_id)?;
        self.stats.get_mut(slot)
    }

    /// Number of accumulators (equals the number of input sellers).
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Releases the accumulators in seller-list order.
    pub fn into_stats(self) -> Vec<SellerStat> {
        self.stats
    }
}

// =============================================================================
// Product Index
// =============================================================================

/// SKU → product lookup.
#[derive(Debug)]
pub struct ProductIndex<'a> {
    by_sku: HashMap<&'a str, &'a Product>,
}

impl<'a> ProductIndex<'a> {
    pub fn build(products: &'a [Product]) -> Self {
        let by_sku = products
            .iter()
            .map(|product| (product.sku.as_str(), product))
            .collect();
        ProductIndex { by_sku }
    }

    pub fn get(&self, sku: &str) -> Option<&'a Product> {
        self.by_sku.get(sku).copied()
    }

    /// Number of distinct SKUs.
    pub fn len(&self) -> usize {
        self.by_sku.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_sku.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_index_one_slot_per_seller() {
        let sellers = vec![
            Seller::new("seller_1", "A", "One"),
            Seller::new("seller_2", "B", "Two"),
        ];
        let mut index = SellerIndex::build(&sellers);

        assert_eq!(index.len(), 2);
        assert!(index.get_mut("seller_9").is_none());

        index.get_mut("seller_2").unwrap().sales_count += 1;
        let stats = index.into_stats();
        assert_eq!(stats[0].sales_count, 0);
        assert_eq!(stats[1].sales_count, 1);
    }

    #[test]
    fn test_duplicate_seller_id_later_wins_lookup() {
        let sellers = vec![
            Seller::new("seller_1", "First", "Copy"),
            Seller::new("seller_1", "Second", "Copy"),
        ];
        let mut index = SellerIndex::build(&sellers);
        assert_eq!(index.len(), 2);

        index.get_mut("seller_1").unwrap().sales_count = 7;
        let stats = index.into_stats();
        assert_eq!(stats[0].sales_count, 0);
        assert_eq!(stats[1].sales_count, 7);
        assert_eq!(stats[1].name, "Second Copy");
    }

    #[test]
    fn test_product_index_lookup() {
        let products = vec![
            Product::new("SKU_001", 10.0),
            Product::new("SKU_002", 20.0),
            Product::new("SKU_001", 30.0),
        ];
        let index = ProductIndex::build(&products);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("SKU_002").map(|p| p.purchase_price), Some(20.0));
        // Later duplicate overwrites
        assert_eq!(index.get("SKU_001").map(|p| p.purchase_price), Some(30.0));
        assert!(index.get("SKU_404").is_none());
    }
}
