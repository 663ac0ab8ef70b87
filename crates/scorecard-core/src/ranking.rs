//! # Ranking
//!
//! Orders sellers by profit and assigns rank-dependent bonuses.

use std::cmp::Ordering;

use crate::policy::BonusPolicy;
use crate::stats::SellerStat;

/// Maximum entries in a seller's top-products list.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Sorts by descending profit.
///
/// Stable: sellers with equal profit keep their seller-list order.
pub fn rank_sellers(mut stats: Vec<SellerStat>) -> Vec<SellerStat> {
    stats.sort_by(|a, b| by_profit_desc(a.profit, b.profit));
    stats
}

/// Stores `policy(rank, total, stat)` as each seller's bonus.
///
/// `ranked` must already be in rank order.
pub fn assign_bonuses(ranked: &mut [SellerStat], policy: &dyn BonusPolicy) {
    let total = ranked.len();
    for (rank, stat) in ranked.iter_mut().enumerate() {
        stat.bonus = policy.bonus(rank, total, stat);
    }
}

// Total order so a NaN profit from a misbehaving revenue policy cannot break
// the sort; NaN ranks above every number.
fn by_profit_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{calculate_bonus_by_profit, ProfitRankBonus};
    use crate::types::Seller;

    fn stat(id: &str, profit: f64) -> SellerStat {
        let mut stat = SellerStat::new(&Seller::new(id, "Name", id));
        stat.profit = profit;
        stat
    }

    fn ids(stats: &[SellerStat]) -> Vec<&str> {
        stats.iter().map(|s| s.seller_id.as_str()).collect()
    }

    #[test]
    fn test_rank_by_descending_profit() {
        let ranked = rank_sellers(vec![stat("a", 10.0), stat("b", 30.0), stat("c", -5.0), stat("d", 20.0)]);
        assert_eq!(ids(&ranked), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let ranked = rank_sellers(vec![stat("x", 5.0), stat("y", 9.0), stat("z", 5.0), stat("w", 5.0)]);
        assert_eq!(ids(&ranked), vec!["y", "x", "z", "w"]);
    }

    #[test]
    fn test_rank_with_nan_profit_does_not_panic() {
        let ranked = rank_sellers(vec![stat("a", 1.0), stat("b", f64::NAN), stat("c", 2.0)]);
        assert_eq!(ids(&ranked), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_assign_bonuses_default_policy() {
        let mut ranked = rank_sellers(vec![
            stat("s1", 1000.0),
            stat("s2", 900.0),
            stat("s3", 800.0),
            stat("s4", 700.0),
            stat("s5", 600.0),
        ]);
        assign_bonuses(&mut ranked, &ProfitRankBonus::default());

        let bonuses: Vec<f64> = ranked.iter().map(|s| s.bonus).collect();
        assert_eq!(bonuses, vec![150.0, 90.0, 80.0, 35.0, 0.0]);
    }

    #[test]
    fn test_assign_bonuses_single_seller() {
        let mut ranked = vec![stat("solo", 100.0)];
        assign_bonuses(&mut ranked, &calculate_bonus_by_profit);
        assert_eq!(ranked[0].bonus, 15.0);
    }

    #[test]
    fn test_assign_bonuses_passes_rank_and_total() {
        let mut ranked = vec![stat("a", 3.0), stat("b", 2.0), stat("c", 1.0)];
        let policy = |rank: usize, total: usize, _: &SellerStat| (rank * 10 + total) as f64;
        assign_bonuses(&mut ranked, &policy);

        let bonuses: Vec<f64> = ranked.iter().map(|s| s.bonus).collect();
        assert_eq!(bonuses, vec![3.0, 13.0, 23.0]);
    }
}
