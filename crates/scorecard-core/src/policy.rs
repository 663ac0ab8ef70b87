//! # Pricing and Bonus Policies
//!
//! The two rules a caller injects into a run, and the reference
//! implementations of each.
//!
//! ## Policy Seams
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        AnalysisOptions                                  │
//! │                                                                         │
//! │  ┌───────────────────────────┐     ┌───────────────────────────────┐   │
//! │  │      RevenuePolicy        │     │         BonusPolicy           │   │
//! │  │  (item, product) -> f64   │     │  (rank, total, stat) -> f64   │   │
//! │  │                           │     │                               │   │
//! │  │  SimpleRevenue            │     │  ProfitRankBonus              │   │
//! │  │  price × qty × (1 - d%)   │     │  15% / 10% / 5% / 0% tiers    │   │
//! │  └─────────────┬─────────────┘     └───────────────┬───────────────┘   │
//! │                │ used by accumulate                │ used by ranking   │
//! └────────────────┴───────────────────────────────────┴───────────────────┘
//! ```
//!
//! Any closure with a matching signature is a policy:
//!
//! ```rust
//! use scorecard_core::policy::AnalysisOptions;
//! use scorecard_core::{Product, PurchaseItem, SellerStat};
//!
//! let options = AnalysisOptions::new()
//!     .with_revenue(|item: &PurchaseItem, _: &Product| item.sale_price * item.quantity as f64)
//!     .with_bonus(|_rank: usize, _total: usize, _stat: &SellerStat| 0.0);
//! assert!(options.validate().is_ok());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::stats::SellerStat;
use crate::types::{Product, PurchaseItem};

// =============================================================================
// Policy Traits
// =============================================================================

/// Computes the revenue of one receipt line, in currency units.
pub trait RevenuePolicy {
    fn revenue(&self, item: &PurchaseItem, product: &Product) -> f64;
}

impl<F> RevenuePolicy for F
where
    F: Fn(&PurchaseItem, &Product) -> f64,
{
    fn revenue(&self, item: &PurchaseItem, product: &Product) -> f64 {
        self(item, product)
    }
}

/// Computes a seller's bonus from its zero-based profit rank.
pub trait BonusPolicy {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStat) -> f64;
}

impl<F> BonusPolicy for F
where
    F: Fn(usize, usize, &SellerStat) -> f64,
{
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStat) -> f64 {
        self(rank, total, seller)
    }
}

// =============================================================================
// Reference Revenue Policy
// =============================================================================

/// `sale_price × quantity × (1 − discount / 100)`.
///
/// ## Example
/// ```rust
/// use scorecard_core::policy::calculate_simple_revenue;
/// use scorecard_core::{Product, PurchaseItem};
///
/// let item = PurchaseItem::new("SKU_001", 4, 25.0, 10.0);
/// let product = Product::new("SKU_001", 12.0);
/// assert_eq!(calculate_simple_revenue(&item, &product), 90.0);
/// ```
pub fn calculate_simple_revenue(item: &PurchaseItem, _product: &Product) -> f64 {
    let discount_rate = item.discount / 100.0;
    let full_price = item.sale_price * item.quantity as f64;
    full_price * (1.0 - discount_rate)
}

/// Reference revenue policy, see [`calculate_simple_revenue`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenuePolicy for SimpleRevenue {
    fn revenue(&self, item: &PurchaseItem, product: &Product) -> f64 {
        calculate_simple_revenue(item, product)
    }
}

// =============================================================================
// Reference Bonus Policy
// =============================================================================

/// Bonus percentages per rank tier.
///
/// ## Tier Selection
/// ```text
/// rank == 0            ──► first     (checked first: a lone seller lands here)
/// rank == 1 || 2       ──► podium
/// rank == total - 1    ──► last
/// otherwise            ──► standard
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusTiers {
    /// Percent of profit for rank 0.
    pub first: f64,
    /// Percent of profit for ranks 1 and 2.
    pub podium: f64,
    /// Percent of profit for the last rank.
    pub last: f64,
    /// Percent of profit for everyone else.
    pub standard: f64,
}

impl Default for BonusTiers {
    fn default() -> Self {
        BonusTiers {
            first: 15.0,
            podium: 10.0,
            last: 0.0,
            standard: 5.0,
        }
    }
}

impl BonusTiers {
    /// The percentage that applies to `rank` out of `total` sellers.
    pub fn percentage_for(&self, rank: usize, total: usize) -> f64 {
        if rank == 0 {
            self.first
        } else if rank == 1 || rank == 2 {
            self.podium
        } else if rank + 1 == total {
            self.last
        } else {
            self.standard
        }
    }
}

/// Reference bonus policy: a tiered percentage of the seller's profit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProfitRankBonus {
    pub tiers: BonusTiers,
}

impl ProfitRankBonus {
    pub fn new(tiers: BonusTiers) -> Self {
        ProfitRankBonus { tiers }
    }
}

impl BonusPolicy for ProfitRankBonus {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStat) -> f64 {
        seller.profit * self.tiers.percentage_for(rank, total) / 100.0
    }
}

/// Reference bonus with the default 15/10/0/5 tiers.
///
/// ## Example
/// ```rust
/// use scorecard_core::policy::calculate_bonus_by_profit;
/// use scorecard_core::{Seller, SellerStat};
///
/// let mut stat = SellerStat::new(&Seller::new("s1", "Ann", "Lee"));
/// stat.profit = 1000.0;
/// assert_eq!(calculate_bonus_by_profit(0, 5, &stat), 150.0);
/// assert_eq!(calculate_bonus_by_profit(4, 5, &stat), 0.0);
/// ```
pub fn calculate_bonus_by_profit(rank: usize, total: usize, seller: &SellerStat) -> f64 {
    ProfitRankBonus::default().bonus(rank, total, seller)
}

// =============================================================================
// Analysis Options
// =============================================================================

/// The options bundle: one revenue policy and one bonus policy.
///
/// Built incrementally; [`AnalysisOptions::validate`] refuses a bundle with
/// either policy missing.
#[derive(Default)]
pub struct AnalysisOptions<'a> {
    revenue: Option<Box<dyn RevenuePolicy + 'a>>,
    bonus: Option<Box<dyn BonusPolicy + 'a>>,
}

impl<'a> AnalysisOptions<'a> {
    /// Empty options. Not valid until both policies are set.
    pub fn new() -> Self {
        Self::default()
    }

    /// [`SimpleRevenue`] plus [`ProfitRankBonus`] with default tiers.
    pub fn reference() -> Self {
        Self::new()
            .with_revenue(SimpleRevenue)
            .with_bonus(ProfitRankBonus::default())
    }

    pub fn with_revenue(mut self, policy: impl RevenuePolicy + 'a) -> Self {
        self.revenue = Some(Box::new(policy));
        self
    }

    pub fn with_bonus(mut self, policy: impl BonusPolicy + 'a) -> Self {
        self.bonus = Some(Box::new(policy));
        self
    }

    /// Returns both policies, or [`CoreError::InvalidConfig`] naming the
    /// first one that is missing.
    pub fn validate(&self) -> CoreResult<(&(dyn RevenuePolicy + 'a), &(dyn BonusPolicy + 'a))> {
        let revenue = self.revenue.as_deref().ok_or_else(|| missing("calculate_revenue"))?;
        let bonus = self.bonus.as_deref().ok_or_else(|| missing("calculate_bonus"))?;
        Ok((revenue, bonus))
    }
}

fn missing(field: &str) -> CoreError {
    CoreError::InvalidConfig(ValidationError::Required {
        field: field.to_string(),
    })
}

impl fmt::Debug for AnalysisOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("revenue", &self.revenue.is_some())
            .field("bonus", &self.bonus.is_some())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
