//! # Money Module
//!
//! Provides the `Money` type used to accumulate revenue without float drift,
//! plus the 2-decimal rounding applied to every reported amount.
//!
//! ## Why Integer Cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing line revenues as floats:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004                                     │
//! │  Over thousands of receipts the error becomes visible in reports.      │
//! │                                                                         │
//! │  OUR SOLUTION: quantize each line to cents once, then add integers     │
//! │    revenue 33.333... ──► 3333 cents                                    │
//! │    receipt total = Σ line cents (exact)                                │
//! │    seller total  = Σ receipt totals (exact)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Profit is NOT quantized this way. It is accumulated in floating currency
//! units and only rounded when the report is built.
//!
//! ## Usage
//! ```rust
//! use scorecard_core::money::Money;
//!
//! let line = Money::from_revenue(199.995);
//! assert_eq!(line.cents(), 20000);
//!
//! let total = line + Money::from_cents(150);
//! assert_eq!(total.to_currency(), 201.5);
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: discounts above 100% yield negative revenue, which
///   must still accumulate correctly
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use scorecard_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Quantizes a floating revenue amount (currency units) to cents.
    ///
    /// Computes `round((amount + EPSILON) × 100)`. The epsilon nudges values
    /// such as `1.005`, whose binary form sits just below the half-cent, up
    /// to the cent a cashier would print. Halves round toward positive
    /// infinity.
    ///
    /// ## Example
    /// ```rust
    /// use scorecard_core::money::Money;
    ///
    /// assert_eq!(Money::from_revenue(200.0).cents(), 20000);
    /// assert_eq!(Money::from_revenue(1.005).cents(), 101);
    /// assert_eq!(Money::from_revenue(33.333333).cents(), 3333);
    /// ```
    pub fn from_revenue(amount: f64) -> Self {
        Money(round_half_up((amount + f64::EPSILON) * 100.0) as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Converts back to currency units, rounded to 2 decimals.
    ///
    /// ## Example
    /// ```rust
    /// use scorecard_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(123456).to_currency(), 1234.56);
    /// assert_eq!(Money::from_cents(-550).to_currency(), -5.5);
    /// ```
    pub fn to_currency(&self) -> f64 {
        round_currency(self.0 as f64 / 100.0)
    }
}

// =============================================================================
// Rounding Helpers
// =============================================================================

/// Rounds a currency amount to 2 decimals.
///
/// Works on the exact decimal value of the `f64`, so `2.675` (stored as
/// `2.67499999...`) gives `2.67`. Exact halves round away from zero.
/// Values outside the `Decimal` range are returned unchanged.
///
/// ## Example
/// ```rust
/// use scorecard_core::money::round_currency;
///
/// assert_eq!(round_currency(14.999), 15.0);
/// assert_eq!(round_currency(-2.345678), -2.35);
/// assert_eq!(round_currency(2.675), 2.67);
/// ```
pub fn round_currency(amount: f64) -> f64 {
    Decimal::from_f64_retain(amount)
        .map(|exact| exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .map(|rounded| rounded.mantissa() as f64 / 10f64.powi(rounded.scale() as i32))
        .unwrap_or(amount)
}

/// Rounds to the nearest integer, halves toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    // The fractional part of an f64 is always exactly representable.
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount in currency units with two decimals, e.g. `1234.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_revenue_exact_amounts() {
        assert_eq!(Money::from_revenue(0.0).cents(), 0);
        assert_eq!(Money::from_revenue(200.0).cents(), 20000);
        assert_eq!(Money::from_revenue(10.99).cents(), 1099);
    }

    #[test]
    fn test_from_revenue_epsilon_correction() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(Money::from_revenue(1.005).cents(), 101);
        // 0.1 + 0.2 drift must not leak into the cents value
        assert_eq!(Money::from_revenue(0.1 + 0.2).cents(), 30);
    }

    #[test]
    fn test_from_revenue_negative_amounts() {
        // Discounts above 100% produce negative revenue
        assert_eq!(Money::from_revenue(-12.5).cents(), -1250);
        assert_eq!(Money::from_revenue(-0.125).cents(), -12);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.4999), 2.0);
    }

    #[test]
    fn test_to_currency() {
        assert_eq!(Money::from_cents(20000).to_currency(), 200.0);
        assert_eq!(Money::from_cents(1).to_currency(), 0.01);
        assert_eq!(Money::from_cents(0).to_currency(), 0.0);
    }

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(100.0), 100.0);
        assert_eq!(round_currency(15.004), 15.0);
        assert_eq!(round_currency(15.006), 15.01);
        assert_eq!(round_currency(-0.126), -0.13);
    }

    #[test]
    fn test_round_currency_uses_exact_decimal_value() {
        // Both are stored just below the half-cent.
        assert_eq!(round_currency(2.675), 2.67);
        assert_eq!(round_currency(1.115), 1.11);
        assert_eq!(round_currency(1.005), 1.0);
        // Exact binary halves round away from zero.
        assert_eq!(round_currency(0.125), 0.13);
        assert_eq!(round_currency(-0.125), -0.13);
        assert_eq!(round_currency(16.609500000000004), 16.61);
    }

    #[test]
    fn test_round_currency_non_finite_passthrough() {
        assert!(round_currency(f64::NAN).is_nan());
        assert_eq!(round_currency(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);

        assert_eq!((a + b).cents(), 1250);

        let mut c = a;
        c += b;
        c += Money::from_cents(-50);
        assert_eq!(c.cents(), 1200);
        assert!(Money::default().is_zero());
    }
}
