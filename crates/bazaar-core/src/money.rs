//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A checkout total that drifts by a paisa between the cart sheet and    │
//! │  the payment gateway fails reconciliation.                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    ₹12.34 is stored as 1234 paise, every sum is exact                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bazaar_core::money::Money;
//!
//! let price = Money::from_paise(24_900); // ₹249.00
//! let line = price.checked_mul_quantity(2).unwrap(); // ₹498.00
//! assert_eq!(line.paise(), 49_800);
//! assert_eq!(line.to_string(), "₹498.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paise (1/100 of a rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: Coupon and wallet inputs may arrive negative and are
///   clamped by the pricing calculator rather than rejected at parse time
/// - **Single field tuple struct**: Serializes as a bare JSON number
///
/// ## Where Money is Used
/// ```text
/// LineItem.unit_price ──► subtotal ──┐
/// PricingConfig fees ────────────────┼──► PricingBreakdown.total ──► payment
/// coupon / wallet ───────────────────┘
/// PartnerUpdate.delivery_fee (partner's own delivery charge)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(49).paise(), 4_900);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax at `rate`, rounding half up to the nearest paisa.
    ///
    /// Returns `None` when the tax does not fit in an `i64`.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`. The +5000 is the
    /// half-unit that makes the division round instead of truncate.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::money::Money;
    /// use bazaar_core::types::TaxRate;
    ///
    /// let fees = Money::from_paise(8_700);   // ₹87.00 of service fees
    /// let gst = fees.calculate_tax(TaxRate::from_bps(1800)); // 18%
    /// assert_eq!(gst, Some(Money::from_paise(1_566)));        // ₹15.66
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Option<Money> {
        // i128 keeps large amounts from overflowing the intermediate product
        let tax_paise = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        i64::try_from(tax_paise).ok().map(Money)
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::money::Money;
    ///
    /// let unit = Money::from_paise(2_999);
    /// assert_eq!(unit.checked_mul_quantity(3), Some(Money::from_paise(8_997)));
    /// assert_eq!(Money::from_paise(i64::MAX).checked_mul_quantity(2), None);
    /// ```
    #[inline]
    pub fn checked_mul_quantity(&self, qty: i64) -> Option<Money> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount as rupees, e.g. `₹1249.50`.
///
/// ## Note
/// Lakh/crore digit grouping is a frontend concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}


// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise_and_rupees() {
        let money = Money::from_paise(1099);
        assert_eq!(money.paise(), 1099);
        assert_eq!(money.rupees(), 10);
        assert_eq!(money.paise_part(), 99);

        assert_eq!(Money::from_rupees(5000).paise(), 500_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(1099)), "₹10.99");
        assert_eq!(format!("{}", Money::from_paise(500)), "₹5.00");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-₹5.50");
        assert_eq!(format!("{}", Money::zero()), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert!(b < a);
    }

    #[test]
    fn test_gst_rounds_half_up() {
        // ₹0.25 at 18% = 4.5 paise → 5
        let tax = Money::from_paise(25).calculate_tax(TaxRate::from_bps(1800));
        assert_eq!(tax, Some(Money::from_paise(5)));

        // ₹10.00 at 18% = ₹1.80 exactly
        let tax = Money::from_paise(1000).calculate_tax(TaxRate::from_bps(1800));
        assert_eq!(tax, Some(Money::from_paise(180)));
    }

    #[test]
    fn test_tax_out_of_range_is_none() {
        let huge = Money::from_paise(i64::MAX / 4);
        assert_eq!(huge.calculate_tax(TaxRate::from_bps(u32::MAX)), None);
        assert_eq!(
            Money::from_paise(i64::MIN).calculate_tax(TaxRate::from_bps(20_000)),
            None
        );
        // 100% of the largest amount still fits
        assert_eq!(
            Money::from_paise(i64::MAX).calculate_tax(TaxRate::from_bps(10_000)),
            Some(Money::from_paise(i64::MAX))
        );
    }

    #[test]
    fn test_checked_operations() {
        assert_eq!(
            Money::from_paise(299).checked_mul_quantity(3),
            Some(Money::from_paise(897))
        );
        assert_eq!(Money::from_paise(i64::MAX).checked_mul_quantity(2), None);
        assert_eq!(Money::from_paise(i64::MAX).checked_add(Money::from_paise(1)), None);
    }

    #[test]
    fn test_sign_checks() {
        assert!(!Money::zero().is_negative());
        assert!(Money::from_paise(-1).is_negative());
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Money::from_paise(4900)).unwrap();
        assert_eq!(json, "4900");
    }
}
