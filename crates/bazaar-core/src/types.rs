//! # Domain Types
//!
//! Shared value types used across the checkout flow.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │    LineItem     │   │   PricingBreakdown   │   │    TaxRate      │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  item_id        │   │  subtotal            │   │  bps (u32)      │  │
//! │  │  unit_price     │──►│  fees, gst           │◄──│  1800 = 18%     │  │
//! │  │  quantity       │   │  discount, wallet    │   └─────────────────┘  │
//! │  │  personalized   │   │  total               │                        │
//! │  └─────────────────┘   └──────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Search and partner types live next to their schemas in [`crate::search`]
//! and [`crate::partner`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so 1800 bps = 18% GST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One order entry at checkout.
///
/// The unit price is the listed, GST-inclusive price frozen when the item
/// entered the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub item_id: String,
    pub unit_price: Money,
    pub quantity: i64,
    /// Customer asked for a customization (engraving, gift note, etc.).
    #[serde(default)]
    pub personalized: bool,
}

impl LineItem {
    /// Creates a non-personalized line item.
    pub fn new(item_id: impl Into<String>, unit_price: Money, quantity: i64) -> Self {
        LineItem {
            item_id: item_id.into(),
            unit_price,
            quantity,
            personalized: false,
        }
    }

    /// Marks the line as personalized.
    pub fn personalized(mut self) -> Self {
        self.personalized = true;
        self
    }
}

// =============================================================================
// Pricing Breakdown
// =============================================================================

/// Cost breakdown shown on the checkout sheet and handed verbatim to payment.
///
/// ## Invariant
/// `total = subtotal + personalization_charges + delivery_fee + platform_fee
///  + insurance_fee + gst - discount - wallet_discount` and `total >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    pub subtotal: Money,
    pub personalization_charges: Money,
    pub delivery_fee: Money,
    pub platform_fee: Money,
    /// High-value order surcharge.
    pub insurance_fee: Money,
    pub gst: Money,
    pub discount: Money,
    pub wallet_discount: Money,
    pub total: Money,
}

impl PricingBreakdown {
    /// Everything charged before coupon and wallet deductions.
    pub fn gross(&self) -> Money {
        self.subtotal
            + self.personalization_charges
            + self.delivery_fee
            + self.platform_fee
            + self.insurance_fee
            + self.gst
    }

    /// Checks the breakdown invariant.
    pub fn is_balanced(&self) -> bool {
        self.total == self.gross() - self.discount - self.wallet_discount
            && !self.total.is_negative()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1800);
        assert_eq!(rate.bps(), 1800);
        assert_eq!(TaxRate::default().bps(), 0);
    }

    #[test]
    fn test_tax_rate_serializes_as_bps() {
        assert_eq!(serde_json::to_string(&TaxRate::from_bps(500)).unwrap(), "500");
    }

    #[test]
    fn test_line_item_deserializes_camel_case() {
        let item: LineItem = serde_json::from_str(
            r#"{"itemId":"sku-1","unitPrice":24900,"quantity":2}"#,
        )
        .unwrap();
        assert_eq!(item, LineItem::new("sku-1", Money::from_paise(24_900), 2));
        assert!(!item.personalized);
    }

    #[test]
    fn test_breakdown_balance() {
        let mut breakdown = PricingBreakdown {
            subtotal: Money::from_paise(10_000),
            delivery_fee: Money::from_paise(2_900),
            platform_fee: Money::from_paise(900),
            gst: Money::from_paise(684),
            discount: Money::from_paise(1_000),
            total: Money::from_paise(13_484),
            ..PricingBreakdown::default()
        };
        assert_eq!(breakdown.gross().paise(), 14_484);
        assert!(breakdown.is_balanced());

        breakdown.total = Money::from_paise(1);
        assert!(!breakdown.is_balanced());
    }
}
