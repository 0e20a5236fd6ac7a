//! # Pricing Module
//!
//! Computes the checkout cost breakdown for an order.
//!
//! ## Calculation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. subtotal          Σ unit_price × quantity                           │
//! │  2. personalization   fee × personalized lines (if customer opted in)  │
//! │  3. delivery          slab fee by distance (flat, no per-km part)      │
//! │  4. platform          flat fee, once per order                         │
//! │  5. insurance         flat fee when subtotal > threshold               │
//! │  6. gst               rate × (2 + 3 + 4 + 5)                           │
//! │  ───────────────────────────────────────────── gross                   │
//! │  7. discount          coupon, clamped to [0, gross]                    │
//! │  8. wallet            wallet balance, clamped to [0, gross - discount] │
//! │  ───────────────────────────────────────────── total (never negative)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Delivery Slabs (defaults)
//! ```text
//!   0 km ─────────── 3.0 km ─────────── 5.0 km ───────────────►
//!        ₹29 (incl. 3.0)      ₹49 (incl. 5.0)       ₹79
//! ```
//!
//! Item prices are GST-inclusive list prices, so GST is charged only on the
//! marketplace's own service components.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationErrors};
use crate::money::Money;
use crate::types::{LineItem, PricingBreakdown, TaxRate};
use crate::validation::{
    validate_non_negative, validate_non_negative_measure, validate_non_negative_money,
};

// =============================================================================
// Configuration
// =============================================================================

/// One delivery tier: orders up to and including `max_km` pay `fee`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeliverySlab {
    pub max_km: f64,
    pub fee: Money,
}

/// Fee schedule used by [`compute_pricing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Charged once per personalized line item.
    pub personalization_fee: Money,
    /// Charged once per order.
    pub platform_fee: Money,
    /// Ascending by `max_km`.
    pub delivery_slabs: Vec<DeliverySlab>,
    /// Charged beyond the last slab.
    pub far_delivery_fee: Money,
    /// Subtotals strictly above this pay `insurance_fee`.
    pub insurance_threshold: Money,
    pub insurance_fee: Money,
    pub gst_rate: TaxRate,
}

impl Default for PricingConfig {
    /// ## Default Values
    /// - Personalization: ₹49 per personalized line
    /// - Platform fee: ₹9
    /// - Delivery: ≤3 km ₹29, ≤5 km ₹49, beyond ₹79
    /// - Insurance: ₹99 above a ₹5,000 subtotal
    /// - GST: 18%
    fn default() -> Self {
        PricingConfig {
            personalization_fee: Money::from_rupees(49),
            platform_fee: Money::from_rupees(9),
            delivery_slabs: vec![
                DeliverySlab {
                    max_km: 3.0,
                    fee: Money::from_rupees(29),
                },
                DeliverySlab {
                    max_km: 5.0,
                    fee: Money::from_rupees(49),
                },
            ],
            far_delivery_fee: Money::from_rupees(79),
            insurance_threshold: Money::from_rupees(5_000),
            insurance_fee: Money::from_rupees(99),
            gst_rate: TaxRate::from_bps(1800),
        }
    }
}

impl PricingConfig {
    /// Flat delivery fee for a distance.
    ///
    /// Slab upper bounds are inclusive: exactly 3.0 km is still the first
    /// tier.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::money::Money;
    /// use bazaar_core::pricing::PricingConfig;
    ///
    /// let config = PricingConfig::default();
    /// assert_eq!(config.delivery_fee_for(3.0), Money::from_rupees(29));
    /// assert_eq!(config.delivery_fee_for(3.1), Money::from_rupees(49));
    /// assert_eq!(config.delivery_fee_for(5.1), Money::from_rupees(79));
    /// ```
    pub fn delivery_fee_for(&self, distance_km: f64) -> Money {
        self.delivery_slabs
            .iter()
            .find(|slab| distance_km <= slab.max_km)
            .map(|slab| slab.fee)
            .unwrap_or(self.far_delivery_fee)
    }

    /// Checks the schedule for internal consistency.
    ///
    /// ## Rules
    /// - Every fee and the insurance threshold are non-negative
    /// - Slab limits are finite, positive and strictly ascending
    /// - GST rate is at most 100%
    pub fn validate(&self) -> CoreResult<()> {
        let fees = [
            ("personalization fee", self.personalization_fee),
            ("platform fee", self.platform_fee),
            ("far delivery fee", self.far_delivery_fee),
            ("insurance threshold", self.insurance_threshold),
            ("insurance fee", self.insurance_fee),
        ];
        for (name, fee) in fees {
            if fee.is_negative() {
                return Err(invalid_config(format!("{} must not be negative", name)));
            }
        }

        let mut previous = 0.0;
        for slab in &self.delivery_slabs {
            if !slab.max_km.is_finite() || slab.max_km <= previous {
                return Err(invalid_config(
                    "delivery slab limits must be finite, positive and ascending",
                ));
            }
            if slab.fee.is_negative() {
                return Err(invalid_config("delivery slab fee must not be negative"));
            }
            previous = slab.max_km;
        }

        if self.gst_rate.bps() > 10_000 {
            return Err(invalid_config("GST rate cannot exceed 100%"));
        }

        Ok(())
    }
}

fn invalid_config(reason: impl Into<String>) -> CoreError {
    CoreError::InvalidConfig {
        reason: reason.into(),
    }
}

// =============================================================================
// Request
// =============================================================================

/// Everything checkout knows about an order when it asks for a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    pub line_items: Vec<LineItem>,
    /// Customer opted into personalization at checkout. When false,
    /// per-line personalization flags are ignored.
    #[serde(default)]
    pub personalization_selected: bool,
    pub distance_km: f64,
    /// Coupon value; negative input counts as no coupon.
    #[serde(default)]
    pub coupon_discount: Money,
    /// Wallet balance the customer chose to apply.
    #[serde(default)]
    pub wallet_amount: Money,
}

// =============================================================================
// Calculation
// =============================================================================

/// Computes the cost breakdown for an order.
///
/// ## Errors
/// - `CoreError::InvalidConfig` if `config` fails [`PricingConfig::validate`]
/// - `CoreError::Validation` if any quantity or unit price is negative, or
///   the distance is negative or not finite (every offending field is listed)
/// - `CoreError::AmountOverflow` if an amount does not fit in 64 bits
///
/// No partial breakdown is ever returned.
///
/// ## Example
/// ```rust
/// use bazaar_core::money::Money;
/// use bazaar_core::pricing::{compute_pricing, PricingConfig, PricingRequest};
/// use bazaar_core::types::LineItem;
///
/// let request = PricingRequest {
///     line_items: vec![LineItem::new("cake", Money::from_rupees(600), 1).personalized()],
///     personalization_selected: true,
///     distance_km: 4.0,
///     coupon_discount: Money::from_rupees(100),
///     wallet_amount: Money::zero(),
/// };
/// let b = compute_pricing(&request, &PricingConfig::default()).unwrap();
///
/// assert_eq!(b.personalization_charges, Money::from_rupees(49));
/// assert_eq!(b.delivery_fee, Money::from_rupees(49));
/// assert_eq!(b.discount, Money::from_rupees(100));
/// assert!(b.is_balanced());
/// ```
pub fn compute_pricing(
    request: &PricingRequest,
    config: &PricingConfig,
) -> CoreResult<PricingBreakdown> {
    config.validate()?;
    validate_request(request)?;

    let mut subtotal = Money::zero();
    for item in &request.line_items {
        let line_total = item
            .unit_price
            .checked_mul_quantity(item.quantity)
            .ok_or(CoreError::AmountOverflow { context: "line total" })?;
        subtotal = subtotal
            .checked_add(line_total)
            .ok_or(CoreError::AmountOverflow { context: "subtotal" })?;
    }

    let personalized_lines = if request.personalization_selected {
        request
            .line_items
            .iter()
            .filter(|item| item.personalized)
            .count() as i64
    } else {
        0
    };
    let personalization_charges = config
        .personalization_fee
        .checked_mul_quantity(personalized_lines)
        .ok_or(CoreError::AmountOverflow {
            context: "personalization charges",
        })?;

    let delivery_fee = config.delivery_fee_for(request.distance_km);
    let platform_fee = config.platform_fee;
    let insurance_fee = if subtotal > config.insurance_threshold {
        config.insurance_fee
    } else {
        Money::zero()
    };

    let taxable = sum_checked(
        &[personalization_charges, delivery_fee, platform_fee, insurance_fee],
        "taxable amount",
    )?;
    let gst = taxable
        .calculate_tax(config.gst_rate)
        .ok_or(CoreError::AmountOverflow { context: "gst" })?;

    let gross = sum_checked(&[subtotal, taxable, gst], "gross total")?;

    let discount = request.coupon_discount.max(Money::zero()).min(gross);
    let wallet_discount = request
        .wallet_amount
        .max(Money::zero())
        .min(gross - discount);
    let total = gross - discount - wallet_discount;

    Ok(PricingBreakdown {
        subtotal,
        personalization_charges,
        delivery_fee,
        platform_fee,
        insurance_fee,
        gst,
        discount,
        wallet_discount,
        total,
    })
}

fn validate_request(request: &PricingRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for (i, item) in request.line_items.iter().enumerate() {
        errors.collect(validate_non_negative(
            &format!("lineItems[{}].quantity", i),
            item.quantity,
        ));
        errors.collect(validate_non_negative_money(
            &format!("lineItems[{}].unitPrice", i),
            item.unit_price,
        ));
    }
    errors.collect(validate_non_negative_measure("distanceKm", request.distance_km));

    errors.into_result(())
}

fn sum_checked(amounts: &[Money], context: &'static str) -> CoreResult<Money> {
    amounts.iter().try_fold(Money::zero(), |acc, amount| {
        acc.checked_add(*amount)
            .ok_or(CoreError::AmountOverflow { context })
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn request(items: Vec<LineItem>, distance_km: f64) -> PricingRequest {
        PricingRequest {
            line_items: items,
            personalization_selected: false,
            distance_km,
            coupon_discount: Money::zero(),
            wallet_amount: Money::zero(),
        }
    }

    fn price(req: &PricingRequest) -> PricingBreakdown {
        compute_pricing(req, &PricingConfig::default()).unwrap()
    }

    #[test]
    fn test_basic_breakdown() {
        // 2 × ₹250 at 2 km
        let b = price(&request(
            vec![LineItem::new("atta", Money::from_rupees(250), 2)],
            2.0,
        ));

        assert_eq!(b.subtotal, Money::from_rupees(500));
        assert_eq!(b.personalization_charges, Money::zero());
        assert_eq!(b.delivery_fee, Money::from_rupees(29));
        assert_eq!(b.platform_fee, Money::from_rupees(9));
        assert_eq!(b.insurance_fee, Money::zero());
        // 18% of ₹38 = ₹6.84
        assert_eq!(b.gst, Money::from_paise(684));
        assert_eq!(b.total, Money::from_paise(54_484));
        assert!(b.is_balanced());
    }

    #[test]
    fn test_delivery_slab_boundaries() {
        let config = PricingConfig::default();
        assert_eq!(config.delivery_fee_for(0.0), Money::from_rupees(29));
        assert_eq!(config.delivery_fee_for(2.9), Money::from_rupees(29));
        assert_eq!(config.delivery_fee_for(3.0), Money::from_rupees(29));
        assert_eq!(config.delivery_fee_for(3.1), Money::from_rupees(49));
        assert_eq!(config.delivery_fee_for(5.0), Money::from_rupees(49));
        assert_eq!(config.delivery_fee_for(5.1), Money::from_rupees(79));
        assert_eq!(config.delivery_fee_for(42.0), Money::from_rupees(79));
    }

    #[test]
    fn test_personalization_per_line_not_per_unit() {
        let mut req = request(
            vec![
                LineItem::new("mug", Money::from_rupees(300), 3).personalized(),
                LineItem::new("card", Money::from_rupees(50), 1).personalized(),
                LineItem::new("ribbon", Money::from_rupees(20), 5),
            ],
            1.0,
        );
        req.personalization_selected = true;

        let b = price(&req);
        assert_eq!(b.personalization_charges, Money::from_rupees(98));
        assert!(b.is_balanced());
    }

    #[test]
    fn test_personalization_requires_opt_in() {
        let req = request(
            vec![LineItem::new("mug", Money::from_rupees(300), 1).personalized()],
            1.0,
        );
        assert_eq!(price(&req).personalization_charges, Money::zero());
    }

    #[test]
    fn test_insurance_strictly_above_threshold() {
        let at_threshold = price(&request(
            vec![LineItem::new("phone", Money::from_rupees(5_000), 1)],
            1.0,
        ));
        assert_eq!(at_threshold.insurance_fee, Money::zero());

        let above = price(&request(
            vec![LineItem::new("phone", Money::from_paise(500_001), 1)],
            1.0,
        ));
        assert_eq!(above.insurance_fee, Money::from_rupees(99));
        // GST covers the insurance fee too: 18% of (29 + 9 + 99) = ₹24.66
        assert_eq!(above.gst, Money::from_paise(2_466));
        assert!(above.is_balanced());
    }

    #[test]
    fn test_coupon_clamped_to_gross() {
        let mut req = request(vec![LineItem::new("tea", Money::from_rupees(10), 1)], 1.0);
        req.coupon_discount = Money::from_rupees(10_000);
        req.wallet_amount = Money::from_rupees(500);

        let b = price(&req);
        assert_eq!(b.discount, b.gross());
        assert_eq!(b.wallet_discount, Money::zero());
        assert_eq!(b.total, Money::zero());
        assert!(b.is_balanced());
    }

    #[test]
    fn test_wallet_applied_after_discount() {
        let mut req = request(vec![LineItem::new("rice", Money::from_rupees(100), 1)], 1.0);
        req.coupon_discount = Money::from_rupees(20);
        req.wallet_amount = Money::from_rupees(1_000);

        let b = price(&req);
        assert_eq!(b.discount, Money::from_rupees(20));
        assert_eq!(b.wallet_discount, b.gross() - Money::from_rupees(20));
        assert_eq!(b.total, Money::zero());
    }

    #[test]
    fn test_negative_coupon_and_wallet_ignored() {
        let mut req = request(vec![LineItem::new("rice", Money::from_rupees(100), 1)], 1.0);
        req.coupon_discount = Money::from_rupees(-50);
        req.wallet_amount = Money::from_rupees(-50);

        let b = price(&req);
        assert_eq!(b.discount, Money::zero());
        assert_eq!(b.wallet_discount, Money::zero());
        assert_eq!(b.total, b.gross());
    }

    #[test]
    fn test_empty_order_still_pays_fees() {
        let b = price(&request(vec![], 0.5));
        assert_eq!(b.subtotal, Money::zero());
        assert_eq!(b.total, b.gross());
        assert!(b.total > Money::zero());
    }

    #[test]
    fn test_rejects_negative_inputs() {
        let req = request(
            vec![
                LineItem::new("a", Money::from_rupees(10), -1),
                LineItem::new("b", Money::from_rupees(-10), 1),
            ],
            -2.0,
        );

        let errors = match compute_pricing(&req, &PricingConfig::default()) {
            Err(CoreError::Validation(errors)) => errors,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(errors.len(), 3);
        assert!(errors.for_field("lineItems[0].quantity").is_some());
        assert!(errors.for_field("lineItems[1].unitPrice").is_some());
        assert!(errors.for_field("distanceKm").is_some());
    }

    #[test]
    fn test_rejects_non_finite_distance() {
        let req = request(vec![], f64::NAN);
        assert!(matches!(
            compute_pricing(&req, &PricingConfig::default()),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_overflow_reported() {
        let req = request(vec![LineItem::new("x", Money::from_paise(i64::MAX), 2)], 1.0);
        assert!(matches!(
            compute_pricing(&req, &PricingConfig::default()),
            Err(CoreError::AmountOverflow { .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = PricingConfig::default();
        config.platform_fee = Money::from_rupees(-500);
        let mut req = request(vec![LineItem::new("tea", Money::from_rupees(10), 1)], 1.0);
        req.coupon_discount = Money::from_rupees(5);

        assert!(matches!(
            compute_pricing(&req, &config),
            Err(CoreError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_fee_overflow_reported() {
        // Large service fees at the 100% ceiling: the tax fits, the gross does not
        let mut config = PricingConfig::default();
        config.platform_fee = Money::from_paise(i64::MAX / 2);
        config.gst_rate = TaxRate::from_bps(10_000);

        assert!(matches!(
            compute_pricing(&request(vec![], 1.0), &config),
            Err(CoreError::AmountOverflow { .. })
        ));
    }

    #[test]
    fn test_request_from_json() {
        let req: PricingRequest = serde_json::from_str(
            r#"{"lineItems":[{"itemId":"a","unitPrice":1000,"quantity":2,"personalized":true}],
                "personalizationSelected":true,"distanceKm":3.5}"#,
        )
        .unwrap();
        assert_eq!(req.coupon_discount, Money::zero());

        let b = price(&req);
        assert_eq!(b.subtotal, Money::from_paise(2_000));
        assert_eq!(b.delivery_fee, Money::from_rupees(49));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(PricingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = PricingConfig::default();
        config.delivery_slabs.reverse();
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig { .. })));

        let mut config = PricingConfig::default();
        config.platform_fee = Money::from_paise(-1);
        assert!(config.validate().is_err());

        let mut config = PricingConfig::default();
        config.gst_rate = TaxRate::from_bps(10_001);
        assert!(config.validate().is_err());

        let mut config = PricingConfig::default();
        config.delivery_slabs[0].max_km = f64::INFINITY;
        assert!(config.validate().is_err());
    }
}
