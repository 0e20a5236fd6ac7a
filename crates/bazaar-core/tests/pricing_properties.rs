//! Property tests for the checkout pricing calculator.

use proptest::prelude::*;

use bazaar_core::money::Money;
use bazaar_core::pricing::{compute_pricing, PricingConfig, PricingRequest};
use bazaar_core::types::LineItem;

fn line_item() -> impl Strategy<Value = LineItem> {
    (0i64..1_000_000, 0i64..500, any::<bool>()).prop_map(|(price, qty, personalized)| {
        LineItem {
            item_id: "item".to_string(),
            unit_price: Money::from_paise(price),
            quantity: qty,
            personalized,
        }
    })
}

fn pricing_request() -> impl Strategy<Value = PricingRequest> {
    (
        prop::collection::vec(line_item(), 0..8),
        any::<bool>(),
        0.0f64..50.0,
        -1_000_000i64..100_000_000,
        -1_000_000i64..100_000_000,
    )
        .prop_map(|(items, selected, distance, coupon, wallet)| PricingRequest {
            line_items: items,
            personalization_selected: selected,
            distance_km: distance,
            coupon_discount: Money::from_paise(coupon),
            wallet_amount: Money::from_paise(wallet),
        })
}

proptest! {
    #[test]
    fn prop_total_never_negative(req in pricing_request()) {
        let b = compute_pricing(&req, &PricingConfig::default()).unwrap();
        prop_assert!(!b.total.is_negative());
        prop_assert!(!b.discount.is_negative());
        prop_assert!(!b.wallet_discount.is_negative());
    }

    #[test]
    fn prop_breakdown_balanced(req in pricing_request()) {
        let b = compute_pricing(&req, &PricingConfig::default()).unwrap();
        prop_assert!(b.is_balanced());
    }

    #[test]
    fn prop_quantity_increase_is_monotonic(
        req in pricing_request().prop_filter("needs a line item", |r| !r.line_items.is_empty()),
        index in any::<prop::sample::Index>(),
        extra in 1i64..100,
    ) {
        let config = PricingConfig::default();
        let before = compute_pricing(&req, &config).unwrap();

        let mut bigger = req.clone();
        let i = index.index(bigger.line_items.len());
        bigger.line_items[i].quantity += extra;
        let after = compute_pricing(&bigger, &config).unwrap();

        prop_assert!(after.subtotal >= before.subtotal);
        prop_assert!(after.total >= before.total);
    }

    #[test]
    fn prop_delivery_fee_is_one_of_the_tiers(distance in 0.0f64..100.0) {
        let config = PricingConfig::default();
        let fee = config.delivery_fee_for(distance);
        let tiers = [Money::from_rupees(29), Money::from_rupees(49), Money::from_rupees(79)];
        prop_assert!(tiers.contains(&fee));
    }
}
