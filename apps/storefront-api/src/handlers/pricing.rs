//! # Pricing Handler
//!
//! Checkout asks for a quote whenever the cart, address or coupon changes.
//!
//! ```text
//! ┌──────────┐  PricingRequest  ┌──────────────────┐  PricingBreakdown  ┌───────────┐
//! │ Checkout │ ───────────────► │ compute_pricing  │ ─────────────────► │ PriceQuote│
//! └──────────┘                  │ (configured fees)│                    │ + id, time│
//!                               └──────────────────┘                    └───────────┘
//! ```
//!
//! The quote ID and timestamp let checkout show which quote a payment was
//! made against.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use bazaar_core::pricing::{compute_pricing, PricingRequest};
use bazaar_core::types::PricingBreakdown;

use crate::error::ApiResult;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub quote_id: Uuid,
    pub quoted_at: DateTime<Utc>,
    pub breakdown: PricingBreakdown,
}

/// `POST /api/pricing/quote`
pub async fn quote(
    State(state): State<SharedState>,
    payload: Result<Json<PricingRequest>, JsonRejection>,
) -> ApiResult<Json<PriceQuote>> {
    let Json(request) = payload?;
    let breakdown = compute_pricing(&request, &state.config.pricing)?;
    let quote = PriceQuote {
        quote_id: Uuid::new_v4(),
        quoted_at: Utc::now(),
        breakdown,
    };

    debug!(
        quote_id = %quote.quote_id,
        lines = request.line_items.len(),
        total = %quote.breakdown.total,
        "Quote computed"
    );
    Ok(Json(quote))
}
