//! # Bazaar Storefront API
//!
//! HTTP surface the web frontend uses for validation and checkout pricing.
//!
//! ## Module Organization
//! ```text
//! bazaar_storefront_api/
//! ├── lib.rs          ◄─── You are here (router & tracing setup)
//! ├── main.rs         ◄─── Binary entry point
//! ├── config.rs       ◄─── Environment-driven configuration
//! ├── state.rs        ◄─── Shared handler state
//! ├── error.rs        ◄─── API error type and HTTP mapping
//! └── handlers/       ◄─── One module per resource
//! ```
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Browser ──► axum Router ──► handler ──► bazaar-core ──► JSON response  │
//! │                                  │                                      │
//! │                                  └── ApiError (422 / 500) on failure   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::routing::{get, patch, post};
use axum::Router;
use tracing_subscriber::EnvFilter;

use crate::handlers::{gstin, health, partner, pricing, search, sla};
use crate::state::SharedState;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,bazaar=debug,tower_http=warn";

/// Builds the application router.
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/gstin/validate", post(gstin::validate))
        .route("/api/search", get(search::search))
        .route("/api/partners", post(partner::register))
        .route("/api/partners/{id}", patch(partner::update))
        .route("/api/pricing/quote", post(pricing::quote))
        .route("/api/sla", get(sla::sla))
        .with_state(state)
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - ERROR: requests that failed on our side
/// - WARN: rejected requests (validation, business rules)
/// - INFO: startup, shutdown, accepted registrations
/// - DEBUG: per-request detail (quotes, search parameters)
///
/// Set `RUST_LOG` to override, e.g. `RUST_LOG=debug`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
