//! # bazaar-core: Pure Business Logic for the Bazaar Marketplace
//!
//! Every rule the storefront, checkout and partner dashboard rely on lives
//! here as a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Bazaar Marketplace Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Frontend (customer / partner)            │   │
//! │  │    Browse ──► Cart ──► Checkout ──► Order tracking              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP / JSON                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    storefront-api (axum handlers)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ pricing │ │  gstin  │ │ search  │ │ partner │ │   sla   │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Hosted database/auth provider (persistence, sessions) ◄── external    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type in paise (no floating point!)
//! - [`types`] - Shared domain types (TaxRate, LineItem, PricingBreakdown)
//! - [`error`] - Field-tagged validation errors and domain errors
//! - [`validation`] - Single-field rules shared by the schemas
//! - [`gstin`] - GSTIN syntax validation
//! - [`search`] - Search query parsing with defaults and bounds
//! - [`partner`] - Partner registration and update schemas
//! - [`pricing`] - Checkout pricing breakdown
//! - [`sla`] - Preparation/delivery time display strings
//!
//! ## Example Usage
//!
//! ```rust
//! use bazaar_core::money::Money;
//! use bazaar_core::pricing::{compute_pricing, PricingConfig, PricingRequest};
//! use bazaar_core::types::LineItem;
//!
//! let request = PricingRequest {
//!     line_items: vec![LineItem::new("item-1", Money::from_rupees(250), 2)],
//!     personalization_selected: false,
//!     distance_km: 2.5,
//!     coupon_discount: Money::zero(),
//!     wallet_amount: Money::zero(),
//! };
//!
//! let breakdown = compute_pricing(&request, &PricingConfig::default()).unwrap();
//! assert_eq!(breakdown.subtotal, Money::from_rupees(500));
//! assert!(breakdown.is_balanced());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod gstin;
pub mod money;
pub mod partner;
pub mod pricing;
pub mod search;
pub mod sla;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ErrorKind, FieldError, ValidationError, ValidationErrors};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Length of a GSTIN (state code + PAN + entity + check characters).
pub const GSTIN_LENGTH: usize = 15;

/// Length of an Indian postal PIN code.
pub const PINCODE_LENGTH: usize = 6;

/// Minimum length for partner names, slugs and cities.
pub const MIN_PARTNER_FIELD_LEN: usize = 2;

/// Maximum length of the free-text search query.
pub const MAX_QUERY_LEN: usize = 200;

/// Maximum length of the category, tag and city search filters.
pub const MAX_FILTER_LEN: usize = 100;

/// Page size used when the caller does not supply `limit`.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Largest page size a single search may request.
///
/// ## Business Reason
/// Keeps the browse grid responsive on low-end phones and bounds the
/// payload the hosted database returns per request.
pub const MAX_SEARCH_LIMIT: u32 = 100;
