//! # HTTP Handlers
//!
//! One module per resource. Handlers do no business logic of their own:
//! they extract the request, call bazaar-core and map the result.
//!
//! ## Handler Organization
//! ```text
//! handlers/
//! ├── health.rs    ◄─── GET   /health
//! ├── gstin.rs     ◄─── POST  /api/gstin/validate
//! ├── search.rs    ◄─── GET   /api/search
//! ├── partner.rs   ◄─── POST  /api/partners, PATCH /api/partners/{id}
//! ├── pricing.rs   ◄─── POST  /api/pricing/quote
//! └── sla.rs       ◄─── GET   /api/sla
//! ```

pub mod gstin;
pub mod health;
pub mod partner;
pub mod pricing;
pub mod search;
pub mod sla;
