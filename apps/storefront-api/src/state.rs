//! Shared, read-only handler state.

use std::sync::Arc;

use bazaar_core::gstin::{GstinRegistry, SyntacticRegistry};

use crate::config::ApiConfig;

/// State every handler can reach through `State<SharedState>`.
pub struct AppState {
    pub config: ApiConfig,
    pub registry: Box<dyn GstinRegistry + Send + Sync>,
}

impl AppState {
    /// State backed by the syntax-only GSTIN registry.
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            config,
            registry: Box::new(SyntacticRegistry),
        }
    }
}

pub type SharedState = Arc<AppState>;
