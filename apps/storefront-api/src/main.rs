//! # Bazaar Storefront API
//!
//! HTTP server for marketplace validation and checkout pricing.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing     RUST_LOG or the default filter                    │
//! │  2. ApiConfig::load  env vars, pricing overrides validated             │
//! │  3. bind             BAZAAR_BIND_ADDR:BAZAAR_PORT                      │
//! │  4. serve            until Ctrl+C / SIGTERM                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use bazaar_storefront_api::config::ApiConfig;
use bazaar_storefront_api::state::AppState;
use bazaar_storefront_api::{init_tracing, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Bazaar storefront API...");

    let config = ApiConfig::load()?;
    info!(
        addr = %config.bind_address(),
        gst_bps = config.pricing.gst_rate.bps(),
        platform_fee = %config.pricing.platform_fee,
        "Configuration loaded"
    );

    let bind_addr = config.bind_address();
    let state = Arc::new(AppState::new(config));
    let app = router(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Storefront API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(?e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
