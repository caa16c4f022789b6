//! Tanuki Admin - API Server Binary
//!
//! This binary starts the HTTP API server for the financial core.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin tanuki-api
//!
//! # Run with environment variables
//! TANUKI_HOST=0.0.0.0 TANUKI_PORT=8080 TANUKI_DATA_DIR=./data cargo run --bin tanuki-api
//! ```
//!
//! # Environment Variables
//!
//! * `TANUKI_HOST` - Server host (default: 0.0.0.0)
//! * `TANUKI_PORT` - Server port (default: 8080)
//! * `TANUKI_DATA_DIR` - Directory holding the document-store exports (default: ./data)
//! * `TANUKI_REPORTING_TIMEZONE` - Timezone movements bucket in (default: Europe/Madrid)
//! * `TANUKI_REPORTING_CURRENCY` - Currency code for aggregated amounts (default: EUR)
//! * `TANUKI_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use interface_api::{config::ApiConfig, create_router, store::JsonDocumentStore, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, materializes the document
/// store, and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded from environment
/// - The document store cannot be read
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = load_config();

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        data_dir = %config.data_dir.display(),
        "Starting Tanuki Admin API Server"
    );

    // Materialize the document-store exports
    let store = Arc::new(
        JsonDocumentStore::load(&config.data_dir).context("loading document store")?,
    );

    // Create the API router
    let state = AppState::new(store, config.clone());
    let app = create_router(state);

    // Parse server address
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("parsing server address")?;

    tracing::info!(%addr, "Server listening");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to default values if environment variables are not set.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| {
        // Fall back to individual env vars or defaults
        let defaults = ApiConfig::default();
        ApiConfig {
            host: std::env::var("TANUKI_HOST").unwrap_or(defaults.host),
            port: std::env::var("TANUKI_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            data_dir: std::env::var("TANUKI_DATA_DIR")
                .map(Into::into)
                .unwrap_or(defaults.data_dir),
            reporting_timezone: std::env::var("TANUKI_REPORTING_TIMEZONE")
                .unwrap_or(defaults.reporting_timezone),
            reporting_currency: std::env::var("TANUKI_REPORTING_CURRENCY")
                .unwrap_or(defaults.reporting_currency),
            log_level: std::env::var("TANUKI_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
        }
    })
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
