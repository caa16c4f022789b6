//! HTTP API Layer
//!
//! This crate provides the REST API for the Tanuki Admin financial core
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for the finance and inventory domains
//! - **DTOs**: Response objects carrying only plain numbers and display strings
//! - **Store**: Document-store adapter implementing the domain ports
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod store;

use std::sync::Arc;

use axum::{routing::get, Router};
use core_kernel::{DecimalEngine, HealthCheckable, Timezone};
use domain_finance::{HealthScorePolicy, MetricsCalculator, MovementSource};
use domain_inventory::InventorySource;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{finance, health, inventory};
use crate::store::JsonDocumentStore;

/// Application state shared across handlers
///
/// Everything here is either immutable or behind an `Arc`; handlers never
/// mutate shared state, so the aggregations stay safe under concurrent
/// requests without locking.
#[derive(Clone)]
pub struct AppState {
    pub movements: Arc<dyn MovementSource>,
    pub inventory: Arc<dyn InventorySource>,
    pub store_health: Arc<dyn HealthCheckable>,
    pub engine: DecimalEngine,
    pub timezone: Timezone,
    pub calculator: MetricsCalculator,
    pub config: ApiConfig,
}

impl AppState {
    /// Wires the document store into the domain ports with the default
    /// engine and health-score policy.
    pub fn new(store: Arc<JsonDocumentStore>, config: ApiConfig) -> Self {
        let engine = DecimalEngine::default();
        let timezone = config.timezone();
        let calculator = MetricsCalculator::new(engine, timezone, HealthScorePolicy::default());
        Self {
            movements: store.clone(),
            inventory: store.clone(),
            store_health: store,
            engine,
            timezone,
            calculator,
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no API prefix)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Finance routes
    let finance_routes = Router::new()
        .route("/summary", get(finance::summary))
        .route("/monthly", get(finance::monthly))
        .route("/daily", get(finance::daily))
        .route("/categories", get(finance::categories))
        .route("/cost-centers", get(finance::cost_centers));

    // Inventory routes
    let inventory_routes = Router::new()
        .route("/stock", get(inventory::stock))
        .route("/valuation", get(inventory::valuation_report));

    let api_routes = Router::new()
        .nest("/finance", finance_routes)
        .nest("/inventory", inventory_routes);

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
