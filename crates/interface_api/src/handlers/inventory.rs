//! Inventory handlers

use axum::extract::State;
use axum::Json;
use domain_inventory::{stock_matrix, valuation, InventorySource};

use crate::dto::inventory::{StockResponse, ValuationResponse};
use crate::error::ApiError;
use crate::AppState;

/// Stock matrix across all warehouses
pub async fn stock(State(state): State<AppState>) -> Result<Json<StockResponse>, ApiError> {
    let records = state.inventory.records().await?;
    let warehouses = state.inventory.warehouses().await?;

    let matrix = stock_matrix(&state.engine, &records, &warehouses);
    Ok(Json(StockResponse::from_matrix(&state.engine, &matrix)))
}

/// Inventory valuation report
pub async fn valuation_report(
    State(state): State<AppState>,
) -> Result<Json<ValuationResponse>, ApiError> {
    let records = state.inventory.records().await?;

    let report = valuation(&state.engine, &records);
    Ok(Json(ValuationResponse::from_report(&state.engine, &report)))
}
