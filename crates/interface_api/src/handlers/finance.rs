//! Finance handlers
//!
//! Each handler materializes the movement set through the port, narrows it
//! to the requested window, and runs the pure aggregation. Nothing is
//! cached between requests.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use domain_finance::{
    category_rollup, cost_center_rollup, daily_buckets, monthly_buckets, MovementSource,
    ReportingWindow,
};
use serde::Deserialize;

use crate::dto::finance::{RollupResponse, SeriesResponse, SummaryResponse};
use crate::error::ApiError;
use crate::AppState;

/// Default chart cap for category slices.
const CATEGORY_TOP_N: usize = 8;
/// Default table cap for cost centers.
const COST_CENTER_TOP_N: usize = 10;

#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct RollupQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub limit: Option<usize>,
}

/// Health metrics for the requested window
pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let window = ReportingWindow::from_query(query.year, query.month)?;
    let movements = state.movements.movements().await?;
    let scoped = window.apply(movements, &state.timezone);

    let metrics = state.calculator.compute(&scoped, Utc::now());
    Ok(Json(SummaryResponse::from_metrics(
        &state.engine,
        state.config.reporting_currency.clone(),
        &metrics,
    )))
}

/// Monthly income/expense series
pub async fn monthly(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<SeriesResponse>, ApiError> {
    let window = ReportingWindow::from_query(query.year, query.month)?;
    let movements = state.movements.movements().await?;
    let scoped = window.apply(movements, &state.timezone);

    let buckets = monthly_buckets(&state.engine, &scoped, &state.timezone);
    Ok(Json(SeriesResponse::from_monthly(&state.engine, &buckets)))
}

/// Daily income/expense series
pub async fn daily(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<SeriesResponse>, ApiError> {
    let window = ReportingWindow::from_query(query.year, query.month)?;
    let movements = state.movements.movements().await?;
    let scoped = window.apply(movements, &state.timezone);

    let buckets = daily_buckets(&state.engine, &scoped, &state.timezone);
    Ok(Json(SeriesResponse::from_daily(&state.engine, &buckets)))
}

/// Category rollup, largest slices first
pub async fn categories(
    State(state): State<AppState>,
    Query(query): Query<RollupQuery>,
) -> Result<Json<RollupResponse>, ApiError> {
    let window = ReportingWindow::from_query(query.year, query.month)?;
    let movements = state.movements.movements().await?;
    let scoped = window.apply(movements, &state.timezone);

    let entries = category_rollup(
        &state.engine,
        &scoped,
        Some(query.limit.unwrap_or(CATEGORY_TOP_N)),
    );
    Ok(Json(RollupResponse::from_entries(&state.engine, &entries)))
}

/// Cost-center rollup, largest first
pub async fn cost_centers(
    State(state): State<AppState>,
    Query(query): Query<RollupQuery>,
) -> Result<Json<RollupResponse>, ApiError> {
    let window = ReportingWindow::from_query(query.year, query.month)?;
    let movements = state.movements.movements().await?;
    let scoped = window.apply(movements, &state.timezone);

    let entries = cost_center_rollup(
        &state.engine,
        &scoped,
        Some(query.limit.unwrap_or(COST_CENTER_TOP_N)),
    );
    Ok(Json(RollupResponse::from_entries(&state.engine, &entries)))
}
