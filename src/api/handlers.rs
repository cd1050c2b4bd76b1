//! HTTP request handlers for the OEE engine API.
//!
//! Two read-only endpoints back the presentation layer: the full
//! dashboard snapshot and the windowed financial-deviation view. Each
//! call computes a fresh snapshot; a caller needing freshness re-invokes
//! rather than canceling anything in flight.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::{compute_dashboard_snapshot, compute_financial_deviations};

use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(dashboard_handler))
        .route("/financials", get(financials_handler))
        .with_state(state)
}

/// Handler for GET /dashboard.
///
/// Computes and returns the full fleet snapshot.
async fn dashboard_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Computing dashboard snapshot");

    match compute_dashboard_snapshot(state.store(), state.config(), Utc::now()).await {
        Ok(snapshot) => {
            info!(
                correlation_id = %correlation_id,
                in_progress = snapshot.in_progress_count,
                delayed = snapshot.delayed_count,
                bottleneck = %snapshot.bottleneck_station,
                oee_pct = %snapshot.global_oee_pct,
                "Dashboard snapshot computed"
            );
            (StatusCode::OK, Json(snapshot)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Dashboard snapshot failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Query parameters for GET /financials.
#[derive(Debug, Deserialize)]
struct FinancialsQuery {
    /// The trailing activity window; falls back to the configured default.
    window_days: Option<u32>,
}

/// Handler for GET /financials.
///
/// Computes per-order financial deviations over a trailing window.
async fn financials_handler(
    State(state): State<AppState>,
    Query(query): Query<FinancialsQuery>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let window_days = query
        .window_days
        .unwrap_or(state.config().default_window_days);
    info!(
        correlation_id = %correlation_id,
        window_days,
        "Computing financial deviations"
    );

    match compute_financial_deviations(state.store(), window_days, Utc::now()).await {
        Ok(deviations) => {
            info!(
                correlation_id = %correlation_id,
                order_count = deviations.kpis.order_count,
                global_balance = %deviations.kpis.global_balance,
                "Financial deviations computed"
            );
            (StatusCode::OK, Json(deviations)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Financial deviations failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
