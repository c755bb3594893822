//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Returns 200 if the service is ready to accept traffic.
/// The dataset loads before the listener binds, so readiness follows
/// from the table being populated.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match check_dataset_health(&state) {
        true => StatusCode::OK,
        false => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
///
/// Full health status with dataset details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let dataset_ok = check_dataset_health(&state);

    let dataset_status = if dataset_ok { "ok" } else { "error" };
    let overall_status = if dataset_ok { "healthy" } else { "unhealthy" };

    Json(HealthResponse {
        status: overall_status.to_string(),
        dataset: dataset_status.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: state.table.len(),
        sites: state.table.summary().sites.len(),
    })
}

/// Check dataset health
fn check_dataset_health(state: &AppState) -> bool {
    // An empty table cannot exist past startup, but the probe still
    // verifies it rather than assuming.
    !state.table.is_empty()
}
