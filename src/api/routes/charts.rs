//! Chart Routes
//!
//! Dispatch endpoint for the reactive charts. Each control change on
//! the page turns into one GET per affected chart; the handler
//! registry decides which builder runs.
//!
//! - GET /api/v1/charts/:chart_id - Build one chart for the current filters

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ChartQuery;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::charts::ChartSpec;
use crate::reactive::FilterState;

/// GET /api/v1/charts/:chart_id
///
/// Validate the control values, then dispatch to the registered
/// handler for `chart_id`. Unknown ids are 404; malformed or invalid
/// filter values are 400. A valid site that matches no rows is not an
/// error and yields a zero-result chart.
pub async fn get_chart(
    State(state): State<Arc<AppState>>,
    Path(chart_id): Path<String>,
    Query(params): Query<ChartQuery>,
) -> ApiResult<Json<ChartSpec>> {
    if !state.registry.contains(&chart_id) {
        return Err(ApiError::NotFound(format!(
            "Chart '{}' is not registered",
            chart_id
        )));
    }

    let (low, high) = params.payload_bounds().map_err(ApiError::Validation)?;
    let filter =
        FilterState::from_controls(params.site.as_deref(), low, high, state.table.summary())
            .map_err(ApiError::Validation)?;

    tracing::debug!(chart = %chart_id, filter = ?filter, "Dispatching chart request");

    let spec = state
        .registry
        .dispatch(&chart_id, &state.table, &filter)
        .ok_or_else(|| ApiError::Internal(format!("Handler for '{}' vanished", chart_id)))?;

    Ok(Json(spec))
}
