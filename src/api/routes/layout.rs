//! Layout Route
//!
//! Serves the control and binding description the page builds
//! itself from.
//!
//! - GET /api/v1/layout - The layout description

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::layout::LayoutSpec;

/// GET /api/v1/layout
///
/// The static layout built at startup: dropdown options, slider
/// bounds and marks, chart outputs, and the control bindings.
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<LayoutSpec> {
    Json((*state.layout).clone())
}
