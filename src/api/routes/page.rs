//! Page Route
//!
//! Serves the embedded dashboard page.
//!
//! - GET / - The single-page dashboard

use axum::response::Html;

use crate::ui::DASHBOARD_HTML;

/// GET /
///
/// The dashboard page. Static; all data arrives via the JSON API.
pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}
