//! Dashboard HTTP API
//!
//! HTTP layer for the launch dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - The dashboard page
//!
//! ## Layout
//! - `GET /api/v1/layout` - Control and binding description
//!
//! ## Charts
//! - `GET /api/v1/charts/:chart_id` - Build one chart for the given
//!   `site`, `low`, and `high` query parameters
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use launchboard::api::{serve, AppState, ServerConfig};
//! use launchboard::dataset::DatasetSource;
//! use launchboard::reactive::standard_registry;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = DatasetSource::new("https://example.com/launches.csv", Duration::from_secs(30));
//!     let table = source.load().await?;
//!
//!     let state = AppState::new(table, standard_registry(), ServerConfig::default());
//!     serve(state).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{AppState, ServerConfig};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Layout routes
        .route("/layout", get(routes::layout::get_layout))
        // Chart dispatch routes
        .route("/charts/:chart_id", get(routes::charts::get_chart));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::dashboard_page))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Launch dashboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Launch dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, LaunchTable, Outcome};
    use crate::reactive::standard_registry;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("SiteA", 500.0, Outcome::Success, "v1"),
            LaunchRecord::new("SiteA", 700.0, Outcome::Failure, "v1"),
            LaunchRecord::new("SiteB", 3000.0, Outcome::Success, "v2"),
        ])
        .unwrap();

        let state = AppState::new(table, standard_registry(), ServerConfig::default());
        build_router(state)
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_page_served_at_root() {
        let response = send_get(create_test_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8_lossy(&bytes).to_string();
        assert!(page.contains("id=\"site-dropdown\""));
        assert!(page.contains("id=\"success-pie-chart\""));
        assert!(page.contains("id=\"success-payload-scatter-chart\""));
    }

    #[tokio::test]
    async fn test_layout_reflects_dataset() {
        let response = send_get(create_test_app(), "/api/v1/layout").await;
        assert_eq!(response.status(), StatusCode::OK);

        let layout = body_json(response).await;
        let values: Vec<&str> = layout["site_dropdown"]["options"]
            .as_array()
            .unwrap()
            .iter()
            .map(|option| option["value"].as_str().unwrap())
            .collect();
        assert_eq!(values, vec!["all", "SiteA", "SiteB"]);
        assert_eq!(layout["payload_slider"]["value"][0], 500.0);
        assert_eq!(layout["payload_slider"]["value"][1], 3000.0);
        assert_eq!(layout["bindings"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_pie_chart_all_sites() {
        let response = send_get(create_test_app(), "/api/v1/charts/success-pie-chart").await;
        assert_eq!(response.status(), StatusCode::OK);

        let spec = body_json(response).await;
        assert_eq!(spec["data"][0]["type"], "pie");
        assert_eq!(spec["data"][0]["labels"], serde_json::json!(["SiteA", "SiteB"]));
        assert_eq!(spec["data"][0]["values"], serde_json::json!([1, 1]));
        assert_eq!(spec["layout"]["title"], "Total Success Launches By Site");
    }

    #[tokio::test]
    async fn test_pie_chart_single_site() {
        let response = send_get(
            create_test_app(),
            "/api/v1/charts/success-pie-chart?site=SiteA",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let spec = body_json(response).await;
        assert_eq!(
            spec["data"][0]["labels"],
            serde_json::json!(["Success", "Failure"])
        );
        assert_eq!(spec["data"][0]["values"], serde_json::json!([1, 1]));
        assert_eq!(spec["layout"]["title"], "Successful Launches for SiteA");
    }

    #[tokio::test]
    async fn test_scatter_defaults_to_dataset_bounds() {
        let response = send_get(
            create_test_app(),
            "/api/v1/charts/success-payload-scatter-chart",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let spec = body_json(response).await;
        assert_eq!(
            spec["layout"]["xaxis"]["range"],
            serde_json::json!([500.0, 3000.0])
        );

        let names: Vec<&str> = spec["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|trace| trace["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["v1", "v2"]);
    }

    #[tokio::test]
    async fn test_scatter_range_sets_window_only() {
        let response = send_get(
            create_test_app(),
            "/api/v1/charts/success-payload-scatter-chart?low=1000&high=2000",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let spec = body_json(response).await;
        assert_eq!(
            spec["layout"]["xaxis"]["range"],
            serde_json::json!([1000.0, 2000.0])
        );

        // All three rows stay plotted even though none fall inside the window
        let points: usize = spec["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|trace| trace["x"].as_array().unwrap().len())
            .sum();
        assert_eq!(points, 3);
    }

    #[tokio::test]
    async fn test_unknown_chart_is_404() {
        let response = send_get(create_test_app(), "/api/v1/charts/no-such-chart").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_inverted_range_is_400() {
        let response = send_get(
            create_test_app(),
            "/api/v1/charts/success-payload-scatter-chart?low=500&high=100",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_bound_is_400() {
        let response = send_get(
            create_test_app(),
            "/api/v1/charts/success-pie-chart?low=abc",
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = send_get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = send_get(create_test_app(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = send_get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["records"], 3);
        assert_eq!(body["sites"], 2);
    }
}
