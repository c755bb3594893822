//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::dataset::LaunchTable;
use crate::layout::{build_layout, LayoutSpec};
use crate::reactive::HandlerRegistry;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The dataset, loaded once at startup and never mutated
    pub table: Arc<LaunchTable>,
    /// Registration table mapping chart outputs to handlers
    pub registry: Arc<HandlerRegistry>,
    /// The layout served to the page, built from table and registry
    pub layout: Arc<LayoutSpec>,
    /// API configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create the application state for one loaded dataset.
    ///
    /// The layout is derived here from the table summary and the
    /// registry, so the served layout can never disagree with the
    /// handlers actually registered.
    pub fn new(table: LaunchTable, registry: HandlerRegistry, config: ServerConfig) -> Self {
        let layout = build_layout(table.summary(), &registry);
        Self {
            table: Arc::new(table),
            registry: Arc::new(registry),
            layout: Arc::new(layout),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8050,
        }
    }
}

impl ServerConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
