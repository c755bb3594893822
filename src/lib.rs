//! # Launchboard
//!
//! Interactive launch records dashboard - a full-stack Rust application
//! that loads a fixed dataset of rocket launches once at startup and
//! serves a single-page dashboard with two reactive charts.
//!
//! ## Features
//!
//! - **One-shot dataset load**: CSV fetched over HTTP and validated
//!   before the server binds; bad data never serves
//! - **Immutable table**: all handlers read one shared `Arc` with no
//!   locking
//! - **Explicit wiring**: a registration table maps chart outputs to
//!   the controls that drive them
//! - **Plotly-shaped output**: handlers emit serialisable chart
//!   specifications the page renders as-is
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading, record validation, the immutable table
//! - [`charts`]: Pure chart builders and the specification model
//! - [`reactive`]: Filter state parsing and the handler registry
//! - [`layout`]: The serialisable control/binding description
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchboard::api::{serve, AppState, ServerConfig};
//! use launchboard::dataset::DatasetSource;
//! use launchboard::reactive::standard_registry;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Fetch and validate the dataset; failures abort startup
//!     let source = DatasetSource::new(
//!         "https://example.com/launches.csv",
//!         Duration::from_secs(30),
//!     );
//!     let table = source.load().await?;
//!
//!     // Wire the standard charts and serve
//!     let state = AppState::new(table, standard_registry(), ServerConfig::default());
//!     serve(state).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod layout;
pub mod reactive;
pub mod ui;

// Re-export top-level types for convenience
pub use dataset::{
    read_table_str, DatasetError, DatasetResult, DatasetSource, DatasetSummary, LaunchRecord,
    LaunchTable, Outcome,
};

pub use charts::{payload_correlation, success_proportion, ChartSpec, Trace};

pub use reactive::{
    standard_registry, Binding, ControlId, FilterState, HandlerRegistry, PayloadRange,
    SiteSelection,
};

pub use layout::{build_layout, LayoutSpec};

pub use api::{build_router, serve, ApiError, AppState, ServerConfig};

pub use config::{Config, ConfigError, DatasetConfig, LoggingConfig};
