//! Launch Records Dataset
//!
//! This module owns everything about the data the dashboard serves:
//!
//! - **record**: Row-level types (LaunchRecord, Outcome)
//! - **table**: The immutable in-memory table and its load-time summary
//! - **loader**: One-shot CSV fetch + strict parsing
//! - **error**: Error types
//!
//! # Lifecycle
//!
//! ```text
//! Startup:
//!   HTTP GET (once) → CSV rows → validate → LaunchTable + DatasetSummary
//!
//! Serving:
//!   handlers read LaunchTable (shared, never mutated)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use launchboard::dataset::DatasetSource;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = DatasetSource::new("https://example.test/launches.csv", Duration::from_secs(30));
//!     let table = source.load().await?;
//!
//!     println!("{} launches across {} sites", table.len(), table.summary().sites.len());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;
pub mod record;
pub mod table;

// Re-export commonly used types
pub use error::{DatasetError, DatasetResult};
pub use loader::{read_table, read_table_str, DatasetSource, REQUIRED_COLUMNS};
pub use record::{LaunchRecord, Outcome};
pub use table::{DatasetSummary, LaunchTable};
