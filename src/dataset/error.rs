//! Dataset error types
//!
//! Defines all errors that can occur while fetching and loading the
//! launch records dataset. Every variant is fatal at startup: the
//! dashboard cannot serve without a valid table.

use thiserror::Error;

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// HTTP fetch of the dataset failed (connection, timeout, non-2xx)
    #[error("Dataset fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// CSV structure could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A row violates a record invariant (negative or non-finite payload,
    /// outcome other than 0/1, blank site)
    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    /// The dataset parsed cleanly but contains no records, so the
    /// payload bounds are undefined
    #[error("Dataset contains no launch records")]
    Empty,

    /// I/O error reading the dataset body
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
