//! Dataset loader
//!
//! Fetches the launch records CSV from its configured URL and parses it
//! into a `LaunchTable`. The fetch happens exactly once, synchronously,
//! at process start; there is no retry policy and no refresh. Any
//! failure here is fatal to startup.

use std::io::Read;
use std::time::Duration;

use super::error::{DatasetError, DatasetResult};
use super::record::LaunchRecord;
use super::table::LaunchTable;

/// Columns the source CSV must provide (matched by header name;
/// any additional columns are ignored)
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// Remote CSV dataset source
pub struct DatasetSource {
    url: String,
    client: reqwest::Client,
}

impl DatasetSource {
    /// Create a source for the given URL with a request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            url: url.into(),
            client,
        }
    }

    /// The URL this source fetches from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the CSV once and parse it into a table.
    ///
    /// Non-2xx responses, network failures, malformed CSV, and empty
    /// datasets all surface as `DatasetError`.
    pub async fn load(&self) -> DatasetResult<LaunchTable> {
        tracing::info!(url = %self.url, "Fetching launch dataset");

        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let table = read_table(body.as_bytes())?;

        tracing::info!(
            records = table.len(),
            sites = table.summary().sites.len(),
            "Launch dataset loaded"
        );

        Ok(table)
    }
}

/// Parse launch records CSV from any reader into a table.
///
/// Strict by design: a malformed row or a row violating the record
/// invariants fails the whole load rather than being skipped, since a
/// partially-loaded table would silently distort every chart.
pub fn read_table<R: Read>(reader: R) -> DatasetResult<LaunchTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for (index, result) in csv_reader.deserialize::<LaunchRecord>().enumerate() {
        // Header row is line 1, first record is line 2
        let line = index + 2;
        let record = result?;
        record
            .validate()
            .map_err(|reason| DatasetError::InvalidRecord { line, reason })?;
        records.push(record);
    }

    LaunchTable::from_records(records)
}

/// Parse launch records from a CSV string (useful for testing)
pub fn read_table_str(csv_data: &str) -> DatasetResult<LaunchTable> {
    read_table(csv_data.as_bytes())
}
