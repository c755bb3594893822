//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by the chart dispatch endpoint.
///
/// All parameters are optional; missing values fall back to the
/// control defaults (site "all", payload bounds from the dataset).
/// Bounds arrive as strings so a malformed number surfaces as a
/// validation error in the standard envelope instead of a bare
/// extractor rejection.
#[derive(Debug, Deserialize)]
pub struct ChartQuery {
    /// Selected site value, or the "all" sentinel
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kilograms
    #[serde(default)]
    pub low: Option<String>,
    /// Upper payload bound in kilograms
    #[serde(default)]
    pub high: Option<String>,
}

impl ChartQuery {
    /// Parse the payload bounds, treating blank values as absent
    pub fn payload_bounds(&self) -> Result<(Option<f64>, Option<f64>), String> {
        Ok((parse_bound(&self.low)?, parse_bound(&self.high)?))
    }
}

fn parse_bound(raw: &Option<String>) -> Result<Option<f64>, String> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(|_| format!("'{}' is not a valid payload bound", value)),
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Dataset status
    pub dataset: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
    /// Number of launch records loaded
    pub records: usize,
    /// Number of distinct launch sites
    pub sites: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_bounds_parsing() {
        let query = ChartQuery {
            site: None,
            low: Some("600".to_string()),
            high: Some(" 2500.5 ".to_string()),
        };
        assert_eq!(query.payload_bounds(), Ok((Some(600.0), Some(2500.5))));
    }

    #[test]
    fn test_blank_bounds_are_absent() {
        let query = ChartQuery {
            site: None,
            low: Some("".to_string()),
            high: None,
        };
        assert_eq!(query.payload_bounds(), Ok((None, None)));
    }

    #[test]
    fn test_malformed_bound_is_an_error() {
        let query = ChartQuery {
            site: None,
            low: Some("abc".to_string()),
            high: None,
        };
        assert!(query.payload_bounds().is_err());
    }
}
