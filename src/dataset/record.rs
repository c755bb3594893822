//! Core data types for the launch records dataset
//!
//! This module defines the row-level types:
//! - `LaunchRecord`: one launch attempt as it appears in the source CSV
//! - `Outcome`: the boolean-like launch outcome (1 = success, 0 = failure)

use serde::{Deserialize, Serialize};

/// A single launch record
///
/// One row of the source table. Field names map to the CSV header via
/// serde renames; columns not listed here are ignored by the loader.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Launch site identifier (e.g. "CCAFS LC-40")
    #[serde(rename = "Launch Site")]
    pub site: String,
    /// Payload mass in kilograms; always present, non-negative, finite
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass: f64,
    /// Launch outcome
    #[serde(rename = "class")]
    pub outcome: Outcome,
    /// Booster version category used for chart grouping (e.g. "v1.1", "FT")
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

impl LaunchRecord {
    /// Create a record directly (used by tests and benchmarks)
    pub fn new(
        site: impl Into<String>,
        payload_mass: f64,
        outcome: Outcome,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass,
            outcome,
            booster_category: booster_category.into(),
        }
    }

    /// Check the record invariants, returning the violation if any
    pub fn validate(&self) -> Result<(), String> {
        if self.site.trim().is_empty() {
            return Err("launch site is empty".to_string());
        }
        if !self.payload_mass.is_finite() {
            return Err("payload mass is not a finite number".to_string());
        }
        if self.payload_mass < 0.0 {
            return Err("payload mass is negative".to_string());
        }
        Ok(())
    }
}

/// Launch outcome (the `class` column: 1 = success, 0 = failure)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Numeric form used on the correlation chart's y axis
    pub fn value(&self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Segment label used on the proportion chart
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("outcome must be 0 or 1, got {}", other)),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.value()
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
