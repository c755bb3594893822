//! Filter state
//!
//! The transient (site, payload-range) pair reconstructed from the
//! current UI control values on every chart request. It has no
//! lifecycle of its own: built, handed to a handler, discarded.

use serde::Serialize;

use crate::dataset::DatasetSummary;

/// Wire value of the site dropdown meaning "no site restriction"
pub const ALL_SITES: &str = "all";

/// Current value of the site dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    /// The "All Sites" sentinel option
    AllSites,
    /// One specific launch site
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown wire value ("all" is the sentinel)
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::AllSites
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::AllSites)
    }

    /// The specific site, if one is selected
    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelection::AllSites => None,
            SiteSelection::Site(s) => Some(s),
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteSelection::AllSites => write!(f, "{}", ALL_SITES),
            SiteSelection::Site(s) => write!(f, "{}", s),
        }
    }
}

/// Current value of the payload range slider (closed interval, kg)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    /// Create a payload range
    ///
    /// # Panics
    /// Panics if the range is invalid (use `try_new` for fallible input)
    pub fn new(low: f64, high: f64) -> Self {
        Self::try_new(low, high).expect("PayloadRange: low must satisfy 0 <= low <= high")
    }

    /// Create a payload range, returning None for invalid bounds
    pub fn try_new(low: f64, high: f64) -> Option<Self> {
        if low.is_finite() && high.is_finite() && low >= 0.0 && low <= high {
            Some(Self { low, high })
        } else {
            None
        }
    }

    /// Whether a payload mass falls inside the window
    pub fn contains(&self, mass: f64) -> bool {
        mass >= self.low && mass <= self.high
    }

    /// The [low, high] pair as a chart axis range
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }
}

/// The full filter state for one chart computation
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl FilterState {
    pub fn new(site: SiteSelection, payload: PayloadRange) -> Self {
        Self { site, payload }
    }

    /// Reconstruct the filter state from raw control values.
    ///
    /// Absent values fall back to the control defaults: site "all", and
    /// each missing range bound to the dataset's payload bound (the
    /// slider's initial selection). Invalid ranges are rejected with a
    /// message suitable for a validation error.
    pub fn from_controls(
        site: Option<&str>,
        low: Option<f64>,
        high: Option<f64>,
        summary: &DatasetSummary,
    ) -> Result<Self, String> {
        let site = match site {
            Some(value) => SiteSelection::parse(value),
            None => SiteSelection::AllSites,
        };

        let low = low.unwrap_or(summary.min_payload);
        let high = high.unwrap_or(summary.max_payload);
        let payload = PayloadRange::try_new(low, high).ok_or_else(|| {
            format!(
                "Invalid payload range [{}, {}]: bounds must satisfy 0 <= low <= high",
                low, high
            )
        })?;

        Ok(Self { site, payload })
    }
}
