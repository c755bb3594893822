//! In-memory launch table
//!
//! `LaunchTable` is the process-wide dataset: an ordered, immutable
//! collection of launch records plus the summary values derived from it
//! once at load (payload bounds and the distinct site list). All chart
//! handlers read from it; nothing ever writes to it after construction.

use super::error::{DatasetError, DatasetResult};
use super::record::LaunchRecord;

/// Summary values computed once when the table is built
///
/// These seed the initial UI control defaults (slider sub-range, dropdown
/// options) and never change afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    /// Smallest payload mass in the table, kilograms
    pub min_payload: f64,
    /// Largest payload mass in the table, kilograms
    pub max_payload: f64,
    /// Sorted, duplicate-free list of site identifiers
    pub sites: Vec<String>,
}

/// The immutable in-memory table of launch records
#[derive(Debug)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    summary: DatasetSummary,
}

impl LaunchTable {
    /// Build a table from parsed records, computing the summary.
    ///
    /// Fails with `DatasetError::Empty` for a zero-record input: the
    /// payload bounds would be undefined and the dashboard must not
    /// start with a degenerate table.
    pub fn from_records(records: Vec<LaunchRecord>) -> DatasetResult<Self> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let min_payload = records
            .iter()
            .map(|r| r.payload_mass)
            .fold(f64::INFINITY, f64::min);
        let max_payload = records
            .iter()
            .map(|r| r.payload_mass)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut sites: Vec<String> = records.iter().map(|r| r.site.clone()).collect();
        sites.sort();
        sites.dedup();

        Ok(Self {
            records,
            summary: DatasetSummary {
                min_payload,
                max_payload,
                sites,
            },
        })
    }

    /// All records in load order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// The load-time summary values
    pub fn summary(&self) -> &DatasetSummary {
        &self.summary
    }

    /// Number of records in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false after construction; present for API completeness
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any record belongs to the given site
    pub fn contains_site(&self, site: &str) -> bool {
        self.summary.sites.iter().any(|s| s == site)
    }

    /// Records belonging to one site, in load order
    pub fn site_records<'a>(&'a self, site: &'a str) -> impl Iterator<Item = &'a LaunchRecord> {
        self.records.iter().filter(move |r| r.site == site)
    }

    /// Count of successful launches for one site
    pub fn success_count(&self, site: &str) -> usize {
        self.site_records(site)
            .filter(|r| r.outcome.is_success())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::Outcome;

    fn sample_records() -> Vec<LaunchRecord> {
        vec![
            LaunchRecord::new("KSC LC-39A", 4500.0, Outcome::Success, "FT"),
            LaunchRecord::new("CCAFS LC-40", 500.0, Outcome::Failure, "v1.0"),
            LaunchRecord::new("CCAFS LC-40", 3200.0, Outcome::Success, "v1.1"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, Outcome::Success, "FT"),
        ]
    }

    #[test]
    fn test_summary_bounds_and_sites() {
        let table = LaunchTable::from_records(sample_records()).unwrap();
        let summary = table.summary();

        assert_eq!(summary.min_payload, 500.0);
        assert_eq!(summary.max_payload, 9600.0);
        assert_eq!(
            summary.sites,
            vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
    }

    #[test]
    fn test_empty_table_rejected() {
        let result = LaunchTable::from_records(Vec::new());
        assert!(matches!(result, Err(DatasetError::Empty)));
    }

    #[test]
    fn test_site_filtering() {
        let table = LaunchTable::from_records(sample_records()).unwrap();

        let ccafs: Vec<_> = table.site_records("CCAFS LC-40").collect();
        assert_eq!(ccafs.len(), 2);
        assert!(ccafs.iter().all(|r| r.site == "CCAFS LC-40"));

        assert_eq!(table.site_records("LC-unknown").count(), 0);
    }

    #[test]
    fn test_success_count() {
        let table = LaunchTable::from_records(sample_records()).unwrap();

        assert_eq!(table.success_count("CCAFS LC-40"), 1);
        assert_eq!(table.success_count("KSC LC-39A"), 1);
        assert_eq!(table.success_count("LC-unknown"), 0);
    }

    #[test]
    fn test_contains_site() {
        let table = LaunchTable::from_records(sample_records()).unwrap();

        assert!(table.contains_site("VAFB SLC-4E"));
        assert!(!table.contains_site("vafb slc-4e"));
    }

    #[test]
    fn test_single_record_bounds() {
        let table = LaunchTable::from_records(vec![LaunchRecord::new(
            "KSC LC-39A",
            1200.0,
            Outcome::Success,
            "FT",
        )])
        .unwrap();

        assert_eq!(table.summary().min_payload, 1200.0);
        assert_eq!(table.summary().max_payload, 1200.0);
    }
}
