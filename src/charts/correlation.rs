//! Payload / outcome correlation chart
//!
//! The scatter chart driven by both controls. Every row in scope
//! (all rows, or one site's rows) becomes a marker at
//! (payload mass, outcome), grouped into one trace per booster
//! version category so the renderer can colour them apart.
//!
//! The payload range does not drop rows. It only sets the x-axis
//! window, so narrowing the slider pans the view without recomputing
//! the point set.

use std::collections::BTreeMap;

use crate::dataset::{LaunchRecord, LaunchTable};
use crate::reactive::{PayloadRange, SiteSelection};

use super::spec::{Axis, ChartLayout, ChartSpec, Trace};

/// Build the correlation chart specification for the current selection
pub fn payload_correlation(
    table: &LaunchTable,
    site: &SiteSelection,
    range: &PayloadRange,
) -> ChartSpec {
    let (traces, title) = match site.site() {
        None => (
            traces_by_category(table.records().iter()),
            "Correlation between Payload and Success for all sites".to_string(),
        ),
        Some(name) => (
            traces_by_category(table.site_records(name)),
            format!("Correlation between Payload and Success for {}", name),
        ),
    };

    let layout = ChartLayout::titled(title)
        .xaxis(Axis::titled("Payload Mass (kg)").range(range.as_array()))
        .yaxis(Axis::titled("Launch Outcome"));

    ChartSpec::new(traces, layout)
}

/// Group rows into one marker trace per booster category, in category order
fn traces_by_category<'a>(records: impl Iterator<Item = &'a LaunchRecord>) -> Vec<Trace> {
    let mut grouped: BTreeMap<&str, (Vec<f64>, Vec<u8>)> = BTreeMap::new();
    for record in records {
        let (x, y) = grouped.entry(&record.booster_category).or_default();
        x.push(record.payload_mass);
        y.push(record.outcome.value());
    }

    grouped
        .into_iter()
        .map(|(category, (x, y))| Trace::markers(category, x, y))
        .collect()
}
