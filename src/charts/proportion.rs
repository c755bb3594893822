//! Success proportion chart
//!
//! The pie chart driven by the site dropdown. Two shapes depending on
//! the selection:
//!
//! - "All Sites": one segment per launch site, valued by that site's
//!   success count (zero-count sites keep their segment).
//! - a specific site: exactly two segments, the success and failure
//!   counts within that site's rows.
//!
//! Pure function of the immutable table; identical input always
//! produces an identical specification.

use crate::dataset::LaunchTable;
use crate::reactive::SiteSelection;

use super::spec::{ChartLayout, ChartSpec, Trace};

/// Build the proportion chart specification for the current selection
pub fn success_proportion(table: &LaunchTable, site: &SiteSelection) -> ChartSpec {
    match site.site() {
        None => all_sites(table),
        Some(name) => single_site(table, name),
    }
}

/// One segment per site: how the total successes distribute across sites
fn all_sites(table: &LaunchTable) -> ChartSpec {
    let segments = table
        .summary()
        .sites
        .iter()
        .map(|site| (site.clone(), table.success_count(site) as u64))
        .collect();

    ChartSpec::new(
        vec![Trace::pie(segments)],
        ChartLayout::titled("Total Success Launches By Site"),
    )
}

/// Success vs. failure within one site's rows.
///
/// Both segments are always present, even at zero, so a site with no
/// recorded successes (or a site absent from the table entirely) still
/// yields a well-formed chart rather than an error.
fn single_site(table: &LaunchTable, site: &str) -> ChartSpec {
    let mut successes = 0u64;
    let mut failures = 0u64;
    for record in table.site_records(site) {
        if record.outcome.is_success() {
            successes += 1;
        } else {
            failures += 1;
        }
    }

    let segments = vec![
        ("Success".to_string(), successes),
        ("Failure".to_string(), failures),
    ];

    ChartSpec::new(
        vec![Trace::pie(segments)],
        ChartLayout::titled(format!("Successful Launches for {}", site)),
    )
}
