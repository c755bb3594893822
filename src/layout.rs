//! Page layout description
//!
//! A static, serialisable description of the dashboard's controls and
//! chart outputs, built once at startup from the dataset summary and
//! the handler registry. The served page fetches it as JSON and builds
//! the actual DOM controls from it, so the server stays the single
//! source of truth for option lists, slider bounds, and the
//! control → chart wiring.

use serde::Serialize;

use crate::dataset::DatasetSummary;
use crate::reactive::{Binding, ControlId, HandlerRegistry, ALL_SITES};

/// Heading shown at the top of the page
pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Fixed display bounds of the payload slider, in kilograms.
///
/// These are presentation constants, not dataset bounds: the initial
/// selected sub-range comes from the summary and is allowed to fall
/// outside this window.
pub const SLIDER_FLOOR: f64 = 0.0;
pub const SLIDER_CEIL: f64 = 10_000.0;
pub const SLIDER_STEP: f64 = 1_000.0;

/// The complete layout served at `/api/v1/layout`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSpec {
    pub title: String,
    pub site_dropdown: DropdownSpec,
    pub payload_slider: SliderSpec,
    /// Element ids of the chart placeholders, in display order
    pub outputs: Vec<String>,
    /// Which control changes refresh which chart
    pub bindings: Vec<Binding>,
}

/// Site selector description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownSpec {
    pub id: ControlId,
    pub options: Vec<DropdownOption>,
    /// Initially selected option value
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Payload range selector description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderSpec {
    pub id: ControlId,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Initially selected sub-range, seeded from the dataset bounds
    pub value: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Build the layout for one loaded dataset.
///
/// Deterministic: the same summary and registry always produce the
/// same layout.
pub fn build_layout(summary: &DatasetSummary, registry: &HandlerRegistry) -> LayoutSpec {
    let mut options = vec![DropdownOption {
        label: "All Sites".to_string(),
        value: ALL_SITES.to_string(),
    }];
    options.extend(summary.sites.iter().map(|site| DropdownOption {
        label: site.clone(),
        value: site.clone(),
    }));

    let bindings = registry.bindings();
    let outputs = bindings
        .iter()
        .map(|binding| binding.output.clone())
        .collect();

    LayoutSpec {
        title: DASHBOARD_TITLE.to_string(),
        site_dropdown: DropdownSpec {
            id: ControlId::SiteDropdown,
            options,
            value: ALL_SITES.to_string(),
            placeholder: "Select a Launch Site here".to_string(),
            searchable: true,
        },
        payload_slider: SliderSpec {
            id: ControlId::PayloadSlider,
            label: "Payload range (Kg):".to_string(),
            min: SLIDER_FLOOR,
            max: SLIDER_CEIL,
            step: SLIDER_STEP,
            marks: slider_marks(),
            value: [summary.min_payload, summary.max_payload],
        },
        outputs,
        bindings,
    }
}

/// Tick marks at every step across the display bounds
fn slider_marks() -> Vec<SliderMark> {
    let steps = ((SLIDER_CEIL - SLIDER_FLOOR) / SLIDER_STEP) as usize;
    (0..=steps)
        .map(|i| {
            let value = SLIDER_FLOOR + i as f64 * SLIDER_STEP;
            SliderMark {
                value,
                label: format!("{}", value as i64),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, LaunchTable, Outcome};
    use crate::reactive::{standard_registry, SUCCESS_PAYLOAD_SCATTER_CHART, SUCCESS_PIE_CHART};

    fn sample_summary() -> DatasetSummary {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("SiteB", 2500.0, Outcome::Success, "v1"),
            LaunchRecord::new("SiteA", 800.0, Outcome::Failure, "v1"),
        ])
        .unwrap();
        table.summary().clone()
    }

    #[test]
    fn test_dropdown_lists_all_sites_first() {
        let layout = build_layout(&sample_summary(), &standard_registry());

        let values: Vec<&str> = layout
            .site_dropdown
            .options
            .iter()
            .map(|option| option.value.as_str())
            .collect();
        assert_eq!(values, vec!["all", "SiteA", "SiteB"]);
        assert_eq!(layout.site_dropdown.options[0].label, "All Sites");
        assert_eq!(layout.site_dropdown.value, "all");
        assert!(layout.site_dropdown.searchable);
    }

    #[test]
    fn test_slider_seeded_from_dataset_bounds() {
        let layout = build_layout(&sample_summary(), &standard_registry());

        assert_eq!(layout.payload_slider.value, [800.0, 2500.0]);
        assert_eq!(layout.payload_slider.min, 0.0);
        assert_eq!(layout.payload_slider.max, 10_000.0);
        assert_eq!(layout.payload_slider.marks.len(), 11);
        assert_eq!(layout.payload_slider.marks[0].label, "0");
        assert_eq!(layout.payload_slider.marks[10].label, "10000");
    }

    #[test]
    fn test_initial_range_outside_display_bounds_is_kept() {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("SiteA", 200.0, Outcome::Success, "v1"),
            LaunchRecord::new("SiteA", 15_600.0, Outcome::Success, "v2"),
        ])
        .unwrap();

        let layout = build_layout(table.summary(), &standard_registry());
        assert_eq!(layout.payload_slider.value, [200.0, 15_600.0]);
    }

    #[test]
    fn test_outputs_and_bindings_mirror_registry() {
        let registry = standard_registry();
        let layout = build_layout(&sample_summary(), &registry);

        assert_eq!(
            layout.outputs,
            vec![
                SUCCESS_PIE_CHART.to_string(),
                SUCCESS_PAYLOAD_SCATTER_CHART.to_string(),
            ]
        );
        assert_eq!(layout.bindings, registry.bindings());
    }

    #[test]
    fn test_layout_serialises_control_ids() {
        let layout = build_layout(&sample_summary(), &standard_registry());
        let json = serde_json::to_value(&layout).unwrap();

        assert_eq!(json["title"], "SpaceX Launch Records Dashboard");
        assert_eq!(json["site_dropdown"]["id"], "site-dropdown");
        assert_eq!(json["payload_slider"]["id"], "payload-slider");
        assert_eq!(
            json["site_dropdown"]["placeholder"],
            "Select a Launch Site here"
        );
        assert_eq!(json["bindings"][1]["inputs"][1], "payload-slider");
    }

    #[test]
    fn test_build_layout_is_deterministic() {
        let summary = sample_summary();
        let first = build_layout(&summary, &standard_registry());
        let second = build_layout(&summary, &standard_registry());
        assert_eq!(first, second);
    }
}
