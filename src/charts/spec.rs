//! Chart specification model
//!
//! A `ChartSpec` is the serializable contract between the reactive
//! handlers and the chart renderer: an abstract description of a chart
//! (traces, titles, axes) in Plotly figure shape, so the page script can
//! hand the JSON straight to `Plotly.newPlot`. Nothing in this module
//! draws anything.

use serde::Serialize;

/// A complete chart description: data traces plus presentation layout
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: ChartLayout,
}

impl ChartSpec {
    pub fn new(data: Vec<Trace>, layout: ChartLayout) -> Self {
        Self { data, layout }
    }
}

/// One data trace
///
/// Serializes with a Plotly-style `"type"` tag, e.g.
/// `{"type":"pie","labels":[...],"values":[...]}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    /// Proportion segments: one label per segment, one count per label
    Pie { labels: Vec<String>, values: Vec<u64> },
    /// Point cloud: payload mass against 0/1 outcome, one trace per group
    Scatter {
        x: Vec<f64>,
        y: Vec<u8>,
        mode: String,
        name: String,
    },
}

impl Trace {
    /// Build a pie trace from (label, count) segments
    pub fn pie(segments: Vec<(String, u64)>) -> Self {
        let (labels, values) = segments.into_iter().unzip();
        Trace::Pie { labels, values }
    }

    /// Build a named marker-mode scatter trace
    pub fn markers(name: impl Into<String>, x: Vec<f64>, y: Vec<u8>) -> Self {
        Trace::Scatter {
            x,
            y,
            mode: "markers".to_string(),
            name: name.into(),
        }
    }
}

/// Chart presentation: title and optional axes
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

impl ChartLayout {
    /// Layout with a title only (pie charts have no axes)
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            xaxis: None,
            yaxis: None,
        }
    }

    /// Builder: set the x axis
    pub fn xaxis(mut self, axis: Axis) -> Self {
        self.xaxis = Some(axis);
        self
    }

    /// Builder: set the y axis
    pub fn yaxis(mut self, axis: Axis) -> Self {
        self.yaxis = Some(axis);
        self
    }
}

/// One chart axis: a title and an optional display window
///
/// The `range` clips what the renderer shows; it never affects which
/// rows appear in the traces.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

impl Axis {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            range: None,
        }
    }

    /// Builder: set the display window
    pub fn range(mut self, range: [f64; 2]) -> Self {
        self.range = Some(range);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_trace_serialization() {
        let trace = Trace::pie(vec![("CCAFS LC-40".to_string(), 7), ("KSC LC-39A".to_string(), 10)]);
        let json = serde_json::to_value(&trace).unwrap();

        assert_eq!(json["type"], "pie");
        assert_eq!(json["labels"][0], "CCAFS LC-40");
        assert_eq!(json["values"][1], 10);
    }

    #[test]
    fn test_scatter_trace_serialization() {
        let trace = Trace::markers("FT", vec![500.0, 2200.0], vec![1, 0]);
        let json = serde_json::to_value(&trace).unwrap();

        assert_eq!(json["type"], "scatter");
        assert_eq!(json["mode"], "markers");
        assert_eq!(json["name"], "FT");
        assert_eq!(json["x"][1], 2200.0);
        assert_eq!(json["y"][0], 1);
    }

    #[test]
    fn test_layout_omits_absent_axes() {
        let layout = ChartLayout::titled("Total Success Launches By Site");
        let json = serde_json::to_value(&layout).unwrap();

        assert_eq!(json["title"], "Total Success Launches By Site");
        assert!(json.get("xaxis").is_none());
        assert!(json.get("yaxis").is_none());
    }

    #[test]
    fn test_axis_range_serialization() {
        let layout = ChartLayout::titled("t")
            .xaxis(Axis::titled("Payload Mass (kg)").range([0.0, 10000.0]))
            .yaxis(Axis::titled("Launch Outcome"));
        let json = serde_json::to_value(&layout).unwrap();

        assert_eq!(json["xaxis"]["range"][1], 10000.0);
        assert!(json["yaxis"].get("range").is_none());
    }
}
