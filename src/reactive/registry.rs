//! Handler registry
//!
//! Interactions are wired through an explicit registration table
//! rather than ad-hoc callbacks: each chart output is registered once
//! with the control inputs that drive it and the handler that rebuilds
//! it. The API layer dispatches by output id, and the page layout
//! enumerates the same table to learn which control changes must
//! refresh which chart. There is exactly one place to look to see the
//! full interaction graph.

use serde::Serialize;

use crate::charts::{payload_correlation, success_proportion, ChartSpec};
use crate::dataset::LaunchTable;

use super::filter::FilterState;

/// Element id of the proportion (pie) chart output
pub const SUCCESS_PIE_CHART: &str = "success-pie-chart";
/// Element id of the correlation (scatter) chart output
pub const SUCCESS_PAYLOAD_SCATTER_CHART: &str = "success-payload-scatter-chart";

/// The interactive controls a chart can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ControlId {
    #[serde(rename = "site-dropdown")]
    SiteDropdown,
    #[serde(rename = "payload-slider")]
    PayloadSlider,
}

impl ControlId {
    /// The element id used in the page and in query wiring
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlId::SiteDropdown => "site-dropdown",
            ControlId::PayloadSlider => "payload-slider",
        }
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the interaction graph: which controls drive which output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binding {
    pub output: String,
    pub inputs: Vec<ControlId>,
}

/// A registered chart builder
type ChartHandler = Box<dyn Fn(&LaunchTable, &FilterState) -> ChartSpec + Send + Sync>;

struct Registration {
    binding: Binding,
    handler: ChartHandler,
}

/// Registration table mapping chart outputs to their handlers.
///
/// Registration order is preserved, so the layout lists charts in the
/// order they were wired.
#[derive(Default)]
pub struct HandlerRegistry {
    entries: Vec<Registration>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a chart output with the controls that drive it.
    ///
    /// Registering the same output id twice replaces the earlier
    /// handler in place, keeping its position in the table.
    pub fn register<F>(&mut self, output: impl Into<String>, inputs: Vec<ControlId>, handler: F)
    where
        F: Fn(&LaunchTable, &FilterState) -> ChartSpec + Send + Sync + 'static,
    {
        let registration = Registration {
            binding: Binding {
                output: output.into(),
                inputs,
            },
            handler: Box::new(handler),
        };

        match self
            .entries
            .iter_mut()
            .find(|entry| entry.binding.output == registration.binding.output)
        {
            Some(existing) => *existing = registration,
            None => self.entries.push(registration),
        }
    }

    /// Run the handler registered for `output`, if any
    pub fn dispatch(
        &self,
        output: &str,
        table: &LaunchTable,
        filter: &FilterState,
    ) -> Option<ChartSpec> {
        self.entries
            .iter()
            .find(|entry| entry.binding.output == output)
            .map(|entry| (entry.handler)(table, filter))
    }

    /// Whether a handler is registered for `output`
    pub fn contains(&self, output: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.binding.output == output)
    }

    /// The interaction graph, in registration order
    pub fn bindings(&self) -> Vec<Binding> {
        self.entries
            .iter()
            .map(|entry| entry.binding.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("bindings", &self.bindings())
            .finish()
    }
}

/// The dashboard's standard wiring: the pie chart follows the site
/// dropdown, the scatter chart follows both controls.
pub fn standard_registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    registry.register(
        SUCCESS_PIE_CHART,
        vec![ControlId::SiteDropdown],
        |table, filter| success_proportion(table, &filter.site),
    );
    registry.register(
        SUCCESS_PAYLOAD_SCATTER_CHART,
        vec![ControlId::SiteDropdown, ControlId::PayloadSlider],
        |table, filter| payload_correlation(table, &filter.site, &filter.payload),
    );
    registry
}
