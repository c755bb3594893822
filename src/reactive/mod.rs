//! Reactive state and wiring
//!
//! The server side of the dashboard's interactivity: parsed control
//! state ([`FilterState`]) and the registration table
//! ([`HandlerRegistry`]) that maps chart outputs to the controls that
//! drive them. Control values arrive as plain query parameters, get
//! validated into typed filter state, and are handed to whichever
//! handler the registry holds for the requested output.

pub mod filter;
pub mod registry;

pub use filter::{FilterState, PayloadRange, SiteSelection, ALL_SITES};
pub use registry::{
    standard_registry, Binding, ControlId, HandlerRegistry, SUCCESS_PAYLOAD_SCATTER_CHART,
    SUCCESS_PIE_CHART,
};
