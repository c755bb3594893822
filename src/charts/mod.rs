//! Chart builders
//!
//! Pure functions from `(LaunchTable, filter state)` to serialisable
//! chart specifications. Handlers here never touch I/O or shared
//! mutable state, which keeps them trivially cacheable and testable:
//! the same table and filters always serialise to the same JSON.
//!
//! The JSON shape mirrors what plotting front-ends expect: a `data`
//! array of traces plus a `layout` object, so the page can hand the
//! response straight to the renderer.

pub mod correlation;
pub mod proportion;
pub mod spec;

pub use correlation::payload_correlation;
pub use proportion::success_proportion;
pub use spec::{Axis, ChartLayout, ChartSpec, Trace};
