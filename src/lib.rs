//! area-graph-rs: stacked-area time-series chart core.
//!
//! Turns time-stamped records into diverging stacked bands, fits time and
//! value scales to the live viewport, and resolves pointer positions to the
//! nearest sample for tooltip display. Drawing and viewport observation stay
//! with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{AreaChart, AreaChartConfig};
pub use error::{ChartError, ChartResult};
