//! dovelet: data normalization and viewport scaling for time-series charts.
//!
//! Raw columnar chart input is normalized into typed series records, from
//! which the visible Y bound, per-sample pixel length, sub-pixel scroll shift,
//! and axis label stride are derived. Everything here is pure computation;
//! drawing and event handling stay with the host renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartLayout, LayoutConfig, LayoutSnapshot};
pub use error::{ChartError, ChartResult};
