//! grouped-bar-rs: layout and scale engine for grouped horizontal bar charts.
//!
//! Turns a view size, margins, flags and three data domains into concrete
//! pixel geometry: the plot rectangle, a linear value scale, two nested band
//! scales, per-series offsets, projected bars, colors and tick formatting.
//! Drawing is left to a `render::Renderer` backend.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{BarChartConfig, ChartData, GroupedBarChart, LayoutResult, layout};
pub use error::{ChartError, ChartResult};
