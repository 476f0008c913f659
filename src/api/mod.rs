mod chart;
mod chart_data;
mod config;
mod layout_builder;
mod observer_registry;
mod palette;
mod presentation;
mod tick_format;

pub use chart::{GroupedBarChart, LayoutTicket};
pub use chart_data::{
    ChartData, DimensionDescriptor, FieldDescriptor, GroupByDescriptor, QueryMetadata,
};
pub use config::BarChartConfig;
pub use layout_builder::{AxisLayout, BarHit, LayoutResult, LayoutSnapshot, LegendEntry, layout};
pub use palette::{
    ColorLookup, ColorOverrideMap, ColorResolver, ColorSchemeId, DEFAULT_SCHEME,
    PaletteColorResolver, ScaleKind,
};
pub use presentation::{PresentationResolver, TickFormatting};
pub use tick_format::{
    FieldType, GroupingMode, PASSTHROUGH_LABELS, StandardTickFormatters, TickFormatter,
    TickFormatterProvider,
};
