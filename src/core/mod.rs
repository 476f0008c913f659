pub mod band_scale;
pub mod domain;
pub mod scale;
pub mod scale_builder;
pub mod series;
pub mod series_layout;
pub mod types;
pub mod view_dimensions;

pub use band_scale::{BandScale, DEFAULT_BAND_PADDING};
pub use domain::CategoryDomain;
pub use scale::LinearScale;
pub use scale_builder::{ChartScales, build_inner_scale, build_outer_scale, build_value_scale};
pub use series::{Series, SubSeries};
pub use series_layout::{
    BarGeometry, GridPanel, Stripe, grid_panels, offset_for, project_series_bars,
};
pub use types::{Margin, Rect, Translation, ValueDomain, ViewSize};
pub use view_dimensions::{LegendPosition, ViewDimensions, calculate_view_dimensions};
