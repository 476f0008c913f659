use tracing::debug;

use crate::core::band_scale::BandScale;
use crate::core::domain::CategoryDomain;
use crate::core::scale::LinearScale;
use crate::core::types::ValueDomain;
use crate::core::view_dimensions::ViewDimensions;
use crate::error::ChartResult;

/// Bar-length scale over `[0, width]`.
#[must_use]
pub fn build_value_scale(width: f64, domain: ValueDomain) -> LinearScale {
    LinearScale::for_values(domain, width)
}

/// Category scale over `[0, height]`, one band per primary key.
pub fn build_outer_scale(
    height: f64,
    domain: CategoryDomain,
    band_padding: f64,
) -> ChartResult<BandScale> {
    BandScale::new(domain, (0.0, height), band_padding)
}

/// Sub-category scale nested inside a single outer band.
///
/// Every primary category reserves the same inner slots, whether or not its
/// own series carries a value for each sub-category.
pub fn build_inner_scale(
    outer_scale: &BandScale,
    domain: CategoryDomain,
    band_padding: f64,
) -> ChartResult<BandScale> {
    BandScale::new(domain, (0.0, outer_scale.band_width()), band_padding)
}

/// The three coordinate scales of a grouped horizontal bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    pub value: LinearScale,
    pub outer: BandScale,
    pub inner: BandScale,
}

impl ChartScales {
    /// Builds all three scales against a computed plot rectangle.
    pub fn build(
        dims: ViewDimensions,
        value_domain: ValueDomain,
        primary_domain: CategoryDomain,
        secondary_domain: CategoryDomain,
        outer_padding: f64,
        inner_padding: f64,
    ) -> ChartResult<Self> {
        let value = build_value_scale(dims.width, value_domain);
        let outer = build_outer_scale(dims.height, primary_domain, outer_padding)?;
        let inner = build_inner_scale(&outer, secondary_domain, inner_padding)?;

        debug!(
            primary = outer.domain().len(),
            secondary = inner.domain().len(),
            outer_band = outer.band_width(),
            inner_band = inner.band_width(),
            value_max = value.domain().1,
            "built chart scales"
        );

        Ok(Self {
            value,
            outer,
            inner,
        })
    }
}
