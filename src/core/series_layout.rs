use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::band_scale::BandScale;
use crate::core::scale::LinearScale;
use crate::core::series::Series;
use crate::core::types::{Rect, Translation};
use crate::core::view_dimensions::ViewDimensions;
use crate::error::{ChartError, ChartResult};

/// Translation of a series cluster inside the plot area.
///
/// The cluster moves along the category axis to its outer band; the bars
/// inside it are positioned by the inner scale.
pub fn offset_for(series: &Series, outer_scale: &BandScale) -> ChartResult<Translation> {
    let position = outer_scale
        .position(&series.name)
        .map_err(|_| ChartError::UnknownSeries {
            name: series.name.clone(),
        })?;
    trace!(series = %series.name, dy = position, "series offset");
    Ok(Translation::new(0.0, position))
}

/// Deterministic geometry of one bar in plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub series: String,
    pub subseries: String,
    pub value: f64,
    pub rect: Rect,
}

/// Projects every sub-series of `series` into bar rectangles.
///
/// Bars start at the value scale's zero and extend to the mapped value, so a
/// negative value grows towards the origin instead of producing a negative
/// width. Non-finite values project to zero-length bars.
pub fn project_series_bars(
    series: &Series,
    outer_scale: &BandScale,
    inner_scale: &BandScale,
    value_scale: LinearScale,
) -> ChartResult<Vec<BarGeometry>> {
    let offset = offset_for(series, outer_scale)?;
    let baseline = value_scale.map(0.0);

    let mut projected = Vec::with_capacity(series.subseries.len());
    for entry in &series.subseries {
        let y = inner_scale.position(&entry.name)?;
        let end = if entry.value.is_finite() {
            value_scale.map(entry.value)
        } else {
            baseline
        };
        let rect = Rect::new(
            baseline.min(end),
            y,
            (end - baseline).abs(),
            inner_scale.band_width(),
        );

        projected.push(BarGeometry {
            series: series.name.clone(),
            subseries: entry.name.clone(),
            value: entry.value,
            rect: rect.translated(offset),
        });
    }

    Ok(projected)
}

/// Alternating background stripe parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stripe {
    Even,
    Odd,
}

/// Full-width background panel behind one series cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridPanel {
    pub key: String,
    pub rect: Rect,
    pub stripe: Stripe,
}

/// Builds one background panel per series, tiling the outer band pitch.
///
/// Each panel covers its band plus half of the gap on either side.
pub fn grid_panels(
    series: &[Series],
    outer_scale: &BandScale,
    dims: ViewDimensions,
) -> ChartResult<Vec<GridPanel>> {
    let half_gap = (outer_scale.step() - outer_scale.band_width()) / 2.0;

    series
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let offset = offset_for(entry, outer_scale)?;
            Ok(GridPanel {
                key: entry.name.clone(),
                rect: Rect::new(
                    0.0,
                    offset.dy - half_gap,
                    dims.width,
                    outer_scale.step(),
                ),
                stripe: if index % 2 == 0 {
                    Stripe::Even
                } else {
                    Stripe::Odd
                },
            })
        })
        .collect()
}
