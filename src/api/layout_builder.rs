use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    BandScale, BarGeometry, ChartScales, GridPanel, LinearScale, Series, Translation,
    ViewDimensions, calculate_view_dimensions, grid_panels, offset_for, project_series_bars,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::{
    BarChartConfig, ChartData, ColorLookup, PresentationResolver, TickFormatter, TickFormatting,
};

/// Visibility and label of one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub visible: bool,
    pub show_label: bool,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub key: String,
    pub color: Color,
}

/// Data behind a bar that was hit by a pointer position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarHit {
    pub series: String,
    pub subseries: String,
    pub value: f64,
}

/// Immutable geometry snapshot for one render.
///
/// Bar and panel rectangles are in plot coordinates; `plot_transform` moves
/// the plot origin into view coordinates.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    pub dims: ViewDimensions,
    pub value_scale: LinearScale,
    pub outer_scale: BandScale,
    pub inner_scale: BandScale,
    pub plot_transform: Translation,
    pub series_offsets: IndexMap<String, Translation>,
    pub bars: Vec<BarGeometry>,
    pub grid_panels: Vec<GridPanel>,
    pub legend: Vec<LegendEntry>,
    pub colors: ColorLookup,
    pub tick_formatter: TickFormatter,
    pub tick_formatting: TickFormatting,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
}

/// Serializable projection of a `LayoutResult` used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub dims: ViewDimensions,
    pub plot_transform: Translation,
    pub value_domain: (f64, f64),
    pub outer_band_width: f64,
    pub inner_band_width: f64,
    pub series_offsets: IndexMap<String, Translation>,
    pub bars: Vec<BarGeometry>,
    pub grid_panels: Vec<GridPanel>,
    pub legend: Vec<LegendEntry>,
    pub tick_formatting: TickFormatting,
}

impl LayoutResult {
    /// Translation of the cluster for `series` within the plot.
    pub fn series_offset(&self, series: &Series) -> ChartResult<Translation> {
        offset_for(series, &self.outer_scale)
    }

    /// Color assigned to a bar's sub-category.
    pub fn bar_color(&self, bar: &BarGeometry) -> ChartResult<Color> {
        self.colors.color(&bar.subseries)
    }

    #[must_use]
    pub fn format_tick(&self, raw: &str) -> String {
        self.tick_formatter.format(raw)
    }

    /// Finds the bar under a pointer position given in view coordinates.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<BarHit> {
        let plot_x = x - self.plot_transform.dx;
        let plot_y = y - self.plot_transform.dy;
        self.bars
            .iter()
            .find(|bar| bar.rect.contains(plot_x, plot_y))
            .map(|bar| BarHit {
                series: bar.series.clone(),
                subseries: bar.subseries.clone(),
                value: bar.value,
            })
    }

    /// Checks that every emitted coordinate is finite and non-negative in size.
    pub fn validate(&self) -> ChartResult<()> {
        let rects = self
            .bars
            .iter()
            .map(|bar| bar.rect)
            .chain(self.grid_panels.iter().map(|panel| panel.rect));
        for rect in rects {
            let finite = [rect.x, rect.y, rect.width, rect.height]
                .iter()
                .all(|value| value.is_finite());
            if !finite || rect.width < 0.0 || rect.height < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "layout produced invalid rectangle {rect:?}"
                )));
            }
        }
        for entry in &self.legend {
            entry.color.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            dims: self.dims,
            plot_transform: self.plot_transform,
            value_domain: self.value_scale.domain(),
            outer_band_width: self.outer_scale.band_width(),
            inner_band_width: self.inner_scale.band_width(),
            series_offsets: self.series_offsets.clone(),
            bars: self.bars.clone(),
            grid_panels: self.grid_panels.clone(),
            legend: self.legend.clone(),
            tick_formatting: self.tick_formatting,
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize layout: {e}")))
    }
}

/// Computes dimensions, scales, offsets and presentation for one snapshot.
///
/// Pure and deterministic: identical inputs give identical results. Degenerate
/// geometry yields an empty-but-valid layout; series or sub-series keys that
/// are missing from their domain fail the whole layout. When the data carries
/// no field metadata, `fallback_formatter` is used for tick labels.
pub fn layout(
    config: &BarChartConfig,
    data: &ChartData,
    presentation: &PresentationResolver,
    fallback_formatter: &TickFormatter,
) -> ChartResult<LayoutResult> {
    config.validate()?;

    let dims = calculate_view_dimensions(
        config.view,
        config.margin,
        config.show_x_axis_label,
        config.show_y_axis_label,
        config.legend,
        config.legend_reserve,
        config.legend_position,
    );

    let scales = ChartScales::build(
        dims,
        data.value_domain,
        data.primary_domain.clone(),
        data.secondary_domain.clone(),
        config.effective_outer_padding(),
        config.inner_band_padding,
    )?;

    let mut series_offsets = IndexMap::with_capacity(data.series.len());
    let mut bars = Vec::new();
    for series in &data.series {
        series_offsets.insert(series.name.clone(), offset_for(series, &scales.outer)?);
        bars.extend(project_series_bars(
            series,
            &scales.outer,
            &scales.inner,
            scales.value,
        )?);
    }
    let primary = scales.outer.domain();
    series_offsets
        .sort_by(|left, _, right, _| primary.index_of(left).cmp(&primary.index_of(right)));

    let panels = grid_panels(&data.series, &scales.outer, dims)?;

    let colors = presentation.resolve_colors(
        config.scheme.as_ref(),
        &data.secondary_domain,
        config.custom_colors.as_ref(),
    )?;
    let legend = if config.legend {
        colors
            .entries()
            .map(|(key, color)| LegendEntry {
                key: key.to_owned(),
                color,
            })
            .collect()
    } else {
        Vec::new()
    };

    let (tick_formatter, tick_formatting) =
        match presentation.resolve_tick_formatter_for_query(data.query.as_ref()) {
            Ok(resolved) => resolved,
            Err(ChartError::MissingFieldMetadata) => {
                warn!("no primary field metadata; tick labels use the fallback formatter");
                (fallback_formatter.clone(), TickFormatting::Fallback)
            }
            Err(err) => return Err(err),
        };

    debug!(
        width = dims.width,
        height = dims.height,
        series = data.series.len(),
        bars = bars.len(),
        legend = legend.len(),
        "computed grouped bar layout"
    );

    Ok(LayoutResult {
        dims,
        value_scale: scales.value,
        outer_scale: scales.outer,
        inner_scale: scales.inner,
        plot_transform: Translation::new(dims.x_offset, dims.y_offset),
        series_offsets,
        bars,
        grid_panels: panels,
        legend,
        colors,
        tick_formatter,
        tick_formatting,
        x_axis: AxisLayout {
            visible: config.show_x_axis,
            show_label: config.show_x_axis_label,
            label: config.x_axis_label.clone(),
        },
        y_axis: AxisLayout {
            visible: config.show_y_axis,
            show_label: config.show_y_axis_label,
            label: config.y_axis_label.clone(),
        },
    })
}
