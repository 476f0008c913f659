use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::types::{Margin, ViewSize, non_negative};
use crate::error::{ChartError, ChartResult};

/// Side of the plot where the legend column is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    #[default]
    Right,
    Left,
}

/// Usable plot rectangle inside the view.
///
/// `x_offset`/`y_offset` locate the top-left corner of the plot area within
/// the view. Width and height are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewDimensions {
    pub width: f64,
    pub height: f64,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl ViewDimensions {
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Fails with `DegenerateGeometry` when there is nothing to draw into.
    pub fn ensure_drawable(self) -> ChartResult<()> {
        if self.is_degenerate() {
            return Err(ChartError::DegenerateGeometry {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Computes the plot rectangle left after margins and legend reservation.
///
/// Margins are reserved on all four sides. When `legend` is set,
/// `legend_reserve` pixels are taken from the width on the `legend_position`
/// side. Axis-label flags do not reserve space here: callers widen the margin
/// for them.
///
/// Malformed input (NaN, negative view size, oversized margins) collapses the
/// area to zero instead of failing.
#[must_use]
pub fn calculate_view_dimensions(
    view: ViewSize,
    margin: Margin,
    show_x_axis_label: bool,
    show_y_axis_label: bool,
    legend: bool,
    legend_reserve: f64,
    legend_position: LegendPosition,
) -> ViewDimensions {
    let margin = margin.clamped();
    let reserve = if legend {
        non_negative(legend_reserve)
    } else {
        0.0
    };

    let width = non_negative(view.width - margin.left - margin.right - reserve);
    let height = non_negative(view.height - margin.top - margin.bottom);
    let x_offset = match legend_position {
        LegendPosition::Left => margin.left + reserve,
        LegendPosition::Right => margin.left,
    };

    let dims = ViewDimensions {
        width,
        height,
        x_offset,
        y_offset: margin.top,
    };

    trace!(
        width,
        height,
        x_offset,
        legend,
        reserve,
        show_x_axis_label,
        show_y_axis_label,
        "calculated view dimensions"
    );
    if dims.is_degenerate() {
        warn!(
            view_width = view.width,
            view_height = view.height,
            "plot area collapsed to zero; chart will render empty"
        );
    }

    dims
}
