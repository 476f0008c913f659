use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_BAND_PADDING, LegendPosition, Margin, ViewSize};
use crate::error::{ChartError, ChartResult};

use super::{ColorOverrideMap, ColorSchemeId};

/// Public chart configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub view: ViewSize,
    #[serde(default = "default_margin")]
    pub margin: Margin,
    #[serde(default)]
    pub legend: bool,
    /// Width taken from the plot for the legend column when `legend` is set.
    #[serde(default = "default_legend_reserve")]
    pub legend_reserve: f64,
    #[serde(default)]
    pub legend_position: LegendPosition,
    #[serde(default = "default_true")]
    pub show_x_axis: bool,
    #[serde(default = "default_true")]
    pub show_y_axis: bool,
    #[serde(default)]
    pub show_x_axis_label: bool,
    #[serde(default)]
    pub show_y_axis_label: bool,
    #[serde(default)]
    pub x_axis_label: Option<String>,
    #[serde(default)]
    pub y_axis_label: Option<String>,
    #[serde(default)]
    pub scheme: Option<ColorSchemeId>,
    #[serde(default)]
    pub custom_colors: Option<ColorOverrideMap>,
    #[serde(default = "default_band_padding")]
    pub outer_band_padding: f64,
    #[serde(default = "default_band_padding")]
    pub inner_band_padding: f64,
    /// Extra gap between category groups, as a fraction of the outer band
    /// pitch. Added on top of `outer_band_padding`; zero leaves it unchanged.
    #[serde(default)]
    pub group_spacing: f64,
}

impl BarChartConfig {
    /// Creates a config with the default chart margins and paddings.
    #[must_use]
    pub fn new(view: ViewSize) -> Self {
        Self {
            view,
            margin: default_margin(),
            legend: false,
            legend_reserve: default_legend_reserve(),
            legend_position: LegendPosition::default(),
            show_x_axis: true,
            show_y_axis: true,
            show_x_axis_label: false,
            show_y_axis_label: false,
            x_axis_label: None,
            y_axis_label: None,
            scheme: None,
            custom_colors: None,
            outer_band_padding: default_band_padding(),
            inner_band_padding: default_band_padding(),
            group_spacing: 0.0,
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Enables the legend column and sets its reserved width.
    #[must_use]
    pub fn with_legend(mut self, reserve: f64) -> Self {
        self.legend = true;
        self.legend_reserve = reserve;
        self
    }

    #[must_use]
    pub fn with_legend_position(mut self, position: LegendPosition) -> Self {
        self.legend_position = position;
        self
    }

    #[must_use]
    pub fn with_axes(mut self, show_x_axis: bool, show_y_axis: bool) -> Self {
        self.show_x_axis = show_x_axis;
        self.show_y_axis = show_y_axis;
        self
    }

    #[must_use]
    pub fn with_x_axis_label(mut self, label: impl Into<String>) -> Self {
        self.show_x_axis_label = true;
        self.x_axis_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_y_axis_label(mut self, label: impl Into<String>) -> Self {
        self.show_y_axis_label = true;
        self.y_axis_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_scheme(mut self, scheme: ColorSchemeId) -> Self {
        self.scheme = Some(scheme);
        self
    }

    #[must_use]
    pub fn with_custom_colors(mut self, colors: ColorOverrideMap) -> Self {
        self.custom_colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, outer: f64, inner: f64) -> Self {
        self.outer_band_padding = outer;
        self.inner_band_padding = inner;
        self
    }

    #[must_use]
    pub fn with_group_spacing(mut self, spacing: f64) -> Self {
        self.group_spacing = spacing;
        self
    }

    /// Outer padding after group spacing is applied.
    #[must_use]
    pub fn effective_outer_padding(&self) -> f64 {
        self.outer_band_padding + self.group_spacing
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.legend_reserve.is_finite() || self.legend_reserve < 0.0 {
            return Err(ChartError::InvalidData(
                "legend reserve must be finite and >= 0".to_owned(),
            ));
        }
        if !self.group_spacing.is_finite() || self.group_spacing < 0.0 {
            return Err(ChartError::InvalidData(
                "group spacing must be finite and >= 0".to_owned(),
            ));
        }
        for (name, padding) in [
            ("outer band padding", self.effective_outer_padding()),
            ("inner band padding", self.inner_band_padding),
        ] {
            if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and in [0, 1)"
                )));
            }
        }
        if let Some(colors) = &self.custom_colors {
            for color in colors.values() {
                color.validate()?;
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates a config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_margin() -> Margin {
    Margin::new(10.0, 20.0, 70.0, 100.0)
}

fn default_legend_reserve() -> f64 {
    9.0
}

fn default_band_padding() -> f64 {
    DEFAULT_BAND_PADDING
}

fn default_true() -> bool {
    true
}
