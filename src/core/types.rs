use serde::{Deserialize, Serialize};

/// Total drawing area allotted to the chart, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSize {
    pub width: f64,
    pub height: f64,
}

impl ViewSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Pixel insets around the plot area.
///
/// Serialized as the 4-tuple `[top, right, bottom, left]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Returns a copy with every side clamped to a finite, non-negative inset.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self::new(
            non_negative(self.top),
            non_negative(self.right),
            non_negative(self.bottom),
            non_negative(self.left),
        )
    }
}

impl From<[f64; 4]> for Margin {
    fn from([top, right, bottom, left]: [f64; 4]) -> Self {
        Self::new(top, right, bottom, left)
    }
}

impl From<Margin> for [f64; 4] {
    fn from(margin: Margin) -> Self {
        [margin.top, margin.right, margin.bottom, margin.left]
    }
}

/// Numeric range of the measured value, serialized as `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl From<[f64; 2]> for ValueDomain {
    fn from([min, max]: [f64; 2]) -> Self {
        Self::new(min, max)
    }
}

impl From<ValueDomain> for [f64; 2] {
    fn from(domain: ValueDomain) -> Self {
        [domain.min, domain.max]
    }
}

/// 2D displacement applied to a group of marks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Translation {
    pub dx: f64,
    pub dy: f64,
}

impl Translation {
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Composes two displacements.
    #[must_use]
    pub fn then(self, other: Self) -> Self {
        Self::new(self.dx + other.dx, self.dy + other.dy)
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive on the top-left edges, exclusive on the bottom-right ones.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    #[must_use]
    pub fn translated(self, by: Translation) -> Self {
        Self::new(self.x + by.dx, self.y + by.dy, self.width, self.height)
    }
}

/// Maps NaN, infinities and negatives to zero.
#[must_use]
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_serializes_as_four_tuple() {
        let margin = Margin::new(10.0, 20.0, 70.0, 100.0);
        let json = serde_json::to_string(&margin).expect("serialize");
        assert_eq!(json, "[10.0,20.0,70.0,100.0]");

        let restored: Margin = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, margin);
    }

    #[test]
    fn clamped_margin_drops_negative_and_nan_sides() {
        let margin = Margin::new(-5.0, f64::NAN, 3.0, f64::INFINITY).clamped();
        assert_eq!(margin, Margin::new(0.0, 0.0, 3.0, 0.0));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(14.9, 14.9));
        assert!(!rect.contains(15.0, 12.0));
    }
}
