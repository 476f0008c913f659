use crate::core::domain::CategoryDomain;
use crate::error::{ChartError, ChartResult};

/// Default gap between bands as a fraction of the band pitch.
pub const DEFAULT_BAND_PADDING: f64 = 0.1;

/// Discrete scale that splits a pixel range into one band per domain key.
///
/// Band boundaries are rounded to whole pixels. Leftover pixels from the
/// rounding are split evenly before the first and after the last band, and
/// the same `padding` fraction is used between bands and at both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: CategoryDomain,
    range: (f64, f64),
    padding: f64,
    first_start: f64,
    step: f64,
    band_width: f64,
}

impl BandScale {
    pub fn new(domain: CategoryDomain, range: (f64, f64), padding: f64) -> ChartResult<Self> {
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(format!(
                "band padding must be finite and in [0, 1), got {padding}"
            )));
        }

        let range = (finite_or_zero(range.0), finite_or_zero(range.1));
        let (lo, hi) = if range.1 < range.0 {
            (range.1, range.0)
        } else {
            range
        };
        let span = hi - lo;
        let count = domain.len() as f64;

        if domain.is_empty() {
            return Ok(Self {
                domain,
                range,
                padding,
                first_start: lo,
                step: 0.0,
                band_width: 0.0,
            });
        }

        let step = (span / (count + padding)).floor().max(0.0);
        let leftover = span - (count - padding) * step;
        let mut first_start = lo + (leftover / 2.0).round();
        let mut band_width = (step * (1.0 - padding)).round();

        // Rounding can push the last band past the range end by up to a pixel;
        // pull it back in, shifting first and shrinking only if there is no room.
        let overflow = (first_start + step * (count - 1.0) + band_width - hi).ceil();
        if overflow > 0.0 {
            let shift = overflow.min(first_start - lo);
            first_start -= shift;
            band_width = (band_width - (overflow - shift)).max(0.0);
        }

        Ok(Self {
            domain,
            range,
            padding,
            first_start,
            step,
            band_width,
        })
    }

    /// Start coordinate of the band for `key`.
    pub fn position(&self, key: &str) -> ChartResult<f64> {
        self.domain
            .index_of(key)
            .and_then(|index| self.position_at(index))
            .ok_or_else(|| ChartError::UnknownKey {
                key: key.to_owned(),
            })
    }

    /// Start coordinate of the band at domain `index`.
    #[must_use]
    pub fn position_at(&self, index: usize) -> Option<f64> {
        let count = self.domain.len();
        if index >= count {
            return None;
        }
        let slot = if self.is_reversed() {
            count - 1 - index
        } else {
            index
        };
        Some(self.first_start + self.step * slot as f64)
    }

    /// Returns the domain key whose band covers `pixel`, if any.
    #[must_use]
    pub fn key_at(&self, pixel: f64) -> Option<&str> {
        self.bands()
            .find(|&(_, start)| pixel >= start && pixel < start + self.band_width)
            .map(|(key, _)| key)
    }

    /// Iterates `(key, band start)` in domain order.
    pub fn bands(&self) -> impl Iterator<Item = (&str, f64)> {
        self.domain
            .iter()
            .enumerate()
            .filter_map(|(index, key)| self.position_at(index).map(|start| (key, start)))
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.band_width
    }

    /// Distance between the starts of consecutive bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn domain(&self) -> &CategoryDomain {
        &self.domain
    }

    /// Pixel extent covered from the range start to the end of the last band.
    #[must_use]
    pub fn span(&self) -> f64 {
        let (lo, _) = self.ordered_range();
        if self.domain.is_empty() {
            return 0.0;
        }
        let last_slot = (self.domain.len() - 1) as f64;
        self.first_start + self.step * last_slot + self.band_width - lo
    }

    fn is_reversed(&self) -> bool {
        self.range.1 < self.range.0
    }

    fn ordered_range(&self) -> (f64, f64) {
        if self.is_reversed() {
            (self.range.1, self.range.0)
        } else {
            self.range
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
