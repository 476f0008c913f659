use serde::{Deserialize, Serialize};

/// One bar inside a cluster: a sub-category key and its measured value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubSeries {
    pub name: String,
    pub value: f64,
}

impl SubSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// All bars of one primary category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    #[serde(alias = "series", default)]
    pub subseries: Vec<SubSeries>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, subseries: Vec<SubSeries>) -> Self {
        Self {
            name: name.into(),
            subseries,
        }
    }

    /// Returns `(min, max)` over finite values, or `None` when there are none.
    #[must_use]
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        self.subseries
            .iter()
            .map(|entry| entry.value)
            .filter(|value| value.is_finite())
            .fold(None, |extent, value| match extent {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })
    }
}
