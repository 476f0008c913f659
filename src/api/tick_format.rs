use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Declared type of the field a category axis is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[serde(alias = "number")]
    Numeric,
    #[serde(alias = "date", alias = "datetime")]
    Temporal,
    #[serde(alias = "string")]
    Categorical,
    #[serde(other)]
    Unknown,
}

/// How the query grouped the category field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupingMode {
    GroupBy,
    Year,
    Month,
    Day,
    Hour,
    #[serde(other)]
    Unknown,
}

/// Labels that mark synthetic buckets and are never reformatted.
pub const PASSTHROUGH_LABELS: [&str; 2] = ["No Value", "Other"];

/// Shared tick-label formatting function.
#[derive(Clone)]
pub struct TickFormatter {
    format: Arc<dyn Fn(&str) -> String + Send + Sync>,
}

impl TickFormatter {
    pub fn new(format: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self {
            format: Arc::new(format),
        }
    }

    /// Formatter that returns the raw label unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(str::to_owned)
    }

    #[must_use]
    pub fn format(&self, raw: &str) -> String {
        (self.format)(raw)
    }
}

impl Default for TickFormatter {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for TickFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickFormatter").finish_non_exhaustive()
    }
}

/// External collaborator choosing a label formatter for a field.
pub trait TickFormatterProvider {
    fn formatter(&self, field_type: FieldType, grouping: GroupingMode) -> TickFormatter;
}

/// Default formatter set: numeric trimming and date patterns per grouping.
///
/// Unsupported combinations get the identity formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTickFormatters;

impl TickFormatterProvider for StandardTickFormatters {
    fn formatter(&self, field_type: FieldType, grouping: GroupingMode) -> TickFormatter {
        match (field_type, grouping) {
            (FieldType::Numeric, _) => with_passthrough(format_numeric_label),
            (FieldType::Temporal, GroupingMode::Unknown) => TickFormatter::identity(),
            (FieldType::Temporal, grouping) => {
                let pattern = temporal_pattern(grouping);
                with_passthrough(move |raw| format_temporal_label(raw, pattern))
            }
            (FieldType::Categorical | FieldType::Unknown, _) => TickFormatter::identity(),
        }
    }
}

fn with_passthrough(format: impl Fn(&str) -> String + Send + Sync + 'static) -> TickFormatter {
    TickFormatter::new(move |raw| {
        if PASSTHROUGH_LABELS.contains(&raw) {
            raw.to_owned()
        } else {
            format(raw)
        }
    })
}

fn temporal_pattern(grouping: GroupingMode) -> &'static str {
    match grouping {
        GroupingMode::Year => "%Y",
        GroupingMode::Month => "%b %Y",
        GroupingMode::Hour => "%m/%d/%Y %H:00",
        GroupingMode::Day | GroupingMode::GroupBy | GroupingMode::Unknown => "%m/%d/%Y",
    }
}

fn format_numeric_label(raw: &str) -> String {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return raw.to_owned();
    };
    if !value.is_finite() {
        return raw.to_owned();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
}

fn format_temporal_label(raw: &str, pattern: &str) -> String {
    parse_timestamp(raw.trim()).map_or_else(
        || raw.to_owned(),
        |timestamp| timestamp.format(pattern).to_string(),
    )
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc).naive_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(parsed);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    raw.parse::<i64>()
        .ok()
        .and_then(|seconds| DateTime::<Utc>::from_timestamp(seconds, 0))
        .map(|timestamp| timestamp.naive_utc())
}
