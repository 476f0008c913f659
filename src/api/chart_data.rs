use serde::{Deserialize, Serialize};

use crate::core::{CategoryDomain, Series, ValueDomain};
use crate::error::{ChartError, ChartResult};

use super::{FieldType, GroupingMode};

/// Declared type (and optional name) of a queried field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    #[serde(alias = "field_type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupByDescriptor {
    pub value: GroupingMode,
}

/// One grouping dimension of the query that produced the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionDescriptor {
    pub field: FieldDescriptor,
    #[serde(alias = "group_by_type")]
    pub group_by_type: GroupByDescriptor,
}

impl DimensionDescriptor {
    #[must_use]
    pub fn new(field_type: FieldType, grouping: GroupingMode) -> Self {
        Self {
            field: FieldDescriptor {
                field_type,
                name: None,
            },
            group_by_type: GroupByDescriptor { value: grouping },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryMetadata {
    #[serde(default)]
    pub dimensions: Vec<DimensionDescriptor>,
}

impl QueryMetadata {
    /// The primary (category-axis) dimension is the first one declared.
    #[must_use]
    pub fn primary_dimension(&self) -> Option<&DimensionDescriptor> {
        self.dimensions.first()
    }
}

/// Data snapshot for one layout pass.
///
/// The domain fields also accept the `m0Domain`/`d0Domain`/`d1Domain` names
/// used by the host's query results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub series: Vec<Series>,
    #[serde(alias = "m0Domain")]
    pub value_domain: ValueDomain,
    #[serde(alias = "d0Domain")]
    pub primary_domain: CategoryDomain,
    #[serde(alias = "d1Domain")]
    pub secondary_domain: CategoryDomain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<QueryMetadata>,
}

impl ChartData {
    /// Derives all three domains from the series themselves.
    ///
    /// Primary keys follow series order, secondary keys follow first
    /// appearance, and the value domain spans every finite value (`[0, 0]`
    /// when there is none). Repeated series names share one band.
    #[must_use]
    pub fn from_series(series: Vec<Series>) -> Self {
        let mut primary_domain = CategoryDomain::new();
        let mut secondary_domain = CategoryDomain::new();
        let mut extent: Option<(f64, f64)> = None;

        for entry in &series {
            primary_domain.insert(entry.name.as_str());
            for sub in &entry.subseries {
                secondary_domain.insert(sub.name.as_str());
            }
            if let Some((min, max)) = entry.value_extent() {
                extent = Some(match extent {
                    None => (min, max),
                    Some((lo, hi)) => (lo.min(min), hi.max(max)),
                });
            }
        }

        let (min, max) = extent.unwrap_or((0.0, 0.0));
        Self {
            series,
            value_domain: ValueDomain::new(min, max),
            primary_domain,
            secondary_domain,
            query: None,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: QueryMetadata) -> Self {
        self.query = Some(query);
        self
    }

    #[must_use]
    pub fn with_primary_dimension(self, field_type: FieldType, grouping: GroupingMode) -> Self {
        self.with_query(QueryMetadata {
            dimensions: vec![DimensionDescriptor::new(field_type, grouping)],
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart data: {e}")))
    }
}
