use serde::{Deserialize, Serialize};

use crate::core::CategoryDomain;
use crate::error::{ChartError, ChartResult};

use super::{
    ColorLookup, ColorOverrideMap, ColorResolver, ColorSchemeId, FieldType, GroupingMode,
    PaletteColorResolver, QueryMetadata, ScaleKind, StandardTickFormatters, TickFormatter,
    TickFormatterProvider,
};

/// Which formatter the layout ended up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickFormatting {
    Resolved {
        field_type: FieldType,
        grouping: GroupingMode,
    },
    /// No primary-dimension metadata; the caller's fallback is in use.
    Fallback,
}

/// Derives colors and tick formatting by delegating to collaborators.
pub struct PresentationResolver {
    colors: Box<dyn ColorResolver>,
    ticks: Box<dyn TickFormatterProvider>,
}

impl Default for PresentationResolver {
    fn default() -> Self {
        Self::new(
            Box::new(PaletteColorResolver),
            Box::new(StandardTickFormatters),
        )
    }
}

impl PresentationResolver {
    #[must_use]
    pub fn new(colors: Box<dyn ColorResolver>, ticks: Box<dyn TickFormatterProvider>) -> Self {
        Self { colors, ticks }
    }

    #[must_use]
    pub fn with_color_resolver(mut self, colors: Box<dyn ColorResolver>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_tick_formatter_provider(mut self, ticks: Box<dyn TickFormatterProvider>) -> Self {
        self.ticks = ticks;
        self
    }

    /// Colors the sub-categories with ordinal semantics.
    ///
    /// Primary categories are told apart by position, so only the secondary
    /// domain is ever colored.
    pub fn resolve_colors(
        &self,
        scheme: Option<&ColorSchemeId>,
        secondary_domain: &CategoryDomain,
        custom_colors: Option<&ColorOverrideMap>,
    ) -> ChartResult<ColorLookup> {
        self.colors
            .resolve(scheme, ScaleKind::Ordinal, secondary_domain, custom_colors)
    }

    #[must_use]
    pub fn resolve_tick_formatter(
        &self,
        field_type: FieldType,
        grouping: GroupingMode,
    ) -> TickFormatter {
        self.ticks.formatter(field_type, grouping)
    }

    /// Picks the formatter from the first primary dimension of the query.
    ///
    /// Fails with `MissingFieldMetadata` when the snapshot carries no query
    /// metadata or no dimension descriptor.
    pub fn resolve_tick_formatter_for_query(
        &self,
        query: Option<&QueryMetadata>,
    ) -> ChartResult<(TickFormatter, TickFormatting)> {
        let dimension = query
            .and_then(QueryMetadata::primary_dimension)
            .ok_or(ChartError::MissingFieldMetadata)?;
        let field_type = dimension.field.field_type;
        let grouping = dimension.group_by_type.value;

        Ok((
            self.resolve_tick_formatter(field_type, grouping),
            TickFormatting::Resolved {
                field_type,
                grouping,
            },
        ))
    }
}
