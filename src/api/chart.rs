use tracing::{debug, trace};

use crate::core::{Series, Translation};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartEvent, ChartObserver};
use crate::render::Renderer;

use super::{
    BarChartConfig, BarHit, ChartData, LayoutResult, PresentationResolver, TickFormatter, layout,
};

/// Generation handed out by `GroupedBarChart::begin_layout`.
///
/// Results committed with an older ticket than the current snapshot are
/// dropped, so a slow computation can never replace a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayoutTicket {
    generation: u64,
}

impl LayoutTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Chart instance owning the configuration, collaborators and the most
/// recently committed layout.
pub struct GroupedBarChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: BarChartConfig,
    pub(super) presentation: PresentationResolver,
    pub(super) fallback_formatter: TickFormatter,
    pub(super) observers: Vec<Box<dyn ChartObserver>>,
    pub(super) snapshot: Option<LayoutResult>,
    pub(super) committed_generation: u64,
    pub(super) issued_generation: u64,
}

impl<R: Renderer> GroupedBarChart<R> {
    pub fn new(renderer: R, config: BarChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            presentation: PresentationResolver::default(),
            fallback_formatter: TickFormatter::identity(),
            observers: Vec::new(),
            snapshot: None,
            committed_generation: 0,
            issued_generation: 0,
        })
    }

    #[must_use]
    pub fn with_presentation(mut self, presentation: PresentationResolver) -> Self {
        self.presentation = presentation;
        self
    }

    /// Formatter used when the data carries no primary field metadata.
    #[must_use]
    pub fn with_fallback_formatter(mut self, formatter: TickFormatter) -> Self {
        self.fallback_formatter = formatter;
        self
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    /// Replaces the configuration. The current layout stays until the next `init`.
    pub fn set_config(&mut self, config: BarChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Latest committed layout, if any.
    #[must_use]
    pub fn current_layout(&self) -> Option<&LayoutResult> {
        self.snapshot.as_ref()
    }

    /// Computes a layout for `data` without touching the chart state.
    pub fn compute(&self, data: &ChartData) -> ChartResult<LayoutResult> {
        layout(
            &self.config,
            data,
            &self.presentation,
            &self.fallback_formatter,
        )
    }

    /// Reserves the next layout generation.
    pub fn begin_layout(&mut self) -> LayoutTicket {
        self.issued_generation += 1;
        LayoutTicket {
            generation: self.issued_generation,
        }
    }

    /// Installs `result` unless a newer layout has already been committed.
    ///
    /// Returns `true` when the result became the current layout.
    pub fn commit_layout(&mut self, ticket: LayoutTicket, result: LayoutResult) -> bool {
        if ticket.generation < self.committed_generation {
            debug!(
                ticket = ticket.generation,
                current = self.committed_generation,
                "dropping stale layout result"
            );
            return false;
        }

        let degenerate = result.dims.is_degenerate();
        self.committed_generation = ticket.generation;
        self.snapshot = Some(result);
        self.emit_event(&ChartEvent::LayoutUpdated {
            generation: ticket.generation,
            degenerate,
        });
        true
    }

    /// (Re)initializes the chart from a data snapshot.
    ///
    /// On failure the previous layout is discarded as well, since it no longer
    /// matches the data the host is showing.
    pub fn init(&mut self, data: &ChartData) -> ChartResult<&LayoutResult> {
        let ticket = self.begin_layout();
        match self.compute(data) {
            Ok(result) => {
                self.commit_layout(ticket, result);
            }
            Err(err) => {
                if ticket.generation >= self.committed_generation {
                    self.committed_generation = ticket.generation;
                    self.snapshot = None;
                }
                return Err(err);
            }
        }
        self.snapshot.as_ref().ok_or_else(missing_layout)
    }

    /// Translation of one series cluster in the current layout.
    pub fn series_transform(&self, series: &Series) -> ChartResult<Translation> {
        self.snapshot
            .as_ref()
            .ok_or_else(missing_layout)?
            .series_offset(series)
    }

    /// Hands the current layout to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let layout = self.snapshot.as_ref().ok_or_else(missing_layout)?;
        self.renderer.render(layout)?;
        self.emit_event(&ChartEvent::Rendered);
        Ok(())
    }

    /// Maps a pointer click in view coordinates to a bar and notifies observers.
    pub fn click(&mut self, x: f64, y: f64) -> Option<BarHit> {
        let hit = self.snapshot.as_ref()?.hit_test(x, y)?;
        trace!(series = %hit.series, subseries = %hit.subseries, "bar clicked");
        self.emit_event(&ChartEvent::BarClicked {
            series: hit.series.clone(),
            subseries: hit.subseries.clone(),
            value: hit.value,
        });
        Some(hit)
    }
}

fn missing_layout() -> ChartError {
    ChartError::InvalidData("chart has no layout; call `init` first".to_owned())
}
