use crate::core::ViewDimensions;
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartEvent, ChartObserver, ObserverContext};
use crate::render::Renderer;

use super::GroupedBarChart;

impl<R: Renderer> GroupedBarChart<R> {
    /// Registers an observer with unique identifier.
    pub fn register_observer(&mut self, observer: Box<dyn ChartObserver>) -> ChartResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ChartError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.has_observer(&observer_id) {
            return Err(ChartError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        if let Some(position) = self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            self.observers.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn has_observer(&self, observer_id: &str) -> bool {
        self.observers
            .iter()
            .any(|observer| observer.id() == observer_id)
    }

    pub(super) fn observer_context(&self) -> ObserverContext {
        let (dims, series_count, bar_count) = self.snapshot.as_ref().map_or(
            (ViewDimensions::default(), 0, 0),
            |layout| (layout.dims, layout.series_offsets.len(), layout.bars.len()),
        );
        ObserverContext {
            dims,
            generation: self.committed_generation,
            series_count,
            bar_count,
        }
    }

    pub(super) fn emit_event(&mut self, event: &ChartEvent) {
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
