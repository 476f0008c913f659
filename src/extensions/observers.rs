use serde::{Deserialize, Serialize};

use crate::core::ViewDimensions;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub dims: ViewDimensions,
    pub generation: u64,
    pub series_count: usize,
    pub bar_count: usize,
}

/// Event stream forwarded to the host application.
///
/// Interaction events carry the data behind the hit geometry; the chart does
/// not interpret them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    BarClicked {
        series: String,
        subseries: String,
        value: f64,
    },
    LayoutUpdated {
        generation: u64,
        degenerate: bool,
    },
    Rendered,
}

/// Callback hook for hosts that want chart events.
///
/// Observers see events and a read-only context; they cannot reach into the
/// layout snapshot.
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ChartEvent, context: ObserverContext);
}
