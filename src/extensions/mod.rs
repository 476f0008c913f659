//! Host-facing hooks that sit outside the layout path.

pub mod observers;

pub use observers::{ChartEvent, ChartObserver, ObserverContext};
