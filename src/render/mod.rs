mod null_renderer;
mod primitives;

pub use null_renderer::NullRenderer;
pub use primitives::Color;

use crate::api::LayoutResult;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully computed, immutable `LayoutResult` so drawing code
/// stays isolated from scale construction and domain validation.
pub trait Renderer {
    fn render(&mut self, layout: &LayoutResult) -> ChartResult<()>;
}
