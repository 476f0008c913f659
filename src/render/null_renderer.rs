use crate::api::LayoutResult;
use crate::error::ChartResult;
use crate::render::Renderer;

/// No-op renderer used by tests and headless layout usage.
///
/// It still validates the layout so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_bar_count: usize,
    pub last_panel_count: usize,
    pub last_legend_count: usize,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, layout: &LayoutResult) -> ChartResult<()> {
        layout.validate()?;
        self.last_bar_count = layout.bars.len();
        self.last_panel_count = layout.grid_panels.len();
        self.last_legend_count = layout.legend.len();
        self.render_count += 1;
        Ok(())
    }
}
