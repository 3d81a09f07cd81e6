use crate::error::PlotResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// Frames are still validated so invalid geometry surfaces without a real
/// backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_circle_count: usize,
    pub last_rect_count: usize,
    pub last_path_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_circle_count = frame.circles.len();
        self.last_rect_count = frame.rects.len();
        self.last_path_count = frame.paths.len();
        Ok(())
    }
}
