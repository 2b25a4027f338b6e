use crate::error::GrapherResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so invalid geometry is caught without a
/// real drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_command_count: usize,
    pub last_polyline_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GrapherResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_command_count = frame.commands.len();
        self.last_polyline_count = frame.polyline_count();
        self.last_text_count = frame.texts().len();
        Ok(())
    }
}
