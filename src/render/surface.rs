use crate::core::{PixelPoint, PixelRect, PixelVertex};
use crate::error::GrapherResult;
use crate::render::{Color, LineStrokeStyle};

/// Immediate-mode drawing target supplied by the host.
///
/// Coordinates are relative to the current origin, which `translate` moves.
/// Color and stroke style are sticky until changed.
pub trait DrawingSurface {
    fn set_color(&mut self, color: Color) -> GrapherResult<()>;
    fn set_stroke_style(&mut self, style: LineStrokeStyle) -> GrapherResult<()>;
    fn translate(&mut self, dx: f64, dy: f64) -> GrapherResult<()>;
    fn fill_rect(&mut self, rect: PixelRect) -> GrapherResult<()>;
    fn stroke_rect(&mut self, rect: PixelRect) -> GrapherResult<()>;
    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint) -> GrapherResult<()>;
    fn draw_polyline(&mut self, points: &[PixelVertex]) -> GrapherResult<()>;
    /// Draws `text` with its baseline starting at `at`.
    fn draw_text(&mut self, text: &str, at: PixelPoint) -> GrapherResult<()>;
    fn set_clip(&mut self, rect: PixelRect) -> GrapherResult<()>;
    fn clear_clip(&mut self) -> GrapherResult<()>;
}
