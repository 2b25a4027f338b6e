use crate::core::{PixelPoint, PixelRect, PixelVertex};
use crate::error::GrapherResult;
use crate::render::{Color, DrawCommand, DrawingSurface, LineStrokeStyle, RenderFrame, Renderer};

/// Surface that records every call instead of drawing.
///
/// Useful for diagnostics and for asserting draw order in tests.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_color(&mut self, color: Color) -> GrapherResult<()> {
        self.commands.push(DrawCommand::SetColor(color));
        Ok(())
    }

    fn set_stroke_style(&mut self, style: LineStrokeStyle) -> GrapherResult<()> {
        self.commands.push(DrawCommand::SetStrokeStyle(style));
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) -> GrapherResult<()> {
        self.commands.push(DrawCommand::Translate { dx, dy });
        Ok(())
    }

    fn fill_rect(&mut self, rect: PixelRect) -> GrapherResult<()> {
        self.commands.push(DrawCommand::FillRect(rect));
        Ok(())
    }

    fn stroke_rect(&mut self, rect: PixelRect) -> GrapherResult<()> {
        self.commands.push(DrawCommand::StrokeRect(rect));
        Ok(())
    }

    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint) -> GrapherResult<()> {
        self.commands.push(DrawCommand::Line { from, to });
        Ok(())
    }

    fn draw_polyline(&mut self, points: &[PixelVertex]) -> GrapherResult<()> {
        self.commands.push(DrawCommand::Polyline(points.to_vec()));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, at: PixelPoint) -> GrapherResult<()> {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            at,
        });
        Ok(())
    }

    fn set_clip(&mut self, rect: PixelRect) -> GrapherResult<()> {
        self.commands.push(DrawCommand::SetClip(rect));
        Ok(())
    }

    fn clear_clip(&mut self) -> GrapherResult<()> {
        self.commands.push(DrawCommand::ClearClip);
        Ok(())
    }
}

impl Renderer for RecordingSurface {
    fn render(&mut self, frame: &RenderFrame) -> GrapherResult<()> {
        self.clear();
        frame.replay(self)
    }
}
