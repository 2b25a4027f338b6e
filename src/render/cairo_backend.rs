use std::io::Write;

use cairo::{Context, Format, ImageSurface, LineCap, LineJoin};
use pango::FontDescription;

use crate::core::{PixelPoint, PixelRect, PixelVertex};
use crate::error::{GrapherError, GrapherResult};
use crate::render::{Color, DrawingSurface, LineStrokeStyle, RenderFrame, Renderer};

const STROKE_WIDTH_PX: f64 = 1.0;
// 1px strokes on integer coordinates straddle two device pixels.
const PIXEL_CENTER: f64 = 0.5;
const LABEL_FONT: &str = "Sans 9";

/// [`DrawingSurface`] drawing onto a borrowed Cairo context.
///
/// Text goes through Pango so labels match the host toolkit's fonts. The
/// context is only borrowed for one draw pass.
pub struct CairoSurface<'a> {
    context: &'a Context,
    font: FontDescription,
}

impl<'a> CairoSurface<'a> {
    #[must_use]
    pub fn new(context: &'a Context) -> Self {
        context.set_line_width(STROKE_WIDTH_PX);
        context.set_line_cap(LineCap::Round);
        context.set_line_join(LineJoin::Round);
        Self {
            context,
            font: FontDescription::from_string(LABEL_FONT),
        }
    }
}

impl DrawingSurface for CairoSurface<'_> {
    fn set_color(&mut self, color: Color) -> GrapherResult<()> {
        color.validate()?;
        self.context
            .set_source_rgba(color.red, color.green, color.blue, color.alpha);
        Ok(())
    }

    fn set_stroke_style(&mut self, style: LineStrokeStyle) -> GrapherResult<()> {
        style.validate()?;
        match style {
            LineStrokeStyle::Solid => self.context.set_dash(&[], 0.0),
            LineStrokeStyle::Dashed(pattern) => self
                .context
                .set_dash(&[pattern.on_px, pattern.off_px], 0.0),
        }
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) -> GrapherResult<()> {
        self.context.translate(dx, dy);
        Ok(())
    }

    fn fill_rect(&mut self, rect: PixelRect) -> GrapherResult<()> {
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }

    fn stroke_rect(&mut self, rect: PixelRect) -> GrapherResult<()> {
        self.context.rectangle(
            rect.x + PIXEL_CENTER,
            rect.y + PIXEL_CENTER,
            rect.width,
            rect.height,
        );
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle", err))
    }

    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint) -> GrapherResult<()> {
        self.context
            .move_to(from.x + PIXEL_CENTER, from.y + PIXEL_CENTER);
        self.context.line_to(to.x + PIXEL_CENTER, to.y + PIXEL_CENTER);
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))
    }

    fn draw_polyline(&mut self, points: &[PixelVertex]) -> GrapherResult<()> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        if rest.is_empty() {
            return Ok(());
        }

        self.context.move_to(
            f64::from(first.x) + PIXEL_CENTER,
            f64::from(first.y) + PIXEL_CENTER,
        );
        for point in rest {
            self.context.line_to(
                f64::from(point.x) + PIXEL_CENTER,
                f64::from(point.y) + PIXEL_CENTER,
            );
        }
        self.context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke polyline", err))
    }

    fn draw_text(&mut self, text: &str, at: PixelPoint) -> GrapherResult<()> {
        let layout = pangocairo::functions::create_layout(self.context);
        layout.set_font_description(Some(&self.font));
        layout.set_text(text);

        let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
        self.context.move_to(at.x, at.y - baseline);
        pangocairo::functions::show_layout(self.context, &layout);
        Ok(())
    }

    fn set_clip(&mut self, rect: PixelRect) -> GrapherResult<()> {
        self.context.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.context.clip();
        Ok(())
    }

    fn clear_clip(&mut self) -> GrapherResult<()> {
        self.context.reset_clip();
        Ok(())
    }
}

/// Offscreen Cairo renderer backed by an ARGB32 image surface.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    frames_rendered: usize,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> GrapherResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(GrapherError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            frames_rendered: 0,
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn frames_rendered(&self) -> usize {
        self.frames_rendered
    }

    /// Encodes the last rendered frame as PNG.
    pub fn write_png(&self, out: &mut impl Write) -> GrapherResult<()> {
        self.surface
            .write_to_png(out)
            .map_err(|err| GrapherError::InvalidData(format!("failed to encode png: {err}")))
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GrapherResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        let mut surface = CairoSurface::new(&context);
        frame.replay(&mut surface)?;
        self.frames_rendered += 1;
        Ok(())
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> GrapherError {
    GrapherError::InvalidData(format!("{prefix}: {err}"))
}
