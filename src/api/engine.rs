use tracing::debug;

use crate::core::{FunctionFactory, FunctionSet, Viewport, WidgetSize};
use crate::error::GrapherResult;
use crate::interaction::InteractionState;
use crate::render::{DrawingSurface, Renderer};

use super::GrapherStyle;

/// Main orchestration facade consumed by host applications.
///
/// `GrapherEngine` owns the viewport, the plotted functions and the pointer
/// state. Hosts feed it widget sizes and pointer events, poll
/// `take_redraw_request`, and render either through the owned renderer or
/// onto a surface borrowed for one draw callback.
pub struct GrapherEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) widget_size: WidgetSize,
    pub(super) functions: FunctionSet,
    pub(super) factory: Box<dyn FunctionFactory>,
    pub(super) interaction: InteractionState,
    pub(super) sample_step_px: u32,
    pub(super) zoom_step: f64,
    pub(super) style: GrapherStyle,
    pub(super) redraw_requested: bool,
}

impl<R: Renderer> GrapherEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn widget_size(&self) -> WidgetSize {
        self.widget_size
    }

    #[must_use]
    pub fn preferred_size(&self) -> WidgetSize {
        WidgetSize::PREFERRED
    }

    #[must_use]
    pub fn style(&self) -> GrapherStyle {
        self.style
    }

    pub fn set_style(&mut self, style: GrapherStyle) -> GrapherResult<()> {
        style.validate()?;
        self.style = style;
        self.request_redraw();
        Ok(())
    }

    #[must_use]
    pub fn sample_step_px(&self) -> u32 {
        self.sample_step_px
    }

    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }

    /// Applies the host's current widget size; the data window is unchanged.
    pub fn resize(&mut self, widget_size: WidgetSize) {
        if widget_size == self.widget_size {
            return;
        }
        self.widget_size = widget_size;
        self.viewport.resize(widget_size);
        debug!(
            width = widget_size.width,
            height = widget_size.height,
            plot_width = self.viewport.plot_width(),
            plot_height = self.viewport.plot_height(),
            "resize plot"
        );
        self.request_redraw();
    }

    /// Returns whether a redraw was requested since the last call, clearing the flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    #[must_use]
    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    pub(super) fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Builds the current frame and hands it to the owned renderer.
    pub fn render(&mut self) -> GrapherResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)?;
        self.redraw_requested = false;
        Ok(())
    }

    /// Builds the current frame and replays it onto a borrowed surface.
    ///
    /// This path is used by toolkit draw callbacks, which hand out a fresh
    /// drawing context per redraw.
    pub fn render_on_surface(&mut self, surface: &mut dyn DrawingSurface) -> GrapherResult<()> {
        let frame = self.build_render_frame();
        frame.replay(surface)?;
        self.redraw_requested = false;
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
