mod frame;
mod null_renderer;
mod primitives;
mod recording_surface;
mod surface;

pub use frame::{DrawCommand, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, DashPattern, LineStrokeStyle};
pub use recording_surface::RecordingSurface;
pub use surface::DrawingSurface;

use crate::error::GrapherResult;

/// Contract implemented by any rendering backend that owns its target.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from viewport and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GrapherResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderer, CairoSurface};
