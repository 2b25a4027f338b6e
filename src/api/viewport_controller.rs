use tracing::warn;

use crate::core::{DataWindow, PixelPoint, Viewport};
use crate::error::GrapherResult;
use crate::render::Renderer;

use super::GrapherEngine;

impl<R: Renderer> GrapherEngine<R> {
    #[must_use]
    pub fn data_window(&self) -> DataWindow {
        self.viewport.window()
    }

    pub fn set_data_window(&mut self, window: DataWindow) -> GrapherResult<()> {
        self.apply_viewport_change("set_data_window", |viewport| viewport.set_window(window))
    }

    /// Pans by a pixel delta.
    pub fn translate_pixels(&mut self, dx: f64, dy: f64) -> GrapherResult<()> {
        self.apply_viewport_change("translate", |viewport| viewport.translate(dx, dy))
    }

    /// Zooms around `center`; positive `dz` zooms in.
    pub fn zoom_at_point(&mut self, center: PixelPoint, dz: f64) -> GrapherResult<()> {
        self.apply_viewport_change("zoom_at_point", |viewport| {
            viewport.zoom_at_point(center, dz)
        })
    }

    /// Zooms to the data rectangle spanned by two pixel corners.
    pub fn zoom_to_box(&mut self, p0: PixelPoint, p1: PixelPoint) -> GrapherResult<()> {
        self.apply_viewport_change("zoom_to_box", |viewport| viewport.zoom_to_box(p0, p1))
    }

    #[must_use]
    pub fn map_x_to_pixel(&self, x: f64) -> i32 {
        self.viewport.x_to_pixel(x)
    }

    #[must_use]
    pub fn map_y_to_pixel(&self, y: f64) -> i32 {
        self.viewport.y_to_pixel(y)
    }

    #[must_use]
    pub fn map_pixel_to_data(&self, point: PixelPoint) -> (f64, f64) {
        self.viewport.pixel_to_data(point)
    }

    /// Runs `change` on the viewport; requests a redraw on success and logs
    /// rejections. A rejected change leaves the viewport untouched.
    pub(super) fn apply_viewport_change(
        &mut self,
        operation: &'static str,
        change: impl FnOnce(&mut Viewport) -> GrapherResult<()>,
    ) -> GrapherResult<()> {
        match change(&mut self.viewport) {
            Ok(()) => {
                self.request_redraw();
                Ok(())
            }
            Err(err) => {
                warn!(operation, error = %err, "viewport change rejected");
                Err(err)
            }
        }
    }
}
