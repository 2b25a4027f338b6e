use tracing::trace;

use crate::core::PixelPoint;
use crate::error::GrapherResult;
use crate::interaction::{
    CursorStyle, DragEffect, InteractionMode, PointerButton, SelectionOverlay, click_zoom_delta,
    wheel_zoom_delta,
};
use crate::render::Renderer;

use super::GrapherEngine;

impl<R: Renderer> GrapherEngine<R> {
    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn cursor_style(&self) -> CursorStyle {
        self.interaction.cursor()
    }

    #[must_use]
    pub fn selection_overlay(&self) -> Option<SelectionOverlay> {
        self.interaction.selection()
    }

    pub fn pointer_press(&mut self, button: PointerButton, point: PixelPoint) {
        trace!(?button, x = point.x, y = point.y, "pointer press");
        self.interaction.on_press(button, point);
    }

    /// Handles pointer motion with a button held.
    ///
    /// Left drags pan by the motion since the previous event; right drags
    /// update the box-select preview.
    pub fn pointer_drag(&mut self, point: PixelPoint) -> GrapherResult<()> {
        match self.interaction.on_drag(point) {
            DragEffect::None => Ok(()),
            DragEffect::Pan { dx, dy } => self.translate_pixels(dx, dy),
            DragEffect::Select(_) => {
                self.request_redraw();
                Ok(())
            }
        }
    }

    /// Ends the drag; a right-button release zooms to the selected box.
    ///
    /// The state returns to idle even when the box zoom is rejected, e.g. for
    /// a zero-area selection.
    pub fn pointer_release(&mut self, button: PointerButton, point: PixelPoint) -> GrapherResult<()> {
        trace!(?button, x = point.x, y = point.y, "pointer release");
        let had_selection = self.interaction.selection().is_some();
        let committed = self.interaction.on_release(button, point);
        if had_selection {
            self.request_redraw();
        }
        match committed {
            Some(selection) => self.zoom_to_box(selection.anchor, selection.current),
            None => Ok(()),
        }
    }

    /// Click zoom: left zooms in around `point`, right zooms out.
    ///
    /// Hosts deliver clicks independently of the press/drag/release sequence,
    /// so a drag followed by a click both apply.
    pub fn pointer_click(&mut self, button: PointerButton, point: PixelPoint) -> GrapherResult<()> {
        match click_zoom_delta(button, self.zoom_step) {
            Some(dz) => self.zoom_at_point(point, dz),
            None => Ok(()),
        }
    }

    /// Wheel zoom around `point`; negative rotation zooms in.
    pub fn wheel(&mut self, point: PixelPoint, rotation: f64) -> GrapherResult<()> {
        match wheel_zoom_delta(rotation, self.zoom_step) {
            Some(dz) => self.zoom_at_point(point, dz),
            None => Ok(()),
        }
    }
}
