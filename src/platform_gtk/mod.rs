//! GTK4 host adapter: wires a `DrawingArea` to a [`GrapherEngine`].
//!
//! GTK gestures are translated into the engine's press/drag/release/click and
//! wheel calls. After every event the adapter applies the engine's cursor and
//! queues a draw when the engine requested one. Everything runs on the GTK
//! main thread, so the engine is shared through `Rc<RefCell<_>>`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::{debug, warn};

use crate::api::GrapherEngine;
use crate::core::{PixelPoint, WidgetSize};
use crate::error::GrapherResult;
use crate::interaction::PointerButton;
use crate::render::{CairoSurface, Renderer};

pub struct GtkGrapherAdapter<R: Renderer + 'static> {
    engine: Rc<RefCell<GrapherEngine<R>>>,
    drawing_area: gtk::DrawingArea,
}

impl<R: Renderer + 'static> GtkGrapherAdapter<R> {
    #[must_use]
    pub fn new(engine: GrapherEngine<R>) -> Self {
        let preferred = engine.preferred_size();
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(to_gtk_extent(preferred.width));
        drawing_area.set_content_height(to_gtk_extent(preferred.height));
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        let adapter = Self {
            engine: Rc::new(RefCell::new(engine)),
            drawing_area,
        };
        adapter.install_draw_func();
        adapter.install_pointer_controllers();
        adapter
    }

    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<GrapherEngine<R>>> {
        Rc::clone(&self.engine)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Adds a function from an expression and schedules a redraw.
    pub fn add_expression(&self, expression: &str) -> GrapherResult<()> {
        let mut engine = self.engine.borrow_mut();
        engine.add_expression(expression)?;
        sync_widget(&self.drawing_area, &mut engine);
        Ok(())
    }

    fn install_draw_func(&self) {
        let engine = Rc::clone(&self.engine);
        self.drawing_area
            .set_draw_func(move |_area, context, width, height| {
                let Ok(mut engine) = engine.try_borrow_mut() else {
                    return;
                };
                engine.resize(WidgetSize::new(
                    u32::try_from(width).unwrap_or(0),
                    u32::try_from(height).unwrap_or(0),
                ));
                let mut surface = CairoSurface::new(context);
                if let Err(err) = engine.render_on_surface(&mut surface) {
                    warn!(error = %err, "failed to render plot");
                }
            });
    }

    fn install_pointer_controllers(&self) {
        let last_pointer = Rc::new(Cell::new(PixelPoint::default()));

        let drag = gtk::GestureDrag::new();
        drag.set_button(0);
        drag.connect_drag_begin({
            let engine = Rc::clone(&self.engine);
            let area = self.drawing_area.downgrade();
            let last_pointer = Rc::clone(&last_pointer);
            move |gesture, x, y| {
                let point = PixelPoint::new(x, y);
                last_pointer.set(point);
                let button = PointerButton::from(gesture.current_button());
                let mut engine = engine.borrow_mut();
                engine.pointer_press(button, point);
                if let Some(area) = area.upgrade() {
                    sync_widget(&area, &mut engine);
                }
            }
        });
        drag.connect_drag_update({
            let engine = Rc::clone(&self.engine);
            let area = self.drawing_area.downgrade();
            let last_pointer = Rc::clone(&last_pointer);
            move |gesture, offset_x, offset_y| {
                let Some(point) = drag_point(gesture, offset_x, offset_y) else {
                    return;
                };
                last_pointer.set(point);
                let mut engine = engine.borrow_mut();
                if let Err(err) = engine.pointer_drag(point) {
                    debug!(error = %err, "drag ignored");
                }
                if let Some(area) = area.upgrade() {
                    sync_widget(&area, &mut engine);
                }
            }
        });
        drag.connect_drag_end({
            let engine = Rc::clone(&self.engine);
            let area = self.drawing_area.downgrade();
            move |gesture, offset_x, offset_y| {
                let Some(point) = drag_point(gesture, offset_x, offset_y) else {
                    return;
                };
                let button = PointerButton::from(gesture.current_button());
                let mut engine = engine.borrow_mut();
                if let Err(err) = engine.pointer_release(button, point) {
                    debug!(error = %err, "box zoom ignored");
                }
                // Toolkits report a click for the same gesture; keep that behavior.
                if let Err(err) = engine.pointer_click(button, point) {
                    debug!(error = %err, "click zoom ignored");
                }
                if let Some(area) = area.upgrade() {
                    sync_widget(&area, &mut engine);
                }
            }
        });
        self.drawing_area.add_controller(drag);

        let motion = gtk::EventControllerMotion::new();
        motion.connect_motion({
            let last_pointer = Rc::clone(&last_pointer);
            move |_, x, y| last_pointer.set(PixelPoint::new(x, y))
        });
        self.drawing_area.add_controller(motion);

        let scroll = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::VERTICAL);
        scroll.connect_scroll({
            let engine = Rc::clone(&self.engine);
            let area = self.drawing_area.downgrade();
            move |_, _dx, dy| {
                let mut engine = engine.borrow_mut();
                if let Err(err) = engine.wheel(last_pointer.get(), dy) {
                    debug!(error = %err, "wheel zoom ignored");
                }
                if let Some(area) = area.upgrade() {
                    sync_widget(&area, &mut engine);
                }
                gtk::glib::Propagation::Stop
            }
        });
        self.drawing_area.add_controller(scroll);
    }
}

fn drag_point(gesture: &gtk::GestureDrag, offset_x: f64, offset_y: f64) -> Option<PixelPoint> {
    let (start_x, start_y) = gesture.start_point()?;
    Some(PixelPoint::new(start_x + offset_x, start_y + offset_y))
}

fn sync_widget<R: Renderer>(area: &gtk::DrawingArea, engine: &mut GrapherEngine<R>) {
    area.set_cursor_from_name(Some(engine.cursor_style().css_name()));
    if engine.take_redraw_request() {
        area.queue_draw();
    }
}

fn to_gtk_extent(extent: u32) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX)
}
