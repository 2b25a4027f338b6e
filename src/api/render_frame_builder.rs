use tracing::debug;

use crate::core::{
    PixelPoint, PixelRect, SampledCurve, Tick, TickAxis, TickPlan, Viewport, WidgetSize,
    plan_ticks, sample_functions,
};
use crate::interaction::SelectionOverlay;
use crate::render::{DrawCommand, LineStrokeStyle, RenderFrame, Renderer};

use super::{GrapherEngine, GrapherStyle};

const AXIS_NAME_OFFSET_PX: f64 = 10.0;
const X_LABEL_OFFSET_PX: f64 = 15.0;
const Y_LABEL_X_PX: f64 = 5.0;

/// Immutable inputs of one frame.
#[derive(Debug, Clone, Copy)]
struct FrameInputs {
    widget: WidgetSize,
    viewport: Viewport,
    style: GrapherStyle,
    selection: Option<SelectionOverlay>,
}

impl<R: Renderer> GrapherEngine<R> {
    /// Builds the draw list for the current state without touching the renderer.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let inputs = FrameInputs {
            widget: self.widget_size,
            viewport: self.viewport,
            style: self.style,
            selection: self.interaction.selection(),
        };
        if !inputs.viewport.is_renderable() {
            debug!(
                plot_width = inputs.viewport.plot_width(),
                plot_height = inputs.viewport.plot_height(),
                "plot area is empty, drawing background only"
            );
            return build_frame(inputs, &[], None);
        }

        let curves = sample_functions(inputs.viewport, self.sample_step_px, &self.functions);
        let ticks = plan_ticks(inputs.viewport);
        build_frame(inputs, &curves, Some(&ticks))
    }
}

/// Emits the draw list: background, plot box, clipped curves, solid origin
/// ticks, dashed stepped ticks, then the selection preview.
fn build_frame(
    inputs: FrameInputs,
    curves: &[SampledCurve],
    ticks: Option<&TickPlan>,
) -> RenderFrame {
    let mut frame = RenderFrame::new(inputs.widget);
    let style = inputs.style;

    frame.push(DrawCommand::SetColor(style.background));
    frame.push(DrawCommand::FillRect(PixelRect::new(
        0.0,
        0.0,
        f64::from(inputs.widget.width),
        f64::from(inputs.widget.height),
    )));

    let Some(ticks) = ticks else {
        return frame;
    };
    let viewport = inputs.viewport;

    let margin = f64::from(viewport.margin());
    let width = f64::from(viewport.plot_width());
    let height = f64::from(viewport.plot_height());
    let local_plot = PixelRect::new(0.0, 0.0, width, height);

    frame.push(DrawCommand::SetColor(style.foreground));
    frame.push(DrawCommand::SetStrokeStyle(LineStrokeStyle::Solid));
    frame.push(DrawCommand::Translate {
        dx: margin,
        dy: margin,
    });
    frame.push(DrawCommand::StrokeRect(local_plot));
    push_text(&mut frame, "x", width, height + AXIS_NAME_OFFSET_PX);
    push_text(&mut frame, "y", -AXIS_NAME_OFFSET_PX, 0.0);
    frame.push(DrawCommand::SetClip(local_plot));
    frame.push(DrawCommand::Translate {
        dx: -margin,
        dy: -margin,
    });

    frame.push(DrawCommand::SetColor(style.curve));
    for curve in curves {
        for segment in &curve.segments {
            if segment.len() >= 2 {
                frame.push(DrawCommand::Polyline(segment.clone()));
            }
        }
    }
    frame.push(DrawCommand::ClearClip);

    frame.push(DrawCommand::SetColor(style.foreground));
    push_ticks(&mut frame, viewport, ticks.x.origin.as_slice());
    push_ticks(&mut frame, viewport, ticks.y.origin.as_slice());

    frame.push(DrawCommand::SetStrokeStyle(LineStrokeStyle::Dashed(
        style.tick_dash,
    )));
    push_ticks(&mut frame, viewport, &ticks.x.stepped);
    push_ticks(&mut frame, viewport, &ticks.y.stepped);

    if let Some(selection) = inputs.selection {
        frame.push(DrawCommand::SetColor(style.selection));
        frame.push(DrawCommand::StrokeRect(selection.rect()));
    }

    frame
}

fn push_ticks(frame: &mut RenderFrame, viewport: Viewport, ticks: &[Tick]) {
    for tick in ticks {
        push_tick(frame, viewport, tick);
    }
}

fn push_tick(frame: &mut RenderFrame, viewport: Viewport, tick: &Tick) {
    let margin = f64::from(viewport.margin());
    let width = f64::from(viewport.plot_width());
    let height = f64::from(viewport.plot_height());
    let pixel = f64::from(tick.pixel);

    match tick.axis {
        TickAxis::X => {
            frame.push(DrawCommand::Line {
                from: PixelPoint::new(pixel, margin),
                to: PixelPoint::new(pixel, height + margin),
            });
            push_text(frame, &tick.label, pixel, height + margin + X_LABEL_OFFSET_PX);
        }
        TickAxis::Y => {
            frame.push(DrawCommand::Line {
                from: PixelPoint::new(margin, pixel),
                to: PixelPoint::new(width + margin, pixel),
            });
            push_text(frame, &tick.label, Y_LABEL_X_PX, pixel);
        }
    }
}

fn push_text(frame: &mut RenderFrame, text: &str, x: f64, y: f64) {
    frame.push(DrawCommand::Text {
        text: text.to_owned(),
        at: PixelPoint::new(x, y),
    });
}
