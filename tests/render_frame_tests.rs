use grapher_rs::GrapherError;
use grapher_rs::api::{GrapherEngine, GrapherEngineConfig};
use grapher_rs::core::{
    DataWindow, FnFunction, PixelPoint, PixelRect, PixelVertex, WidgetSize,
};
use grapher_rs::interaction::PointerButton;
use grapher_rs::render::{
    Color, DashPattern, DrawCommand, DrawingSurface, LineStrokeStyle, NullRenderer,
    RecordingSurface, RenderFrame,
};

fn engine(widget: WidgetSize) -> GrapherEngine<NullRenderer> {
    let window = DataWindow::new(-1.5, 1.5, -1.5, 1.5).expect("valid window");
    let config = GrapherEngineConfig::new(widget).with_window(window);
    GrapherEngine::new(NullRenderer::default(), config).expect("engine init")
}

fn position(frame: &RenderFrame, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
    frame
        .commands
        .iter()
        .position(predicate)
        .expect("command present")
}

#[test]
fn frame_starts_with_background_fill() {
    let frame = engine(WidgetSize::new(380, 380)).build_render_frame();

    assert_eq!(frame.commands[0], DrawCommand::SetColor(Color::WHITE));
    assert_eq!(
        frame.commands[1],
        DrawCommand::FillRect(PixelRect::new(0.0, 0.0, 380.0, 380.0))
    );
}

#[test]
fn plot_box_and_axis_names_are_drawn_in_plot_coordinates() {
    let frame = engine(WidgetSize::new(380, 380)).build_render_frame();

    assert_eq!(
        &frame.commands[2..10],
        &[
            DrawCommand::SetColor(Color::BLACK),
            DrawCommand::SetStrokeStyle(LineStrokeStyle::Solid),
            DrawCommand::Translate { dx: 40.0, dy: 40.0 },
            DrawCommand::StrokeRect(PixelRect::new(0.0, 0.0, 300.0, 300.0)),
            DrawCommand::Text {
                text: "x".to_owned(),
                at: PixelPoint::new(300.0, 310.0),
            },
            DrawCommand::Text {
                text: "y".to_owned(),
                at: PixelPoint::new(-10.0, 0.0),
            },
            DrawCommand::SetClip(PixelRect::new(0.0, 0.0, 300.0, 300.0)),
            DrawCommand::Translate {
                dx: -40.0,
                dy: -40.0
            },
        ]
    );
}

#[test]
fn curves_are_clipped_and_drawn_before_ticks() {
    let mut engine = engine(WidgetSize::new(380, 380));
    engine.add_expression("sin(x)").expect("sin");
    engine.add_expression("cos(x)").expect("cos");
    let frame = engine.build_render_frame();

    let clip = position(&frame, |c| matches!(c, DrawCommand::SetClip(_)));
    let first_polyline = position(&frame, |c| matches!(c, DrawCommand::Polyline(_)));
    let clear = position(&frame, |c| matches!(c, DrawCommand::ClearClip));
    let first_line = position(&frame, |c| matches!(c, DrawCommand::Line { .. }));

    assert!(clip < first_polyline);
    assert!(first_polyline < clear);
    assert!(clear < first_line);
    assert_eq!(frame.polyline_count(), 2);
}

#[test]
fn origin_ticks_are_solid_and_stepped_ticks_dashed() {
    let frame = engine(WidgetSize::new(380, 380)).build_render_frame();

    let clear = position(&frame, |c| matches!(c, DrawCommand::ClearClip));
    let dashed = position(&frame, |c| {
        matches!(c, DrawCommand::SetStrokeStyle(LineStrokeStyle::Dashed(_)))
    });
    assert_eq!(
        frame.commands[dashed],
        DrawCommand::SetStrokeStyle(LineStrokeStyle::Dashed(DashPattern::new(4.0, 4.0)))
    );

    let solid_lines = frame.commands[clear..dashed]
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    let dashed_lines = frame.commands[dashed..]
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count();
    assert_eq!(solid_lines, 2);
    assert_eq!(dashed_lines, 8);
    assert_eq!(frame.line_count(), 10);
}

#[test]
fn tick_lines_span_plot_and_labels_sit_outside() {
    let frame = engine(WidgetSize::new(380, 380)).build_render_frame();

    // x origin: vertical line at X(0) = 190.
    assert!(frame.commands.contains(&DrawCommand::Line {
        from: PixelPoint::new(190.0, 40.0),
        to: PixelPoint::new(190.0, 340.0),
    }));
    // y tick at 0.5: horizontal line at Y(0.5) = 140.
    assert!(frame.commands.contains(&DrawCommand::Line {
        from: PixelPoint::new(40.0, 140.0),
        to: PixelPoint::new(340.0, 140.0),
    }));
    assert!(frame.commands.contains(&DrawCommand::Text {
        text: "0.5".to_owned(),
        at: PixelPoint::new(240.0, 355.0),
    }));
    assert!(frame.commands.contains(&DrawCommand::Text {
        text: "0.5".to_owned(),
        at: PixelPoint::new(5.0, 140.0),
    }));

    let texts = frame.texts();
    assert_eq!(texts.len(), 12);
    assert_eq!(&texts[..2], &["x", "y"]);
}

#[test]
fn selection_preview_is_drawn_last() {
    let mut engine = engine(WidgetSize::new(380, 380));
    engine.pointer_press(PointerButton::Right, PixelPoint::new(200.0, 100.0));
    engine
        .pointer_drag(PixelPoint::new(150.0, 180.0))
        .expect("select");

    let frame = engine.build_render_frame();
    let count = frame.commands.len();
    assert_eq!(frame.commands[count - 2], DrawCommand::SetColor(Color::BLACK));
    assert_eq!(
        frame.commands[count - 1],
        DrawCommand::StrokeRect(PixelRect::new(150.0, 100.0, 50.0, 80.0))
    );
}

#[test]
fn empty_plot_area_draws_background_only() {
    let mut engine = engine(WidgetSize::new(60, 60));
    engine.add_expression("sin").expect("sin");

    let frame = engine.build_render_frame();
    assert_eq!(
        frame.commands,
        vec![
            DrawCommand::SetColor(Color::WHITE),
            DrawCommand::FillRect(PixelRect::new(0.0, 0.0, 60.0, 60.0)),
        ]
    );

    engine.render().expect("render");
    assert_eq!(engine.renderer().frames_rendered, 1);
    assert_eq!(engine.renderer().last_command_count, 2);
}

#[test]
fn single_point_segments_are_not_drawn() {
    let mut engine = engine(WidgetSize::new(380, 380));
    engine.add_function(Box::new(FnFunction::new("spike", |x: f64| {
        if x.abs() < 1e-9 { 0.0 } else { f64::NAN }
    })));
    engine.add_function(Box::new(FnFunction::new("halves", |x: f64| {
        if x.abs() < 0.4 { f64::NAN } else { x }
    })));

    let frame = engine.build_render_frame();
    let polylines: Vec<&Vec<PixelVertex>> = frame
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Polyline(points) => Some(points),
            _ => None,
        })
        .collect();

    assert_eq!(polylines.len(), 2);
    assert!(polylines.iter().all(|points| points.len() >= 2));
}

#[test]
fn recording_surface_replays_frame_in_order() {
    let mut engine = engine(WidgetSize::new(380, 380));
    engine.add_expression("x").expect("identity");

    let mut surface = RecordingSurface::default();
    engine.render_on_surface(&mut surface).expect("render");

    assert_eq!(surface.commands, engine.build_render_frame().commands);
}

#[test]
fn null_renderer_tracks_rendered_frames() {
    let mut engine = engine(WidgetSize::new(380, 380));
    engine.add_expression("cos").expect("cos");

    engine.render().expect("render");
    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_polyline_count, 1);
    assert_eq!(renderer.last_text_count, 12);
}

#[test]
fn invalid_frames_are_rejected_before_drawing() {
    let mut frame = RenderFrame::new(WidgetSize::new(10, 10));
    frame.push(DrawCommand::FillRect(PixelRect::new(0.0, 0.0, 10.0, 10.0)));
    frame.push(DrawCommand::Text {
        text: String::new(),
        at: PixelPoint::new(1.0, 1.0),
    });

    let mut surface = RecordingSurface::default();
    let result = frame.replay(&mut surface);
    assert!(matches!(result, Err(GrapherError::InvalidData(_))));
    assert!(surface.commands.is_empty());

    let mut invalid_color = RenderFrame::new(WidgetSize::new(10, 10));
    invalid_color.push(DrawCommand::SetColor(Color::rgb(1.5, 0.0, 0.0)));
    assert!(invalid_color.validate().is_err());
}

#[test]
fn surface_calls_are_recorded_verbatim() {
    let mut surface = RecordingSurface::default();
    surface
        .draw_polyline(&[PixelVertex::new(0, 0), PixelVertex::new(3, 4)])
        .expect("polyline");
    surface.clear_clip().expect("clear clip");

    assert_eq!(
        surface.commands,
        vec![
            DrawCommand::Polyline(vec![PixelVertex::new(0, 0), PixelVertex::new(3, 4)]),
            DrawCommand::ClearClip,
        ]
    );
}
