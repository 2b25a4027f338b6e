use approx::assert_relative_eq;
use grapher_rs::GrapherError;
use grapher_rs::core::{DataWindow, PixelPoint, Viewport, WidgetSize, ZOOM_RATE};

fn unit_viewport() -> Viewport {
    let window = DataWindow::new(-1.0, 1.0, -1.0, 1.0).expect("valid window");
    Viewport::with_plot_size(window, 200, 200, 0).expect("valid viewport")
}

fn assert_window_close(actual: DataWindow, expected: DataWindow) {
    assert_relative_eq!(actual.xmin, expected.xmin, epsilon = 1e-12);
    assert_relative_eq!(actual.xmax, expected.xmax, epsilon = 1e-12);
    assert_relative_eq!(actual.ymin, expected.ymin, epsilon = 1e-12);
    assert_relative_eq!(actual.ymax, expected.ymax, epsilon = 1e-12);
}

#[test]
fn dragging_right_moves_window_left() {
    let mut viewport = unit_viewport();
    viewport.translate(50.0, 0.0).expect("translate");

    let window = viewport.window();
    assert_eq!(window.xmin, -1.5);
    assert_eq!(window.xmax, 0.5);
    assert_eq!(window.ymin, -1.0);
    assert_eq!(window.ymax, 1.0);
}

#[test]
fn dragging_down_moves_window_up() {
    let mut viewport = unit_viewport();
    viewport.translate(0.0, 50.0).expect("translate");

    let window = viewport.window();
    assert_eq!(window.ymin, -0.5);
    assert_eq!(window.ymax, 1.5);
}

#[test]
fn opposite_translations_cancel() {
    let mut viewport = unit_viewport();
    let original = viewport.window();

    viewport.translate(37.0, -12.0).expect("translate");
    viewport.translate(-37.0, 12.0).expect("translate back");

    assert_window_close(viewport.window(), original);
}

#[test]
fn zoom_in_shrinks_window_around_center() {
    let mut viewport = unit_viewport();
    viewport
        .zoom_at_point(PixelPoint::new(100.0, 100.0), 5.0)
        .expect("zoom in");

    let expected_span = 2.0 / (5.0 * ZOOM_RATE).exp();
    let window = viewport.window();
    assert_relative_eq!(window.x_span(), expected_span, epsilon = 1e-12);
    assert_relative_eq!(window.y_span(), expected_span, epsilon = 1e-12);
    assert_relative_eq!(window.xmin + window.xmax, 0.0, epsilon = 1e-12);
}

#[test]
fn zoom_out_grows_window() {
    let mut viewport = unit_viewport();
    viewport
        .zoom_at_point(PixelPoint::new(30.0, 170.0), -5.0)
        .expect("zoom out");

    assert!(viewport.window().x_span() > 2.0);
    assert!(viewport.window().y_span() > 2.0);
}

#[test]
fn zoom_keeps_data_point_under_cursor() {
    let mut viewport = unit_viewport();
    let cursor = PixelPoint::new(50.0, 150.0);
    let (x_before, y_before) = viewport.pixel_to_data(cursor);

    viewport.zoom_at_point(cursor, 5.0).expect("zoom in");
    let (x_after, y_after) = viewport.pixel_to_data(cursor);

    assert_relative_eq!(x_after, x_before, epsilon = 1e-12);
    assert_relative_eq!(y_after, y_before, epsilon = 1e-12);
}

#[test]
fn opposite_zooms_at_same_point_cancel() {
    let mut viewport = unit_viewport();
    let original = viewport.window();
    let cursor = PixelPoint::new(64.0, 21.0);

    viewport.zoom_at_point(cursor, 5.0).expect("zoom in");
    viewport.zoom_at_point(cursor, -5.0).expect("zoom out");

    assert_window_close(viewport.window(), original);
}

#[test]
fn box_zoom_uses_sorted_corner_coordinates() {
    let mut viewport = unit_viewport();
    let p0 = PixelPoint::new(50.0, 50.0);
    let p1 = PixelPoint::new(150.0, 20.0);
    let expected_ymin = viewport.pixel_to_y(50.0);
    let expected_ymax = viewport.pixel_to_y(20.0);

    viewport.zoom_to_box(p0, p1).expect("box zoom");

    let window = viewport.window();
    assert_eq!(window.xmin, -0.5);
    assert_eq!(window.xmax, 0.5);
    assert_eq!(window.ymin, expected_ymin);
    assert_eq!(window.ymax, expected_ymax);
    assert_relative_eq!(window.ymin, 0.5, epsilon = 1e-12);
    assert_relative_eq!(window.ymax, 0.8, epsilon = 1e-12);
}

#[test]
fn box_zoom_ignores_corner_order() {
    let p0 = PixelPoint::new(12.0, 180.0);
    let p1 = PixelPoint::new(170.0, 33.0);

    let mut forward = unit_viewport();
    forward.zoom_to_box(p0, p1).expect("forward box");
    let mut backward = unit_viewport();
    backward.zoom_to_box(p1, p0).expect("backward box");

    assert_eq!(forward.window(), backward.window());
}

#[test]
fn zero_area_box_is_rejected_and_window_kept() {
    let mut viewport = unit_viewport();
    let original = viewport.window();

    let point = PixelPoint::new(80.0, 80.0);
    let result = viewport.zoom_to_box(point, point);
    assert!(matches!(result, Err(GrapherError::DegenerateViewport { .. })));

    let flat = viewport.zoom_to_box(PixelPoint::new(10.0, 80.0), PixelPoint::new(90.0, 80.0));
    assert!(matches!(flat, Err(GrapherError::DegenerateViewport { .. })));

    assert_eq!(viewport.window(), original);
}

#[test]
fn invalid_window_replacement_is_rejected() {
    let mut viewport = unit_viewport();
    let original = viewport.window();

    let result = viewport.set_window(DataWindow {
        xmin: 2.0,
        xmax: 1.0,
        ymin: 0.0,
        ymax: 1.0,
    });
    assert!(matches!(result, Err(GrapherError::DegenerateViewport { .. })));
    assert_eq!(viewport.window(), original);

    let replacement = DataWindow::new(0.0, 10.0, -5.0, 5.0).expect("valid window");
    viewport.set_window(replacement).expect("set window");
    assert_eq!(viewport.window(), replacement);
}

#[test]
fn non_finite_zoom_input_is_rejected() {
    let mut viewport = unit_viewport();
    let original = viewport.window();

    assert!(
        viewport
            .zoom_at_point(PixelPoint::new(f64::NAN, 0.0), 5.0)
            .is_err()
    );
    assert!(
        viewport
            .zoom_at_point(PixelPoint::new(10.0, 10.0), f64::INFINITY)
            .is_err()
    );
    assert_eq!(viewport.window(), original);
}

#[test]
fn navigation_requires_non_empty_plot_area() {
    let mut viewport =
        Viewport::new(DataWindow::default(), WidgetSize::new(50, 50), 40).expect("viewport");
    let original = viewport.window();

    assert!(matches!(
        viewport.translate(10.0, 10.0),
        Err(GrapherError::InvalidPlotArea {
            width: -30,
            height: -30
        })
    ));
    assert!(matches!(
        viewport.zoom_at_point(PixelPoint::new(5.0, 5.0), 5.0),
        Err(GrapherError::InvalidPlotArea { .. })
    ));
    assert!(matches!(
        viewport.zoom_to_box(PixelPoint::new(0.0, 0.0), PixelPoint::new(5.0, 5.0)),
        Err(GrapherError::InvalidPlotArea { .. })
    ));
    assert_eq!(viewport.window(), original);
}
