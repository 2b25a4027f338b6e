use grapher_rs::GrapherError;
use grapher_rs::api::{GrapherEngine, GrapherEngineConfig, GrapherStyle};
use grapher_rs::core::{DataWindow, WidgetSize};
use grapher_rs::render::{Color, DashPattern, NullRenderer};

#[test]
fn default_config_matches_documented_constants() {
    let config = GrapherEngineConfig::default();

    assert_eq!(config.widget_size, WidgetSize::new(400, 300));
    assert_eq!(config.margin_px, 40);
    assert_eq!(config.sample_step_px, 5);
    assert_eq!(config.zoom_step, 5.0);
    assert_eq!(config.window, DataWindow::default());
    assert_eq!(config.style, GrapherStyle::default());
    assert_eq!(config.style.background, Color::WHITE);
    assert_eq!(config.style.tick_dash, DashPattern::new(4.0, 4.0));
}

#[test]
fn empty_json_object_yields_defaults() {
    let config = GrapherEngineConfig::from_json_str("{}").expect("parse");
    assert_eq!(config, GrapherEngineConfig::default());
}

#[test]
fn partial_json_overrides_selected_fields() {
    let config = GrapherEngineConfig::from_json_str(
        r#"{
            "margin_px": 10,
            "window": { "xmin": -2.0, "xmax": 2.0, "ymin": -1.0, "ymax": 1.0 },
            "style": { "curve": { "red": 0.0, "green": 0.0, "blue": 1.0, "alpha": 1.0 } }
        }"#,
    )
    .expect("parse");

    assert_eq!(config.margin_px, 10);
    assert_eq!(config.window.xmin, -2.0);
    assert_eq!(config.sample_step_px, 5);
    assert_eq!(config.style.curve, Color::rgb(0.0, 0.0, 1.0));
    assert_eq!(config.style.background, Color::WHITE);
}

#[test]
fn config_survives_json_round_trip() {
    let config = GrapherEngineConfig::new(WidgetSize::new(640, 480))
        .with_margin_px(24)
        .with_sample_step_px(2)
        .with_zoom_step(7.5);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = GrapherEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed.widget_size, config.widget_size);
    assert_eq!(parsed.margin_px, 24);
    assert_eq!(parsed.sample_step_px, 2);
    assert_eq!(parsed.zoom_step, 7.5);
}

#[test]
fn invalid_values_are_rejected() {
    let base = GrapherEngineConfig::default();

    assert!(base.with_sample_step_px(0).validate().is_err());
    assert!(base.with_zoom_step(0.0).validate().is_err());
    assert!(base.with_zoom_step(f64::NAN).validate().is_err());
    assert!(base.with_margin_px(-5).validate().is_err());

    let style = GrapherStyle {
        selection: Color::rgba(0.0, 0.0, 0.0, 2.0),
        ..GrapherStyle::default()
    };
    assert!(base.with_style(style).validate().is_err());

    let dash = GrapherStyle {
        tick_dash: DashPattern::new(0.0, 0.0),
        ..GrapherStyle::default()
    };
    assert!(base.with_style(dash).validate().is_err());
}

#[test]
fn json_with_degenerate_window_is_rejected() {
    let result = GrapherEngineConfig::from_json_str(
        r#"{ "window": { "xmin": 1.0, "xmax": 1.0, "ymin": 0.0, "ymax": 1.0 } }"#,
    );
    assert!(matches!(result, Err(GrapherError::DegenerateViewport { .. })));

    let malformed = GrapherEngineConfig::from_json_str("{ margin_px: }");
    assert!(matches!(malformed, Err(GrapherError::InvalidData(_))));
}

#[test]
fn engine_applies_config() {
    let engine = GrapherEngine::with_defaults(NullRenderer::default()).expect("engine init");

    assert_eq!(engine.preferred_size(), WidgetSize::new(400, 300));
    assert_eq!(engine.viewport().plot_width(), 320);
    assert_eq!(engine.viewport().plot_height(), 220);
    assert_eq!(engine.sample_step_px(), 5);
    assert_eq!(engine.zoom_step(), 5.0);
    assert!(engine.redraw_requested());

    let invalid = GrapherEngineConfig::default().with_sample_step_px(0);
    assert!(GrapherEngine::new(NullRenderer::default(), invalid).is_err());
}

#[test]
fn engine_tracks_resize_and_style_changes() {
    let mut engine = GrapherEngine::with_defaults(NullRenderer::default()).expect("engine init");
    let window = engine.data_window();
    assert!(engine.take_redraw_request());

    engine.resize(WidgetSize::new(400, 300));
    assert!(!engine.redraw_requested());

    engine.resize(WidgetSize::new(800, 600));
    assert!(engine.take_redraw_request());
    assert_eq!(engine.widget_size(), WidgetSize::new(800, 600));
    assert_eq!(engine.viewport().plot_width(), 720);
    assert_eq!(engine.data_window(), window);

    let dark = GrapherStyle {
        background: Color::BLACK,
        foreground: Color::WHITE,
        curve: Color::WHITE,
        selection: Color::WHITE,
        tick_dash: DashPattern::default(),
    };
    engine.set_style(dark).expect("style");
    assert_eq!(engine.style(), dark);
    assert!(engine.take_redraw_request());

    let invalid = GrapherStyle {
        background: Color::rgb(-1.0, 0.0, 0.0),
        ..dark
    };
    assert!(engine.set_style(invalid).is_err());
    assert_eq!(engine.style(), dark);
}
