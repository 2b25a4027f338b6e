use grapher_rs::api::{GrapherEngine, GrapherEngineConfig};
use grapher_rs::core::FnFunction;
use grapher_rs::platform_gtk::GtkGrapherAdapter;
use grapher_rs::render::NullRenderer;
use gtk4 as gtk;
use gtk4::prelude::*;

fn main() {
    let _ = grapher_rs::telemetry::init_default_tracing();
    let app = gtk::Application::builder()
        .application_id("rs.grapher.demos.gtk_grapher")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let engine = match GrapherEngine::new(NullRenderer::default(), GrapherEngineConfig::default())
    {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("failed to initialize grapher engine: {err}");
            return;
        }
    };

    let adapter = GtkGrapherAdapter::new(engine);
    for expression in ["sin(x)", "cos(x)"] {
        if let Err(err) = adapter.add_expression(expression) {
            eprintln!("failed to add `{expression}`: {err}");
        }
    }
    adapter
        .engine()
        .borrow_mut()
        .add_function(Box::new(FnFunction::new("x^3 / 4", |x| x * x * x / 4.0)));

    let hint = gtk::Label::new(Some(
        "left drag: pan · right drag: box zoom · click/wheel: zoom",
    ));
    hint.set_xalign(0.0);

    let layout = gtk::Box::new(gtk::Orientation::Vertical, 4);
    layout.append(adapter.drawing_area());
    layout.append(&hint);

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("grapher-rs")
        .child(&layout)
        .build();
    window.present();
}
