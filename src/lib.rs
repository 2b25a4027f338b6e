//! grapher-rs: interactive 2D function plotting.
//!
//! The crate maps a data-space window onto a pixel plot area, samples
//! `y = f(x)` curves at a fixed pixel step, plans "nice" axis ticks and turns
//! pointer gestures into pan and zoom operations. Drawing goes through a
//! backend-agnostic `RenderFrame` replayed onto any `DrawingSurface`.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{GrapherEngine, GrapherEngineConfig};
pub use error::{GrapherError, GrapherResult};
