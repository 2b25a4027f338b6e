use crate::core::{BuiltinFunctionFactory, FunctionSet, Viewport};
use crate::error::GrapherResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::{GrapherEngine, GrapherEngineConfig};

impl<R: Renderer> GrapherEngine<R> {
    /// Creates a fully initialized engine from a validated config.
    ///
    /// Expressions are resolved by [`BuiltinFunctionFactory`] until the host
    /// installs its own factory.
    pub fn new(renderer: R, config: GrapherEngineConfig) -> GrapherResult<Self> {
        config.validate()?;
        let viewport = Viewport::new(config.window, config.widget_size, config.margin_px)?;

        Ok(Self {
            renderer,
            viewport,
            widget_size: config.widget_size,
            functions: FunctionSet::default(),
            factory: Box::new(BuiltinFunctionFactory::default()),
            interaction: InteractionState::default(),
            sample_step_px: config.sample_step_px,
            zoom_step: config.zoom_step,
            style: config.style,
            redraw_requested: true,
        })
    }

    /// Creates an engine with the default window and the preferred 400×300 size.
    pub fn with_defaults(renderer: R) -> GrapherResult<Self> {
        Self::new(renderer, GrapherEngineConfig::default())
    }
}
