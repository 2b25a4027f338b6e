use tracing::debug;

use crate::core::{Function, FunctionFactory};
use crate::error::GrapherResult;
use crate::render::Renderer;

use super::GrapherEngine;

impl<R: Renderer> GrapherEngine<R> {
    /// Appends a function; it is drawn after every previously added one.
    pub fn add_function(&mut self, function: Box<dyn Function>) {
        debug!(
            name = function.name(),
            index = self.functions.len(),
            "add function"
        );
        self.functions.push(function);
        self.request_redraw();
    }

    /// Builds a function from `expression` with the installed factory and appends it.
    pub fn add_expression(&mut self, expression: &str) -> GrapherResult<()> {
        let function = self.factory.create(expression)?;
        self.add_function(function);
        Ok(())
    }

    /// Replaces the factory used by [`Self::add_expression`].
    pub fn set_function_factory(&mut self, factory: Box<dyn FunctionFactory>) {
        self.factory = factory;
    }

    #[must_use]
    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn function_names(&self) -> Vec<String> {
        self.functions.names()
    }
}
