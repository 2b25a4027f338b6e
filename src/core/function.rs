use std::fmt;

use crate::error::{GrapherError, GrapherResult};

/// Plottable `y = f(x)` capability.
///
/// Implementations may fail for `x` outside their domain; callers treat a
/// failed evaluation as a gap in the curve rather than a fatal error.
pub trait Function {
    /// Human-readable name used in snapshots and logs.
    fn name(&self) -> &str;

    fn evaluate(&self, x: f64) -> GrapherResult<f64>;
}

/// Adapts a plain `Fn(f64) -> f64` into a [`Function`].
///
/// Non-finite results (for example `sqrt(-1)`) are reported as evaluation
/// failures.
pub struct FnFunction<F> {
    name: String,
    f: F,
}

impl<F> FnFunction<F>
where
    F: Fn(f64) -> f64,
{
    #[must_use]
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Function for FnFunction<F>
where
    F: Fn(f64) -> f64,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, x: f64) -> GrapherResult<f64> {
        let y = (self.f)(x);
        if y.is_finite() {
            Ok(y)
        } else {
            Err(GrapherError::Evaluation {
                x,
                reason: format!("`{}` produced non-finite value {y}", self.name),
            })
        }
    }
}

impl<F> fmt::Debug for FnFunction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered, append-only collection of plotted functions.
///
/// Insertion order is draw order.
#[derive(Default)]
pub struct FunctionSet {
    functions: Vec<Box<dyn Function>>,
}

impl FunctionSet {
    pub fn push(&mut self, function: Box<dyn Function>) {
        self.functions.push(function);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Function> {
        self.functions.iter().map(|function| function.as_ref())
    }

    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|function| function.name().to_owned()).collect()
    }
}

impl fmt::Debug for FunctionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.functions.iter().map(|function| function.name()))
            .finish()
    }
}
