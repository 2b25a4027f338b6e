use indexmap::IndexMap;

use crate::core::function::{FnFunction, Function};
use crate::error::{GrapherError, GrapherResult};

/// Builds plottable functions from user-entered expression strings.
///
/// Full expression parsing lives outside this crate; hosts plug their parser
/// in through this trait.
pub trait FunctionFactory {
    fn create(&self, expression: &str) -> GrapherResult<Box<dyn Function>>;
}

/// Factory resolving named elementary functions.
///
/// Accepts `name` or `name(x)`, case-insensitive, e.g. `sin` or `Sqrt(x)`.
/// Additional entries can be registered by the host.
#[derive(Debug, Clone)]
pub struct BuiltinFunctionFactory {
    entries: IndexMap<String, fn(f64) -> f64>,
}

impl BuiltinFunctionFactory {
    /// Creates an empty factory without built-in entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Registers a named function. Names are unique and case-insensitive.
    pub fn register(&mut self, name: &str, f: fn(f64) -> f64) -> GrapherResult<()> {
        let key = normalize_expression(name);
        if key.is_empty() {
            return Err(GrapherError::InvalidData(
                "function name must not be empty".to_owned(),
            ));
        }
        if self.entries.contains_key(&key) {
            return Err(GrapherError::InvalidData(format!(
                "function `{key}` is already registered"
            )));
        }
        self.entries.insert(key, f);
        Ok(())
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for BuiltinFunctionFactory {
    fn default() -> Self {
        let builtins: [(&str, fn(f64) -> f64); 8] = [
            ("x", |x| x),
            ("sin", f64::sin),
            ("cos", f64::cos),
            ("tan", f64::tan),
            ("exp", f64::exp),
            ("log", f64::ln),
            ("sqrt", f64::sqrt),
            ("abs", f64::abs),
        ];
        Self {
            entries: builtins
                .into_iter()
                .map(|(name, f)| (name.to_owned(), f))
                .collect(),
        }
    }
}

impl FunctionFactory for BuiltinFunctionFactory {
    fn create(&self, expression: &str) -> GrapherResult<Box<dyn Function>> {
        let key = normalize_expression(expression);
        let f = self
            .entries
            .get(&key)
            .copied()
            .ok_or_else(|| GrapherError::UnknownExpression(expression.trim().to_owned()))?;
        Ok(Box::new(FnFunction::new(expression.trim(), f)))
    }
}

fn normalize_expression(expression: &str) -> String {
    let compact: String = expression
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    match compact.strip_suffix("(x)") {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => compact,
    }
}
