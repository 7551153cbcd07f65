use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// Resolves variable names during one evaluation.
///
/// The evaluator asks for a variable only after the name failed to resolve
/// as a registered function. Returning `None` makes the evaluation fail with
/// `NameNotFound`.
///
/// Implemented for [`MapVariables`], [`NoVariables`] and any closure
/// `Fn(&str) -> Option<Value>`.
pub trait VariableLookup {
    /// Returns the value bound to `name`, if any.
    fn get(&self, name: &str) -> Option<Value>;
}

impl<F> VariableLookup for F where F: Fn(&str) -> Option<Value>
{
    fn get(&self, name: &str) -> Option<Value> {
        self(name)
    }
}

/// A lookup that binds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVariables;

impl VariableLookup for NoVariables {
    fn get(&self, _name: &str) -> Option<Value> {
        None
    }
}

/// A simple name to value mapping.
///
/// # Example
/// ```
/// use condexpr::interpreter::{
///     evaluator::variables::{MapVariables, VariableLookup},
///     value::core::Value,
/// };
///
/// let vars = MapVariables::new().with("gender", "female").with("age", 18);
///
/// assert_eq!(vars.get("age"), Some(Value::Number(18.0)));
/// assert_eq!(vars.get("height"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapVariables {
    values: HashMap<String, Value>,
}

impl MapVariables {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder form of [`MapVariables::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }
}

impl VariableLookup for MapVariables {
    fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }
}

impl From<HashMap<String, Value>> for MapVariables {
    fn from(values: HashMap<String, Value>) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for MapVariables
    where K: Into<String>,
          V: Into<Value>
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { values: iter.into_iter()
                           .map(|(k, v)| (k.into(), v.into()))
                           .collect(), }
    }
}
