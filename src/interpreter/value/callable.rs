use std::sync::Arc;

use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// A function that can be registered and called from expressions.
///
/// Implemented automatically for every closure or function pointer of shape
/// `Fn(&[Value]) -> EvalResult<Value>`, so most embedders register closures.
/// Implement it by hand for functions that carry their own state.
///
/// Functions must be `Send + Sync` so a registry can be shared between
/// threads evaluating the same expression.
///
/// # Example
/// ```
/// use condexpr::{
///     error::RuntimeError,
///     interpreter::{
///         evaluator::core::EvalResult,
///         value::{callable::Function, core::Value},
///     },
/// };
///
/// struct Threshold(f64);
///
/// impl Function for Threshold {
///     fn call(&self, args: &[Value]) -> EvalResult<Value> {
///         let [value] = args else {
///             return Err(RuntimeError::ArityMismatch { function: "above".to_string(),
///                                                      expected: "exactly 1".to_string(),
///                                                      found:    args.len(), });
///         };
///         Ok(Value::Boolean(value.as_number("above")? > self.0))
///     }
/// }
///
/// assert_eq!(Threshold(10.0).call(&[Value::Number(12.0)]).unwrap(), Value::Boolean(true));
/// ```
pub trait Function: Send + Sync {
    /// Invokes the function with already evaluated arguments.
    fn call(&self, args: &[Value]) -> EvalResult<Value>;
}

impl<F> Function for F where F: Fn(&[Value]) -> EvalResult<Value> + Send + Sync
{
    fn call(&self, args: &[Value]) -> EvalResult<Value> {
        self(args)
    }
}

/// A reference to a registered function, as it flows through evaluation.
///
/// Cloning is cheap: the function itself is shared. Two callables are equal
/// when they refer to the same registered function object.
#[derive(Clone)]
pub struct Callable {
    name:     Arc<str>,
    function: Arc<dyn Function>,
}

impl Callable {
    /// Wraps `function` under `name`.
    pub fn new(name: &str, function: impl Function + 'static) -> Self {
        Self { name:     Arc::from(name),
               function: Arc::new(function), }
    }

    /// The name the function was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Calls the function.
    ///
    /// # Errors
    /// Whatever the function reports; errors are passed through unchanged.
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        self.function.call(args)
    }

    /// Returns `true` if both callables share the same function object.
    #[must_use]
    pub fn same_function(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.function, &other.function)
    }
}

impl std::fmt::Debug for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Callable").field(&self.name).finish()
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.same_function(other)
    }
}
