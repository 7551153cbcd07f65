use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub const fn accepts(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }

    /// Checks an argument count, naming `function` in the error.
    ///
    /// # Example
    /// ```
    /// use condexpr::interpreter::evaluator::utils::Arity;
    ///
    /// assert!(Arity::AtLeast(2).check("and", 3).is_ok());
    /// assert!(Arity::Exact(2).check("mod", 3).is_err());
    /// ```
    pub fn check(self, function: &str, n: usize) -> EvalResult<()> {
        if self.accepts(n) {
            Ok(())
        } else {
            Err(self.mismatch(function, n))
        }
    }

    /// Builds the error reported when `found` arguments do not fit.
    #[must_use]
    pub fn mismatch(self, function: &str, found: usize) -> RuntimeError {
        RuntimeError::ArityMismatch { function: function.to_string(),
                                      expected: self.to_string(),
                                      found }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Applies `convert` to a scalar, or to every scalar inside a (possibly
/// nested) list, preserving the list shape.
///
/// This is the element-wise behaviour shared by the type conversion
/// builtins.
///
/// # Example
/// ```
/// use condexpr::interpreter::{evaluator::utils::map_elementwise, value::core::Value};
///
/// let doubled = map_elementwise(&Value::List(vec![1.into(), 2.into()]), &|v| {
///                   Ok(Value::Number(v.as_number("double")? * 2.0))
///               }).unwrap();
///
/// assert_eq!(doubled, Value::List(vec![2.into(), 4.into()]));
/// ```
pub fn map_elementwise(value: &Value,
                       convert: &dyn Fn(&Value) -> EvalResult<Value>)
                       -> EvalResult<Value> {
    match value {
        Value::List(items) => items.iter()
                                   .map(|item| map_elementwise(item, convert))
                                   .collect::<EvalResult<Vec<_>>>()
                                   .map(Value::List),
        other => convert(other),
    }
}
