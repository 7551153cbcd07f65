use chrono::{DateTime, Utc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::callable::Callable},
    util::num::f64_to_i64_truncated,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value that can appear as a literal, a variable, a
/// function argument or an evaluation result. Numbers are always double
/// precision floats: there is no separate integer type, so `1` and `1.0` are
/// the same value.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value, from a quoted literal or a variable.
    Text(String),
    /// A boolean value, produced by comparisons and logical functions.
    Boolean(bool),
    /// An absolute point in time, produced by `t_time` and friends.
    Timestamp(DateTime<Utc>),
    /// An ordered sequence of values, from a literal form such as `(1 2 3)`.
    List(Vec<Self>),
    /// A reference to a registered function.
    Callable(Callable),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(v: i64) -> Self {
        Self::Number(v as f64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Timestamp(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Self::Callable(c)
    }
}

impl Value {
    /// Returns the name of this value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Boolean(_) => "boolean",
            Self::Timestamp(_) => "timestamp",
            Self::List(_) => "list",
            Self::Callable(_) => "function",
        }
    }

    fn mismatch(&self, function: &str, expected: &str) -> RuntimeError {
        RuntimeError::TypeMismatch { function: function.to_string(),
                                     details:  format!("expected {expected}, found {}",
                                                       self.type_name()), }
    }

    /// Coerces the value to an `f64`, or returns an error if not numeric.
    ///
    /// Only numbers are numeric: text such as `"100"` and booleans are not
    /// converted.
    ///
    /// # Parameters
    /// - `function`: Name of the calling function, for error reporting.
    ///
    /// # Example
    /// ```
    /// use condexpr::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(10.0).as_number("+").unwrap(), 10.0);
    /// assert!(Value::from("10").as_number("+").is_err());
    /// ```
    pub fn as_number(&self, function: &str) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(self.mismatch(function, "a number")),
        }
    }

    /// Coerces a number to `i64` by truncating toward zero.
    ///
    /// # Parameters
    /// - `function`: Name of the calling function, for error reporting.
    ///
    /// # Example
    /// ```
    /// use condexpr::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(18.9).as_integer("mod").unwrap(), 18);
    /// ```
    pub fn as_integer(&self, function: &str) -> EvalResult<i64> {
        f64_to_i64_truncated(self.as_number(function)?, function)
    }

    /// Borrows the value as text, or returns an error.
    pub fn as_text(&self, function: &str) -> EvalResult<&str> {
        match self {
            Self::Text(s) => Ok(s),
            _ => Err(self.mismatch(function, "text")),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// There is no truthiness: `0`, `""` and `()` are not `false`.
    pub fn as_bool(&self, function: &str) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch(function, "a boolean")),
        }
    }

    /// Returns the timestamp, or an error for any other type.
    pub fn as_timestamp(&self, function: &str) -> EvalResult<DateTime<Utc>> {
        match self {
            Self::Timestamp(t) => Ok(*t),
            _ => Err(self.mismatch(function, "a timestamp")),
        }
    }

    /// Borrows the elements of a list, or returns an error if not a list.
    pub fn as_list(&self, function: &str) -> EvalResult<&[Self]> {
        match self {
            Self::List(items) => Ok(items),
            _ => Err(self.mismatch(function, "a list")),
        }
    }

    /// Returns `true` if the value is [`Value::List`].
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(..))
    }

    /// Returns `true` if the value is [`Value::Callable`].
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Callable(..))
    }
}

/// Structural equality with the language's `eq` semantics.
///
/// Numbers compare by float value, lists compare element by element and are
/// unequal when their lengths differ, values of different types are never
/// equal, and callables are equal when they share a function object.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Timestamp(a), Self::Timestamp(b)) => a == b,
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
            },
            (Self::Callable(a), Self::Callable(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S")),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Callable(c) => write!(f, "<function {}>", c.name()),
        }
    }
}
