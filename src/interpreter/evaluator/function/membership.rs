use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::comparison::compare, utils::Arity},
        value::core::Value,
    },
};

/// True iff the first argument equals some element of the second, which
/// must be a list.
///
/// Elements are matched with the same structural equality as `eq`, so an
/// element of a different type never matches and never fails.
///
/// # Errors
/// - `TypeMismatch` if the needle is itself a list, or the haystack is not.
///
/// # Example
/// ```
/// use condexpr::interpreter::{evaluator::function::membership::in_list, value::core::Value};
///
/// let genders = Value::List(vec!["female".into(), "male".into()]);
///
/// assert_eq!(in_list("in", &["male".into(), genders.clone()]).unwrap(),
///            Value::Boolean(true));
/// assert_eq!(in_list("in", &[1.into(), genders.clone()]).unwrap(),
///            Value::Boolean(false));
/// assert!(in_list("in", &["male".into(), "male".into()]).is_err());
/// ```
pub fn in_list(name: &str, args: &[Value]) -> EvalResult<Value> {
    let [needle, haystack] = args else {
        return Err(Arity::Exact(2).mismatch(name, args.len()));
    };

    if needle.is_list() {
        return Err(RuntimeError::TypeMismatch { function: name.to_string(),
                                                details:  "the value to look for cannot be a list"
                                                                 .to_string(), });
    }

    Ok(Value::Boolean(haystack.as_list(name)?.contains(needle)))
}

/// True iff any element of the first list also appears in the second.
///
/// Elements are matched structurally, so a nested list matches an equal
/// nested list on the other side.
///
/// # Example
/// ```
/// use condexpr::interpreter::{evaluator::function::membership::overlap, value::core::Value};
///
/// let list = |xs: &[i32]| Value::List(xs.iter().map(|&x| x.into()).collect());
///
/// assert_eq!(overlap("overlap", &[list(&[1, 2, 3]), list(&[4, 3, 2])]).unwrap(),
///            Value::Boolean(true));
/// assert_eq!(overlap("overlap", &[list(&[1, 2, 3]), list(&[4, 5, 6])]).unwrap(),
///            Value::Boolean(false));
/// ```
pub fn overlap(name: &str, args: &[Value]) -> EvalResult<Value> {
    let [lhs, rhs] = args else {
        return Err(Arity::Exact(2).mismatch(name, args.len()));
    };

    let (lhs, rhs) = (lhs.as_list(name)?, rhs.as_list(name)?);

    Ok(Value::Boolean(lhs.iter().any(|item| rhs.contains(item))))
}

/// `lower <= value <= upper`, using the relational ordering.
///
/// The upper bound is not compared at all when the lower bound already
/// fails, so a type mismatch against the upper bound only surfaces for
/// values above the lower bound. A NaN anywhere makes the result false.
pub fn between(name: &str, args: &[Value]) -> EvalResult<Value> {
    let [value, lower, upper] = args else {
        return Err(Arity::Exact(3).mismatch(name, args.len()));
    };

    if !compare(name, value, lower)?.is_some_and(Ordering::is_ge) {
        return Ok(Value::Boolean(false));
    }

    Ok(Value::Boolean(compare(name, value, upper)?.is_some_and(Ordering::is_le)))
}
