use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::Arity},
        value::core::Value,
    },
};

/// Orders two values for the relational builtins.
///
/// Two texts compare lexicographically and two timestamps chronologically.
/// Any other pair must be two numbers, compared as plain floats: `None` means
/// the numbers are unordered because one of them is NaN, and every relation
/// on them is false.
///
/// # Errors
/// `TypeMismatch` naming `function` if the operands cannot be ordered
/// against each other.
///
/// # Example
/// ```
/// use std::cmp::Ordering;
///
/// use condexpr::interpreter::{evaluator::function::comparison::compare, value::core::Value};
///
/// assert_eq!(compare("gt", &"abc".into(), &"abd".into()).unwrap(), Some(Ordering::Less));
/// assert_eq!(compare("gt", &2.into(), &Value::Number(2.0)).unwrap(), Some(Ordering::Equal));
/// assert_eq!(compare("gt", &Value::Number(f64::NAN), &2.into()).unwrap(), None);
/// assert!(compare("gt", &"2".into(), &2.into()).is_err());
/// ```
pub fn compare(function: &str, lhs: &Value, rhs: &Value) -> EvalResult<Option<Ordering>> {
    match (lhs, rhs) {
        (Value::Text(a), Value::Text(b)) => Ok(Some(a.cmp(b))),
        (Value::Timestamp(a), Value::Timestamp(b)) => Ok(Some(a.cmp(b))),
        (Value::Number(a), Value::Number(b)) => Ok(a.partial_cmp(b)),
        _ => Err(RuntimeError::TypeMismatch { function: function.to_string(),
                                              details:  format!("cannot order {} against {}",
                                                                lhs.type_name(),
                                                                rhs.type_name()), }),
    }
}

/// Applies `accept` to the ordering of exactly two arguments; unordered
/// operands never satisfy it.
fn relation(name: &str, args: &[Value], accept: fn(Ordering) -> bool) -> EvalResult<Value> {
    let [lhs, rhs] = args else {
        return Err(Arity::Exact(2).mismatch(name, args.len()));
    };

    Ok(Value::Boolean(compare(name, lhs, rhs)?.is_some_and(accept)))
}

/// True iff every argument equals the first.
///
/// Equality is structural: numbers by value, lists by position (different
/// lengths are unequal) and values of different types are simply unequal.
///
/// # Example
/// ```
/// use condexpr::interpreter::{evaluator::function::comparison::eq, value::core::Value};
///
/// let list = |xs: &[f64]| Value::List(xs.iter().map(|&x| x.into()).collect());
///
/// assert_eq!(eq("eq", &[list(&[1.0, 2.0]), list(&[1.0, 2.0])]).unwrap(), Value::Boolean(true));
/// assert_eq!(eq("eq", &[list(&[1.0, 2.0]), list(&[1.0])]).unwrap(), Value::Boolean(false));
/// assert_eq!(eq("eq", &[1.into(), "1".into()]).unwrap(), Value::Boolean(false));
/// ```
pub fn eq(_name: &str, args: &[Value]) -> EvalResult<Value> {
    let result = match args {
        [first, rest @ ..] => rest.iter().all(|arg| arg == first),
        [] => true,
    };

    Ok(Value::Boolean(result))
}

/// True iff no two arguments are equal.
///
/// Scalars are compared pairwise. When the first argument is a list, every
/// argument is zipped by position and each column must hold pairwise
/// distinct values; arguments that do not line up as equally long lists
/// are considered distinct.
///
/// # Example
/// ```
/// use condexpr::interpreter::{evaluator::function::comparison::ne, value::core::Value};
///
/// assert_eq!(ne("ne", &[1.into(), 2.into(), 3.into()]).unwrap(), Value::Boolean(true));
/// assert_eq!(ne("ne", &[1.into(), 2.into(), 1.into()]).unwrap(), Value::Boolean(false));
/// ```
pub fn ne(_name: &str, args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Boolean(all_distinct(args)))
}

fn all_distinct(args: &[Value]) -> bool {
    let Some(Value::List(first)) = args.first() else {
        return args.iter()
                   .enumerate()
                   .all(|(i, a)| args[i + 1..].iter().all(|b| a != b));
    };

    let mut columns: Vec<&[Value]> = Vec::with_capacity(args.len());
    for arg in args {
        match arg {
            Value::List(items) if items.len() == first.len() => columns.push(items),
            _ => return true,
        }
    }

    (0..first.len()).all(|i| {
                        let column: Vec<Value> =
                            columns.iter().map(|items| items[i].clone()).collect();
                        all_distinct(&column)
                    })
}

/// `lhs > rhs`.
///
/// # Example
/// ```
/// use condexpr::interpreter::{evaluator::function::comparison::gt, value::core::Value};
///
/// assert_eq!(gt("gt", &[3.into(), 2.into()]).unwrap(), Value::Boolean(true));
/// assert!(gt("gt", &[3.into(), "2".into()]).is_err());
/// ```
pub fn gt(name: &str, args: &[Value]) -> EvalResult<Value> {
    relation(name, args, Ordering::is_gt)
}

/// `lhs < rhs`.
pub fn lt(name: &str, args: &[Value]) -> EvalResult<Value> {
    relation(name, args, Ordering::is_lt)
}

/// `lhs >= rhs`.
pub fn ge(name: &str, args: &[Value]) -> EvalResult<Value> {
    relation(name, args, Ordering::is_ge)
}

/// `lhs <= rhs`.
pub fn le(name: &str, args: &[Value]) -> EvalResult<Value> {
    relation(name, args, Ordering::is_le)
}
