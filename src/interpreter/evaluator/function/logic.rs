use crate::interpreter::{
    evaluator::{core::EvalResult, utils::Arity},
    value::core::Value,
};

/// Folds boolean arguments with `op`.
///
/// Every argument must be a boolean, including those after the result is
/// already decided; evaluation of the arguments happened before the call, so
/// there is nothing to short-circuit.
fn fold_bools(name: &str, args: &[Value], op: fn(bool, bool) -> bool) -> EvalResult<Value> {
    let [first, rest @ ..] = args else {
        return Err(Arity::AtLeast(2).mismatch(name, args.len()));
    };

    let mut result = first.as_bool(name)?;
    for arg in rest {
        result = op(result, arg.as_bool(name)?);
    }

    Ok(Value::Boolean(result))
}

/// Logical conjunction of two or more booleans.
///
/// # Example
/// ```
/// use condexpr::interpreter::{evaluator::function::logic::and, value::core::Value};
///
/// let r = and("and", &[true.into(), true.into(), false.into()]).unwrap();
/// assert_eq!(r, Value::Boolean(false));
///
/// assert!(and("and", &[Value::Number(1.0), false.into()]).is_err());
/// ```
pub fn and(name: &str, args: &[Value]) -> EvalResult<Value> {
    fold_bools(name, args, |a, b| a && b)
}

/// Logical disjunction of two or more booleans.
pub fn or(name: &str, args: &[Value]) -> EvalResult<Value> {
    fold_bools(name, args, |a, b| a || b)
}

/// Logical negation of a single boolean.
///
/// # Example
/// ```
/// use condexpr::interpreter::{evaluator::function::logic::not, value::core::Value};
///
/// assert_eq!(not("not", &[false.into()]).unwrap(), Value::Boolean(true));
/// assert!(not("not", &[true.into(), false.into()]).is_err());
/// ```
pub fn not(name: &str, args: &[Value]) -> EvalResult<Value> {
    let [value] = args else {
        return Err(Arity::Exact(1).mismatch(name, args.len()));
    };

    Ok(Value::Boolean(!value.as_bool(name)?))
}
