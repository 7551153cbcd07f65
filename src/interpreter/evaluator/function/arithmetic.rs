use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, utils::Arity},
        value::core::Value,
    },
    util::num::i64_to_f64_checked,
};

/// Folds two or more numbers with `op`, starting from the first argument.
fn fold_numbers(name: &str, args: &[Value], op: fn(f64, f64) -> f64) -> EvalResult<Value> {
    let [first, rest @ ..] = args else {
        return Err(Arity::AtLeast(2).mismatch(name, args.len()));
    };

    let mut result = first.as_number(name)?;
    for arg in rest {
        result = op(result, arg.as_number(name)?);
    }

    Ok(Value::Number(result))
}

/// Extracts exactly two numeric operands.
fn operands(name: &str, args: &[Value]) -> EvalResult<(f64, f64)> {
    let [lhs, rhs] = args else {
        return Err(Arity::Exact(2).mismatch(name, args.len()));
    };

    Ok((lhs.as_number(name)?, rhs.as_number(name)?))
}

/// Integer remainder of two numbers truncated toward zero.
///
/// The sign of a non-zero result follows the dividend, so `-7 mod 3` is `-1`.
///
/// # Errors
/// - `DivisionByZero` if the divisor truncates to zero.
/// - `TypeMismatch` if an operand is not a number or does not fit in 64 bits.
///
/// # Example
/// ```
/// use condexpr::interpreter::{evaluator::function::arithmetic::modulo, value::core::Value};
///
/// assert_eq!(modulo("mod", &[18.into(), 5.into()]).unwrap(), Value::Number(3.0));
/// assert_eq!(modulo("mod", &[Value::Number(18.9), Value::Number(5.2)]).unwrap(),
///            Value::Number(3.0));
/// assert_eq!(modulo("mod", &[(-7).into(), 3.into()]).unwrap(), Value::Number(-1.0));
/// assert!(modulo("mod", &[7.into(), Value::Number(0.5)]).is_err());
/// ```
pub fn modulo(name: &str, args: &[Value]) -> EvalResult<Value> {
    let [lhs, rhs] = args else {
        return Err(Arity::Exact(2).mismatch(name, args.len()));
    };

    let (dividend, divisor) = (lhs.as_integer(name)?, rhs.as_integer(name)?);
    if divisor == 0 {
        return Err(RuntimeError::DivisionByZero { function: name.to_string() });
    }

    // |remainder| < |divisor|, so only divisors beyond 2^53 can fail here.
    let remainder = dividend.wrapping_rem(divisor);
    let error = RuntimeError::TypeMismatch { function: name.to_string(),
                                             details:  format!("remainder {remainder} is not exactly representable"), };

    i64_to_f64_checked(remainder, error).map(Value::Number)
}

/// Sum of two or more numbers.
pub fn add(name: &str, args: &[Value]) -> EvalResult<Value> {
    fold_numbers(name, args, |a, b| a + b)
}

/// Product of two or more numbers.
///
/// # Example
/// ```
/// use condexpr::interpreter::{evaluator::function::arithmetic::multiply, value::core::Value};
///
/// let r = multiply("*", &[2.into(), 3.into(), 4.into()]).unwrap();
/// assert_eq!(r, Value::Number(24.0));
/// ```
pub fn multiply(name: &str, args: &[Value]) -> EvalResult<Value> {
    fold_numbers(name, args, |a, b| a * b)
}

/// Difference of exactly two numbers.
pub fn subtract(name: &str, args: &[Value]) -> EvalResult<Value> {
    let (lhs, rhs) = operands(name, args)?;
    Ok(Value::Number(lhs - rhs))
}

/// Quotient of exactly two numbers.
///
/// # Errors
/// - `DivisionByZero` if the divisor is zero.
#[allow(clippy::float_cmp)]
pub fn divide(name: &str, args: &[Value]) -> EvalResult<Value> {
    let (lhs, rhs) = operands(name, args)?;
    if rhs == 0.0 {
        return Err(RuntimeError::DivisionByZero { function: name.to_string() });
    }

    Ok(Value::Number(lhs / rhs))
}
