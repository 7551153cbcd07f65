use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use condexpr::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// Unlike a plain `as` cast this never saturates silently: non-finite values
/// and values outside the `i64` range are rejected. The fractional part is
/// discarded, so `7.9` becomes `7` and `-7.9` becomes `-7`.
///
/// ## Errors
/// Returns `RuntimeError::TypeMismatch` naming `function` when the value is
/// `NaN`, infinite, or out of range.
///
/// ## Example
/// ```
/// use condexpr::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(18.7, "mod").unwrap(), 18);
/// assert_eq!(f64_to_i64_truncated(-3.2, "mod").unwrap(), -3);
/// assert!(f64_to_i64_truncated(f64::NAN, "mod").is_err());
/// assert!(f64_to_i64_truncated(1e20, "mod").is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64, function: &str) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::TypeMismatch { function: function.to_string(),
                                                details:  format!("cannot convert non-finite value {value} to an integer"), });
    }

    let truncated = value.trunc();
    // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::TypeMismatch { function: function.to_string(),
                                                details:  format!("{value} does not fit in a 64-bit integer"), });
    }

    Ok(truncated as i64)
}
