use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{Arity, map_elementwise},
        },
        value::core::Value,
    },
};

/// Maximum number of dot-separated parts in a version string.
pub const VERSION_MAX_PARTS: usize = 10;

/// Every version part must be strictly below this value.
pub const VERSION_PART_LIMIT: u32 = 10_000;

/// Decimal digits reserved for each version part.
const SLOT_DIGITS: i32 = 4;

/// Decimal exponent of the most significant slot.
const FIRST_SLOT_EXPONENT: i32 = 20;

/// Converts a dotted version string into a number that orders like the
/// version.
///
/// Each part occupies its own four-digit decimal slot, the first part in
/// the most significant one, so `"2.9.1"` becomes `2·10²⁰ + 9·10¹⁶ + 1·10¹²`.
/// A list of version strings is converted element by element.
///
/// The result is an `f64`, so only about sixteen significant digits survive.
/// Once the first part is non-zero, the first four parts order reliably, but
/// a difference in the fifth part or later can be lost to rounding: `1.0.0.0.2`
/// and `1.0.0.0.1` encode to the same number. Up to
/// [`VERSION_MAX_PARTS`] parts are accepted all the same.
///
/// # Errors
/// - `TypeMismatch` if the argument (or a list element) is not text.
/// - `MalformedLiteral` if there are more than [`VERSION_MAX_PARTS`] parts,
///   a part is not a non-negative integer, or a part reaches
///   [`VERSION_PART_LIMIT`].
///
/// # Example
/// ```
/// use condexpr::interpreter::{evaluator::function::version::t_version, value::core::Value};
///
/// let newer = t_version("t_version", &["2.9.1".into()]).unwrap();
/// let older = t_version("t_version", &["2.8.3".into()]).unwrap();
/// assert!(newer.as_number("gt").unwrap() > older.as_number("gt").unwrap());
///
/// assert!(t_version("t_version", &["1.10000".into()]).is_err());
/// assert!(t_version("t_version", &["1.2.3.4.5.6.7.8.9.10.11".into()]).is_err());
/// ```
pub fn t_version(name: &str, args: &[Value]) -> EvalResult<Value> {
    let [value] = args else {
        return Err(Arity::Exact(1).mismatch(name, args.len()));
    };

    map_elementwise(value, &|item| parse_version(name, item.as_text(name)?).map(Value::Number))
}

fn parse_version(function: &str, text: &str) -> EvalResult<f64> {
    let malformed = |details: String| RuntimeError::MalformedLiteral { function: function.to_string(),
                                                                       details };

    let parts = text.split('.').collect::<Vec<_>>();
    if parts.len() > VERSION_MAX_PARTS {
        return Err(malformed(format!("'{text}' has more than {VERSION_MAX_PARTS} parts")));
    }

    let mut version = 0.0;
    let mut exponent = FIRST_SLOT_EXPONENT;
    for part in parts {
        let number = part.parse::<u32>()
                         .map_err(|_| malformed(format!("'{part}' in '{text}' is not a non-negative integer")))?;
        if number >= VERSION_PART_LIMIT {
            return Err(malformed(format!("'{part}' in '{text}' must be below {VERSION_PART_LIMIT}")));
        }

        version += f64::from(number) * 10f64.powi(exponent);
        exponent -= SLOT_DIGITS;
    }

    Ok(version)
}
