use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

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

/// Layout used by `td_time`, e.g. `2018-02-01 13:45:00`.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Layout used by `td_date`, e.g. `2018-02-01`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `text` against a `strftime` style `format`.
///
/// A format carrying an offset (`%z`, `%:z`) yields that instant converted to
/// UTC. Formats without one are read as UTC, and date-only formats as UTC
/// midnight.
///
/// # Errors
/// `MalformedLiteral` naming `function` if the text does not match.
///
/// # Example
/// ```
/// use condexpr::interpreter::evaluator::function::time::parse_timestamp;
///
/// let t = parse_timestamp("t_time", "%d/%m/%Y %H:%M", "01/02/2018 09:30").unwrap();
/// assert_eq!(t.to_rfc3339(), "2018-02-01T09:30:00+00:00");
///
/// let t = parse_timestamp("t_time", "%Y-%m-%d %H:%M %z", "2018-02-01 09:30 +0200").unwrap();
/// assert_eq!(t.to_rfc3339(), "2018-02-01T07:30:00+00:00");
///
/// assert!(parse_timestamp("t_time", "%Y-%m-%d", "2018-13-01").is_err());
/// ```
pub fn parse_timestamp(function: &str, format: &str, text: &str) -> EvalResult<DateTime<Utc>> {
    if let Ok(zoned) = DateTime::parse_from_str(text, format) {
        return Ok(zoned.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
        return Ok(naive.and_utc());
    }

    match NaiveDate::parse_from_str(text, format) {
        Ok(date) => date.and_hms_opt(0, 0, 0)
                        .map(|midnight| midnight.and_utc())
                        .ok_or_else(|| malformed(function, format, text, "no midnight on that date")),
        Err(error) => Err(malformed(function, format, text, &error.to_string())),
    }
}

fn malformed(function: &str, format: &str, text: &str, reason: &str) -> RuntimeError {
    RuntimeError::MalformedLiteral { function: function.to_string(),
                                     details:  format!("'{text}' does not match '{format}': {reason}"), }
}

/// Converts text, or every text in a list, with a fixed layout.
fn convert(function: &str, format: &str, value: &Value) -> EvalResult<Value> {
    map_elementwise(value, &|item| {
        parse_timestamp(function, format, item.as_text(function)?).map(Value::Timestamp)
    })
}

/// `(t_time format value)` parses `value` with an explicit layout.
///
/// # Example
/// ```
/// use condexpr::interpreter::{evaluator::function::time::t_time, value::core::Value};
///
/// let dates = Value::List(vec!["2018/02/01".into(), "2019/03/04".into()]);
/// let parsed = t_time("t_time", &["%Y/%m/%d".into(), dates]).unwrap();
///
/// assert_eq!(parsed.as_list("t_time").unwrap().len(), 2);
/// ```
pub fn t_time(name: &str, args: &[Value]) -> EvalResult<Value> {
    let [format, value] = args else {
        return Err(Arity::Exact(2).mismatch(name, args.len()));
    };

    convert(name, format.as_text(name)?, value)
}

/// `(td_time value)` parses `value` with [`DEFAULT_TIME_FORMAT`].
pub fn td_time(name: &str, args: &[Value]) -> EvalResult<Value> {
    let [value] = args else {
        return Err(Arity::Exact(1).mismatch(name, args.len()));
    };

    convert(name, DEFAULT_TIME_FORMAT, value)
}

/// `(td_date value)` parses `value` with [`DEFAULT_DATE_FORMAT`].
pub fn td_date(name: &str, args: &[Value]) -> EvalResult<Value> {
    let [value] = args else {
        return Err(Arity::Exact(1).mismatch(name, args.len()));
    };

    convert(name, DEFAULT_DATE_FORMAT, value)
}
