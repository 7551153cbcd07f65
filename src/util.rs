/// Numeric conversion helpers.
///
/// This module provides conversions between integer and floating-point types
/// that never lose data silently. Use these helpers whenever a builtin needs
/// to move between `i64` and `f64`, e.g. the truncating integer path of
/// `mod`.
///
/// All functions return a `Result`, which is `Ok` if the conversion is valid,
/// or an error if the value is out of range or not finite.
pub mod num;
