/// Arithmetic builtins.
///
/// `+` and `*` fold two or more numbers, `-` and `/` take exactly two, and
/// `mod` works on operands truncated to 64-bit integers.
pub mod arithmetic;
/// Relational and equality builtins.
///
/// Provides `eq`, `ne` and the ordering functions `gt`, `lt`, `ge`, `le`,
/// plus the shared [`compare`](comparison::compare) helper.
pub mod comparison;
/// The builtin table and its registration.
pub mod core;
/// Boolean `and`, `or` and `not`.
pub mod logic;
/// List membership builtins: `in`, `overlap` and `between`.
pub mod membership;
/// The function registry.
///
/// Maps names to callables; identifiers are looked up here before variables.
pub mod registry;
/// Timestamp conversions: `t_time`, `td_time` and `td_date`.
pub mod time;
/// Version string conversion (`t_version`).
pub mod version;
