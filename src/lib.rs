//! # condexpr
//!
//! condexpr is an embeddable condition language written in Rust.
//! Conditions are S-expressions such as `(in gender ("female" "male"))`:
//! they are parsed once into an [`Expression`], then evaluated against a
//! [`FunctionRegistry`] and a set of caller-supplied variables.
//!
//! A parenthesized form is a function call when its first element resolves
//! to a registered function, and a literal list otherwise. Identifiers
//! resolve to registered functions first and to variables second.
//!
//! ```
//! use condexpr::{FunctionRegistry, MapVariables};
//!
//! let expression = condexpr::parse(r#"(and (in gender ("female" "male")) (ge age 18))"#).unwrap();
//! let registry = FunctionRegistry::with_builtins();
//! let vars = MapVariables::new().with("gender", "female").with("age", 21);
//!
//! assert!(expression.evaluate_bool(&registry, &vars).unwrap());
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed conditions.
///
/// This module declares the [`Node`](ast::Node) and [`Atom`](ast::Atom)
/// types. The tree is built by the parser and walked by the evaluator; it
/// can also be printed back as S-expression text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Errors carry a kind, a description and, where one exists, the source line
/// of the offending token.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, registry,
///   evaluator).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, parser, evaluator and value
/// representations. Most embedders only need the re-exports at the crate
/// root.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use ast::Node;
pub use error::Error;
pub use interpreter::{
    evaluator::{
        core::{EvalResult, Expression},
        function::registry::{FunctionRegistry, builtin_registry},
        variables::{MapVariables, NoVariables, VariableLookup},
    },
    value::{
        callable::{Callable, Function},
        core::Value,
    },
};

use crate::interpreter::parser::core::ParseResult;

/// Parses condition text into an [`Expression`].
///
/// # Errors
/// Returns a [`ParseError`](error::ParseError) for malformed text.
///
/// # Examples
/// ```
/// use condexpr::error::ParseError;
///
/// assert!(condexpr::parse("(eq (mod age 5) 3.0)").is_ok());
///
/// // Missing outer parentheses leave three top-level expressions.
/// assert_eq!(condexpr::parse("eq (mod age 5) 3.0"),
///            Err(ParseError::LeftoverText { count: 3 }));
/// ```
pub fn parse(source: &str) -> ParseResult<Expression> {
    Expression::parse(source)
}

/// Parses and evaluates `source` with the builtin functions only.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use condexpr::{MapVariables, Value};
///
/// let vars = MapVariables::new().with("age", 18);
/// assert_eq!(condexpr::eval("(mod age 5)", &vars).unwrap(), Value::Number(3.0));
/// ```
pub fn eval(source: &str, variables: &dyn VariableLookup) -> Result<Value, Error> {
    eval_with(source, builtin_registry(), variables)
}

/// Parses and evaluates `source` with the builtin functions only, requiring
/// a boolean result.
///
/// # Errors
/// Returns an error if parsing or evaluation fails, or if the result is not
/// a boolean.
///
/// # Examples
/// ```
/// use condexpr::{Error, NoVariables, error::RuntimeError};
///
/// assert_eq!(condexpr::eval_bool("(overlap (1 2 3) (4 3 2))", &NoVariables), Ok(true));
/// assert_eq!(condexpr::eval_bool("(+ 1 2)", &NoVariables),
///            Err(Error::Runtime(RuntimeError::InvalidResultType { found: "number" })));
/// ```
pub fn eval_bool(source: &str, variables: &dyn VariableLookup) -> Result<bool, Error> {
    eval_bool_with(source, builtin_registry(), variables)
}

/// Parses and evaluates `source` against an explicit registry.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
pub fn eval_with(source: &str,
                 registry: &FunctionRegistry,
                 variables: &dyn VariableLookup)
                 -> Result<Value, Error> {
    Ok(parse(source)?.evaluate(registry, variables)?)
}

/// Parses and evaluates `source` against an explicit registry, requiring a
/// boolean result.
///
/// # Errors
/// Returns an error if parsing or evaluation fails, or if the result is not
/// a boolean.
pub fn eval_bool_with(source: &str,
                      registry: &FunctionRegistry,
                      variables: &dyn VariableLookup)
                      -> Result<bool, Error> {
    Ok(parse(source)?.evaluate_bool(registry, variables)?)
}
