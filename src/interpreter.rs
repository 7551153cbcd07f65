/// The evaluator module walks a parsed tree and computes its value.
///
/// # Responsibilities
/// - Resolves identifiers, first as registered functions, then as variables.
/// - Treats a form as a call when its head evaluates to a function, and as a
///   literal list otherwise.
/// - Hosts the function registry and the builtin function set.
pub mod evaluator;
/// The lexer module tokenizes condition text.
///
/// The lexer reads the raw source and produces parentheses, quoted strings
/// with their escapes removed, and bare words, each tagged with its source
/// line.
///
/// # Responsibilities
/// - Handles the three quote delimiters and backslash escaping.
/// - Reports unterminated strings instead of truncating them.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// # Responsibilities
/// - Groups tokens into nested forms, validating balanced parentheses.
/// - Classifies bare words as numbers or identifiers.
/// - Requires exactly one top-level expression.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// It declares the closed set of values an expression can produce or
/// receive (numbers, text, booleans, timestamps, lists and functions) along
/// with the typed accessors builtins use to reject wrongly typed arguments.
pub mod value;
