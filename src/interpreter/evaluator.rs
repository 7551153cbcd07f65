/// Core evaluation logic.
///
/// Contains the parsed [`Expression`](core::Expression) handle and the
/// tree-walking evaluation context that decides, for every form, whether it
/// is a function call or a literal list.
pub mod core;

/// Function registry and builtin functions.
///
/// Every identifier in call position is resolved against a registry, which
/// by default holds the builtins defined here.
pub mod function;

/// Utility functions for evaluation.
///
/// Provides arity checking and element-wise mapping shared by the builtins.
pub mod utils;

/// Variable lookup.
///
/// Identifiers that do not name a function are resolved through a
/// caller-supplied [`VariableLookup`](variables::VariableLookup).
pub mod variables;
