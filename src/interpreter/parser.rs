/// Core parsing logic.
///
/// Groups the lexer's token stream into a tree of forms and atoms, enforcing
/// balanced parentheses and exactly one top-level expression.
pub mod core;

/// Literal classification.
///
/// Decides whether a token is a number, a string, or an identifier to be
/// resolved at evaluation time.
pub mod literal;
