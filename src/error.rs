/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression: unterminated strings, unbalanced parentheses, leftover
/// top-level forms and empty input.
pub mod parse_error;
/// Registry errors.
///
/// Raised when an embedding application registers a function under a name
/// that is already taken.
pub mod registry_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unresolved
/// names, type and arity mismatches inside builtins, division by zero and
/// malformed version or timestamp literals.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use registry_error::RegistryError;
pub use runtime_error::RuntimeError;

/// Either phase of a one-shot parse-then-evaluate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression text could not be parsed.
    Parse(ParseError),
    /// The parsed expression failed during evaluation.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
