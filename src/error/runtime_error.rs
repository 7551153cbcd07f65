#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An identifier named neither a registered function nor a variable.
    NameNotFound {
        /// The unresolved identifier.
        name: String,
        /// The source line of the identifier.
        line: usize,
    },
    /// The boolean entry point received a result of another type.
    InvalidResultType {
        /// Type name of the value actually produced.
        found: &'static str,
    },
    /// An argument had a type the function cannot work with.
    TypeMismatch {
        /// The function that rejected the argument.
        function: String,
        /// Details about the mismatch.
        details:  String,
    },
    /// The wrong number of arguments was supplied to a function.
    ArityMismatch {
        /// The function that was called.
        function: String,
        /// Human readable description of the accepted argument count.
        expected: String,
        /// The number of arguments actually supplied.
        found:    usize,
    },
    /// Attempted division (or remainder) by zero.
    DivisionByZero {
        /// The function that divided.
        function: String,
    },
    /// A textual literal could not be converted, e.g. a bad version or date.
    MalformedLiteral {
        /// The converting function.
        function: String,
        /// Details about why the literal is malformed.
        details:  String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameNotFound { name, line } => write!(f,
                                                        "Error on line {line}: '{name}' is neither a function nor a variable."),
            Self::InvalidResultType { found } => {
                write!(f, "Expected a boolean result, but the expression produced {found}.")
            },
            Self::TypeMismatch { function, details } => {
                write!(f, "Type error in '{function}': {details}.")
            },
            Self::ArityMismatch { function,
                                  expected,
                                  found, } => write!(f,
                                                     "'{function}' takes {expected} argument(s), but {found} were supplied."),
            Self::DivisionByZero { function } => write!(f, "Division by zero in '{function}'."),
            Self::MalformedLiteral { function, details } => {
                write!(f, "Malformed literal in '{function}': {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
