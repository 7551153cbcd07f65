#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// A quoted string reached the end of input before its closing delimiter.
    UnterminatedString {
        /// The quote character that opened the string.
        delimiter: char,
        /// The source line where the string started.
        line:      usize,
    },
    /// A character could not start any token.
    ///
    /// Every character except a quote starts a bare token or whitespace, so
    /// the lexer cannot produce this today. It stays as the mapping for a
    /// lexer failure that does not begin at a quote, so a future token rule
    /// cannot turn such a failure into a misleading unterminated string.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A `)` without a matching `(`, or a `(` that is never closed.
    UnmatchedParenthesis {
        /// The source line of the offending parenthesis.
        line: usize,
    },
    /// More than one top-level form remained after parsing.
    LeftoverText {
        /// The number of top-level forms found.
        count: usize,
    },
    /// The input was empty, or consisted only of `()`.
    NilInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedString { delimiter, line } => write!(f,
                                                                   "Error on line {line}: Unterminated string, expected closing {delimiter}."),
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "Error on line {line}: Unexpected character '{character}'.")
            },
            Self::UnmatchedParenthesis { line } => {
                write!(f, "Error on line {line}: Unmatched parenthesis.")
            },
            Self::LeftoverText { count } => write!(f,
                                                   "Expected exactly one top-level expression, found {count}."),
            Self::NilInput => write!(f, "Nothing to evaluate: the expression is empty."),
        }
    }
}

impl std::error::Error for ParseError {}
