use crate::{ast::Atom, interpreter::lexer::Token};

/// Classifies a bare (unquoted) token.
///
/// A token made only of digits, signs, decimal points and exponent markers
/// that parses as an `f64` becomes a number; anything else is an identifier
/// to be resolved at evaluation time. Words such as `inf` or `NaN` are
/// therefore identifiers, not numbers.
///
/// # Example
/// ```
/// use condexpr::{ast::Atom, interpreter::parser::literal::classify_bare};
///
/// assert_eq!(classify_bare("-1.5"), Atom::Number(-1.5));
/// assert_eq!(classify_bare(".5"), Atom::Number(0.5));
/// assert_eq!(classify_bare("-"), Atom::Identifier("-".to_string()));
/// assert_eq!(classify_bare("inf"), Atom::Identifier("inf".to_string()));
/// ```
#[must_use]
pub fn classify_bare(text: &str) -> Atom {
    let numeric_chars = text.bytes()
                            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));

    if numeric_chars && let Ok(n) = text.parse::<f64>() {
        return Atom::Number(n);
    }

    Atom::Identifier(text.to_string())
}

/// Classifies a raw token as an atom.
///
/// Quoted tokens are always text, so `"123"` stays a string. Parentheses are
/// structural and never reach this function; `None` is returned for them.
#[must_use]
pub fn classify(token: &Token) -> Option<Atom> {
    match token {
        Token::Quoted(text) => Some(Atom::Text(text.clone())),
        Token::Bare(text) => Some(classify_bare(text)),
        Token::LParen | Token::RParen | Token::Whitespace => None,
    }
}
