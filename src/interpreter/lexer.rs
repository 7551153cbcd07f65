use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a raw lexical token of the expression language.
///
/// The lexer performs no semantic interpretation: a bare token such as `42`
/// or `gender` is only classified as a number or an identifier later, by the
/// parser.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A string quoted with `"`, `'` or `` ` ``, with the quotes stripped and
    /// escape characters removed.
    ///
    /// A delimiter preceded by an odd run of backslashes is escaped; an even
    /// run (including none) closes the string. Backslashes anywhere else are
    /// kept as written.
    #[regex(r#""([^"\\]|\\+[^"\\]|(\\\\)*\\")*(\\\\)*""#, unquote)]
    #[regex(r#"'([^'\\]|\\+[^'\\]|(\\\\)*\\')*(\\\\)*'"#, unquote)]
    #[regex(r#"`([^`\\]|\\+[^`\\]|(\\\\)*\\`)*(\\\\)*`"#, unquote)]
    Quoted(String),
    /// Unquoted text running up to the next whitespace or parenthesis.
    #[regex(r#"[^\s()'"`][^\s()]*"#, |lex| lex.slice().to_string())]
    Bare(String),
    /// Unicode whitespace; newlines advance the line counter.
    #[regex(r"\s+", |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
        logos::Skip
    })]
    Whitespace,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Scans a single token starting at byte `offset` of `source`.
///
/// Leading whitespace is skipped. Returns the offset just past the token
/// together with the token itself, or `None` when only whitespace remains.
/// Offsets past the end of `source`, or inside a multi-byte character, also
/// yield `None`.
///
/// # Errors
/// - `UnterminatedString` if a quoted string is not closed before the end of
///   input.
///
/// # Example
/// ```
/// use condexpr::interpreter::lexer::{Token, scan};
///
/// let source = r"(in 'str\'ing' x)";
///
/// let (next, token) = scan(source, 3).unwrap();
/// assert_eq!(token, Some(Token::Quoted("str'ing".to_string())));
///
/// let (_, token) = scan(source, next).unwrap();
/// assert_eq!(token, Some(Token::Bare("x".to_string())));
///
/// assert_eq!(scan("   ", 0).unwrap(), (3, None));
///
/// // An even run of backslashes before the delimiter closes the string.
/// let source = r"'str\\'ing'";
/// assert_eq!(scan(source, 0).unwrap(), (7, Some(Token::Quoted(r"str\\".to_string()))));
/// assert_eq!(scan(source, 7).unwrap(), (11, Some(Token::Bare("ing'".to_string()))));
///
/// // An odd run escapes it, and only the last backslash is dropped.
/// assert_eq!(scan(r"'str\\\'ing'", 0).unwrap(),
///            (12, Some(Token::Quoted(r"str\\'ing".to_string()))));
/// ```
pub fn scan(source: &str, offset: usize) -> ParseResult<(usize, Option<Token>)> {
    let Some(rest) = source.get(offset..) else {
        return Ok((source.len().max(offset), None));
    };
    let line = 1 + source[..offset].matches('\n').count();

    let mut lexer = Token::lexer_with_extras(rest, LexerExtras { line });

    match lexer.next() {
        None => Ok((source.len(), None)),
        Some(Ok(token)) => Ok((offset + lexer.span().end, Some(token))),
        Some(Err(())) => Err(lex_error(lexer.slice(), lexer.extras.line)),
    }
}

/// Splits `source` into tokens paired with the line they start on.
///
/// # Errors
/// Fails on the first token that cannot be scanned, see [`scan`].
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => {
                // A quoted string may span lines; report the line it starts on.
                let line = lexer.extras.line
                                .saturating_sub(lexer.slice().matches('\n').count());
                tokens.push((tok, line));
            },
            Err(()) => return Err(lex_error(lexer.slice(), lexer.extras.line)),
        }
    }

    Ok(tokens)
}

/// Maps the slice logos failed on to a parse error.
///
/// Every character except a quote starts a bare token or whitespace, so in
/// practice this is always an unterminated string.
fn lex_error(slice: &str, line: usize) -> ParseError {
    match slice.chars().next() {
        Some(delimiter @ ('"' | '\'' | '`')) => ParseError::UnterminatedString { delimiter, line },
        Some(character) => ParseError::UnexpectedCharacter { character, line },
        None => ParseError::UnexpectedCharacter { character: char::REPLACEMENT_CHARACTER,
                                                  line },
    }
}

/// Strips the delimiters from a quoted token and removes escape characters.
///
/// Inside the quotes, a delimiter is always preceded by an odd run of
/// backslashes; the last backslash of that run is the escape character and is
/// dropped. Newlines inside the string advance the line counter.
fn unquote(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();

    let mut chars = slice.chars();
    let delimiter = chars.next().unwrap_or('"');
    let inner = chars.as_str();
    let inner = inner.strip_suffix(delimiter).unwrap_or(inner);

    let mut out = String::with_capacity(inner.len());
    let mut backslashes = 0usize;

    for c in inner.chars() {
        match c {
            '\\' => backslashes += 1,
            c if c == delimiter => {
                out.extend(std::iter::repeat_n('\\', backslashes.saturating_sub(1)));
                out.push(c);
                backslashes = 0;
            },
            c => {
                out.extend(std::iter::repeat_n('\\', backslashes));
                out.push(c);
                backslashes = 0;
            },
        }
    }
    out.extend(std::iter::repeat_n('\\', backslashes));

    out
}
