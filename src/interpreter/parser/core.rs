use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::literal::classify,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// An entry on the parser's stack: either an open group or a finished node.
enum Frame {
    Open(usize),
    Node(Node),
}

/// Parses source text into a single parse tree.
///
/// This is the entry point for parsing. The text is tokenized, then grouped
/// by [`parse_tokens`].
///
/// # Errors
/// Any lexing error, plus the structural errors of [`parse_tokens`].
///
/// # Example
/// ```
/// use condexpr::{error::ParseError, interpreter::parser::core::parse_source};
///
/// let tree = parse_source(r#"(in gender ("female" "male"))"#).unwrap();
/// assert_eq!(tree.to_string(), r#"(in gender ("female" "male"))"#);
///
/// assert_eq!(parse_source("(a b) c"), Err(ParseError::LeftoverText { count: 2 }));
/// assert_eq!(parse_source("()"), Err(ParseError::NilInput));
/// ```
pub fn parse_source(source: &str) -> ParseResult<Node> {
    let tokens = tokenize(source)?;
    parse_tokens(&tokens)
}

/// Groups a token stream into a parse tree.
///
/// Maintains a stack of open groups. `(` pushes a marker; `)` pops everything
/// back to the most recent marker and pushes it back as one form; any other
/// token is classified and pushed as an atom. Once all tokens are consumed,
/// exactly one node must remain.
///
/// # Parameters
/// - `tokens`: `(Token, line)` pairs as produced by the lexer.
///
/// # Errors
/// - `UnmatchedParenthesis` for a `)` with no open group, or a `(` that is
///   never closed.
/// - `NilInput` if nothing remains, or the only thing left is `()`.
/// - `LeftoverText` if more than one top-level node remains.
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Node> {
    let mut stack: Vec<Frame> = Vec::new();

    for (token, line) in tokens {
        match token {
            Token::LParen => stack.push(Frame::Open(*line)),
            Token::RParen => {
                let node = close_group(&mut stack, *line)?;
                stack.push(Frame::Node(node));
            },
            _ => {
                if let Some(atom) = classify(token) {
                    stack.push(Frame::Node(Node::Atom { atom,
                                                        line: *line }));
                }
            },
        }
    }

    if let Some(line) = stack.iter().find_map(|frame| match frame {
                                        Frame::Open(line) => Some(*line),
                                        Frame::Node(_) => None,
                                    })
    {
        return Err(ParseError::UnmatchedParenthesis { line });
    }

    match stack.len() {
        0 => Err(ParseError::NilInput),
        1 => match stack.pop() {
            Some(Frame::Node(Node::Form { children, .. })) if children.is_empty() => {
                Err(ParseError::NilInput)
            },
            Some(Frame::Node(node)) => Ok(node),
            _ => Err(ParseError::NilInput),
        },
        count => Err(ParseError::LeftoverText { count }),
    }
}

/// Pops nodes back to the innermost open group and folds them into a form.
fn close_group(stack: &mut Vec<Frame>, line: usize) -> ParseResult<Node> {
    let mut children = Vec::new();

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Node(node) => children.push(node),
            Frame::Open(open_line) => {
                children.reverse();
                return Ok(Node::Form { children,
                                       line: open_line });
            },
        }
    }

    Err(ParseError::UnmatchedParenthesis { line })
}
