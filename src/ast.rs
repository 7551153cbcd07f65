use std::fmt::Write as _;

/// Represents a leaf of the parse tree.
///
/// Numbers and quoted strings are classified while parsing; bare identifiers
/// stay unresolved until evaluation, when they are looked up first in the
/// function registry and then among the caller's variables.
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    /// A numeric literal such as `42`, `-1.5` or `.5`.
    Number(f64),
    /// A quoted string literal, with escape characters already removed.
    Text(String),
    /// A bare identifier naming a function or a variable.
    Identifier(String),
}

/// A node of the parse tree produced by the parser.
///
/// Every parenthesized group becomes a [`Node::Form`]; everything else is an
/// [`Node::Atom`]. Whether a form is a function call or literal array data is
/// not decided here: the evaluator makes that call based on what its first
/// child resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A single literal or identifier.
    Atom {
        /// The classified atom.
        atom: Atom,
        /// Line number in the source text.
        line: usize,
    },
    /// A parenthesized sequence of child nodes.
    Form {
        /// The children, in source order.
        children: Vec<Self>,
        /// Line number of the opening parenthesis.
        line:     usize,
    },
}

impl Node {
    /// Returns the source line this node starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Atom { line, .. } | Self::Form { line, .. } => *line,
        }
    }

    /// Renders the tree as an indented listing, one node per line.
    ///
    /// Useful when debugging how an expression was grouped.
    ///
    /// # Example
    /// ```
    /// use condexpr::parse;
    ///
    /// let expression = parse("(! (a b) ())").unwrap();
    /// let dump = expression.root().dump();
    ///
    /// assert_eq!(dump,
    ///            "form: 3 elements: (! (a b) ())\n   identifier: !\n   form: 2 elements: (a b)\n      identifier: a\n      identifier: b\n   form: 0 elements: ()\n");
    /// ```
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let indent = depth * 3;
        match self {
            Self::Atom { atom, .. } => {
                let kind = match atom {
                    Atom::Number(_) => "number",
                    Atom::Text(_) => "text",
                    Atom::Identifier(_) => "identifier",
                };
                let _ = writeln!(out, "{:indent$}{kind}: {self}", "");
            },
            Self::Form { children, .. } => {
                let _ = writeln!(out, "{:indent$}form: {} elements: {self}", "", children.len());
                for child in children {
                    child.dump_into(out, depth + 1);
                }
            },
        }
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Text(text) => write_quoted(f, text),
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom { atom, .. } => write!(f, "{atom}"),
            Self::Form { children, .. } => {
                write!(f, "(")?;

                for (index, child) in children.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }

                    write!(f, "{child}")?;
                }

                write!(f, ")")
            },
        }
    }
}

/// Writes `text` as a quoted string literal the lexer reads back unchanged.
///
/// The first delimiter that does not occur in the text is used. When all
/// three occur, `"` is used and each `"` gets a backslash in front of it.
/// Texts ending in a backslash, or with a backslash directly before a quote,
/// are not guaranteed to read back unchanged.
fn write_quoted(f: &mut std::fmt::Formatter<'_>, text: &str) -> std::fmt::Result {
    if let Some(delimiter) = ['"', '\'', '`'].into_iter().find(|d| !text.contains(*d)) {
        return write!(f, "{delimiter}{text}{delimiter}");
    }

    write!(f, "\"")?;
    for c in text.chars() {
        if c == '"' {
            write!(f, "\\")?;
        }
        write!(f, "{c}")?;
    }
    write!(f, "\"")
}
