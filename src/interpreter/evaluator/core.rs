use std::str::FromStr;

use tracing::{debug, trace};

use crate::{
    ast::{Atom, Node},
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::{function::registry::FunctionRegistry, variables::VariableLookup},
        parser::core::{ParseResult, parse_source},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A parsed condition, ready to be evaluated any number of times.
///
/// Parsing does not touch any registry, so one `Expression` can be evaluated
/// against different registries and variable sets, and shared between
/// threads.
///
/// # Example
/// ```
/// use condexpr::{Expression, FunctionRegistry, MapVariables};
///
/// let expression: Expression = "(between (mod age 5) 1 3)".parse().unwrap();
/// let registry = FunctionRegistry::with_builtins();
///
/// for (age, expected) in [(18, true), (20, false)] {
///     let vars = MapVariables::new().with("age", age);
///     assert_eq!(expression.evaluate_bool(&registry, &vars).unwrap(), expected);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    root: Node,
}

impl Expression {
    /// Parses condition text.
    ///
    /// # Errors
    /// Any [`ParseError`]; a failure is also logged at debug level.
    pub fn parse(source: &str) -> ParseResult<Self> {
        match parse_source(source) {
            Ok(root) => Ok(Self { root }),
            Err(error) => {
                debug!(%error, source, "failed to parse expression");
                Err(error)
            },
        }
    }

    /// Returns the root of the parse tree.
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// Evaluates the expression, returning whatever value it produces.
    ///
    /// # Parameters
    /// - `registry`: Functions visible to the expression.
    /// - `variables`: Values for identifiers that are not functions.
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised anywhere in the tree.
    pub fn evaluate(&self,
                    registry: &FunctionRegistry,
                    variables: &dyn VariableLookup)
                    -> EvalResult<Value> {
        Context { registry, variables }.eval(&self.root)
    }

    /// Evaluates the expression and requires a boolean result.
    ///
    /// # Errors
    /// - Any error of [`Expression::evaluate`].
    /// - `InvalidResultType` if the result is not a boolean.
    pub fn evaluate_bool(&self,
                         registry: &FunctionRegistry,
                         variables: &dyn VariableLookup)
                         -> EvalResult<bool> {
        match self.evaluate(registry, variables)? {
            Value::Boolean(b) => Ok(b),
            other => Err(RuntimeError::InvalidResultType { found: other.type_name() }),
        }
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root)
    }
}

/// Stores what one evaluation can see.
///
/// A `Context` lives for a single call to [`Expression::evaluate`] and only
/// borrows its registry and variables, so evaluation never mutates shared
/// state.
pub struct Context<'a> {
    /// Functions, consulted first when resolving an identifier.
    pub registry:  &'a FunctionRegistry,
    /// Variables, consulted when no function matches.
    pub variables: &'a dyn VariableLookup,
}

impl Context<'_> {
    /// Evaluates a node and returns the resulting value.
    ///
    /// Atoms evaluate to themselves, except identifiers, which are resolved.
    /// Forms are calls or lists, see [`Context::eval_form`].
    pub fn eval(&self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::Atom { atom, line } => self.eval_atom(atom, *line),
            Node::Form { children, .. } => self.eval_form(children),
        }
    }

    fn eval_atom(&self, atom: &Atom, line: usize) -> EvalResult<Value> {
        match atom {
            Atom::Number(n) => Ok(Value::Number(*n)),
            Atom::Text(s) => Ok(Value::Text(s.clone())),
            Atom::Identifier(name) => self.eval_identifier(name, line),
        }
    }

    /// Resolves an identifier: a registered function wins over a variable of
    /// the same name.
    ///
    /// # Errors
    /// `NameNotFound` if neither the registry nor the variables know `name`.
    fn eval_identifier(&self, name: &str, line: usize) -> EvalResult<Value> {
        if let Some(function) = self.registry.lookup(name) {
            return Ok(Value::Callable(function.clone()));
        }

        self.variables
            .get(name)
            .ok_or_else(|| RuntimeError::NameNotFound { name: name.to_string(),
                                                        line })
    }

    /// Evaluates a parenthesized form.
    ///
    /// The head is evaluated first. If it yields a function, the remaining
    /// children are evaluated left to right and passed to it as arguments.
    /// Otherwise the form is literal data and becomes a list of every
    /// child's value, head included. An empty form is the empty list.
    ///
    /// # Errors
    /// The first error from evaluating a child, or from the called function.
    pub fn eval_form(&self, children: &[Node]) -> EvalResult<Value> {
        let Some((head, rest)) = children.split_first() else {
            return Ok(Value::List(Vec::new()));
        };

        let head = self.eval(head)?;
        let args = rest.iter().map(|child| self.eval(child)).collect::<EvalResult<Vec<_>>>()?;

        match head {
            Value::Callable(function) => {
                trace!(function = function.name(), args = args.len(), "calling function");
                function.call(&args)
            },
            head => {
                let mut items = Vec::with_capacity(children.len());
                items.push(head);
                items.extend(args);
                Ok(Value::List(items))
            },
        }
    }
}
