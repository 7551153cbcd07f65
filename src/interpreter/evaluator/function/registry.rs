//! Function registry for resolving identifiers to callables.
//!
//! The registry is populated at initialization time and read-only after
//! that: every mutating method takes `&mut self`, so a registry shared
//! between threads through `&FunctionRegistry` (or the global returned by
//! [`builtin_registry`]) can no longer change.

use std::{
    collections::{BTreeSet, HashMap},
    sync::OnceLock,
};

use tracing::{debug, warn};

use crate::{
    error::RegistryError,
    interpreter::{
        evaluator::function::core::register_builtins,
        value::callable::{Callable, Function},
    },
};

/// Global registry holding only the default builtins.
static BUILTIN_REGISTRY: OnceLock<FunctionRegistry> = OnceLock::new();

/// A name-keyed table of callable functions.
///
/// Names are case-sensitive and unique. Entries are never removed; they can
/// only be added, or replaced with [`FunctionRegistry::force_register`].
///
/// # Example
/// ```
/// use condexpr::{
///     EvalResult, FunctionRegistry, MapVariables, Value, error::RegistryError, parse,
/// };
///
/// let mut registry = FunctionRegistry::with_builtins();
/// registry.register("double", |args: &[Value]| -> EvalResult<Value> {
///             Ok(Value::Number(args[0].as_number("double")? * 2.0))
///         })
///         .unwrap();
///
/// let clash = registry.register("in", |_: &[Value]| -> EvalResult<Value> {
///                         Ok(Value::Boolean(true))
///                     });
/// assert!(matches!(clash, Err(RegistryError::AlreadyExists { .. })));
///
/// let expression = parse("(eq (double x) 8)").unwrap();
/// let vars = MapVariables::new().with("x", 4);
/// assert!(expression.evaluate_bool(&registry, &vars).unwrap());
/// ```
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Callable>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the default builtin set.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }

    /// Registers `function` under `name`, failing if the name is taken.
    ///
    /// # Errors
    /// - `AlreadyExists` if a function with this name is already registered.
    pub fn register(&mut self,
                    name: &str,
                    function: impl Function + 'static)
                    -> Result<(), RegistryError> {
        if self.functions.contains_key(name) {
            return Err(RegistryError::AlreadyExists { name: name.to_string() });
        }

        debug!(name, "registering function");
        self.functions.insert(name.to_string(), Callable::new(name, function));
        Ok(())
    }

    /// Registers `function` under `name`, replacing any existing entry.
    pub fn force_register(&mut self, name: &str, function: impl Function + 'static) {
        if self.functions
               .insert(name.to_string(), Callable::new(name, function))
               .is_some()
        {
            warn!(name, "replaced an existing function");
        } else {
            debug!(name, "registering function");
        }
    }

    /// Looks up a function by exact name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Callable> {
        self.functions.get(name)
    }

    /// Returns `true` if a function is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Returns every registered name, in sorted order.
    #[must_use]
    pub fn names(&self) -> BTreeSet<&str> {
        self.functions.keys().map(String::as_str).collect()
    }

    /// Get the number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
         .field("functions", &self.names())
         .finish()
    }
}

/// Get the global registry with all builtins registered.
///
/// Built on first use and immutable afterwards. Embedders that need their own
/// functions should build a [`FunctionRegistry`] instead, typically starting
/// from [`FunctionRegistry::with_builtins`].
pub fn builtin_registry() -> &'static FunctionRegistry {
    BUILTIN_REGISTRY.get_or_init(FunctionRegistry::with_builtins)
}
