use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        function::{arithmetic, comparison, logic, membership, registry::FunctionRegistry, time, version},
        utils::Arity,
    },
    value::{callable::Function, core::Value},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the name it was called under (so errors name the alias
/// the expression actually used) and a slice of evaluated argument values.
pub type BuiltinFn = fn(&str, &[Value]) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a primary name, optionally followed by `|`-separated aliases,
/// - the accepted argument count,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table walked by [`register_builtins`]),
/// - `BUILTIN_FUNCTIONS` (public list of every builtin name and alias).
macro_rules! builtin_functions {
    (
        $(
            $name:literal $(| $alias:literal)* => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            names: &'static [&'static str],
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { names: &[$name $(, $alias)*], arity: $arity, func: $func },
            )*
        ];
        /// Every name registered by [`register_builtins`], aliases included.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name, $($alias,)*)*
        ];
    };
}

builtin_functions! {
    "and"       | "&"  => { arity: Arity::AtLeast(2), func: logic::and },
    "or"        | "|"  => { arity: Arity::AtLeast(2), func: logic::or },
    "not"       | "!"  => { arity: Arity::Exact(1),   func: logic::not },
    "eq"        | "="  => { arity: Arity::AtLeast(2), func: comparison::eq },
    "ne"        | "!=" => { arity: Arity::AtLeast(2), func: comparison::ne },
    "gt"        | ">"  => { arity: Arity::Exact(2),   func: comparison::gt },
    "lt"        | "<"  => { arity: Arity::Exact(2),   func: comparison::lt },
    "ge"        | ">=" => { arity: Arity::Exact(2),   func: comparison::ge },
    "le"        | "<=" => { arity: Arity::Exact(2),   func: comparison::le },
    "in"               => { arity: Arity::Exact(2),   func: membership::in_list },
    "overlap"          => { arity: Arity::Exact(2),   func: membership::overlap },
    "between"          => { arity: Arity::Exact(3),   func: membership::between },
    "mod"       | "%"  => { arity: Arity::Exact(2),   func: arithmetic::modulo },
    "+"                => { arity: Arity::AtLeast(2), func: arithmetic::add },
    "*"                => { arity: Arity::AtLeast(2), func: arithmetic::multiply },
    "-"                => { arity: Arity::Exact(2),   func: arithmetic::subtract },
    "/"                => { arity: Arity::Exact(2),   func: arithmetic::divide },
    "t_version"        => { arity: Arity::Exact(1),   func: version::t_version },
    "t_time"           => { arity: Arity::Exact(2),   func: time::t_time },
    "td_time"          => { arity: Arity::Exact(1),   func: time::td_time },
    "td_date"          => { arity: Arity::Exact(1),   func: time::td_date },
}

/// A builtin bound to one of its names.
///
/// The arity is verified before the handler runs, so handlers only ever see
/// argument counts their table entry allows.
struct Builtin {
    name:  &'static str,
    arity: Arity,
    func:  BuiltinFn,
}

impl Function for Builtin {
    fn call(&self, args: &[Value]) -> EvalResult<Value> {
        self.arity.check(self.name, args.len())?;
        (self.func)(self.name, args)
    }
}

/// Installs every builtin, under its primary name and all of its aliases.
///
/// Existing entries with the same names are replaced, so calling this on a
/// registry that already holds custom overrides of builtin names resets
/// them.
pub fn register_builtins(registry: &mut FunctionRegistry) {
    for def in BUILTIN_TABLE {
        for &name in def.names {
            registry.force_register(name,
                                    Builtin { name,
                                              arity: def.arity,
                                              func: def.func });
        }
    }
}
