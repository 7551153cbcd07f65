use std::fs;

use chrono::NaiveDate;
use condexpr::{
    Error, EvalResult, Expression, FunctionRegistry, MapVariables, NoVariables, Value,
    VariableLookup, builtin_registry,
    error::{ParseError, RegistryError, RuntimeError},
    eval, eval_bool, eval_bool_with, parse,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn case_files_hold() {
    let vars = fixture_variables();
    let mut count = 0;

    for entry in WalkDir::new("tests/cases").into_iter()
                                            .filter_map(Result::ok)
                                            .filter(|e| e.path().extension().is_some_and(|ext| ext == "cond"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (source, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            let result = eval_bool(&source, &vars);
            let holds = match expected.as_str() {
                "true" => result == Ok(true),
                "false" => result == Ok(false),
                "error" => result.is_err(),
                other => panic!("Case {} in {path:?} has unknown expectation '{other}'", i + 1),
            };
            assert!(holds,
                    "Case {} in {:?} failed:\n{}\nExpected {}, got {:?}",
                    i + 1,
                    path,
                    source,
                    expected,
                    result);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Splits a case file into `(source, expectation)` pairs.
///
/// A case is any run of lines ending in a line of the form `=> expectation`.
/// Lines starting with `;;` are comments.
fn extract_cases(content: &str) -> Vec<(String, String)> {
    let mut cases = Vec::new();
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with(";;") {
            continue;
        }
        if let Some(expected) = trimmed.strip_prefix("=>") {
            cases.push((buf.clone(), expected.trim().to_string()));
            buf.clear();
            continue;
        }
        buf.push_str(line);
        buf.push('\n');
    }

    cases
}

fn fixture_variables() -> MapVariables {
    MapVariables::new().with("gender", "female")
                       .with("age", 18)
                       .with("city", "Berlin")
                       .with("app_version", "2.9.1")
                       .with("signup", "2018-02-01")
                       .with("tags", vec![Value::from("beta"), Value::from("vip")])
                       .with("verified", true)
}

fn assert_true(src: &str) {
    match eval_bool(src, &fixture_variables()) {
        Ok(true) => {},
        other => panic!("Expected '{src}' to hold, got {other:?}"),
    }
}

fn assert_false(src: &str) {
    match eval_bool(src, &fixture_variables()) {
        Ok(false) => {},
        other => panic!("Expected '{src}' not to hold, got {other:?}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match eval(src, &fixture_variables()) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected '{src}' to fail at runtime, got {other:?}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match parse(src) {
        Err(e) => e,
        Ok(expression) => panic!("Expected '{src}' to fail to parse, got {expression}"),
    }
}

/// Registry with an `age` function measuring whole years from a date string
/// to a fixed reference day.
fn registry_with_age() -> FunctionRegistry {
    let mut registry = FunctionRegistry::with_builtins();
    registry.register("age", |args: &[Value]| -> EvalResult<Value> {
                let [date] = args else {
                    return Err(RuntimeError::ArityMismatch { function: "age".to_string(),
                                                             expected: "exactly 1".to_string(),
                                                             found:    args.len(), });
                };
                let born = NaiveDate::parse_from_str(date.as_text("age")?, "%Y-%m-%d").map_err(|e| {
                               RuntimeError::MalformedLiteral { function: "age".to_string(),
                                                                details:  e.to_string(), }
                           })?;
                let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
                Ok(Value::from(i64::from(today.years_since(born).unwrap_or(0))))
            })
            .unwrap();
    registry
}

#[test]
fn membership_in_literal_list() {
    assert_true(r#"(in gender ("female" "male"))"#);

    let vars = MapVariables::new().with("gender", "other");
    assert_eq!(eval_bool(r#"(in gender ("female" "male"))"#, &vars), Ok(false));
}

#[test]
fn modulo_within_range() {
    assert_true("(between (mod age 5) 1 3)");

    let vars = MapVariables::new().with("age", 20);
    assert_eq!(eval_bool("(between (mod age 5) 1 3)", &vars), Ok(false));
}

#[test]
fn overlapping_lists() {
    assert_true("(overlap (1 2 3) (4 3 2))");
    assert_false("(overlap (1 2 3) (4 5 6))");
    assert_true(r#"(overlap tags ("vip" "staff"))"#);
    // Nested lists are elements like any other and match by value.
    assert_true("(overlap ((1 2) 3) ((1 2)))");
    assert_false("(overlap ((1 2) 3) ((2 1) 4))");
}

#[test]
fn custom_function_composes_with_builtins() {
    let registry = registry_with_age();

    assert_eq!(eval_bool_with(r#"(not (between (age "2018-02-01") 18 20))"#, &registry, &NoVariables),
               Ok(true));
    assert_eq!(eval_bool_with(r#"(between (age "2004-05-31") 18 20)"#, &registry, &NoVariables),
               Ok(true));
    assert_eq!(eval_bool_with(r#"(between (age "2004-06-02") 20 25)"#, &registry, &NoVariables),
               Ok(false));
}

#[test]
fn missing_outer_parentheses() {
    assert_eq!(parse_error("eq (mod age 5) 3.0"), ParseError::LeftoverText { count: 3 });
    assert_eq!(eval("eq (mod age 5) 3.0", &NoVariables),
               Err(Error::Parse(ParseError::LeftoverText { count: 3 })));
}

#[test]
fn structural_parse_errors() {
    assert_eq!(parse_error(""), ParseError::NilInput);
    assert_eq!(parse_error("  \n\t "), ParseError::NilInput);
    assert_eq!(parse_error("()"), ParseError::NilInput);
    assert_eq!(parse_error("(eq 1 2"), ParseError::UnmatchedParenthesis { line: 1 });
    assert_eq!(parse_error("(eq 1 2))"), ParseError::UnmatchedParenthesis { line: 1 });
    assert_eq!(parse_error("(and\n  (eq 1 1)\n  (eq 2 2)"),
               ParseError::UnmatchedParenthesis { line: 1 });
    assert_eq!(parse_error("(and\n  (eq 1 1))\n  )"),
               ParseError::UnmatchedParenthesis { line: 3 });
}

#[test]
fn unterminated_strings_are_errors() {
    assert_eq!(parse_error(r#"(eq "abc 1)"#),
               ParseError::UnterminatedString { delimiter: '"', line: 1 });
    assert_eq!(parse_error("(and\n  (eq x 1)\n  (eq y 'oops))"),
               ParseError::UnterminatedString { delimiter: '\'', line: 3 });
    assert_eq!(parse_error(r"(eq `a\` 1)"),
               ParseError::UnterminatedString { delimiter: '`', line: 1 });
}

#[test]
fn only_quotes_fail_to_lex() {
    let vars = MapVariables::new().with("§", 1).with("#tag", "x");
    assert_eq!(eval_bool(r#"(and (eq § 1) (eq #tag "x"))"#, &vars), Ok(true));
    assert_eq!(parse_error("(eq § 'x)"), ParseError::UnterminatedString { delimiter: '\'', line: 1 });

    let unexpected = ParseError::UnexpectedCharacter { character: '§', line: 2 };
    assert_eq!(unexpected.to_string(), "Error on line 2: Unexpected character '§'.");
}

#[test]
fn backslash_runs_before_delimiters() {
    // Even run: the string ends right after the backslashes.
    assert_eq!(parse_error(r"'str\\'ing'"), ParseError::LeftoverText { count: 2 });
    let rest = MapVariables::new().with("ing'", 1);
    assert_eq!(eval(r"('str\\'ing')", &rest),
               Ok(Value::List(vec![Value::from(r"str\\"), Value::Number(1.0)])));

    // Odd run: the delimiter is escaped and only one backslash is dropped.
    assert_eq!(eval(r"'str\\\'ing'", &NoVariables), Ok(Value::from(r"str\\'ing")));

    let vars = MapVariables::new().with("dir", r"C:\\");
    assert_eq!(eval_bool(r#"(eq dir "C:\\")"#, &vars), Ok(true));
}

#[test]
fn quoted_strings_and_escapes() {
    assert_true(r#"(eq "say \"hi\"" 'say "hi"' `say "hi"`)"#);
    assert_true(r"(eq 'it\'s' `it's`)");
    assert_true(r#"(eq "(not a form)" '(not a form)')"#);

    let vars = MapVariables::new().with("path", r"a\b");
    assert_eq!(eval_bool(r"(eq path 'a\b')", &vars), Ok(true));
    assert_eq!(eval_bool(r#"(eq path "a\\b")"#, &vars), Ok(false));
}

#[test]
fn quoted_numbers_stay_text() {
    assert_false(r#"(eq "18" 18)"#);
    assert_true(r#"(eq "18" '18')"#);
    assert_eq!(eval("(+ .5 -1.5 1e1)", &NoVariables), Ok(Value::Number(9.0)));
}

#[test]
fn equality_is_structural() {
    assert_true("(eq 1 1.0 1e0)");
    assert_true("(eq (1 2 3) (1.0 2.0 3.0))");
    assert_false("(eq (1 2) (1 2 3))");
    assert_false(r#"(eq 1 "1")"#);
    assert_false("(eq (1 2) 1)");
    assert_true("(eq () ())");
    assert_true("(eq ((1 2) (3)) ((1 2) (3)))");
}

#[test]
fn inequality_is_pairwise() {
    assert_true("(ne 1 2 3)");
    assert_false("(ne 1 2 1)");
    assert_true(r#"(ne 1 "1")"#);
    assert_true("(ne (1 2) (3 4))");
    assert_false("(ne (1 2) (1 4))");
    assert_true("(ne (1 2) (1 2 3))");
}

#[test]
fn membership_semantics() {
    assert_true("(in 1 (1.0 2))");
    assert_false(r#"(in "1" (1 2))"#);
    assert_true(r#"(in city ("Paris" "Berlin"))"#);

    assert!(matches!(runtime_error("(in (1) ((1) 2))"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("(in 1 2)"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("(overlap 1 (1 2))"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn ordering() {
    assert_true(r#"(gt "b" "a")"#);
    assert_true("(ge 2 2)");
    assert_false("(le 3 2)");
    assert_true("(le 2 3)");
    assert_true("(lt -1 0)");
    assert_true("(between 5 1 10)");
    assert_true("(between 1 1 1)");

    let err = runtime_error(r#"(lt 1 "2")"#);
    assert_eq!(err,
               RuntimeError::TypeMismatch { function: "lt".to_string(),
                                            details:  "cannot order number against text".to_string(), });
}

#[test]
fn nan_is_unordered() {
    let vars = MapVariables::new().with("nan", f64::NAN);
    for src in ["(gt nan 1)",
                "(lt nan 1)",
                "(ge nan nan)",
                "(le nan nan)",
                "(gt 1 nan)",
                "(eq nan nan)",
                "(between nan 0 10)",
                "(between 5 0 nan)",
                "(between 5 nan 10)",
                "(gt (- (* 1e308 10) (* 1e308 10)) 1)"]
    {
        assert_eq!(eval_bool(src, &vars), Ok(false), "'{src}' should not hold");
    }

    assert_eq!(eval_bool("(ne nan nan)", &vars), Ok(true));
}

#[test]
fn between_short_circuits_on_lower_bound() {
    assert_false(r#"(between 0 1 "ten")"#);
    assert!(matches!(runtime_error(r#"(between 5 1 "ten")"#), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn arithmetic() {
    assert_true("(eq (+ 1 2 3) 6)");
    assert_true("(eq (* 2 3 4) 24)");
    assert_true("(eq (- 10 4) 6)");
    assert_true("(eq (/ 9 2) 4.5)");
    assert_true("(eq (mod -7 3) -1)");
    assert_true("(eq (mod 18.9 5.2) 3)");

    assert_eq!(runtime_error("(/ 1 0)"), RuntimeError::DivisionByZero { function: "/".to_string() });
    assert_eq!(runtime_error("(mod 5 0)"),
               RuntimeError::DivisionByZero { function: "mod".to_string() });
    assert_eq!(runtime_error("(% 5 0.4)"),
               RuntimeError::DivisionByZero { function: "%".to_string() });
    assert!(matches!(runtime_error(r#"(+ 1 "2")"#), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn arity_is_checked() {
    assert_eq!(runtime_error("(- 1 2 3)"),
               RuntimeError::ArityMismatch { function: "-".to_string(),
                                             expected: "exactly 2".to_string(),
                                             found:    3, });
    assert_eq!(runtime_error("(and (eq 1 1))"),
               RuntimeError::ArityMismatch { function: "and".to_string(),
                                             expected: "at least 2".to_string(),
                                             found:    1, });
    assert!(matches!(runtime_error("(between 1 2)"), RuntimeError::ArityMismatch { .. }));
    assert!(matches!(runtime_error("(t_time '%Y')"), RuntimeError::ArityMismatch { .. }));
}

#[test]
fn logic_requires_booleans() {
    assert_true("(and verified (eq 1 1) (not (eq 1 2)))");
    assert_true("(or (eq 1 2) verified)");
    assert_false("(not verified)");
    assert!(matches!(runtime_error("(and 1 verified)"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("(not ())"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn operator_aliases() {
    assert_true("(& (= 1 1) (! (!= 1 1)))");
    assert_true("(| (> 1 2) (<= 1 1))");
    assert_true("(& (>= 2 1) (< 1 2))");
    assert_true("(= (% 18 5) 3)");
}

#[test]
fn version_ordering() {
    assert_true(r#"(gt (t_version "2.9.1") (t_version "2.8.3"))"#);
    assert_true(r#"(lt (t_version "1.2") (t_version "1.10"))"#);
    assert_true(r#"(gt (t_version "1.0.0.2") (t_version "1.0.0.1"))"#);
    assert_true(r#"(eq (t_version "1.0.0.0.2") (t_version "1.0.0.0.1"))"#);
    assert_true(r#"(between (t_version "2.1.1") (t_version "2.1.0") (t_version "2.2.0"))"#);
    assert_true(r#"(ge (t_version app_version) (t_version "2.9"))"#);
    assert_true(r#"(eq (t_version ("1.0" "2.0")) (t_version ("1.0" "2.0")))"#);

    assert_eq!(eval(r#"(t_version ("1" "2"))"#, &NoVariables),
               Ok(Value::List(vec![Value::Number(1e20), Value::Number(2e20)])));
}

#[test]
fn malformed_versions() {
    for src in [r#"(t_version "1.10000")"#,
                r#"(t_version "1.2.3.4.5.6.7.8.9.10.11")"#,
                r#"(t_version "1.x")"#,
                r#"(t_version "1..2")"#,
                r#"(t_version "-1.0")"#,
                r#"(t_version ("1.0" "1.a"))"#]
    {
        assert!(matches!(runtime_error(src), RuntimeError::MalformedLiteral { .. }),
                "'{src}' should be malformed");
    }

    assert!(matches!(runtime_error("(t_version 1)"), RuntimeError::TypeMismatch { .. }));
    assert!(eval(r#"(t_version "1.2.3.4.5.6.7.8.9.10")"#, &NoVariables).is_ok());
}

#[test]
fn timestamps() {
    assert_true(r#"(lt (td_date "2018-02-01") (td_time "2018-02-01 00:00:01"))"#);
    assert_true(r#"(eq (td_date "2018-02-01") (t_time "%d.%m.%Y" "01.02.2018"))"#);
    assert_true(r#"(eq (td_date signup) (td_time "2018-02-01 00:00:00"))"#);
    assert_true(r#"(gt (t_time "%Y-%m-%d %H:%M %z" "2018-02-01 09:30 +0200") (td_time "2018-02-01 07:00:00"))"#);

    let dates = eval(r#"(td_date ("2018-02-01" "2019-03-04"))"#, &NoVariables).unwrap();
    assert_eq!(dates.as_list("test").unwrap().len(), 2);
    assert_eq!(dates.to_string(), "[2018-02-01 00:00:00, 2019-03-04 00:00:00]");

    assert!(matches!(runtime_error(r#"(td_date "2018-02-30")"#),
                     RuntimeError::MalformedLiteral { .. }));
    assert!(matches!(runtime_error(r#"(td_time "2018-02-01")"#),
                     RuntimeError::MalformedLiteral { .. }));
    assert!(matches!(runtime_error(r#"(lt (td_date "2018-02-01") 5)"#),
                     RuntimeError::TypeMismatch { .. }));
}

#[test]
fn unresolved_names() {
    assert_eq!(eval("(eq height 1)", &NoVariables),
               Err(Error::Runtime(RuntimeError::NameNotFound { name: "height".to_string(),
                                                               line: 1, })));
    assert_eq!(eval("(and\n  (eq age 1)\n  (eq height 1))", &MapVariables::new().with("age", 1)),
               Err(Error::Runtime(RuntimeError::NameNotFound { name: "height".to_string(),
                                                               line: 3, })));
    assert_eq!(eval(r#"(frobnicate "x")"#, &NoVariables),
               Err(Error::Runtime(RuntimeError::NameNotFound { name: "frobnicate".to_string(),
                                                               line: 1, })));
}

#[test]
fn functions_shadow_variables() {
    let vars = MapVariables::new().with("in", 5).with("x", 1);
    assert_eq!(eval_bool("(in x (1 2))", &vars), Ok(true));
}

#[test]
fn forms_without_function_heads_are_lists() {
    assert_eq!(eval("(1 (2 3) ())", &NoVariables),
               Ok(Value::List(vec![Value::Number(1.0),
                                   Value::List(vec![Value::Number(2.0), Value::Number(3.0)]),
                                   Value::List(Vec::new())])));
    assert_eq!(eval("age", &fixture_variables()), Ok(Value::Number(18.0)));
    assert_eq!(eval("'plain'", &NoVariables), Ok(Value::from("plain")));

    let list = eval("(1 and)", &NoVariables).unwrap();
    let items = list.as_list("test").unwrap();
    assert_eq!(items[0], Value::Number(1.0));
    assert!(items[1].is_callable());
}

#[test]
fn callables_compare_by_identity() {
    assert_true("(eq and and)");
    assert_false("(eq and or)");
    assert_false("(eq and &)");
    assert_true("(in eq (1 eq))");
}

#[test]
fn boolean_entry_point_rejects_other_results() {
    assert_eq!(eval_bool("(+ 1 2)", &NoVariables),
               Err(Error::Runtime(RuntimeError::InvalidResultType { found: "number" })));
    assert_eq!(eval_bool("(1 2)", &NoVariables),
               Err(Error::Runtime(RuntimeError::InvalidResultType { found: "list" })));
    assert_eq!(eval("(+ 1 2)", &NoVariables), Ok(Value::Number(3.0)));
}

#[test]
fn closures_as_variable_lookup() {
    let lookup = |name: &str| match name {
        "score" => Some(Value::Number(72.0)),
        _ => None,
    };

    assert_eq!(eval_bool("(between score 50 80)", &lookup), Ok(true));
    assert_eq!(lookup.get("other"), None);

    let vars: MapVariables = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(eval_bool("(lt a b)", &vars), Ok(true));
}

#[test]
fn registry_lifecycle() {
    let mut registry = FunctionRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(eval_bool_with("(eq 1 1)", &registry, &NoVariables),
               Err(Error::Runtime(RuntimeError::NameNotFound { name: "eq".to_string(),
                                                               line: 1, })));

    registry.register("always", |_: &[Value]| -> EvalResult<Value> { Ok(Value::Boolean(true)) })
            .unwrap();
    assert_eq!(registry.register("always", |_: &[Value]| -> EvalResult<Value> {
                                     Ok(Value::Boolean(false))
                                 }),
               Err(RegistryError::AlreadyExists { name: "always".to_string() }));
    assert_eq!(eval_bool_with("(always)", &registry, &NoVariables), Ok(true));

    registry.force_register("always", |_: &[Value]| -> EvalResult<Value> {
                                Ok(Value::Boolean(false))
                            });
    assert_eq!(eval_bool_with("(always)", &registry, &NoVariables), Ok(false));
    assert_eq!(registry.len(), 1);
    assert!(registry.contains("always"));
}

#[test]
fn builtin_registry_is_complete() {
    let registry = builtin_registry();
    let names = registry.names();

    for name in condexpr::interpreter::evaluator::function::core::BUILTIN_FUNCTIONS {
        assert!(names.contains(name), "missing builtin '{name}'");
    }
    assert_eq!(registry.len(),
               condexpr::interpreter::evaluator::function::core::BUILTIN_FUNCTIONS.len());
    assert!(!registry.contains("age"));
    assert!(registry_with_age().contains("age"));
}

#[test]
fn builtins_can_be_overridden() {
    let mut registry = FunctionRegistry::with_builtins();
    registry.force_register("eq", |_: &[Value]| -> EvalResult<Value> { Ok(Value::Boolean(false)) });

    assert_eq!(eval_bool_with("(eq 1 1)", &registry, &NoVariables), Ok(false));
    assert_eq!(eval_bool_with("(= 1 1)", &registry, &NoVariables), Ok(true));
}

#[test]
fn expressions_are_reusable_across_threads() {
    let expression: Expression = "(between (mod age 5) 1 3)".parse().unwrap();
    let registry = FunctionRegistry::with_builtins();

    let results = std::thread::scope(|scope| {
        let handles = (15..25).map(|age| {
                                  let (expression, registry) = (&expression, &registry);
                                  scope.spawn(move || {
                                           let vars = MapVariables::new().with("age", age);
                                           expression.evaluate_bool(registry, &vars).unwrap()
                                       })
                              })
                              .collect::<Vec<_>>();
        handles.into_iter().map(|h| h.join().unwrap()).collect::<Vec<_>>()
    });

    assert_eq!(results,
               vec![false, true, true, true, false, false, true, true, true, false]);
}

#[test]
fn expressions_print_back_as_source() {
    let expression = parse("(in  gender\n ('female' `male`))").unwrap();
    assert_eq!(expression.to_string(), r#"(in gender ("female" "male"))"#);

    let quoted = parse(r#"(eq 'say "hi"' x)"#).unwrap();
    assert_eq!(quoted.to_string(), r#"(eq 'say "hi"' x)"#);
    assert_eq!(parse(&quoted.to_string()).unwrap(), quoted);

    let mixed = parse(r#"(eq "a'b`c\"d" x)"#).unwrap();
    assert_eq!(parse(&mixed.to_string()).unwrap(), mixed);
}
