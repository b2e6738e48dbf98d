//! Unit tests for the type checker and symbol table.

use proptest::prelude::*;
use rstest::rstest;

use super::{
    symbol_table::SymbolTable,
    type_checker::{type_check, AssignmentRule, ErrorPolicy, TypeCheckerOptions},
    typed_ast::{TypedExprKind, TypedStmt},
};
use crate::{ast::types::Type, errors::errors::Error, parser::parser::parse};

fn check(source: &str) -> Vec<Error> {
    check_with(source, TypeCheckerOptions::default())
}

fn check_with(source: &str, options: TypeCheckerOptions) -> Vec<Error> {
    let program = parse(source).expect("program should parse");
    let (_, errors) = type_check(&program, options);
    errors
}

fn error_names(source: &str) -> Vec<String> {
    check(source)
        .iter()
        .map(|error| error.get_error_name().to_string())
        .collect()
}

fn widening() -> TypeCheckerOptions {
    TypeCheckerOptions {
        assignment_rule: AssignmentRule::Widening,
        ..Default::default()
    }
}

#[test]
fn test_symbol_table_is_seeded() {
    let table = SymbolTable::new();

    assert_eq!(table.len(), 3);
    assert_eq!(table.lookup("integer"), Some(&Type::Int));
    assert_eq!(table.lookup("float"), Some(&Type::Float));
    assert_eq!(table.lookup("bool"), Some(&Type::Bool));
    assert_eq!(table.lookup("x"), None);
    assert!(SymbolTable::empty().is_empty());
}

#[test]
fn test_symbol_table_first_match_wins() {
    let mut table = SymbolTable::empty();
    table.bind("x", Type::Int);
    table.bind("x", Type::Float);

    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup("x"), Some(&Type::Int));
}

#[test]
fn test_array_program_checks() {
    let source = "var a integer[3] = {1,2,3}; if a[0] < a[1] then a[0] = a[1]; else a[1] = a[0];";
    assert!(check(source).is_empty());
}

#[test]
fn test_non_uniform_initializer() {
    assert_eq!(error_names("var a integer[3] = {1, true, 3};"), vec!["NonUniformInitializer"]);
}

#[test]
fn test_declaration_requires_equal_types() {
    assert_eq!(error_names("var y integer = 3.5;"), vec!["VariableInitMismatch"]);
    assert_eq!(error_names("var y float = 3;"), vec!["VariableInitMismatch"]);
    assert!(check("var y float = 3.5;").is_empty());
}

#[test]
fn test_initializer_length_must_match_declared_type() {
    assert_eq!(error_names("var a integer[2] = {1, 2, 3};"), vec!["VariableInitMismatch"]);
}

#[test]
fn test_let_adopts_initializer_type() {
    let program = parse("let x = 1.5; let y = {{1, 2}, {3, 4}};").unwrap();
    let (type_checker, errors) = type_check(&program, TypeCheckerOptions::default());

    assert!(errors.is_empty());
    assert_eq!(type_checker.symbol_table.lookup("x"), Some(&Type::Float));
    assert_eq!(
        type_checker.symbol_table.lookup("y"),
        Some(&Type::array_of(Type::array_of(Type::Int, 2), 2))
    );
}

#[test]
fn test_mismatched_declaration_still_binds() {
    // `a` stays `integer` after the bad initializer, so the later use is fine.
    let errors = check("var a integer = true; var b integer = a + 1;");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "VariableInitMismatch");
}

#[rstest]
#[case("var a integer; a = 2;", true)]
#[case("var a float; a = 2;", false)]
#[case("var a float; var b integer; a = b as float;", true)]
#[case("var a integer[2]; a[0] = 1;", true)]
#[case("var a integer[2]; a[0] = 1.0;", false)]
fn test_assignment_rule_exact(#[case] source: &str, #[case] ok: bool) {
    let errors = check(source);
    assert_eq!(errors.is_empty(), ok, "{:?}", errors);
    if !ok {
        assert_eq!(errors[0].get_error_name(), "InvalidAssignment");
    }
}

#[test]
fn test_widening_rule_applies_to_declarations_and_assignments() {
    assert!(check_with("var a float = 3; a = true;", widening()).is_empty());
    assert_eq!(
        check_with("var a integer = 3.5;", widening())[0].get_error_name(),
        "VariableInitMismatch"
    );
    assert_eq!(
        check_with("var a integer; a = 3.5;", widening())[0].get_error_name(),
        "InvalidAssignment"
    );
}

#[test]
fn test_binary_result_types() {
    let program = parse("var i integer; var f float; i + f; i * i; f < i;").unwrap();
    let (type_checker, errors) = type_check(&program, TypeCheckerOptions::default());

    assert!(errors.is_empty());
    let types: Vec<Option<&Type>> = type_checker.typed_ast.iter().map(TypedStmt::get_type).collect();
    assert_eq!(
        types,
        vec![
            Some(&Type::Int),
            Some(&Type::Float),
            Some(&Type::Float),
            Some(&Type::Int),
            Some(&Type::Bool),
        ]
    );
}

#[rstest]
#[case("true + 1;")]
#[case("1 < false;")]
#[case("-true;")]
#[case("var a integer[2]; a * 2;")]
fn test_expected_numeric(#[case] source: &str) {
    assert_eq!(error_names(source), vec!["ExpectedNumeric"]);
}

#[rstest]
#[case("if 1 then 2;")]
#[case("if 1.0 < 2.0 + 1 then 2; else if 3 then 4;")]
fn test_expected_boolean(#[case] source: &str) {
    assert_eq!(error_names(source), vec!["ExpectedBoolean"]);
}

#[rstest]
#[case("1 as float;", true)]
#[case("true as integer;", true)]
#[case("true as float;", true)]
#[case("1.5 as integer;", false)]
#[case("1 as integer;", false)]
#[case("1 as bool;", false)]
#[case("var a integer[2]; a as float[2];", false)]
fn test_casts(#[case] source: &str, #[case] ok: bool) {
    let errors = check(source);
    assert_eq!(errors.is_empty(), ok, "{:?}", errors);
    if !ok {
        assert_eq!(errors[0].get_error_name(), "InvalidCast");
    }
}

#[test]
fn test_cast_result_type() {
    let program = parse("-(1 as float);").unwrap();
    let (type_checker, _) = type_check(&program, TypeCheckerOptions::default());

    assert_eq!(type_checker.typed_ast.body[0].get_type(), Some(&Type::Float));
}

#[test]
fn test_subscripts() {
    assert!(check("var m float[2][3]; var x float = m[1][2];").is_empty());
    assert_eq!(error_names("var x integer; x[0];"), vec!["ExpectedArray"]);
    assert_eq!(error_names("var m float[2][3]; m[0][1][2];"), vec!["ExpectedArray"]);
    assert_eq!(error_names("var a integer[2]; a[1.0];"), vec!["InvalidIndex"]);
    assert_eq!(error_names("var a integer[2]; a[true];"), vec!["InvalidIndex"]);
}

#[test]
fn test_partial_subscript_yields_row_type() {
    assert!(check("var m integer[2][3]; var row integer[3] = m[0];").is_empty());
}

#[test]
fn test_undeclared_variable_yields_no_type() {
    let program = parse("x;").unwrap();
    let (type_checker, errors) = type_check(&program, TypeCheckerOptions::default());

    assert!(errors.is_empty());
    match &type_checker.typed_ast.body[0] {
        TypedStmt::Expression(stmt) => {
            assert!(matches!(stmt.expression.kind, TypedExprKind::Symbol { .. }));
            assert_eq!(stmt.expression.get_type(), None);
        }
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

#[test]
fn test_undeclared_variable_fails_its_consumer() {
    let errors = check("x + 1;");
    assert_eq!(errors[0].get_error_name(), "ExpectedNumeric");
    assert!(errors[0].to_string().contains("<unknown>"));

    assert_eq!(error_names("if x then 1;"), vec!["ExpectedBoolean"]);
    assert_eq!(error_names("var a integer = x;"), vec!["VariableInitMismatch"]);
    assert_eq!(error_names("x = 1;"), vec!["InvalidAssignment"]);
}

#[test]
fn test_let_with_untyped_initializer_binds_nothing() {
    let program = parse("let y = x;").unwrap();
    let (type_checker, errors) = type_check(&program, TypeCheckerOptions::default());

    assert!(errors.is_empty());
    assert_eq!(type_checker.symbol_table.lookup("y"), None);
}

#[test]
fn test_redeclaration_keeps_first_binding() {
    // The second `a` is appended but never found.
    assert_eq!(
        error_names("var a integer; var a float; a = 1.5;"),
        vec!["InvalidAssignment"]
    );
}

#[test]
fn test_collect_all_reports_every_item() {
    let errors = check("var a integer = true;\n1 + false;\nif 2 then 3;");
    let lines: Vec<u32> = errors.iter().map(Error::get_line).collect();

    assert_eq!(errors.len(), 3);
    assert_eq!(lines, vec![1, 2, 3]);
    assert!(errors.iter().all(Error::is_type_error));
}

#[test]
fn test_fail_fast_stops_at_first_error() {
    let options = TypeCheckerOptions {
        error_policy: ErrorPolicy::FailFast,
        ..Default::default()
    };
    let program = parse("let a = 1; a + true; if 2 then 3; let b = 2;").unwrap();
    let (type_checker, errors) = type_check(&program, options);

    assert_eq!(errors.len(), 1);
    assert_eq!(type_checker.typed_ast.len(), 1);
}

#[test]
fn test_failed_items_are_left_out_of_typed_ast() {
    let program = parse("let a = 1; a + true; let b = a;").unwrap();
    let (type_checker, errors) = type_check(&program, TypeCheckerOptions::default());

    assert_eq!(errors.len(), 1);
    assert_eq!(type_checker.typed_ast.len(), 2);
}

#[test]
fn test_if_branches_are_checked() {
    assert_eq!(error_names("if true then 1 + true;"), vec!["ExpectedNumeric"]);
    assert_eq!(
        error_names("if true then 1; else 1 as integer;"),
        vec!["InvalidCast"]
    );
}

#[test]
fn test_type_error_display() {
    let errors = check("var a integer = 2.5;");

    assert_eq!(
        errors[0].to_string(),
        "typechecker: variable \"a\" declared as `integer` but initialized with `float` (line 1)"
    );
}

proptest! {
    #[test]
    fn prop_checking_is_idempotent(
        declared in prop_oneof![Just("integer"), Just("float"), Just("bool")],
        value in prop_oneof![Just("1"), Just("2.5"), Just("true"), Just("x"), Just("1 as float")],
        operand in prop_oneof![Just("1"), Just("0.5"), Just("false"), Just("v")],
    ) {
        let source = format!("var v {} = {}; v + {}; if v < {} then v = {};", declared, value, operand, operand, value);
        let program = parse(&source).unwrap();

        let (first, first_errors) = type_check(&program, TypeCheckerOptions::default());
        let (second, second_errors) = type_check(&program, TypeCheckerOptions::default());

        prop_assert_eq!(first_errors, second_errors);
        prop_assert_eq!(first.typed_ast, second.typed_ast);
    }
}
