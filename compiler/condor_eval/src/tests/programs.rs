use super::{output_of, run_source, with_program};
use crate::{EvalErrorKind, RunnerConfig, MIN_CONTEXT_CAPACITY};
use condor_diagnostic::ErrorCode;
use condor_ir::ScopeId;
use pretty_assertions::assert_eq;

#[test]
fn call_echoes_its_result() {
    assert_eq!(
        output_of("func add(int a, int b){ return a + b; } add(3,4);"),
        ">> 7\n"
    );
}

#[test]
fn integer_division_truncates() {
    assert_eq!(
        output_of("int a = 7; int b = 2; a / b;"),
        ">> 7\n>> 2\n>> 3\n"
    );
}

#[test]
fn reassignment() {
    assert_eq!(output_of("var x = 5; x = x + 1;"), ">> 5\n>> 6\n");
}

#[test]
fn result_takes_left_operand_type() {
    assert_eq!(
        output_of("int i = 7; double x = 2; i / x;"),
        ">> 7\n>> 2.000000\n>> 3\n"
    );
}

#[test]
fn comparison_yields_one_or_zero() {
    assert_eq!(output_of("int a = 3; a < 5;"), ">> 3\n>> 1\n");
    assert_eq!(output_of("int a = 3; a == 4;"), ">> 3\n>> 0\n");
}

#[test]
fn declared_types_convert_initializers() {
    assert_eq!(output_of("double d = 7;"), ">> 7.000000\n");
    assert_eq!(output_of("float f = 1.5;"), ">> 1.500000\n");
    assert_eq!(output_of("long l = 3;"), ">> 3\n");
    assert_eq!(output_of("bool t = true;"), ">> 1\n");
    assert_eq!(output_of("char c = 'a';"), ">> 97\n");
    assert_eq!(output_of("string s = \"hi\";"), ">> hi\n");
}

#[test]
fn string_escapes_reach_the_echo() {
    assert_eq!(output_of(r#"string s = "a\"b";"#), ">> a\"b\n");
    assert_eq!(output_of(r#"string s = "x\ty";"#), ">> x\ty\n");
}

#[test]
fn untyped_declaration_echoes_nothing() {
    assert_eq!(output_of("int u;"), "");
}

#[test]
fn variable_arguments_are_copied() {
    assert_eq!(
        output_of(
            "int g = 2; func add(int a, int b){ return a + b; } add(g, 4); int h = g;"
        ),
        ">> 2\n>> 6\n>> 2\n"
    );
}

#[test]
fn returning_a_global_copies_it() {
    assert_eq!(
        output_of("int g = 5; func get() { return g; } get(); int h = g;"),
        ">> 5\n>> 5\n>> 5\n"
    );
}

#[test]
fn repeated_calls_do_not_reuse_stale_memos() {
    assert_eq!(
        output_of(
            "func id(int n) { return n; } func twice(int n) { return id(n) + n; } twice(3); twice(4);"
        ),
        ">> 6\n>> 8\n"
    );
}

#[test]
fn call_as_initializer() {
    assert_eq!(output_of("func f() { return 3; } int x = f();"), ">> 3\n");
}

#[test]
fn surplus_and_missing_arguments() {
    assert_eq!(output_of("func f(int a) { return a; } f(1, 2);"), ">> 1\n");
    assert_eq!(output_of("func f(int a, int b) { return b; } f(1);"), "");
}

#[test]
fn bare_return_yields_nothing() {
    assert_eq!(output_of("func f() { return; } f();"), "");
}

#[test]
fn top_level_return_stops_the_program() {
    assert_eq!(output_of("int a = 1; return a; int b = 2;"), ">> 1\n");
}

#[test]
fn unbounded_recursion_exhausts_the_pool() {
    let (output, result) = run_source("func f(int n) { return f(n); } f(1);");
    let err = result.unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::ContextPoolExhausted { .. }));
    assert_eq!(err.code(), ErrorCode::E4002);
    assert!(err.span.is_some());
    assert_eq!(output, "");
}

#[test]
fn recursion_limit_follows_configured_capacity() {
    let config = RunnerConfig {
        context_capacity: Some(64),
    };
    with_program("func f(int n) { return f(n); } f(1);", config, |runner, _| {
        let err = runner.run_program().unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::ContextPoolExhausted { capacity: 64 });
    });
}

#[test]
fn string_arithmetic_is_unimplemented() {
    let (output, result) = run_source("string s = \"a\"; s + \"b\";");
    assert_eq!(output, ">> a\n");
    assert_eq!(result.unwrap_err().code(), ErrorCode::E3001);
}

#[test]
fn char_comparison_is_unimplemented() {
    let (output, result) = run_source("char c = 'a'; c == 'b';");
    assert_eq!(output, ">> 97\n");
    assert_eq!(result.unwrap_err().code(), ErrorCode::E3002);
}

#[test]
fn untyped_operand_is_a_runtime_error() {
    let (_, result) = run_source("int u; u + 1;");
    let err = result.unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::OperandHasNoValue);
    assert_eq!(err.code(), ErrorCode::E5001);
    assert!(err.span.is_some());
}

#[test]
fn no_body_contexts_survive_a_call() {
    let source = "int g = 2; func add(int a, int b){ return a + b; } add(g, 4); int h = add(1, g);";
    with_program(source, RunnerConfig::default(), |runner, arena| {
        runner.run_program().unwrap();
        let pool = runner.pool();
        for (node, _) in pool.live_bindings() {
            assert_eq!(arena.node(node).scope, ScopeId::GLOBAL, "{node} still bound");
        }
        // Every occupied slot is a binding: no transient leaked.
        assert_eq!(pool.occupied(), pool.live_bindings().count());
    });
}

#[test]
fn local_declarations_are_released_on_return() {
    let source = "func f(int a){ int x = a * 2; int y = x + 1; return y; } f(3); f(3);";
    with_program(source, RunnerConfig::default(), |runner, _| {
        runner.run_program().unwrap();
        assert_eq!(runner.print_handler().get_output(), ">> 7\n>> 7\n");
        assert_eq!(runner.pool().occupied(), 0);
        assert_eq!(runner.pool().live_bindings().count(), 0);
    });
}

#[test]
fn parameter_naming_an_outer_variable_is_restored() {
    let source = "int x = 1; func f(x) { return x; } f(7); x + 0;";
    with_program(source, RunnerConfig::default(), |runner, _| {
        runner.run_program().unwrap();
        assert_eq!(runner.print_handler().get_output(), ">> 1\n>> 7\n>> 1\n");
        let pool = runner.pool();
        assert_eq!(pool.occupied(), pool.live_bindings().count());
    });
}

#[test]
fn for_header_assignment_replaces_the_initializer() {
    assert_eq!(
        output_of("int i = 5; for (i = 0; i < 3; i++) {} i + 0;"),
        ">> 0\n>> 0\n"
    );
    assert_eq!(
        output_of("int i = 5; for (i; i < 3; i++) {} i + 0;"),
        ">> 5\n>> 5\n"
    );
}

#[test]
fn default_pool_has_a_floor() {
    with_program("int a = 1;", RunnerConfig::default(), |runner, arena| {
        assert_eq!(runner.pool().capacity(), MIN_CONTEXT_CAPACITY);
        assert!(arena.node_capacity() < MIN_CONTEXT_CAPACITY);
    });
}
