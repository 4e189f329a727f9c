mod common;

use pretty_assertions::assert_eq;

use common::{output, run, runtime_error};
use rox::diagnostic::CollectingReporter;
use rox::runner::{Lox, RunStatus};
use rox::value::{NativeFunction, Value};

#[test]
fn arithmetic_and_printing() {
    assert_eq!(
        output("print 1 + 2; print 7 / 2; print -0; print 2 * (3 - 1);"),
        "3\n3.5\n-0\n4\n"
    );
}

#[test]
fn plus_concatenates_when_either_side_is_a_string() {
    assert_eq!(
        output("print \"a\" + \"b\"; print \"n=\" + 1; print 2 + \"x\"; print \"t\" + true;"),
        "ab\nn=1\n2x\nttrue\n"
    );
}

#[test]
fn equality_never_crosses_types() {
    assert_eq!(
        output("print nil == nil; print nil == false; print 1 == \"1\"; print \"a\" == \"a\";"),
        "true\nfalse\nfalse\ntrue\n"
    );
}

#[test]
fn truthiness() {
    assert_eq!(
        output("if (0) print \"zero\"; if (\"\") print \"empty\"; if (nil) print \"nil\"; else print \"else\";"),
        "zero\nempty\nelse\n"
    );
}

#[test]
fn logical_operators_return_operands() {
    assert_eq!(
        output("print nil or \"yes\"; print 1 and 2; print false and boom;"),
        "yes\n2\nfalse\n"
    );
}

#[test]
fn ternary_evaluates_one_branch() {
    assert_eq!(output("print true ? 1 : boom; print nil ? boom : 2;"), "1\n2\n");
}

#[test]
fn block_shadowing_restores_outer_binding() {
    assert_eq!(
        output("var a = 1; { var a = 2; print a; } print a;"),
        "2\n1\n"
    );
}

#[test]
fn chained_assignment() {
    assert_eq!(
        output("var a; var b; var c = 3; a = b = c; print a; print b;"),
        "3\n3\n"
    );
}

#[test]
fn loops() {
    assert_eq!(
        output("var s = 0; for (var i = 1; i <= 4; i = i + 1) s = s + i; print s;"),
        "10\n"
    );
    assert_eq!(
        output("var i = 0; while (true) { if (i == 3) break; i = i + 1; } print i;"),
        "3\n"
    );
}

#[test]
fn recursion_and_return() {
    assert_eq!(
        output("fun fib(n) { if (n < 2) return n; return fib(n - 1) + fib(n - 2); } print fib(15);"),
        "610\n"
    );
}

#[test]
fn function_without_return_yields_nil() {
    assert_eq!(output("fun f() {} print f();"), "nil\n");
}

#[test]
fn callables_print_by_kind() {
    assert_eq!(
        output("fun f() {} class C {} print f; print C; print C(); print clock;"),
        "<fn f>\nC\nC instance\n<native fn>\n"
    );
}

#[test]
fn division_by_zero_is_an_arithmetic_error() {
    assert_eq!(
        runtime_error("print 1;\nprint 1 / 0;"),
        "Cannot divide by zero.\n[line 2]"
    );
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let outcome = run("print \"before\"; print -\"x\"; print \"after\";");

    assert_eq!(outcome.status, RunStatus::RuntimeError);
    assert_eq!(outcome.printed, "before\n");
    assert_eq!(
        outcome.reporter.runtime_errors,
        vec!["Operand of '-' must be a number.\n[line 1]"]
    );
}

#[test]
fn runtime_type_errors() {
    assert_eq!(
        runtime_error("print 1 < \"2\";"),
        "Operands of '<' must be numbers.\n[line 1]"
    );
    assert_eq!(
        runtime_error("print nil + 1;"),
        "Operands of '+' must be two numbers or at least one string.\n[line 1]"
    );
    assert_eq!(
        runtime_error("\"not callable\"();"),
        "Can only call functions and classes.\n[line 1]"
    );
    assert_eq!(
        runtime_error("fun f(a, b) {} f(1);"),
        "Expected 2 arguments but got 1.\n[line 1]"
    );
    assert_eq!(
        runtime_error("print missing;"),
        "Undefined variable 'missing'.\n[line 1]"
    );
    assert_eq!(
        runtime_error("missing = 1;"),
        "Undefined variable 'missing'.\n[line 1]"
    );
}

#[test]
fn unbounded_recursion_reports_stack_overflow() {
    assert_eq!(
        runtime_error("fun f(n) { return f(n + 1); } f(0);"),
        "Stack overflow.\n[line 1]"
    );
}

#[test]
fn natives_check_their_arguments() {
    assert_eq!(output("print clock() > 0;"), "true\n");
    assert_eq!(
        runtime_error("sleep(-1);"),
        "sleep() expects a non-negative number of seconds.\n[line 1]"
    );
}

#[test]
fn session_survives_a_runtime_error() {
    let mut lox = Lox::with_output(Vec::new());
    let mut reporter = CollectingReporter::new();

    assert_eq!(lox.run("var a = 1;", &mut reporter), RunStatus::Ok);
    assert_eq!(lox.run("{ var b = 2; b(); }", &mut reporter), RunStatus::RuntimeError);
    assert_eq!(lox.run("print a;", &mut reporter), RunStatus::Ok);
    assert_eq!(lox.take_printed(), "1\n");
}

#[test]
fn functions_defined_on_earlier_lines_resolve_correctly() {
    let mut lox = Lox::with_output(Vec::new());
    let mut reporter = CollectingReporter::new();

    lox.run("fun make() { var n = 0; fun inc() { n = n + 1; return n; } return inc; }", &mut reporter);
    lox.run("var c = make();", &mut reporter);
    lox.run("c(); print c();", &mut reporter);

    assert!(reporter.is_empty(), "{:?}", reporter);
    assert_eq!(lox.take_printed(), "2\n");
}

#[test]
fn rerunning_after_reset_gives_identical_output() {
    let program = "var x = 1; fun f() { x = x + 1; return x; } print f(); print f();";

    let mut lox = Lox::with_output(Vec::new());
    let mut reporter = CollectingReporter::new();

    lox.run(program, &mut reporter);
    let first = lox.take_printed();

    lox.reset();
    lox.run(program, &mut reporter);
    let second = lox.take_printed();

    assert!(reporter.is_empty(), "{:?}", reporter);
    assert_eq!(first, "2\n3\n");
    assert_eq!(first, second);
}

#[test]
fn bare_session_has_no_natives() {
    let mut lox = Lox::bare(Vec::new());
    let mut reporter = CollectingReporter::new();

    assert_eq!(lox.run("clock();", &mut reporter), RunStatus::RuntimeError);
    assert_eq!(
        reporter.runtime_errors,
        vec!["Undefined variable 'clock'.\n[line 1]"]
    );
}

#[test]
fn host_can_install_its_own_natives() {
    fn twice(args: &[Value]) -> Result<Value, String> {
        match args {
            [Value::Number(n)] => Ok(Value::Number(n * 2.0)),
            _ => Err("twice() expects a number.".to_string()),
        }
    }

    let mut lox = Lox::bare(Vec::new());
    lox.interpreter()
        .define_native(NativeFunction::new("twice", 1, twice));

    let mut reporter = CollectingReporter::new();
    lox.run("print twice(21);", &mut reporter);
    lox.reset();
    lox.run("print twice(4);", &mut reporter);

    assert!(reporter.is_empty(), "{:?}", reporter);
    assert_eq!(lox.take_printed(), "42\n8\n");
}
