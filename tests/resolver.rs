mod common;

use pretty_assertions::assert_eq;

use common::{run, static_error};
use rox::runner::RunStatus;

#[test]
fn return_at_top_level() {
    assert_eq!(
        static_error("return 1;"),
        "[line 1] Error at 'return': Cannot return from top-level code."
    );
}

#[test]
fn return_value_from_initializer() {
    assert_eq!(
        static_error("class A {\n  init() { return 1; }\n}"),
        "[line 2] Error at 'return': Cannot return a value from an initializer."
    );
}

#[test]
fn this_outside_class() {
    assert_eq!(
        static_error("fun f() { print this; }"),
        "[line 1] Error at 'this': Cannot use 'this' outside of a class."
    );
}

#[test]
fn super_outside_class_and_without_superclass() {
    assert_eq!(
        static_error("super.foo();"),
        "[line 1] Error at 'super': Cannot use 'super' outside of a class."
    );
    assert_eq!(
        static_error("class A { f() { super.f(); } }"),
        "[line 1] Error at 'super': Cannot use 'super' in a class with no superclass."
    );
}

#[test]
fn break_outside_loop() {
    assert_eq!(
        static_error("break;"),
        "[line 1] Error at 'break': Cannot use 'break' outside of a loop."
    );
    assert_eq!(
        static_error("while (true) { fun f() { break; } }"),
        "[line 1] Error at 'break': Cannot use 'break' outside of a loop."
    );
}

#[test]
fn local_read_in_own_initializer() {
    assert_eq!(
        static_error("{ var a = a; }"),
        "[line 1] Error at 'a': Cannot read local variable 'a' in its own initializer."
    );
}

#[test]
fn globals_may_read_themselves_and_be_redeclared() {
    let outcome = run("var a = 1; var a = a + 1; print a;");

    assert_eq!(outcome.status, RunStatus::Ok);
    assert_eq!(outcome.printed, "2\n");
}

#[test]
fn local_redeclaration() {
    assert_eq!(
        static_error("fun f(a) { var a; }"),
        "[line 1] Error at 'a': Variable 'a' previously declared in scope."
    );
}

#[test]
fn static_errors_stop_the_whole_program() {
    let outcome = run("print \"unreached\";\n{ var x = 1; var x = 2; }\nreturn;");

    assert_eq!(outcome.status, RunStatus::StaticError);
    assert_eq!(outcome.printed, "");
    assert_eq!(
        outcome.reporter.static_errors,
        vec![
            "[line 2] Error at 'x': Variable 'x' previously declared in scope.",
            "[line 3] Error at 'return': Cannot return from top-level code.",
        ]
    );
}
