use pretty_assertions::assert_eq;

use rox::parser::Parser;
use rox::printer::{AstPrinter, RpnConverter, Transpiler};
use rox::scanner::scan_tokens;
use rox::stmt::Stmt;

fn parse(source: &str) -> Vec<Stmt> {
    let parsed = Parser::new(scan_tokens(source).value).parse();
    assert!(!parsed.has_errors(), "parse errors: {:?}", parsed.errors);
    parsed.value
}

#[test]
fn prefix_form_of_statements() {
    assert_eq!(
        AstPrinter::print_program(&parse("var a = 1; if (a) print a; else { print -a; }")),
        "(var a 1.0)\n(if a (print a) (block (print (- a))))"
    );
}

#[test]
fn reverse_polish_notation() {
    assert_eq!(
        RpnConverter::convert_program(&parse("(1 + 2) * (4 - 3); -x; f(1, 2);")),
        "1 2 + 4 3 - *\nx -\nf 1 2 call/2"
    );
}

#[test]
fn transpiles_expressions_to_python_syntax() {
    assert_eq!(
        Transpiler::transpile(&parse("print !ok and x == nil ? \"yes\" : false;")),
        "print(\"yes\" if not ok and x == None else False)"
    );
}

#[test]
fn transpiles_functions_and_control_flow_with_indentation() {
    let source = r#"
        fun count(n) {
          var i = 0;
          while (i < n) {
            if (i == 2) break;
            i = i + 1;
          }
          return i;
        }
    "#;

    assert_eq!(
        Transpiler::transpile(&parse(source)),
        [
            "def count(n):",
            "    i = 0",
            "    while i < n:",
            "        if i == 2:",
            "            break",
            "        i = i + 1",
            "    return i",
        ]
        .join("\n")
    );
}

#[test]
fn transpiles_classes() {
    let source = r#"
        class A {}
        class B < A {
          init(x) { this.x = x; }
          get() { return super.get(); }
        }
    "#;

    assert_eq!(
        Transpiler::transpile(&parse(source)),
        [
            "class A:",
            "    pass",
            "class B(A):",
            "    def __init__(self, x):",
            "        self.x = x",
            "    def get(self):",
            "        return super().get()",
        ]
        .join("\n")
    );
}

#[test]
fn syntax_tree_serializes_to_json() {
    let json = serde_json::to_value(parse("print 1;")).unwrap();

    assert_eq!(json, serde_json::json!([{ "Print": { "Literal": { "Number": 1.0 } } }]));
}

#[test]
fn deeply_nested_expressions_render_in_every_form() {
    let depth = 5_000;
    let source = format!("{}1{};", "(".repeat(depth), ")".repeat(depth));
    let program = parse(&source);

    let sexpr = AstPrinter::print_program(&program);
    assert!(sexpr.starts_with("(; (group (group"));
    assert_eq!(sexpr.matches("group").count(), depth);

    assert_eq!(RpnConverter::convert_program(&program), "1");

    let python = Transpiler::transpile(&program);
    assert_eq!(python.len(), 2 * depth + 1);
}
