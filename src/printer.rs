//! Read‑only consumers of the AST: a prefix (s‑expression) printer, a reverse
//! Polish converter and a transpiler to Python‑like source.

use crate::expr::{Expr, LiteralValue};
use crate::stack::ensure_sufficient_stack;
use crate::stmt::{FunctionDecl, Stmt};
use crate::token::TokenType;
use crate::value::Value;

/// `3.0` → `3.0`, `2.5` → `2.5`.
fn prefix_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{:.1}", n)
    } else {
        n.to_string()
    }
}

/// Converts expressions and statements to the Crafting‑Interpreters prefix
/// form, e.g. `(* (- 123.0) (group 45.67))`.
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(expr: &Expr) -> String {
        ensure_sufficient_stack(|| Self::print_expr(expr))
    }

    fn print_expr(expr: &Expr) -> String {
        match expr {
            // ── literals ────────────────────────────────────────────────
            Expr::Literal(lit) => match lit {
                LiteralValue::True => "true".into(),

                LiteralValue::False => "false".into(),

                LiteralValue::Nil => "nil".into(),

                LiteralValue::Str(s) => s.clone(),

                LiteralValue::Number(n) => prefix_number(*n),
            },

            Expr::Grouping(inner) => format!("(group {})", Self::print(inner)),

            Expr::Unary { operator, right } => {
                format!("({} {})", operator.lexeme, Self::print(right))
            }

            Expr::Binary {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => format!(
                "({} {} {})",
                operator.lexeme,
                Self::print(left),
                Self::print(right)
            ),

            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
            } => format!(
                "(?: {} {} {})",
                Self::print(condition),
                Self::print(then_branch),
                Self::print(else_branch)
            ),

            Expr::Variable { name, .. } => name.lexeme.clone(),

            Expr::Assign { name, value, .. } => {
                format!("(= {} {})", name.lexeme, Self::print(value))
            }

            Expr::Call {
                callee, arguments, ..
            } => {
                let mut s = format!("(call {}", Self::print(callee));
                for arg in arguments {
                    s.push(' ');
                    s.push_str(&Self::print(arg));
                }
                s.push(')');
                s
            }

            Expr::Get { object, name } => format!("(. {} {})", Self::print(object), name.lexeme),

            Expr::Set {
                object,
                name,
                value,
            } => format!(
                "(= (. {} {}) {})",
                Self::print(object),
                name.lexeme,
                Self::print(value)
            ),

            Expr::This { .. } => "this".into(),

            Expr::Super { method, .. } => format!("(super {})", method.lexeme),
        }
    }

    /// One line per top‑level statement.
    pub fn print_program(statements: &[Stmt]) -> String {
        statements
            .iter()
            .map(Self::print_stmt)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn print_stmt(stmt: &Stmt) -> String {
        ensure_sufficient_stack(|| Self::print_stmt_inner(stmt))
    }

    fn print_stmt_inner(stmt: &Stmt) -> String {
        match stmt {
            Stmt::Expression(expr) => format!("(; {})", Self::print(expr)),

            Stmt::Print(expr) => format!("(print {})", Self::print(expr)),

            Stmt::Var { name, initializer } => match initializer {
                Some(init) => format!("(var {} {})", name.lexeme, Self::print(init)),
                None => format!("(var {})", name.lexeme),
            },

            Stmt::Block(statements) => Self::list("block", statements),

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => match else_branch {
                Some(else_stmt) => format!(
                    "(if {} {} {})",
                    Self::print(condition),
                    Self::print_stmt(then_branch),
                    Self::print_stmt(else_stmt)
                ),
                None => format!(
                    "(if {} {})",
                    Self::print(condition),
                    Self::print_stmt(then_branch)
                ),
            },

            Stmt::While { condition, body } => format!(
                "(while {} {})",
                Self::print(condition),
                Self::print_stmt(body)
            ),

            Stmt::Break(_) => "(break)".into(),

            Stmt::Function(function) => Self::function("fun", function),

            Stmt::Return { value, .. } => match value {
                Some(expr) => format!("(return {})", Self::print(expr)),
                None => "(return)".into(),
            },

            Stmt::Class {
                name,
                superclass,
                methods,
            } => {
                let mut s = format!("(class {}", name.lexeme);
                if let Some(superclass) = superclass {
                    s.push_str(" < ");
                    s.push_str(&Self::print(superclass));
                }
                for method in methods {
                    s.push(' ');
                    s.push_str(&Self::function("method", method));
                }
                s.push(')');
                s
            }
        }
    }

    fn function(keyword: &str, function: &FunctionDecl) -> String {
        let params: Vec<&str> = function.params.iter().map(|p| p.lexeme.as_str()).collect();

        let mut s = format!("({} {}({})", keyword, function.name.lexeme, params.join(" "));
        for stmt in &function.body {
            s.push(' ');
            s.push_str(&Self::print_stmt(stmt));
        }
        s.push(')');
        s
    }

    fn list(head: &str, statements: &[Stmt]) -> String {
        let mut s = format!("({}", head);
        for stmt in statements {
            s.push(' ');
            s.push_str(&Self::print_stmt(stmt));
        }
        s.push(')');
        s
    }
}

/// Reverse Polish notation for expressions: operands first, operator last.
/// `(1 + 2) * -3` → `1 2 + 3 - *`.
pub struct RpnConverter;

impl RpnConverter {
    pub fn convert(expr: &Expr) -> String {
        ensure_sufficient_stack(|| Self::convert_expr(expr))
    }

    fn convert_expr(expr: &Expr) -> String {
        match expr {
            Expr::Literal(lit) => literal_source(lit),

            Expr::Grouping(inner) => Self::convert(inner),

            Expr::Unary { operator, right } => {
                format!("{} {}", Self::convert(right), operator.lexeme)
            }

            Expr::Binary {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => format!(
                "{} {} {}",
                Self::convert(left),
                Self::convert(right),
                operator.lexeme
            ),

            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
            } => format!(
                "{} {} {} ?:",
                Self::convert(condition),
                Self::convert(then_branch),
                Self::convert(else_branch)
            ),

            Expr::Variable { name, .. } => name.lexeme.clone(),

            Expr::Assign { name, value, .. } => {
                format!("{} {} =", name.lexeme, Self::convert(value))
            }

            Expr::Call {
                callee, arguments, ..
            } => {
                let mut parts: Vec<String> = vec![Self::convert(callee)];
                parts.extend(arguments.iter().map(Self::convert));
                parts.push(format!("call/{}", arguments.len()));
                parts.join(" ")
            }

            Expr::Get { object, name } => format!("{} {} .", Self::convert(object), name.lexeme),

            Expr::Set {
                object,
                name,
                value,
            } => format!(
                "{} {} {} .=",
                Self::convert(object),
                name.lexeme,
                Self::convert(value)
            ),

            Expr::This { .. } => "this".into(),

            Expr::Super { method, .. } => format!("super {} .", method.lexeme),
        }
    }

    /// One line per expression statement; other statements are skipped.
    pub fn convert_program(statements: &[Stmt]) -> String {
        statements
            .iter()
            .filter_map(|stmt| match stmt {
                Stmt::Expression(expr) | Stmt::Print(expr) => Some(Self::convert(expr)),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Literal as it would be written back in source (strings quoted).
fn literal_source(lit: &LiteralValue) -> String {
    match lit {
        LiteralValue::Number(n) => Value::Number(*n).to_string(),
        LiteralValue::Str(s) => format!("\"{}\"", s),
        LiteralValue::True => "true".into(),
        LiteralValue::False => "false".into(),
        LiteralValue::Nil => "nil".into(),
    }
}

/// Renders a program as Python‑like source.
///
/// Blocks become indentation, `this` becomes `self`, `init` becomes
/// `__init__` and the ternary becomes `a if c else b`.
#[derive(Default)]
pub struct Transpiler {
    out: Vec<String>,
    depth: usize,
}

impl Transpiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transpile(statements: &[Stmt]) -> String {
        let mut transpiler = Self::new();
        transpiler.block(statements);
        transpiler.out.join("\n")
    }

    pub fn expression(expr: &Expr) -> String {
        ensure_sufficient_stack(|| Self::render_expr(expr))
    }

    fn render_expr(expr: &Expr) -> String {
        match expr {
            Expr::Literal(lit) => match lit {
                LiteralValue::True => "True".into(),
                LiteralValue::False => "False".into(),
                LiteralValue::Nil => "None".into(),
                other => literal_source(other),
            },

            Expr::Grouping(inner) => format!("({})", Self::expression(inner)),

            Expr::Unary { operator, right } => match operator.token_type {
                TokenType::BANG => format!("not {}", Self::expression(right)),
                _ => format!("{}{}", operator.lexeme, Self::expression(right)),
            },

            Expr::Binary {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => format!(
                "{} {} {}",
                Self::expression(left),
                operator.lexeme,
                Self::expression(right)
            ),

            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
            } => format!(
                "{} if {} else {}",
                Self::expression(then_branch),
                Self::expression(condition),
                Self::expression(else_branch)
            ),

            Expr::Variable { name, .. } => name.lexeme.clone(),

            Expr::Assign { name, value, .. } => {
                format!("{} = {}", name.lexeme, Self::expression(value))
            }

            Expr::Call {
                callee, arguments, ..
            } => {
                let args: Vec<String> = arguments.iter().map(Self::expression).collect();
                format!("{}({})", Self::expression(callee), args.join(", "))
            }

            Expr::Get { object, name } => format!("{}.{}", Self::expression(object), name.lexeme),

            Expr::Set {
                object,
                name,
                value,
            } => format!(
                "{}.{} = {}",
                Self::expression(object),
                name.lexeme,
                Self::expression(value)
            ),

            Expr::This { .. } => "self".into(),

            Expr::Super { method, .. } => format!("super().{}", python_method(&method.lexeme)),
        }
    }

    fn line(&mut self, text: impl AsRef<str>) {
        self.out
            .push(format!("{}{}", "    ".repeat(self.depth), text.as_ref()));
    }

    fn block(&mut self, statements: &[Stmt]) {
        for stmt in statements {
            self.statement(stmt);
        }
    }

    /// An indented suite; Python needs `pass` when it would be empty.
    fn suite(&mut self, body: &Stmt) {
        self.depth += 1;
        let before = self.out.len();
        self.statement(body);
        if self.out.len() == before {
            self.line("pass");
        }
        self.depth -= 1;
    }

    fn statement(&mut self, stmt: &Stmt) {
        ensure_sufficient_stack(|| self.render_stmt(stmt))
    }

    fn render_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expression(expr) => self.line(Self::expression(expr)),

            Stmt::Print(expr) => self.line(format!("print({})", Self::expression(expr))),

            Stmt::Var { name, initializer } => {
                let value = initializer
                    .as_ref()
                    .map(Self::expression)
                    .unwrap_or_else(|| "None".into());
                self.line(format!("{} = {}", name.lexeme, value));
            }

            Stmt::Block(statements) => self.block(statements),

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.line(format!("if {}:", Self::expression(condition)));
                self.suite(then_branch);
                if let Some(else_stmt) = else_branch {
                    self.line("else:");
                    self.suite(else_stmt);
                }
            }

            Stmt::While { condition, body } => {
                self.line(format!("while {}:", Self::expression(condition)));
                self.suite(body);
            }

            Stmt::Break(_) => self.line("break"),

            Stmt::Function(function) => self.function(function, false),

            Stmt::Return { value, .. } => match value {
                Some(expr) => self.line(format!("return {}", Self::expression(expr))),
                None => self.line("return"),
            },

            Stmt::Class {
                name,
                superclass,
                methods,
            } => {
                match superclass {
                    Some(superclass) => self.line(format!(
                        "class {}({}):",
                        name.lexeme,
                        Self::expression(superclass)
                    )),
                    None => self.line(format!("class {}:", name.lexeme)),
                }

                self.depth += 1;
                if methods.is_empty() {
                    self.line("pass");
                }
                for method in methods {
                    self.function(method, true);
                }
                self.depth -= 1;
            }
        }
    }

    fn function(&mut self, function: &FunctionDecl, is_method: bool) {
        let mut params: Vec<&str> = Vec::with_capacity(function.params.len() + 1);
        if is_method {
            params.push("self");
        }
        params.extend(function.params.iter().map(|p| p.lexeme.as_str()));

        let name = if is_method {
            python_method(&function.name.lexeme)
        } else {
            function.name.lexeme.as_str()
        };

        self.line(format!("def {}({}):", name, params.join(", ")));

        self.depth += 1;
        if function.body.is_empty() {
            self.line("pass");
        }
        self.block(&function.body);
        self.depth -= 1;
    }
}

fn python_method(name: &str) -> &str {
    if name == crate::object::INITIALIZER {
        "__init__"
    } else {
        name
    }
}
