//! Tree‑walking evaluator.
//!
//! One `match` arm per node kind.  Statements report how control left them
//! through [`Flow`] (normal completion, `break`, or `return` with a value);
//! runtime failures travel as `Err(LoxError)` and abort the current run.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::{Rc, Weak};

use log::{debug, info, trace};

use crate::environment::{self, EnvRef, Environment};
use crate::error::{LoxError, Result};
use crate::expr::{Expr, ExprId, LiteralValue};
use crate::object::{LoxClass, LoxFunction, LoxInstance, INITIALIZER};
use crate::resolver::Locals;
use crate::stack::ensure_sufficient_stack;
use crate::stmt::{FunctionDecl, Stmt};
use crate::token::{Token, TokenType};
use crate::value::{standard_natives, NativeFunction, Value};

/// Deepest chain of nested Lox calls before `Stack overflow.` is raised.
pub const MAX_CALL_DEPTH: usize = 2048;

/// How a statement finished.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Normal,
    Break,
    Return(Value),
}

pub struct Interpreter<W: Write = io::Stdout> {
    globals: EnvRef,
    environment: EnvRef,
    locals: Locals,
    natives: Vec<Rc<NativeFunction>>,
    out: W,
    /// Every frame created this run, so cycles can be severed on reset.
    tracked: Vec<Weak<RefCell<Environment>>>,
    prune_at: usize,
    call_depth: usize,
}

impl Interpreter<io::Stdout> {
    /// Interpreter printing to standard output, with `clock` and `sleep`.
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Interpreter printing to `out`, with the standard natives installed.
    pub fn with_output(out: W) -> Self {
        let mut interpreter = Self::bare(out);

        for native in standard_natives() {
            interpreter.define_native(native);
        }

        interpreter
    }

    /// Interpreter printing to `out` with an empty global scope.
    pub fn bare(out: W) -> Self {
        info!("Initializing Interpreter");

        let globals: EnvRef = Rc::new(RefCell::new(Environment::new()));

        Self {
            environment: Rc::clone(&globals),
            globals,
            locals: Locals::new(),
            natives: Vec::new(),
            out,
            tracked: Vec::new(),
            prune_at: 1024,
            call_depth: 0,
        }
    }

    /// Install a host callable in the global scope.  It survives [`reset`].
    ///
    /// [`reset`]: Interpreter::reset
    pub fn define_native(&mut self, native: NativeFunction) {
        debug!("Defining native function '{}'", native.name);

        let native = Rc::new(native);
        self.globals
            .borrow_mut()
            .define(&native.name, Value::NativeFunction(Rc::clone(&native)));
        self.natives.push(native);
    }

    /// Merge a resolution table produced by the resolver.
    pub fn install(&mut self, locals: Locals) {
        debug!("Installing {} resolved reference(s)", locals.len());

        self.locals.extend(locals);
    }

    pub fn globals(&self) -> EnvRef {
        Rc::clone(&self.globals)
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Take what has been written so far, leaving an empty sink.
    pub fn take_output(&mut self) -> W
    where
        W: Default,
    {
        std::mem::take(&mut self.out)
    }

    /// Forget everything from previous runs: fresh globals (natives
    /// re‑installed) and an empty resolution table.
    pub fn reset(&mut self) {
        info!("Resetting interpreter state");

        self.sever_environments();

        self.globals = Rc::new(RefCell::new(Environment::new()));
        self.environment = Rc::clone(&self.globals);
        self.locals.clear();
        self.call_depth = 0;

        for native in &self.natives {
            self.globals
                .borrow_mut()
                .define(&native.name, Value::NativeFunction(Rc::clone(native)));
        }
    }

    /// Executes a program.  The first runtime error stops it.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<()> {
        debug!("Interpreting {} statements", statements.len());

        let result = self.run_statements(statements);

        // Anything printed before a failure must still reach the sink.
        self.out.flush()?;

        if let Err(ref e) = result {
            debug!("Runtime debug: {}", e);
            self.environment = Rc::clone(&self.globals);
            self.call_depth = 0;
        } else {
            info!("Interpretation completed successfully");
        }

        result
    }

    fn run_statements(&mut self, statements: &[Stmt]) -> Result<()> {
        for stmt in statements {
            // `break`/`return` cannot reach top level once resolved.
            self.execute(stmt)?;
        }

        Ok(())
    }

    // ─────────────────────────────── statements ───────────────────────────

    /// Executes a single statement.
    pub fn execute(&mut self, stmt: &Stmt) -> Result<Flow> {
        ensure_sufficient_stack(|| self.execute_stmt(stmt))
    }

    fn execute_stmt(&mut self, stmt: &Stmt) -> Result<Flow> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(Flow::Normal)
            }

            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                writeln!(self.out, "{}", value)?;
                trace!("Printed value: {}", value);
                Ok(Flow::Normal)
            }

            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };

                debug!("Defining variable '{}'", name.lexeme);
                self.environment.borrow_mut().define(&name.lexeme, value);
                Ok(Flow::Normal)
            }

            Stmt::Block(statements) => {
                let env = self.new_environment(Rc::clone(&self.environment));
                self.execute_block(statements, env)
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_stmt) = else_branch {
                    self.execute(else_stmt)
                } else {
                    Ok(Flow::Normal)
                }
            }

            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    match self.execute(body)? {
                        Flow::Normal => {}
                        Flow::Break => break,
                        ret @ Flow::Return(_) => return Ok(ret),
                    }
                }
                Ok(Flow::Normal)
            }

            Stmt::Break(_) => Ok(Flow::Break),

            Stmt::Function(declaration) => {
                debug!("Defining function '{}'", declaration.name.lexeme);

                let function = LoxFunction::new(
                    Rc::clone(declaration),
                    Rc::clone(&self.environment),
                    false,
                );
                self.environment.borrow_mut().define(
                    &declaration.name.lexeme,
                    Value::Function(Rc::new(function)),
                );
                Ok(Flow::Normal)
            }

            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Ok(Flow::Return(value))
            }

            Stmt::Class {
                name,
                superclass,
                methods,
            } => {
                self.declare_class(name, superclass.as_ref(), methods)?;
                Ok(Flow::Normal)
            }
        }
    }

    /// Run `statements` with `env` as the active frame, restoring the previous
    /// frame however the block is left.
    pub fn execute_block(&mut self, statements: &[Stmt], env: EnvRef) -> Result<Flow> {
        let previous: EnvRef = std::mem::replace(&mut self.environment, env);

        let mut result: Result<Flow> = Ok(Flow::Normal);
        for stmt in statements {
            match self.execute(stmt) {
                Ok(Flow::Normal) => {}
                other => {
                    result = other;
                    break;
                }
            }
        }

        self.environment = previous;
        result
    }

    fn declare_class(
        &mut self,
        name: &Token,
        superclass: Option<&Expr>,
        methods: &[Rc<FunctionDecl>],
    ) -> Result<()> {
        debug!("Declaring class '{}'", name.lexeme);

        let superclass: Option<Rc<LoxClass>> = match superclass {
            Some(expr) => match self.evaluate(expr)? {
                Value::Class(class) => Some(class),
                _ => {
                    return Err(LoxError::runtime(
                        expr.line(),
                        "Superclass must be a class.",
                    ))
                }
            },
            None => None,
        };

        self.environment
            .borrow_mut()
            .define(&name.lexeme, Value::Nil);

        // Methods of a subclass close over an extra frame holding `super`.
        let method_env: EnvRef = match &superclass {
            Some(class) => {
                let env = self.new_environment(Rc::clone(&self.environment));
                env.borrow_mut()
                    .define("super", Value::Class(Rc::clone(class)));
                env
            }
            None => Rc::clone(&self.environment),
        };

        let methods: HashMap<String, Rc<LoxFunction>> = methods
            .iter()
            .map(|method| {
                let function = LoxFunction::new(
                    Rc::clone(method),
                    Rc::clone(&method_env),
                    method.name.lexeme == INITIALIZER,
                );
                (method.name.lexeme.clone(), Rc::new(function))
            })
            .collect();

        let class = LoxClass::new(name.lexeme.clone(), superclass, methods);

        self.environment
            .borrow_mut()
            .assign(name, Value::Class(Rc::new(class)))
    }

    // ─────────────────────────────── expressions ──────────────────────────

    /// Evaluates an expression and returns a Value.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value> {
        ensure_sufficient_stack(|| self.evaluate_expr(expr))
    }

    fn evaluate_expr(&mut self, expr: &Expr) -> Result<Value> {
        match expr {
            Expr::Literal(literal) => Ok(match literal {
                LiteralValue::Number(n) => Value::Number(*n),
                LiteralValue::Str(s) => Value::from(s.as_str()),
                LiteralValue::True => Value::Bool(true),
                LiteralValue::False => Value::Bool(false),
                LiteralValue::Nil => Value::Nil,
            }),

            Expr::Grouping(inner) => self.evaluate(inner),

            Expr::Unary { operator, right } => self.evaluate_unary(operator, right),

            Expr::Binary {
                left,
                operator,
                right,
            } => self.evaluate_binary(left, operator, right),

            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left_val = self.evaluate(left)?;

                let short_circuit = match operator.token_type {
                    TokenType::OR => left_val.is_truthy(),
                    _ => !left_val.is_truthy(),
                };

                if short_circuit {
                    Ok(left_val)
                } else {
                    self.evaluate(right)
                }
            }

            Expr::Ternary {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.evaluate(then_branch)
                } else {
                    self.evaluate(else_branch)
                }
            }

            Expr::Variable { id, name } => self.look_up_variable(*id, name),

            Expr::Assign { id, name, value } => {
                let value = self.evaluate(value)?;

                match self.locals.get(id) {
                    Some(&distance) => {
                        environment::assign_at(&self.environment, distance, name, value.clone())?
                    }
                    None => self.globals.borrow_mut().assign(name, value.clone())?,
                }

                Ok(value)
            }

            Expr::Call {
                callee,
                paren,
                arguments,
            } => {
                let callee_val = self.evaluate(callee)?;

                let mut arg_values: Vec<Value> = Vec::with_capacity(arguments.len());
                for arg in arguments {
                    arg_values.push(self.evaluate(arg)?);
                }

                self.call_value(&callee_val, paren, arg_values)
            }

            Expr::Get { object, name } => {
                let object = self.evaluate(object)?;
                self.get_property(&object, name)
            }

            Expr::Set {
                object,
                name,
                value,
            } => {
                let Value::Instance(instance) = self.evaluate(object)? else {
                    return Err(LoxError::runtime(name.line, "Only instances have fields."));
                };

                let value = self.evaluate(value)?;
                instance.borrow_mut().set_field(&name.lexeme, value.clone());
                Ok(value)
            }

            Expr::This { id, keyword } => self.look_up_variable(*id, keyword),

            Expr::Super {
                id,
                keyword,
                method,
            } => self.evaluate_super(*id, keyword, method),
        }
    }

    fn evaluate_unary(&mut self, operator: &Token, right: &Expr) -> Result<Value> {
        let right_val = self.evaluate(right)?;

        match operator.token_type {
            TokenType::MINUS => match right_val {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(LoxError::runtime(
                    operator.line,
                    format!("Operand of '{}' must be a number.", operator.lexeme),
                )),
            },
            TokenType::BANG => Ok(Value::Bool(!right_val.is_truthy())),
            _ => Err(LoxError::runtime(
                operator.line,
                format!("Invalid unary operator '{}'.", operator.lexeme),
            )),
        }
    }

    fn evaluate_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> Result<Value> {
        let left_val = self.evaluate(left)?;
        let right_val = self.evaluate(right)?;

        trace!(
            "Binary {} with operands {} and {}",
            operator.lexeme,
            left_val,
            right_val
        );

        match operator.token_type {
            TokenType::PLUS => match (&left_val, &right_val) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(_), _) | (_, Value::String(_)) => {
                    Ok(Value::from(format!("{}{}", left_val, right_val)))
                }
                _ => Err(LoxError::runtime(
                    operator.line,
                    "Operands of '+' must be two numbers or at least one string.",
                )),
            },

            TokenType::MINUS => {
                let (a, b) = number_operands(operator, &left_val, &right_val)?;
                Ok(Value::Number(a - b))
            }

            TokenType::STAR => {
                let (a, b) = number_operands(operator, &left_val, &right_val)?;
                Ok(Value::Number(a * b))
            }

            TokenType::SLASH => {
                let (a, b) = number_operands(operator, &left_val, &right_val)?;
                if b == 0.0 {
                    return Err(LoxError::arithmetic(operator.line, "Cannot divide by zero."));
                }
                Ok(Value::Number(a / b))
            }

            TokenType::GREATER => {
                let (a, b) = number_operands(operator, &left_val, &right_val)?;
                Ok(Value::Bool(a > b))
            }

            TokenType::GREATER_EQUAL => {
                let (a, b) = number_operands(operator, &left_val, &right_val)?;
                Ok(Value::Bool(a >= b))
            }

            TokenType::LESS => {
                let (a, b) = number_operands(operator, &left_val, &right_val)?;
                Ok(Value::Bool(a < b))
            }

            TokenType::LESS_EQUAL => {
                let (a, b) = number_operands(operator, &left_val, &right_val)?;
                Ok(Value::Bool(a <= b))
            }

            TokenType::EQUAL_EQUAL => Ok(Value::Bool(left_val == right_val)),

            TokenType::BANG_EQUAL => Ok(Value::Bool(left_val != right_val)),

            _ => Err(LoxError::runtime(
                operator.line,
                format!("Invalid binary operator '{}'.", operator.lexeme),
            )),
        }
    }

    /// Resolved references read the exact frame; the rest go to globals.
    fn look_up_variable(&self, id: ExprId, name: &Token) -> Result<Value> {
        match self.locals.get(&id) {
            Some(&distance) => environment::get_at(&self.environment, distance, name),
            None => self.globals.borrow().get(name),
        }
    }

    fn get_property(&mut self, object: &Value, name: &Token) -> Result<Value> {
        let Value::Instance(instance) = object else {
            return Err(LoxError::runtime(
                name.line,
                "Only instances have properties.",
            ));
        };

        if let Some(value) = instance.borrow().field(&name.lexeme) {
            return Ok(value);
        }

        let method = instance.borrow().class.find_method(&name.lexeme);

        match method {
            Some(method) => Ok(Value::Function(
                self.bind_method(&method, Rc::clone(instance)),
            )),
            None => Err(LoxError::runtime(
                name.line,
                format!("Undefined property '{}'.", name.lexeme),
            )),
        }
    }

    /// `super.method`: look the method up starting at the superclass stored
    /// in the class's `super` frame, then bind it to the current `this`.
    fn evaluate_super(&mut self, id: ExprId, keyword: &Token, method: &Token) -> Result<Value> {
        let distance: usize = *self.locals.get(&id).ok_or_else(|| {
            LoxError::runtime(keyword.line, "Cannot use 'super' outside of a subclass.")
        })?;

        let superclass = match environment::get_named_at(&self.environment, distance, "super") {
            Some(Value::Class(class)) => class,
            _ => {
                return Err(LoxError::runtime(
                    keyword.line,
                    "Superclass must be a class.",
                ))
            }
        };

        // `this` lives in the frame just inside the one holding `super`.
        let instance = match distance
            .checked_sub(1)
            .and_then(|d| environment::get_named_at(&self.environment, d, "this"))
        {
            Some(Value::Instance(instance)) => instance,
            _ => {
                return Err(LoxError::runtime(
                    keyword.line,
                    "Cannot use 'super' without an instance.",
                ))
            }
        };

        match superclass.find_method(&method.lexeme) {
            Some(found) => Ok(Value::Function(self.bind_method(&found, instance))),
            None => Err(LoxError::runtime(
                method.line,
                format!("Undefined property '{}'.", method.lexeme),
            )),
        }
    }

    // ─────────────────────────────── calls ────────────────────────────────

    /// Invokes a callable (native, user function, or class).
    fn call_value(&mut self, callee: &Value, paren: &Token, args: Vec<Value>) -> Result<Value> {
        match callee {
            Value::Function(function) => {
                check_arity(function.arity(), args.len(), paren)?;
                self.call_function(function, args, paren.line)
            }

            Value::NativeFunction(native) => {
                debug!("Calling native function '{}'", native.name);

                check_arity(native.arity, args.len(), paren)?;
                (native.func)(&args).map_err(|message| LoxError::runtime(paren.line, message))
            }

            Value::Class(class) => {
                debug!("Instantiating class '{}'", class.name);

                check_arity(class.arity(), args.len(), paren)?;

                let instance = Rc::new(RefCell::new(LoxInstance::new(Rc::clone(class))));

                if let Some(initializer) = class.find_method(INITIALIZER) {
                    let bound = self.bind_method(&initializer, Rc::clone(&instance));
                    self.call_function(&bound, args, paren.line)?;
                }

                Ok(Value::Instance(instance))
            }

            _ => Err(LoxError::runtime(
                paren.line,
                "Can only call functions and classes.",
            )),
        }
    }

    /// Run a user function: one fresh frame, child of its closure, holding the
    /// parameters and the body's top‑level locals.
    fn call_function(&mut self, function: &LoxFunction, args: Vec<Value>, line: usize) -> Result<Value> {
        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(LoxError::runtime(line, "Stack overflow."));
        }

        trace!("Calling user-defined function '{}'", function.name());

        let env: EnvRef = self.new_environment(Rc::clone(&function.closure));
        {
            let mut frame = env.borrow_mut();
            for (param, arg) in function.declaration.params.iter().zip(args) {
                frame.define(&param.lexeme, arg);
            }
        }

        self.call_depth += 1;
        let flow = self.execute_block(&function.declaration.body, env);
        self.call_depth -= 1;
        let flow = flow?;

        if function.is_initializer {
            return environment::get_named_at(&function.closure, 0, "this")
                .ok_or_else(|| LoxError::runtime(line, "Initializer has no bound instance."));
        }

        match flow {
            Flow::Return(value) => Ok(value),
            Flow::Normal | Flow::Break => Ok(Value::Nil),
        }
    }

    fn bind_method(&mut self, method: &LoxFunction, instance: Rc<RefCell<LoxInstance>>) -> Rc<LoxFunction> {
        let bound = method.bind(instance);
        self.track(&bound.closure);
        Rc::new(bound)
    }

    // ─────────────────────────── frame bookkeeping ────────────────────────

    fn new_environment(&mut self, enclosing: EnvRef) -> EnvRef {
        let env: EnvRef = Rc::new(RefCell::new(Environment::with_enclosing(enclosing)));
        self.track(&env);
        env
    }

    fn track(&mut self, env: &EnvRef) {
        self.tracked.push(Rc::downgrade(env));

        if self.tracked.len() >= self.prune_at {
            self.tracked.retain(|weak| weak.strong_count() > 0);
            self.prune_at = (self.tracked.len() * 2).max(1024);
        }
    }

    /// Empty every frame still alive (and the globals) so that cycles such as
    /// class → method → closure → class are released.
    fn sever_environments(&mut self) {
        let tracked = std::mem::take(&mut self.tracked);
        debug!("Severing {} tracked environment(s)", tracked.len());

        for weak in tracked {
            if let Some(env) = weak.upgrade() {
                env.borrow_mut().clear();
            }
        }

        self.globals.borrow_mut().clear();

        self.prune_at = 1024;
    }
}

impl<W: Write> Drop for Interpreter<W> {
    fn drop(&mut self) {
        self.sever_environments();
    }
}

fn number_operands(operator: &Token, left: &Value, right: &Value) -> Result<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(LoxError::runtime(
            operator.line,
            format!("Operands of '{}' must be numbers.", operator.lexeme),
        )),
    }
}

fn check_arity(expected: usize, got: usize, paren: &Token) -> Result<()> {
    if expected != got {
        return Err(LoxError::runtime(
            paren.line,
            format!("Expected {} arguments but got {}.", expected, got),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use crate::resolver::Resolver;
    use crate::scanner::scan_tokens;

    fn run(source: &str) -> (String, Result<()>) {
        let statements = Parser::new(scan_tokens(source).value).parse().value;
        let locals = Resolver::new().resolve(&statements).value;

        let mut interpreter = Interpreter::with_output(Vec::new());
        interpreter.install(locals);
        let result = interpreter.interpret(&statements);

        (String::from_utf8_lossy(interpreter.output()).into_owned(), result)
    }

    #[test]
    fn break_leaves_only_the_innermost_loop() {
        let (out, result) = run(
            "var i = 0;
             while (i < 2) {
               while (true) { break; }
               print i;
               i = i + 1;
             }",
        );
        assert!(result.is_ok());
        assert_eq!(out, "0\n1\n");
    }

    #[test]
    fn runaway_recursion_is_a_runtime_error() {
        let (_, result) = run("fun f() { f(); } f();");
        assert_eq!(result.unwrap_err().message(), "Stack overflow.");
    }

    fn global(interpreter: &Interpreter<Vec<u8>>, name: &str) -> Value {
        let globals = interpreter.globals();
        let value = globals
            .borrow()
            .get(&Token::new(TokenType::IDENTIFIER, name, 1))
            .unwrap();
        value
    }

    #[test]
    fn reset_reclaims_classes_closures_and_old_globals() {
        let source = "
            class Counter {
              init() { this.n = 0; }
              bump() { this.n = this.n + 1; return this.n; }
            }
            fun make() {
              var count = 0;
              fun inc() { count = count + 1; return count; }
              return inc;
            }
            var inc = make();
            inc();
            var counter = Counter();
            counter.bump();";
        let statements = Parser::new(scan_tokens(source).value).parse().value;
        let locals = Resolver::new().resolve(&statements).value;

        let mut interpreter = Interpreter::with_output(Vec::new());
        interpreter.install(locals);
        interpreter.interpret(&statements).unwrap();

        let class = match global(&interpreter, "Counter") {
            Value::Class(class) => Rc::downgrade(&class),
            other => panic!("expected a class, got {}", other),
        };
        let closure = match global(&interpreter, "inc") {
            Value::Function(function) => Rc::downgrade(&function.closure),
            other => panic!("expected a function, got {}", other),
        };
        let old_globals = Rc::downgrade(&interpreter.globals());

        assert!(class.upgrade().is_some());
        assert!(closure.upgrade().is_some());

        interpreter.reset();

        assert!(class.upgrade().is_none());
        assert!(closure.upgrade().is_none());
        assert!(old_globals.upgrade().is_none());
    }

    #[test]
    fn reset_gives_fresh_globals_but_keeps_natives() {
        let mut interpreter = Interpreter::with_output(Vec::new());
        let statements = Parser::new(scan_tokens("var a = 1;").value).parse().value;
        interpreter.interpret(&statements).unwrap();

        interpreter.reset();

        let globals = interpreter.globals();
        assert!(globals
            .borrow()
            .get(&Token::new(TokenType::IDENTIFIER, "a", 1))
            .is_err());
        assert!(globals
            .borrow()
            .get(&Token::new(TokenType::IDENTIFIER, "clock", 1))
            .is_ok());
    }
}
