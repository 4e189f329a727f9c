//! Object model: user functions (closures), classes and instances.
//!
//! Calling is the interpreter's job; these types only carry state and answer
//! lookups.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::trace;

use crate::environment::{EnvRef, Environment};
use crate::stmt::FunctionDecl;
use crate::value::Value;

/// Name of the method run when a class is called.
pub const INITIALIZER: &str = "init";

/// A function or method value: its declaration plus the environment that was
/// active where it was declared.
pub struct LoxFunction {
    pub declaration: Rc<FunctionDecl>,
    pub closure: EnvRef,
    pub is_initializer: bool,
}

impl LoxFunction {
    pub fn new(declaration: Rc<FunctionDecl>, closure: EnvRef, is_initializer: bool) -> Self {
        Self {
            declaration,
            closure,
            is_initializer,
        }
    }

    pub fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }

    pub fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    /// A copy of this method whose closure is a fresh frame, child of the
    /// method's closure, defining `this` as `instance`.
    pub fn bind(&self, instance: Rc<RefCell<LoxInstance>>) -> LoxFunction {
        trace!("Binding method '{}'", self.name());

        let mut environment = Environment::with_enclosing(Rc::clone(&self.closure));
        environment.define("this", Value::Instance(instance));

        LoxFunction {
            declaration: Rc::clone(&self.declaration),
            closure: Rc::new(RefCell::new(environment)),
            is_initializer: self.is_initializer,
        }
    }
}

impl fmt::Debug for LoxFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name())
    }
}

/// A class: name, optional superclass and its own method table.
pub struct LoxClass {
    pub name: String,
    pub superclass: Option<Rc<LoxClass>>,
    pub methods: HashMap<String, Rc<LoxFunction>>,
}

impl LoxClass {
    pub fn new(
        name: impl Into<String>,
        superclass: Option<Rc<LoxClass>>,
        methods: HashMap<String, Rc<LoxFunction>>,
    ) -> Self {
        Self {
            name: name.into(),
            superclass,
            methods,
        }
    }

    /// Walk this class, then each superclass in turn; the first match wins.
    pub fn find_method(&self, name: &str) -> Option<Rc<LoxFunction>> {
        let mut class: Option<&LoxClass> = Some(self);

        while let Some(current) = class {
            if let Some(method) = current.methods.get(name) {
                return Some(Rc::clone(method));
            }
            class = current.superclass.as_deref();
        }

        None
    }

    /// Calling a class takes as many arguments as its initializer.
    pub fn arity(&self) -> usize {
        self.find_method(INITIALIZER)
            .map(|init| init.arity())
            .unwrap_or(0)
    }
}

impl fmt::Debug for LoxClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoxClass")
            .field("name", &self.name)
            .field("superclass", &self.superclass.as_ref().map(|s| &s.name))
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// An object created by calling a class.  Fields appear on first assignment.
pub struct LoxInstance {
    pub class: Rc<LoxClass>,
    fields: HashMap<String, Value>,
}

impl LoxInstance {
    pub fn new(class: Rc<LoxClass>) -> Self {
        Self {
            class,
            fields: HashMap::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<Value> {
        self.fields.get(name).cloned()
    }

    pub fn set_field(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }
}

impl fmt::Debug for LoxInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} instance", self.class.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Token, TokenType};

    fn method(name: &str, params: usize) -> Rc<LoxFunction> {
        let declaration = FunctionDecl {
            name: Token::new(TokenType::IDENTIFIER, name, 1),
            params: (0..params)
                .map(|i| Token::new(TokenType::IDENTIFIER, format!("p{}", i), 1))
                .collect(),
            body: Vec::new(),
        };
        let closure: EnvRef = Rc::new(RefCell::new(Environment::new()));

        Rc::new(LoxFunction::new(Rc::new(declaration), closure, name == INITIALIZER))
    }

    #[test]
    fn method_lookup_walks_the_superclass_chain() {
        let foo = Rc::new(LoxClass::new(
            "Foo",
            None,
            HashMap::from([("inFoo".to_string(), method("inFoo", 0))]),
        ));
        let bar = Rc::new(LoxClass::new("Bar", Some(foo), HashMap::new()));
        let baz = LoxClass::new("Baz", Some(bar), HashMap::new());

        assert_eq!(baz.find_method("inFoo").map(|m| m.name().to_string()), Some("inFoo".into()));
        assert!(baz.find_method("missing").is_none());
    }

    #[test]
    fn class_arity_follows_initializer() {
        let class = LoxClass::new(
            "Point",
            None,
            HashMap::from([(INITIALIZER.to_string(), method(INITIALIZER, 2))]),
        );
        assert_eq!(class.arity(), 2);
        assert_eq!(LoxClass::new("Empty", None, HashMap::new()).arity(), 0);
    }

    #[test]
    fn bound_method_sees_this() {
        let class = Rc::new(LoxClass::new("Foo", None, HashMap::new()));
        let instance = Rc::new(RefCell::new(LoxInstance::new(class)));
        let bound = method("m", 0).bind(Rc::clone(&instance));

        let this = bound.closure.borrow().get(&Token::new(TokenType::THIS, "this", 1));
        assert_eq!(this.ok(), Some(Value::Instance(instance)));
    }
}
