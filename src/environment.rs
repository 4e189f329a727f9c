//! Runtime scope frames.
//!
//! An [`Environment`] is shared (`Rc<RefCell<_>>`) by the interpreter and every
//! closure created while it was active, so it lives as long as its longest
//! holder rather than until its block exits.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::trace;

use crate::error::{LoxError, Result};
use crate::token::Token;
use crate::value::Value;

/// Shared handle to a scope frame.
pub type EnvRef = Rc<RefCell<Environment>>;

#[derive(Debug, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
    enclosing: Option<EnvRef>,
}

impl Environment {
    /// A root (global) frame.
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: None,
        }
    }

    pub fn with_enclosing(enclosing: EnvRef) -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }
    }

    /// Bind `name` in this frame.  Never fails; rebinding shadows.
    pub fn define(&mut self, name: &str, value: Value) {
        trace!("define {}", name);

        self.values.insert(name.to_string(), value);
    }

    /// Look `name` up here, then outward through the enclosing chain.
    pub fn get(&self, name: &Token) -> Result<Value> {
        if let Some(value) = self.values.get(&name.lexeme) {
            Ok(value.clone())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow().get(name)
        } else {
            Err(undefined(name))
        }
    }

    /// Overwrite the nearest existing binding of `name`.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<()> {
        if let Some(slot) = self.values.get_mut(&name.lexeme) {
            *slot = value;
            Ok(())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow_mut().assign(name, value)
        } else {
            Err(undefined(name))
        }
    }

    /// Drop every binding and the parent link.  Used to break reference
    /// cycles once a run is over.
    pub fn clear(&mut self) {
        self.values.clear();
        self.enclosing = None;
    }
}

/// The frame `distance` hops out from `env` (0 is `env` itself).
pub fn ancestor(env: &EnvRef, distance: usize) -> Option<EnvRef> {
    let mut current: EnvRef = Rc::clone(env);

    for _ in 0..distance {
        let next: EnvRef = current.borrow().enclosing.clone()?;
        current = next;
    }

    Some(current)
}

/// Read `name` from exactly the frame `distance` hops out.
pub fn get_at(env: &EnvRef, distance: usize, name: &Token) -> Result<Value> {
    let frame = ancestor(env, distance).ok_or_else(|| undefined(name))?;
    let value = frame.borrow().values.get(&name.lexeme).cloned();

    value.ok_or_else(|| undefined(name))
}

/// Read a binding the interpreter itself created (`this`, `super`).
pub fn get_named_at(env: &EnvRef, distance: usize, name: &str) -> Option<Value> {
    ancestor(env, distance).and_then(|frame| frame.borrow().values.get(name).cloned())
}

/// Write `name` in exactly the frame `distance` hops out.
pub fn assign_at(env: &EnvRef, distance: usize, name: &Token, value: Value) -> Result<()> {
    let frame = ancestor(env, distance).ok_or_else(|| undefined(name))?;
    let mut frame = frame.borrow_mut();

    match frame.values.get_mut(&name.lexeme) {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(undefined(name)),
    }
}

fn undefined(name: &Token) -> LoxError {
    LoxError::runtime(name.line, format!("Undefined variable '{}'.", name.lexeme))
}
