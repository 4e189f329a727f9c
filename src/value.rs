//! Runtime values and the host‑supplied native functions.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use chrono::Utc;
use log::debug;

use crate::object::{LoxClass, LoxFunction, LoxInstance};

/// Signature of a host function callable from Lox.  An `Err` becomes a
/// runtime error at the call site.
pub type NativeFn = fn(&[Value]) -> Result<Value, String>;

/// A callable installed by the host before a run.
pub struct NativeFunction {
    pub name: String,
    pub arity: usize,
    pub func: NativeFn,
}

impl NativeFunction {
    pub fn new(name: impl Into<String>, arity: usize, func: NativeFn) -> Self {
        Self {
            name: name.into(),
            arity,
            func,
        }
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({}/{})", self.name, self.arity)
    }
}

/// Every value a Lox program can produce.
#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    Function(Rc<LoxFunction>),
    Class(Rc<LoxClass>),
    Instance(Rc<RefCell<LoxInstance>>),
    NativeFunction(Rc<NativeFunction>),
}

impl Value {
    /// Only `nil` and `false` are falsey.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Rc::from(s))
    }
}

/// `nil` equals only `nil`; values of different types are never equal;
/// functions, classes and instances compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => Rc::ptr_eq(a, b),
            (Value::Instance(a), Value::Instance(b)) => Rc::ptr_eq(a, b),
            (Value::NativeFunction(a), Value::NativeFunction(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),

            Value::Bool(b) => write!(f, "{}", b),

            Value::Number(n) => {
                if *n == 0.0 && n.is_sign_negative() {
                    f.write_str("-0")
                } else if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    // 3.0 → "3"
                    let mut buf = itoa::Buffer::new();
                    f.write_str(buf.format(*n as i64))
                } else {
                    write!(f, "{}", n)
                }
            }

            Value::String(s) => f.write_str(s),

            Value::Function(function) => write!(f, "<fn {}>", function.name()),

            Value::Class(class) => f.write_str(&class.name),

            Value::Instance(instance) => write!(f, "{} instance", instance.borrow().class.name),

            Value::NativeFunction(_) => f.write_str("<native fn>"),
        }
    }
}

// ───────────────────────────── standard natives ─────────────────────────────

/// `clock()` ‑ seconds since the Unix epoch, with sub‑second precision.
fn clock(_args: &[Value]) -> Result<Value, String> {
    let micros: i64 = Utc::now().timestamp_micros();

    debug!("clock() -> {} µs", micros);

    Ok(Value::Number(micros as f64 / 1_000_000.0))
}

/// `sleep(seconds)` ‑ pause the whole interpreter.
fn sleep(args: &[Value]) -> Result<Value, String> {
    let seconds: f64 = match args.first() {
        Some(Value::Number(n)) if *n >= 0.0 => *n,
        _ => return Err("sleep() expects a non-negative number of seconds.".to_string()),
    };

    let duration: Duration = Duration::try_from_secs_f64(seconds)
        .map_err(|e| format!("sleep() duration out of range: {}", e))?;

    debug!("sleep({:?})", duration);

    std::thread::sleep(duration);

    Ok(Value::Nil)
}

/// The reference natives every session installs by default.
pub fn standard_natives() -> Vec<NativeFunction> {
    vec![
        NativeFunction::new("clock", 0, clock),
        NativeFunction::new("sleep", 1, sleep),
    ]
}
