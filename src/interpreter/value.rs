use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::Block,
    interpreter::evaluator::{environment::ScopeId, function::builtin::Builtin},
};

/// A user-defined function value.
///
/// Created when a `kaam_gar_muji` literal is evaluated. The body block is
/// shared with the AST node that produced it, and `scope` is the handle of
/// the environment that was active at the literal's evaluation site, i.e.
/// the closure's captured scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Parameter names, bound on every call.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Rc<Block>,
    /// Handle of the captured defining scope.
    pub scope:      ScopeId,
}

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce, plus the `Return`
/// sentinel, which `patha_muji` creates and the nearest call boundary
/// unwraps; user code never observes it.
///
/// Arrays and hash maps have shared-mutable interiors so that builtins and
/// index assignment mutate them in place through any alias.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
    /// A boolean: `sacho_muji` or `jhut_muji`.
    Bool(bool),
    /// An immutable string.
    Str(String),
    /// An ordered, mutable sequence of values.
    Array(Rc<RefCell<Vec<Self>>>),
    /// A mutable mapping from string keys to values.
    HashMap(Rc<RefCell<HashMap<String, Self>>>),
    /// A user-defined function with its captured scope.
    Function(Rc<Function>),
    /// A predefined native function.
    Builtin(&'static Builtin),
    /// The return sentinel wrapping the returned value.
    Return(Box<Self>),
    /// The absence of a value, displayed as `khali_muji`.
    Null,
}

impl Value {
    /// Returns the type name used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Float(_) => "FLOAT",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::HashMap(_) => "HASHMAP",
            Self::Function(_) => "KAAM_GAR",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN",
            Self::Null => "NULL",
        }
    }

    /// Reports whether the value counts as true in a condition.
    ///
    /// Only `jhut_muji` and `khali_muji` are falsy; everything else is
    /// truthy, including `0` and the empty string.
    ///
    /// # Example
    /// ```
    /// use lekhmuji::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Null)
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Builds an array value from a vector of elements.
    #[must_use]
    pub fn array(elements: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(elements)))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::array(elements)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(true) => write!(f, "sacho_muji"),
            Self::Bool(false) => write!(f, "jhut_muji"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Array(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
            Self::HashMap(pairs) => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key} : {value}")?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                write!(f, "fn(")?;
                for (index, parameter) in function.parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {{...}}")
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Return(inner) => write!(f, "{inner}"),
            Self::Null => write!(f, "khali_muji"),
        }
    }
}
