use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult, interpreter::value::Value};

/// Type alias for builtin function handlers.
///
/// A builtin receives the slice of evaluated argument values, already
/// checked against the declared arity.
pub type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// The builtin takes exactly `n` arguments.
    Exact(usize),
    /// The builtin accepts any arity listed in the slice.
    OneOf(&'static [usize]),
    /// The builtin accepts any number of arguments.
    Variadic,
}

impl Arity {
    fn check(self, count: usize) -> bool {
        match self {
            Self::Exact(expected) => count == expected,
            Self::OneOf(choices) => choices.contains(&count),
            Self::Variadic => true,
        }
    }

    /// The accepted count(s) as printed in arity error messages.
    fn describe(self) -> String {
        match self {
            Self::Exact(expected) => expected.to_string(),
            Self::OneOf(choices) => choices.iter()
                                           .map(ToString::to_string)
                                           .collect::<Vec<_>>()
                                           .join(" or "),
            Self::Variadic => "any".to_string(),
        }
    }
}

/// A predefined native function.
#[derive(Debug, PartialEq)]
pub struct Builtin {
    /// The name the function is registered under.
    pub name: &'static str,
    arity:    Arity,
    func:     BuiltinFn,
}

impl Builtin {
    /// Checks the arity and invokes the native implementation.
    pub(crate) fn apply(&self, args: &[Value]) -> EvalResult<Value> {
        if !self.arity.check(args.len()) {
            return Err(RuntimeError::WrongArgumentCount { got:  args.len(),
                                                          want: self.arity.describe(), });
        }
        (self.func)(args)
    }
}

/// Defines the builtin table.
///
/// Each entry provides a source-visible name, an arity specification, and
/// the function pointer implementing the builtin.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $(
                Builtin { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "lambai_muji" => { arity: Arity::Exact(1), func: length },
    "khaad_muji"  => { arity: Arity::Exact(2), func: push },
    "udaa_muji"   => { arity: Arity::OneOf(&[1, 2]), func: remove },
    "bhan_muji"   => { arity: Arity::Variadic, func: print },
}

/// Finds a builtin by name.
///
/// Consulted by identifier resolution only after the scope chain misses,
/// so a user binding with the same name shadows the builtin.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

/// `lambai_muji(x)`: the length of a string in bytes, or the element
/// count of an array or hash map.
fn length(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(value) => Ok(Value::Integer(value.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.borrow().len() as i64)),
        Value::HashMap(pairs) => Ok(Value::Integer(pairs.borrow().len() as i64)),
        other => Err(RuntimeError::UnsupportedArgument { name: "lambai_muji",
                                                         got:  other.type_name(), }),
    }
}

/// `khaad_muji(xs, v)`: appends `v` to the array in place.
fn push(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Array(elements) => {
            elements.borrow_mut().push(args[1].clone());
            Ok(Value::Null)
        },
        other => Err(RuntimeError::UnsupportedArgument { name: "khaad_muji",
                                                         got:  other.type_name(), }),
    }
}

/// `udaa_muji(xs)` / `udaa_muji(xs, i)`: removes and returns the last
/// element, or the element at index `i`.
fn remove(args: &[Value]) -> EvalResult<Value> {
    let elements = match &args[0] {
        Value::Array(elements) => elements,
        other => {
            return Err(RuntimeError::UnsupportedArgument { name: "udaa_muji",
                                                           got:  other.type_name(), });
        },
    };
    let mut elements = elements.borrow_mut();
    match args.get(1) {
        None => elements.pop().ok_or(RuntimeError::IndexOutOfBounds),
        Some(Value::Integer(position)) => {
            let position = usize::try_from(*position).ok()
                                                     .filter(|position| *position < elements.len())
                                                     .ok_or(RuntimeError::IndexOutOfBounds)?;
            Ok(elements.remove(position))
        },
        Some(other) => Err(RuntimeError::BadArrayIndex { got: other.type_name(), }),
    }
}

/// `bhan_muji(...)`: prints the display forms of all arguments, space
/// separated, on one line.
fn print(args: &[Value]) -> EvalResult<Value> {
    let line = args.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
    println!("{line}");
    Ok(Value::Null)
}
