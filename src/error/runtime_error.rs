#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised during evaluation.
///
/// The `Display` output of every variant is observable from the language
/// (the driver prints it after an `ERROR: ` prefix), so the exact wording
/// is locked by the integration tests.
pub enum RuntimeError {
    /// An infix operator was applied to operands of two different types.
    TypeMismatch {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator as written in the source.
        operator: &'static str,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// An infix operator has no meaning for its (same-typed) operands.
    UnknownInfixOperator {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator as written in the source.
        operator: &'static str,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// A prefix operator has no meaning for its operand.
    UnknownPrefixOperator {
        /// The operator as written in the source.
        operator: &'static str,
        /// Type name of the operand.
        operand:  &'static str,
    },
    /// An ordering comparison was attempted on a non-numeric operand.
    NotComparable {
        /// The operator as written in the source.
        operator: &'static str,
        /// Type name of the left operand.
        operand:  &'static str,
    },
    /// A name was neither bound in any enclosing scope nor a builtin.
    IdentifierNotFound {
        /// The identifier as written in the source.
        name: String,
    },
    /// Assignment to a name that was never declared.
    UndefinedAssignment {
        /// The identifier as written in the source.
        name: String,
    },
    /// The left side of `=` was neither an identifier nor an index.
    InvalidAssignmentTarget,
    /// A user-defined function received the wrong number of arguments.
    ArgumentsLengthMismatch,
    /// A builtin function received the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments the call supplied.
        got:  usize,
        /// The accepted count(s), as printed in the message.
        want: String,
    },
    /// A builtin function received an argument of an unsupported type.
    UnsupportedArgument {
        /// The builtin's name.
        name: &'static str,
        /// Type name of the offending argument.
        got:  &'static str,
    },
    /// An array was indexed outside `0..len`.
    IndexOutOfBounds,
    /// An array was indexed with a non-integer value.
    BadArrayIndex {
        /// Type name of the index value.
        got: &'static str,
    },
    /// A hash map was indexed with a non-string value.
    BadHashKey {
        /// Type name of the index value.
        got: &'static str,
    },
    /// Indexing was attempted on a value that supports no indexing.
    NotIndexable {
        /// Type name of the indexed value.
        got: &'static str,
    },
    /// A hash literal key did not evaluate to a string.
    HashKeyNotString,
    /// A value that is neither a function nor a builtin was called.
    NotCallable {
        /// Type name of the called value.
        got: &'static str,
    },
    /// Integer division or remainder with a zero divisor.
    DivisionByZero,
    /// Integer arithmetic overflowed the 64-bit range.
    IntegerOverflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, operator, right } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownInfixOperator { left, operator, right } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::NotComparable { operator, operand } => {
                write!(f, "cannot use '{operator}' operator for {operand}")
            },
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::UndefinedAssignment { name } => {
                write!(f, "reassignment to an undefined variable {name}")
            },
            Self::InvalidAssignmentTarget => {
                write!(f,
                       "left operand of assignment operator is neither an identifier nor an index expression")
            },
            Self::ArgumentsLengthMismatch => write!(f, "arguments length mismatch"),
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::UnsupportedArgument { name, got } => {
                write!(f, "argument to `{name}` not supported, got {got}")
            },
            Self::IndexOutOfBounds => write!(f, "array index out of bounds"),
            Self::BadArrayIndex { got } => {
                write!(f, "array index must be an integer, got {got}")
            },
            Self::BadHashKey { got } => {
                write!(f, "hashmap index must be a string, got {got}")
            },
            Self::NotIndexable { got } => write!(f, "cannot index {got}"),
            Self::HashKeyNotString => write!(f, "key must be a string"),
            Self::NotCallable { got } => {
                write!(f, "cannot apply {got}; not a function or a builtin")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow => write!(f, "integer overflow"),
        }
    }
}

impl std::error::Error for RuntimeError {}
