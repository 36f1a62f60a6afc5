#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// The token after the current one was not the one the grammar requires.
    UnexpectedToken {
        /// The kind of token that was expected, as its display name.
        expected: &'static str,
        /// The kind of token that was actually found.
        found:    String,
    },
    /// An expression began with a token no parse rule accepts.
    NoPrefixRule {
        /// The offending token's display name.
        token: String,
    },
    /// A declaration or return statement was not terminated with `;`.
    MissingSemicolon,
    /// An integer literal does not fit into a 64-bit signed integer.
    InvalidIntegerLiteral {
        /// The literal text as written in the source.
        literal: String,
    },
    /// A float literal could not be converted to a 64-bit float.
    InvalidFloatLiteral {
        /// The literal text as written in the source.
        literal: String,
    },
    /// A function literal's parameter list contained a non-identifier.
    InvalidParameter,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected next token to be {expected}, got {found} instead")
            },
            Self::NoPrefixRule { token } => {
                write!(f, "no prefix parse function for ({token}) found")
            },
            Self::MissingSemicolon => write!(f, "expected semicolon at the end of statement"),
            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "could not parse {literal:?} as integer")
            },
            Self::InvalidFloatLiteral { literal } => {
                write!(f, "could not parse {literal:?} as float")
            },
            Self::InvalidParameter => write!(f, "parameters must be identifiers"),
        }
    }
}

impl std::error::Error for ParseError {}
