/// Lexing errors.
///
/// Defines the errors the lexer can record while scanning source text.
/// The lexer never aborts; it accumulates these and keeps producing tokens
/// so the parser can stop cleanly at end of input.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing the token stream:
/// unexpected tokens, missing delimiters, malformed literals, and
/// expressions with no matching parse rule.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// type mismatches, unbound identifiers, bad indexes, and division by zero.
/// Their display strings are part of the language's observable behavior.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
