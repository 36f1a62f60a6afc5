/// Walks the AST and produces values.
///
/// This module contains the evaluation context, the scope arena, the
/// operator and control-flow semantics, and the builtin function table.
///
/// # Responsibilities
/// - Dispatches on AST nodes and threads the current scope through the
///   walk.
/// - Implements operator semantics, truthiness, closures and calls.
/// - Propagates the return sentinel and runtime errors.
pub mod evaluator;
/// Turns source text into tokens.
///
/// Defines the token model, the keyword table, and a single-pass scanner
/// with one rune of look-ahead.
///
/// # Responsibilities
/// - Produces one token per `next_token` call, ending with `Eof`.
/// - Recognizes two-character operators, string literals, numeric
///   literals, identifiers and `$...$` comments.
/// - Records comment-termination failures without aborting.
pub mod lexer;
/// Turns tokens into an AST.
///
/// An operator-precedence (Pratt) parser: one expression driver plus
/// prefix and infix rules keyed on token kind.
///
/// # Responsibilities
/// - Parses statements, blocks and every expression form.
/// - Enforces the precedence ladder and associativity rules.
/// - Accumulates parse errors and resynchronizes at statement boundaries.
pub mod parser;
/// Runtime values.
///
/// The value sum type, type names for diagnostics, truthiness, and the
/// display forms the driver prints.
pub mod value;
