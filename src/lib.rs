//! # lekhmuji
//!
//! lekhmuji is a tree-walking interpreter for a small, dynamically-typed,
//! expression-oriented scripting language with a Nepali keyword set. It
//! lexes source text, parses it with an operator-precedence parser, and
//! evaluates the syntax tree against lexically-scoped environments with
//! first-class closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{lexer::Lexer, parser::Parser};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression enums that represent
/// the syntactic structure of source code as a tree, and their `Display`
/// impls, whose output re-parses to an equivalent tree.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Defines the operator enums shared by parser and evaluator.
/// - Pretty-prints every node back to parseable source.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running source
/// code. Runtime error messages are part of the language's observable
/// behavior and their wording is frozen by the test suite.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Implements `Display` and `std::error::Error` for each.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the builtin functions to provide a complete runtime
/// for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides the entry points for parsing and evaluating user code.
pub mod interpreter;
/// The interactive driver.
///
/// A line-oriented REPL that keeps one evaluation context alive across
/// inputs.
pub mod repl;

/// Parses source text into a program.
///
/// Runs the lexer and parser to completion. When either recorded errors,
/// every message is returned (lexer errors first) and the partial program
/// is discarded; the driver prints the messages and skips evaluation.
///
/// # Errors
/// Returns the display strings of all lexer and parser errors, in order.
///
/// # Examples
/// ```
/// let program = lekhmuji::parse("thoos_muji x = 1; x + 1;").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// // `@` belongs to no token class, so parsing reports an error.
/// assert!(lekhmuji::parse("@;").is_err());
/// ```
pub fn parse(source: &str) -> Result<ast::Program, Vec<String>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    let errors: Vec<String> = parser.lexer_errors()
                                    .iter()
                                    .map(ToString::to_string)
                                    .chain(parser.errors().iter().map(ToString::to_string))
                                    .collect();
    if errors.is_empty() {
        Ok(program)
    } else {
        Err(errors)
    }
}
