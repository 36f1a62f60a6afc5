use std::io::{BufRead, Write};

use crate::interpreter::evaluator::Context;

/// The prompt printed before every input line.
pub const PROMPT: &str = "(lekh_muji) >> ";

/// Runs the read-eval-print loop until the input ends.
///
/// One evaluation context lives for the whole session, so bindings made on
/// one line are visible on the next. Per line: lexer and parser errors
/// print one per line prefixed with a tab and skip evaluation; otherwise
/// the line's value prints in its display form, with nothing printed for
/// `khali_muji` and runtime errors printed as `ERROR: message`.
///
/// # Panics
/// Panics only if the output writer fails, which for the terminal streams
/// the driver passes does not happen in practice.
pub fn start(input: &mut dyn BufRead, output: &mut dyn Write) {
    let mut context = Context::new();
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}").expect("failed to write prompt");
        output.flush().expect("failed to flush output");

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {},
        }

        let program = match crate::parse(&line) {
            Ok(program) => program,
            Err(errors) => {
                for error in errors {
                    writeln!(output, "\t{error}").expect("failed to write parse error");
                }
                continue;
            },
        };

        match context.eval_program(&program) {
            Ok(value) => {
                if !value.is_null() {
                    writeln!(output, "{value}").expect("failed to write value");
                }
            },
            Err(error) => {
                writeln!(output, "ERROR: {error}").expect("failed to write error");
            },
        }
    }
}
