use std::{fs, io};

use clap::Parser;
use lekhmuji::{interpreter::evaluator::Context, repl};

/// lekhmuji is a small, dynamically-typed scripting language with Nepali
/// keywords. Run a script file, or start the REPL by passing no argument.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the script to run.
    file: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.file {
        Some(path) => interpret(&path),
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            repl::start(&mut stdin.lock(), &mut stdout.lock());
        },
    }
}

fn interpret(path: &str) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        std::process::exit(1);
    });

    let program = match lekhmuji::parse(&source) {
        Ok(program) => program,
        Err(errors) => {
            for error in errors {
                println!("{error}");
            }
            return;
        },
    };

    let mut context = Context::new();
    match context.eval_program(&program) {
        Ok(value) => {
            if !value.is_null() {
                println!("{value}");
            }
        },
        Err(error) => println!("ERROR: {error}"),
    }
}
