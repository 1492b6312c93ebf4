use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use linecalc::{Context, interpret};

/// linecalc is a small line-oriented calculator with integer arithmetic,
/// variables and a printf statement.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to run line by line; starts the interactive prompt when
    /// omitted.
    file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.file {
        Some(path) => run_file(&path),
        None => run_interactive(),
    }
}

/// Runs a script file, one line at a time.
///
/// A failed line is reported to stderr with its 1-based line number and the
/// remaining lines are still attempted; variables assigned by earlier good
/// lines stay intact.
fn run_file(path: &Path) {
    let script = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        std::process::exit(1);
    });

    let mut ctx = Context::new();

    for (number, line) in script.lines().enumerate() {
        if let Err(e) = interpret(&mut ctx, line) {
            eprintln!("line {}: {e}", number + 1);
        }
    }
}

/// Runs the interactive prompt until end of input or the literal line `exit`.
fn run_interactive() {
    println!("Interactive mode. Type 'exit' to quit.");

    let mut ctx = Context::new();

    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = line.trim_end_matches(['\n', '\r']);
        if line == "exit" {
            break;
        }

        if let Err(e) = interpret(&mut ctx, line) {
            eprintln!("{e}");
        }
    }
}
