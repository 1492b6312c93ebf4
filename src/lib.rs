//! # linecalc
//!
//! linecalc is a small interpreter for a line-oriented arithmetic language.
//! Each line is tokenized, parsed into an expression tree and evaluated
//! against a variable store that lives for the whole session, so values
//! assigned on one line stay visible on the next.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{evaluator::evaluate, lexer::tokenize, parser::statement::parse_statement},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of one line of source code as a tree. The AST is built
/// by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the expression and statement types of the language.
/// - Keeps every node exclusively owned by its parent, so trees are acyclic
///   and torn down after evaluation.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting one
/// line, grouped into parse-time and run-time failures. Every failure is
/// local to the line it occurred on: the session and its variables survive.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the session
/// state to provide a complete runtime for line-by-line interpretation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and the
///   session context.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::{error::Error, interpreter::context::Context};

/// Interprets one line of source code against a session context.
///
/// The line is tokenized, parsed into a single statement and evaluated.
/// Assignments mutate the context and persist across calls; everything else
/// about a call is independent. A `printf(...)` statement writes its result
/// to stdout as one line of decimal text.
///
/// # Returns
/// - `Ok(Some(value))` when the line produced a value (an expression, an
///   assignment, or a print statement).
/// - `Ok(None)` when the line was blank.
///
/// # Errors
/// Returns an error if the line could not be tokenized, parsed or evaluated.
/// A failed line never alters variables established by earlier lines.
///
/// # Examples
/// ```
/// use linecalc::{Context, interpret};
///
/// let mut ctx = Context::new();
/// interpret(&mut ctx, "a = 5").unwrap();
/// assert_eq!(interpret(&mut ctx, "a + 1").unwrap(), Some(6));
/// ```
pub fn interpret(ctx: &mut Context, line: &str) -> Result<Option<i64>, Error> {
    let tokens = tokenize(line)?;
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut iter = tokens.iter().peekable();
    let statement = parse_statement(&mut iter, ctx)?;

    if let Some(token) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"), }.into());
    }

    match statement {
        Statement::Print { expr } => {
            let value = evaluate(&expr)?;
            println!("{value}");
            Ok(Some(value))
        },
        Statement::Expression { expr } => Ok(Some(evaluate(&expr)?)),
    }
}
