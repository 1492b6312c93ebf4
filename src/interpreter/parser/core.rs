use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{context::Context, lexer::Token, parser::binary::parse_additive},
};

/// Result type used by the parser.
///
/// Assignments are evaluated eagerly while parsing, so parse functions can
/// surface runtime errors (an undefined variable, a failing right-hand side)
/// as well as parse errors.
pub type ParseResult<T> = Result<T, Error>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence tier, additive (which comparisons share), and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
/// - `ctx`: Session context used to resolve identifiers.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, ctx: &mut Context) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens, ctx)
}

/// Consumes the next token when it matches `expected`.
///
/// Anything else is a syntax error naming the expected and actual token
/// kinds, which abandons the current line without ending the session.
pub(crate) fn expect<'a, I>(tokens: &mut Peekable<I>, expected: &Token) -> Result<(), ParseError>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token == expected => Ok(()),
        Some(token) => Err(ParseError::UnexpectedToken { expected: format!("{expected:?}"),
                                                         found:    format!("{token:?}"), }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
