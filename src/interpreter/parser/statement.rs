use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        context::Context,
        lexer::Token,
        parser::core::{ParseResult, expect, parse_expression},
    },
};

/// Parses one line as a statement.
///
/// A statement is either:
/// - a print statement (`printf(expression)`), or
/// - a bare expression.
///
/// A leading `printf` token short-circuits expression parsing; everywhere
/// else `printf` is rejected, so it is only ever valid as the entire
/// statement.
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
/// - `ctx`: Session context used to resolve identifiers.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, ctx: &mut Context) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    if let Some(Token::Printf) = tokens.peek() {
        return parse_print(tokens, ctx);
    }

    let expr = parse_expression(tokens, ctx)?;
    Ok(Statement::Expression { expr })
}

/// Parses a print statement: `printf ( expression )`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>, ctx: &mut Context) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, &Token::Printf)?;
    expect(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens, ctx)?;
    expect(tokens, &Token::RParen)?;
    Ok(Statement::Print { expr })
}
