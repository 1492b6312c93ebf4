use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        context::Context,
        evaluator::evaluate,
        lexer::Token,
        parser::core::{ParseResult, expect, parse_expression},
    },
};

/// Parses a factor, the atomic level of the grammar.
///
/// A factor is a number literal, a parenthesized sub-expression, or an
/// identifier (a variable read or an assignment), optionally followed by a
/// `^` exponent. The exponent recurses into `parse_factor` itself, so chains
/// right-associate: `2 ^ 3 ^ 2` parses as `2 ^ (3 ^ 2)`.
///
/// Grammar:
/// ```text
///     factor := ("(" expression ")" | number | identifier ("=" expression)?) ("^" factor)?
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
/// - `ctx`: Session context used to resolve identifiers.
///
/// # Returns
/// The parsed factor or a syntax error for anything that cannot start one.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>, ctx: &mut Context) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let base = match tokens.peek() {
        Some(Token::Number(value)) => {
            let value = *value;
            tokens.next();
            Expr::Number { value }
        },
        Some(Token::LParen) => parse_grouping(tokens, ctx)?,
        Some(Token::Identifier(_)) => parse_identifier(tokens, ctx)?,
        Some(token) => {
            return Err(ParseError::UnexpectedToken { expected:
                                                         "a number, a variable or '('".to_string(),
                                                     found:    format!("{token:?}"), }.into());
        },
        None => return Err(ParseError::UnexpectedEndOfInput.into()),
    };

    if let Some(Token::Caret) = tokens.peek() {
        tokens.next();
        let exponent = parse_factor(tokens, ctx)?;
        return Ok(Expr::BinaryOp { left:  Box::new(base),
                                   op:    BinaryOperator::Pow,
                                   right: Box::new(exponent), });
    }

    Ok(base)
}

/// Parses a parenthesized sub-expression: `( expression )`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, ctx: &mut Context) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens, ctx)?;
    expect(tokens, &Token::RParen)?;
    Ok(expr)
}

/// Parses an identifier factor: a variable read or an assignment.
///
/// One token of lookahead decides which. `name = expr` parses the right-hand
/// side as a full expression, evaluates it eagerly, stores the result in the
/// session context and yields a literal node holding the assigned value, so
/// assignments compose as sub-expressions. A bare identifier reads its
/// current value and yields a literal node; reading an undefined variable is
/// an error that abandons the line.
fn parse_identifier<'a, I>(tokens: &mut Peekable<I>, ctx: &mut Context) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let name = match tokens.next() {
        Some(Token::Identifier(name)) => name.clone(),
        Some(token) => {
            return Err(ParseError::UnexpectedToken { expected: "an identifier".to_string(),
                                                     found:    format!("{token:?}"), }.into());
        },
        None => return Err(ParseError::UnexpectedEndOfInput.into()),
    };

    if let Some(Token::Equals) = tokens.peek() {
        tokens.next();
        let rhs = parse_expression(tokens, ctx)?;
        let value = evaluate(&rhs)?;
        ctx.assign(&name, value);
        return Ok(Expr::Number { value });
    }

    let value = ctx.lookup(&name)?;
    Ok(Expr::Number { value })
}
