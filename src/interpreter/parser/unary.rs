use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::EvalError,
    interpreter::{
        lexer::Token,
        parser::core::{Depth, ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Negation is right-associative, so `--x` parses as `-(-x)`. Every `-`
/// counts as one nesting level.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens, depth.descend()?)?;
        return Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                  expr: Box::new(expr), });
    }
    parse_primary(tokens, depth)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := INTEGER
///              | STRING
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` when the stream is exhausted.
/// - `UnexpectedToken` for an operator or `)` in operand position.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(n), _)) => Ok(Expr::Literal { value: LiteralValue::Integer(*n) }),
        Some((Token::Str(s), _)) => Ok(Expr::Literal { value: LiteralValue::Str(s.clone()) }),
        Some((Token::Identifier(name), _)) => Ok(Expr::Variable { name: name.clone() }),
        Some((Token::LParen, offset)) => parse_grouping(tokens, *offset, depth),
        Some((tok, offset)) => Err(EvalError::UnexpectedToken { token:  tok.to_string(),
                                                                offset: *offset, }),
        None => Err(EvalError::UnexpectedEndOfInput),
    }
}

/// Parses the inside of a parenthesized group, after the `(`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: usize, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let inner = parse_expression(tokens, depth.descend()?)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(inner),
        _ => Err(EvalError::ExpectedClosingParen { offset: open }),
    }
}
