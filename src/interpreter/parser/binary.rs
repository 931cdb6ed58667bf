use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Depth, ParseResult},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    while let Some((token, _)) = tokens.peek() {
        match token_to_binary_operator(token) {
            Some(op @ (BinaryOperator::Add | BinaryOperator::Sub)) => {
                tokens.next();
                let right = parse_multiplicative(tokens, depth)?;
                left = Expr::binary(left, op, right);
            },
            _ => break,
        }
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_unary(tokens, depth)?;
    while let Some((token, _)) = tokens.peek() {
        match token_to_binary_operator(token) {
            Some(op @ (BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)) => {
                tokens.next();
                let right = parse_unary(tokens, depth)?;
                left = Expr::binary(left, op, right);
            },
            _ => break,
        }
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use deftoml::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Percent), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}
