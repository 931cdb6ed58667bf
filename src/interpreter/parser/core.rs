use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{
        evaluator::core::Limits,
        lexer::Token,
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, EvalError>;

/// Tracks how deeply the parser has recursed into nested groups and
/// negations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Depth {
    current: usize,
    limit:   usize,
}

impl Depth {
    /// Starts at depth zero with the given limit.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { current: 0,
               limit }
    }

    /// Returns the depth one level further in.
    ///
    /// # Errors
    /// `NestingTooDeep` once the limit is reached.
    pub fn descend(self) -> ParseResult<Self> {
        if self.current >= self.limit {
            return Err(EvalError::NestingTooDeep { limit: self.limit });
        }
        Ok(Self { current: self.current + 1,
                  limit:   self.limit, })
    }
}

/// Parses a complete token stream into a single expression.
///
/// The stream must hold exactly one expression: an empty stream is an
/// `EmptyExpression` error and leftover tokens are reported as unexpected.
///
/// # Example
/// ```
/// use deftoml::interpreter::{
///     evaluator::core::Limits,
///     lexer::tokenize,
///     parser::core::parse,
/// };
///
/// let limits = Limits::default();
/// let tokens = tokenize("(1 + 2) * 3", &limits).unwrap();
/// assert!(parse(&tokens, &limits).is_ok());
///
/// let tokens = tokenize("1 2", &limits).unwrap();
/// assert!(parse(&tokens, &limits).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)], limits: &Limits) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, Depth::new(limits.max_depth))?;

    if let Some((token, offset)) = iter.next() {
        return Err(EvalError::UnexpectedToken { token:  token.to_string(),
                                                offset: *offset, });
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for recursive descent. It begins at the lowest
/// precedence level.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: Depth) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth)
}
