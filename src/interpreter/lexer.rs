use logos::Logos;

use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Limits},
};

/// Represents a lexical token inside a `$...$` expression.
///
/// The token set is deliberately small: literals, names, the five arithmetic
/// operators and parentheses. Anything else is a lexing error.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `[[text]]`. The payload has the
    /// delimiters stripped.
    #[token("[[", lex_string)]
    Str(String),
    /// Constant names such as `WIDTH` or `_base`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "[[{s}]]"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Splits the body of an embedded expression into `(Token, offset)` pairs.
///
/// # Errors
/// - `LiteralTooLarge` for a digit run that does not fit in `i64`.
/// - `UnexpectedCharacter` for any input outside the token set.
/// - `TooManyTokens` once `limits.max_tokens` is exceeded.
///
/// # Example
/// ```
/// use deftoml::interpreter::{evaluator::core::Limits, lexer::{Token, tokenize}};
///
/// let tokens = tokenize("X + 1", &Limits::default()).unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("X".to_string()), 0), (Token::Plus, 2), (Token::Integer(1), 4)]);
/// ```
pub fn tokenize(source: &str, limits: &Limits) -> EvalResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        let Ok(token) = token else {
            let slice = lexer.slice();
            if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                return Err(EvalError::LiteralTooLarge { literal: slice.to_string() });
            }
            return Err(EvalError::UnexpectedCharacter { text: slice.to_string(),
                                                        offset });
        };
        if tokens.len() == limits.max_tokens {
            return Err(EvalError::TooManyTokens { limit: limits.max_tokens });
        }
        tokens.push((token, offset));
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digits overflow `i64`, which makes the lexer
/// report an error for the slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Consumes a string literal after its opening `[[`.
///
/// The literal closes on the last two brackets of the first run of `]]` or
/// more, so `[[a]]]` holds `a]`. Returns `None` when no closing `]]` follows.
fn lex_string(lex: &mut logos::Lexer<Token>) -> Option<String> {
    let rest = lex.remainder();
    let close = rest.find("]]")?;
    let run = rest[close..].bytes().take_while(|&b| b == b']').count();
    let body = rest[..close + run - 2].to_string();
    lex.bump(close + run);
    Some(body)
}
