/// Represents all errors that can occur while evaluating an expression.
///
/// Offsets are byte positions inside the body of the `$...$` expression being
/// parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The expression matches none of the recognized forms.
    #[error("invalid expression: {expression}")]
    InvalidExpression {
        /// The expression text.
        expression: String,
    },
    /// A name was referenced before being defined.
    #[error("unknown constant '{name}'")]
    UnknownConstant {
        /// The referenced name.
        name: String,
    },
    /// An expression, array element or `$...$` body was empty.
    #[error("empty expression")]
    EmptyExpression,
    /// The embedded-expression lexer found a character it does not know.
    #[error("unexpected character '{text}' at offset {offset}")]
    UnexpectedCharacter {
        /// The rejected input.
        text:   String,
        /// Position of the rejected input.
        offset: usize,
    },
    /// A token appeared where the grammar does not allow it.
    #[error("unexpected token '{token}' at offset {offset}")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// Position of the token.
        offset: usize,
    },
    /// The embedded expression ended in the middle of a rule.
    #[error("unexpected end of expression")]
    UnexpectedEndOfInput,
    /// A `(` was never matched by a `)`.
    #[error("expected ')' to close the '(' at offset {offset}")]
    ExpectedClosingParen {
        /// Position of the opening parenthesis.
        offset: usize,
    },
    /// An integer literal does not fit in 64 bits.
    #[error("integer literal {literal} is too large")]
    LiteralTooLarge {
        /// The digits as written.
        literal: String,
    },
    /// Division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Integer arithmetic overflowed.
    #[error("integer overflow while computing {expression}")]
    Overflow {
        /// The operation that overflowed.
        expression: String,
    },
    /// An operator was applied to operands of the wrong type.
    #[error("type error: {details}")]
    TypeError {
        /// Details about the mismatch.
        details: String,
    },
    /// Parentheses or negations are nested deeper than allowed.
    #[error("expression is nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The configured depth limit.
        limit: usize,
    },
    /// The embedded expression has more tokens than allowed.
    #[error("expression has more than {limit} tokens")]
    TooManyTokens {
        /// The configured token limit.
        limit: usize,
    },
}
