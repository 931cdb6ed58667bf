/// Represents a literal value inside an embedded expression.
///
/// Only the two scalar forms of the language can be written literally:
/// non-negative integers (`42`) and bracket-quoted strings (`[[text]]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A string literal with its `[[`/`]]` delimiters already stripped.
    Str(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree node for the body of a `$...$` expression.
///
/// The grammar is closed: literals, constant references, unary negation and
/// the binary arithmetic operators. There are no calls, attribute accesses or
/// any other way to reach outside the constant environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a previously defined constant.
    Variable {
        /// Name of the constant.
        name: String,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary node from two operands.
    ///
    /// ## Example
    /// ```
    /// use deftoml::ast::{BinaryOperator, Expr, LiteralValue};
    ///
    /// let one = Expr::Literal { value: LiteralValue::Integer(1) };
    /// let two = Expr::Literal { value: LiteralValue::Integer(2) };
    /// let sum = Expr::binary(one, BinaryOperator::Add, two);
    ///
    /// assert!(matches!(sum, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`), also string concatenation.
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Integer division truncating toward zero (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}

/// The syntactic category of one trimmed input line.
///
/// Every line of a configuration file falls into exactly one of these kinds.
/// The borrowed fields point into the classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// An empty line.
    Blank,
    /// A `#` line comment.
    Comment,
    /// A line opening a `{-` block comment. `closed` is set when the same
    /// line also ends with `-}`.
    BlockCommentStart {
        /// Whether the comment closes on this line.
        closed: bool,
    },
    /// A line inside an open block comment. `closes` is set when the line
    /// ends with `-}`.
    BlockCommentBody {
        /// Whether this line terminates the block comment.
        closes: bool,
    },
    /// `def NAME = EXPR`
    Definition {
        /// The constant being bound.
        name:       &'a str,
        /// The unevaluated right-hand side.
        expression: &'a str,
    },
    /// `array(EXPR, EXPR, ...)`
    ArrayLiteral {
        /// The raw text between the parentheses.
        contents: &'a str,
    },
    /// Anything else.
    Unrecognized,
}
