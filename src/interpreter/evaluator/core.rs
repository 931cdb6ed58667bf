use std::collections::HashMap;

use crate::{
    ast::{Expr, LiteralValue},
    error::EvalError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default bound on nested parentheses and negations in `$...$` expressions.
pub const MAX_DEPTH: usize = 64;
/// Default bound on the number of tokens in one `$...$` expression.
pub const MAX_TOKENS: usize = 1024;

/// Resource bounds applied to embedded expressions.
///
/// The parser recurses once per nesting level and the evaluator once per
/// tree node, so both are capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting of parentheses and unary minus.
    pub max_depth:  usize,
    /// Maximum number of tokens in one expression body.
    pub max_tokens: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth:  MAX_DEPTH,
               max_tokens: MAX_TOKENS, }
    }
}

/// The constant environment of one parse session.
///
/// Maps constant names to their resolved values. A later definition of the
/// same name replaces the earlier one. The environment is owned by a single
/// [`Session`](crate::Session) and never outlives it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    constants: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, returning the value it replaces, if any.
    ///
    /// ## Example
    /// ```
    /// use deftoml::{Environment, Value};
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(env.define("A", Value::Integer(1)), None);
    /// assert_eq!(env.define("A", Value::Integer(2)), Some(Value::Integer(1)));
    /// assert_eq!(env.get("A"), Some(&Value::Integer(2)));
    /// ```
    pub fn define(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.constants.insert(name.into(), value)
    }

    /// Looks up a constant by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }

    /// Number of bound constants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    /// Returns `true` when no constant is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Evaluates a parsed embedded expression against this environment.
    ///
    /// Literals evaluate to themselves, variables are looked up, and
    /// operators are applied through [`Environment::eval_unary`] and
    /// [`Environment::eval_binary`].
    ///
    /// # Errors
    /// - `UnknownConstant` for a variable that is not bound.
    /// - Any error raised by the operators (type errors, overflow, division
    ///   by zero).
    ///
    /// # Example
    /// ```
    /// use deftoml::{
    ///     Environment, Value,
    ///     ast::{BinaryOperator, Expr, LiteralValue},
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.define("X", Value::Integer(5));
    ///
    /// let expr = Expr::binary(Expr::Variable { name: "X".to_string() },
    ///                         BinaryOperator::Mul,
    ///                         Expr::Literal { value: LiteralValue::Integer(3) });
    /// assert_eq!(env.eval(&expr).unwrap(), Value::Integer(15));
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(Self::eval_literal(value)),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::UnaryOp { op, expr } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value)
            },
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right)
            },
        }
    }

    fn eval_literal(value: &LiteralValue) -> Value {
        match value {
            LiteralValue::Integer(n) => Value::Integer(*n),
            LiteralValue::Str(s) => Value::Str(s.clone()),
        }
    }

    fn eval_variable(&self, name: &str) -> EvalResult<Value> {
        self.get(name)
            .cloned()
            .ok_or_else(|| EvalError::UnknownConstant { name: name.to_string() })
    }
}
