use crate::{
    ast::UnaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::Value,
    },
};

impl Environment {
    /// Evaluates a unary operation on a value.
    ///
    /// `Negate` is defined for integers only and fails on overflow
    /// (negating `i64::MIN`).
    ///
    /// # Example
    /// ```
    /// use deftoml::{Environment, Value, ast::UnaryOperator};
    ///
    /// let v = Environment::eval_unary(UnaryOperator::Negate, &Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// assert!(Environment::eval_unary(UnaryOperator::Negate, &Value::from("a")).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Negate, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or_else(|| EvalError::Overflow { expression: format!("{op}{n}") })
            },
            (UnaryOperator::Negate, _) => {
                Err(EvalError::TypeError { details: format!("cannot apply '{op}' to {}",
                                                            value.type_name()) })
            },
        }
    }
}
