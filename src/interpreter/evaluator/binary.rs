use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        value::Value,
    },
};

impl Environment {
    /// Evaluates a binary operation between two values.
    ///
    /// Two integers go through checked integer arithmetic. Two strings may be
    /// concatenated with `+`. Every other combination is a type error.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use deftoml::{Environment, Value, ast::BinaryOperator};
    ///
    /// let sum = Environment::eval_binary(BinaryOperator::Add,
    ///                                    &Value::Integer(3),
    ///                                    &Value::Integer(4));
    /// assert_eq!(sum.unwrap(), Value::Integer(7));
    ///
    /// let joined = Environment::eval_binary(BinaryOperator::Add,
    ///                                       &Value::from("ab"),
    ///                                       &Value::from("cd"));
    /// assert_eq!(joined.unwrap(), Value::from("abcd"));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => {
                Self::eval_integer_op(op, *a, *b).map(Value::Integer)
            },
            (Value::Str(a), Value::Str(b)) if op == BinaryOperator::Add => {
                Ok(Value::Str(format!("{a}{b}")))
            },
            _ => Err(EvalError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                                             left.type_name(),
                                                             right.type_name()) }),
        }
    }

    /// Applies an arithmetic operator to two integers.
    ///
    /// Division truncates toward zero and the remainder takes the sign of the
    /// dividend.
    ///
    /// # Errors
    /// - `DivisionByZero` for `/` or `%` with a zero divisor.
    /// - `Overflow` when the result does not fit in `i64`.
    pub fn eval_integer_op(op: BinaryOperator, a: i64, b: i64) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div | Mod if b == 0 => return Err(EvalError::DivisionByZero),
            Div => a.checked_div(b),
            Mod => a.checked_rem(b),
        };

        result.ok_or_else(|| EvalError::Overflow { expression: format!("{a} {op} {b}") })
    }
}
