use crate::interpreter::{
    evaluator::{
        core::{Environment, EvalResult, Limits},
        expression::evaluate_expression,
    },
    value::Value,
};

/// Resolves the contents of an `array(...)` literal.
///
/// The contents are split on every comma; there is no nesting and no
/// escaping, so a string literal cannot contain a comma. Each piece is
/// trimmed and resolved with [`evaluate_expression`]. Empty contents give an
/// empty array, while an empty piece between commas is an error.
///
/// # Example
/// ```
/// use deftoml::{Environment, Limits, Value, interpreter::evaluator::array::parse_array};
///
/// let env = Environment::new();
/// let limits = Limits::default();
///
/// let values = parse_array(" [[a]], 2 ,$1 + 2$", &env, &limits).unwrap();
/// assert_eq!(values, vec![Value::from("a"), Value::Integer(2), Value::Integer(3)]);
///
/// assert!(parse_array("", &env, &limits).unwrap().is_empty());
/// assert!(parse_array("1,,2", &env, &limits).is_err());
/// ```
pub fn parse_array(contents: &str, environment: &Environment, limits: &Limits) -> EvalResult<Vec<Value>> {
    let contents = contents.trim();
    if contents.is_empty() {
        return Ok(Vec::new());
    }

    contents.split(',')
            .map(|piece| evaluate_expression(piece.trim(), environment, limits))
            .collect()
}
