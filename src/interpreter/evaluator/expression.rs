use std::sync::LazyLock;

use regex::Regex;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Environment, EvalResult, Limits},
        lexer::tokenize,
        parser::core::parse,
        value::Value,
    },
};

/// Matches a whole constant name.
pub static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[_a-zA-Z][_a-zA-Z0-9]*$").expect("identifier pattern is valid"));

const STRING_OPEN: &str = "[[";
const STRING_CLOSE: &str = "]]";
const EMBEDDED_DELIMITER: char = '$';

/// Resolves an expression string into a value.
///
/// The forms are tried in order, and the first match wins:
/// 1. `[[text]]` is the string `text`.
/// 2. A run of ASCII digits is a non-negative integer.
/// 3. A bound constant name yields its value.
/// 4. `$...$` is parsed and evaluated as an arithmetic expression.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// - `EmptyExpression` for blank input.
/// - `UnknownConstant` for a name that is not bound.
/// - `InvalidExpression` for anything that matches no form.
/// - Any lexing, parsing or evaluation error from an embedded expression.
///
/// # Example
/// ```
/// use deftoml::{Environment, Limits, Value, evaluate_expression};
///
/// let mut env = Environment::new();
/// env.define("X", Value::Integer(5));
/// let limits = Limits::default();
///
/// assert_eq!(evaluate_expression("[[hello]]", &env, &limits).unwrap(), Value::from("hello"));
/// assert_eq!(evaluate_expression("42", &env, &limits).unwrap(), Value::Integer(42));
/// assert_eq!(evaluate_expression("X", &env, &limits).unwrap(), Value::Integer(5));
/// assert_eq!(evaluate_expression("$X * 2 + 1$", &env, &limits).unwrap(), Value::Integer(11));
/// assert!(evaluate_expression("-3", &env, &limits).is_err());
/// ```
pub fn evaluate_expression(expression: &str,
                           environment: &Environment,
                           limits: &Limits)
                           -> EvalResult<Value> {
    let expression = expression.trim();

    if let Some(text) = string_literal(expression) {
        return Ok(Value::Str(text.to_string()));
    }
    if is_integer_literal(expression) {
        return expression.parse()
                         .map(Value::Integer)
                         .map_err(|_| EvalError::LiteralTooLarge { literal: expression.to_string() });
    }
    if let Some(value) = environment.get(expression) {
        return Ok(value.clone());
    }
    if let Some(body) = embedded_expression(expression) {
        return evaluate_embedded(body, environment, limits);
    }

    if expression.is_empty() {
        Err(EvalError::EmptyExpression)
    } else if IDENTIFIER.is_match(expression) {
        Err(EvalError::UnknownConstant { name: expression.to_string() })
    } else {
        Err(EvalError::InvalidExpression { expression: expression.to_string() })
    }
}

/// Lexes, parses and evaluates the body of a `$...$` expression.
///
/// # Example
/// ```
/// use deftoml::{
///     Environment, Limits, Value, error::EvalError,
///     interpreter::evaluator::expression::evaluate_embedded,
/// };
///
/// let env = Environment::new();
/// let limits = Limits::default();
///
/// assert_eq!(evaluate_embedded("(1 + 2) * -3", &env, &limits).unwrap(), Value::Integer(-9));
/// assert_eq!(evaluate_embedded("1 / 0", &env, &limits), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate_embedded(body: &str, environment: &Environment, limits: &Limits) -> EvalResult<Value> {
    let tokens = tokenize(body, limits)?;
    let expr = parse(&tokens, limits)?;
    environment.eval(&expr)
}

/// Returns the text between `[[` and `]]` when the whole expression is a
/// string literal.
fn string_literal(expression: &str) -> Option<&str> {
    if expression.len() < STRING_OPEN.len() + STRING_CLOSE.len() {
        return None;
    }
    expression.strip_prefix(STRING_OPEN)?.strip_suffix(STRING_CLOSE)
}

fn is_integer_literal(expression: &str) -> bool {
    !expression.is_empty() && expression.bytes().all(|b| b.is_ascii_digit())
}

/// Returns the body of a `$...$` expression.
fn embedded_expression(expression: &str) -> Option<&str> {
    if expression.len() < 2 {
        return None;
    }
    expression.strip_prefix(EMBEDDED_DELIMITER)?.strip_suffix(EMBEDDED_DELIMITER)
}
