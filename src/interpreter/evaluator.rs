/// Core evaluation logic and the constant environment.
///
/// Contains the `Environment`, the evaluation `Limits`, and the tree-walking
/// evaluator for parsed embedded expressions.
pub mod core;

/// Binary operator evaluation logic.
///
/// Checked integer arithmetic and string concatenation.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Expression resolution.
///
/// Classifies an expression string as a string literal, integer literal,
/// constant reference or embedded expression, and resolves it.
pub mod expression;

/// Array literal contents.
///
/// Splits the text between `array(` and `)` on commas and resolves each
/// element.
pub mod array;
