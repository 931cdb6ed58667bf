/// The line classifier.
///
/// Decides which syntactic category a trimmed line belongs to: blank,
/// comment, block comment, constant definition, array literal, or none.
pub mod directive;
/// The output document.
///
/// Collects the values assigned by directives under their fixed keys and
/// renders them as TOML.
pub mod document;
/// The evaluator resolves expression strings into values.
///
/// # Responsibilities
/// - Recognizes string literals, integer literals, constant references and
///   embedded `$...$` expressions.
/// - Owns the constant environment consulted during resolution.
/// - Evaluates parsed embedded expressions with checked integer arithmetic.
/// - Reports evaluation errors such as unknown constants or division by zero.
pub mod evaluator;
/// The lexer tokenizes the body of an embedded `$...$` expression.
pub mod lexer;
/// The parser builds an expression tree from lexer tokens.
///
/// A recursive-descent parser over a closed arithmetic grammar, with a bound
/// on nesting depth.
pub mod parser;
/// The directive dispatcher.
///
/// Feeds lines through the classifier, updates the constant environment and
/// the document, and tracks block-comment state across lines.
pub mod session;
/// The value module defines the resolved values of the language.
///
/// Strings, integers and arrays, with their serde serialization.
pub mod value;
