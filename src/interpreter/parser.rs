/// Parser entry points and shared types.
///
/// Holds the `ParseResult` alias, the nesting-depth guard and the top-level
/// `parse` function that checks the whole token stream was consumed.
pub mod core;

/// Unary and primary expressions.
///
/// Handles prefix negation, literals, constant names and parenthesized
/// groups.
pub mod unary;

/// Binary operator precedence levels.
///
/// Implements the additive and multiplicative levels, both
/// left-associative.
pub mod binary;
