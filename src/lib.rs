//! # deftoml
//!
//! deftoml translates a small line-oriented configuration language into TOML.
//! A file is a sequence of directives, one per line:
//!
//! ```text
//! # line comment
//! {- block comment,
//!    possibly spanning lines -}
//! def NAME = EXPR
//! array(EXPR, EXPR, ...)
//! ```
//!
//! where an `EXPR` is a string literal `[[text]]`, a non-negative integer, a
//! previously defined constant, or an embedded arithmetic expression
//! `$NAME * 2 + 1$`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::{fs, path::Path};

use tracing::info;

pub use crate::{
    error::{Error, EvalError, SyntaxError},
    interpreter::{
        document::Document,
        evaluator::{
            core::{Environment, Limits},
            expression::evaluate_expression,
        },
        session::Session,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the expression tree built from embedded `$...$`
/// expressions and the `LineKind` classification of input lines.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines syntax errors for lines that match no directive.
/// - Defines evaluation errors for expressions that cannot be resolved.
/// - Wraps I/O and serialization failures in a single top-level `Error`.
pub mod error;
/// Orchestrates the translation.
///
/// Ties together the line classifier, the dispatcher session, the
/// expression evaluator with its lexer and parser, and the output document.
pub mod interpreter;

/// Parses configuration source held in a string.
///
/// # Errors
/// Returns the first syntax or evaluation error encountered.
///
/// # Examples
/// ```
/// use deftoml::{Value, parse_str};
///
/// let doc = parse_str("def X = 5\narray([[a]], X, $X + 1$)").unwrap();
/// assert_eq!(doc.array(), Some(&[Value::from("a"), Value::Integer(5), Value::Integer(6)][..]));
///
/// // 'Z' is not defined.
/// assert!(parse_str("def Y = Z").is_err());
/// ```
pub fn parse_str(source: &str) -> Result<Document, Error> {
    parse_lines(source.lines())
}

/// Parses configuration source given as a sequence of lines.
///
/// Each call uses a fresh [`Session`], so parsing the same lines twice yields
/// equal documents.
///
/// # Errors
/// Returns the first syntax or evaluation error encountered.
pub fn parse_lines<I, S>(lines: I) -> Result<Document, Error>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
{
    Session::new().run(lines)
}

/// Reads a UTF-8 file and parses it.
///
/// # Errors
/// `Error::Resource` if the file cannot be read, otherwise as
/// [`parse_str`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document, Error> {
    let path = path.as_ref();
    info!(path = %path.display(), "reading configuration");

    let source = fs::read_to_string(path).map_err(|source| Error::Resource { path: path.to_path_buf(),
                                                                              source })?;
    parse_str(&source)
}

/// Renders a document as TOML text.
///
/// # Errors
/// `Error::Serialize` if the serializer rejects the document.
///
/// # Examples
/// ```
/// let doc = deftoml::parse_str("array(99)").unwrap();
/// assert_eq!(deftoml::to_toml(&doc).unwrap(), "array = [99]\n");
/// ```
pub fn to_toml(document: &Document) -> Result<String, Error> {
    document.to_toml()
}
