use std::path::PathBuf;

/// Syntax errors.
///
/// Raised by the line dispatcher when a line matches no directive, or when
/// the input ends inside a block comment.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains every failure that can occur while resolving an expression:
/// unrecognized forms, unknown constants, malformed embedded expressions,
/// arithmetic faults and exceeded limits.
pub mod eval_error;

pub use eval_error::EvalError;
pub use syntax_error::SyntaxError;

/// The error returned by the top-level parse and render functions.
///
/// Every failure aborts the whole translation; there is no partial result.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A line could not be classified, or a block comment was left open.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// An expression on the given line could not be evaluated.
    #[error("line {line}: {source}")]
    Eval {
        /// The 1-based line holding the failing directive.
        line:   usize,
        /// What went wrong.
        #[source]
        source: EvalError,
    },
    /// The input file could not be opened or read.
    #[error("cannot read '{}': {source}", .path.display())]
    Resource {
        /// The path that was requested.
        path:   PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The TOML serializer rejected the document.
    #[error("cannot render TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Error {
    /// Returns the input line the error refers to, if any.
    ///
    /// ## Example
    /// ```
    /// let err = deftoml::parse_str("def A = 1\nnonsense").unwrap_err();
    /// assert_eq!(err.line(), Some(2));
    /// ```
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax(SyntaxError::UnrecognizedLine { line, .. }
                         | SyntaxError::UnterminatedBlockComment { line }) => Some(*line),
            Self::Eval { line, .. } => Some(*line),
            Self::Resource { .. } | Self::Serialize(_) => None,
        }
    }
}
