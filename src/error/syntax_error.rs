/// Represents all errors raised while classifying input lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The line is not a comment, a definition or an array literal.
    #[error("line {line}: unrecognized syntax: {text}")]
    UnrecognizedLine {
        /// The offending line, trimmed.
        text: String,
        /// The 1-based line number.
        line: usize,
    },
    /// The input ended while a `{-` block comment was still open.
    #[error("line {line}: block comment is never closed with '-}}'")]
    UnterminatedBlockComment {
        /// The line that opened the block comment.
        line: usize,
    },
}
