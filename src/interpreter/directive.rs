use std::sync::LazyLock;

use regex::Regex;

use crate::ast::LineKind;

/// Starts a line comment.
pub const LINE_COMMENT: &str = "#";
/// Opens a block comment.
pub const BLOCK_COMMENT_OPEN: &str = "{-";
/// Closes a block comment.
pub const BLOCK_COMMENT_CLOSE: &str = "-}";

static DEFINITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^def\s+([_a-zA-Z][_a-zA-Z0-9]*)\s*=\s*(.+)$").expect("definition pattern is valid")
});

static ARRAY_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^array\((.*)\)$").expect("array pattern is valid"));

/// Classifies one trimmed line.
///
/// `in_block_comment` is the dispatcher's state before this line. While it
/// is set, every line is part of the comment and only the closing marker
/// matters. A line that opens a block comment is checked for the closing
/// marker too, so `{- note -}` is a complete comment.
///
/// # Example
/// ```
/// use deftoml::{ast::LineKind, interpreter::directive::classify};
///
/// assert_eq!(classify("", false), LineKind::Blank);
/// assert_eq!(classify("# note", false), LineKind::Comment);
/// assert_eq!(classify("{- note -}", false), LineKind::BlockCommentStart { closed: true });
/// assert_eq!(classify("def X = 5", true), LineKind::BlockCommentBody { closes: false });
/// assert_eq!(classify("def X = 5", false),
///            LineKind::Definition { name: "X", expression: "5" });
/// assert_eq!(classify("array(1, 2)", false), LineKind::ArrayLiteral { contents: "1, 2" });
/// assert_eq!(classify("foo", false), LineKind::Unrecognized);
/// ```
#[must_use]
pub fn classify(line: &str, in_block_comment: bool) -> LineKind<'_> {
    if in_block_comment {
        return LineKind::BlockCommentBody { closes: line.ends_with(BLOCK_COMMENT_CLOSE) };
    }
    if line.starts_with(BLOCK_COMMENT_OPEN) {
        return LineKind::BlockCommentStart { closed: line.ends_with(BLOCK_COMMENT_CLOSE) };
    }
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with(LINE_COMMENT) {
        return LineKind::Comment;
    }
    if let Some(captures) = DEFINITION.captures(line)
       && let (Some(name), Some(expression)) = (captures.get(1), captures.get(2))
    {
        return LineKind::Definition { name:       name.as_str(),
                                      expression: expression.as_str(), };
    }
    if let Some(contents) = ARRAY_LITERAL.captures(line).and_then(|c| c.get(1)) {
        return LineKind::ArrayLiteral { contents: contents.as_str() };
    }
    LineKind::Unrecognized
}
