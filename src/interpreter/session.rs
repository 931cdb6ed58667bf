use tracing::{debug, trace, warn};

use crate::{
    ast::LineKind,
    error::{Error, SyntaxError},
    interpreter::{
        directive::classify,
        document::Document,
        evaluator::{
            array::parse_array,
            core::{Environment, Limits},
            expression::evaluate_expression,
        },
    },
};

/// One pass over one configuration source.
///
/// A session owns the constant environment, the document under
/// construction and the block-comment state. Lines are fed in order;
/// [`Session::finish`] consumes the session and returns the document, so
/// no state survives into another parse.
///
/// ## Example
/// ```
/// use deftoml::{Session, Value};
///
/// let mut session = Session::new();
/// session.feed_line("def WIDTH = 80").unwrap();
/// session.feed_line("array(WIDTH, $WIDTH / 2$)").unwrap();
///
/// let doc = session.finish().unwrap();
/// assert_eq!(doc.array(), Some(&[Value::Integer(80), Value::Integer(40)][..]));
/// ```
#[derive(Debug, Default)]
pub struct Session {
    environment:   Environment,
    document:      Document,
    /// Line that opened the block comment we are inside, if any.
    block_comment: Option<usize>,
    line:          usize,
    limits:        Limits,
}

impl Session {
    /// Creates a session with the default [`Limits`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with custom evaluation limits.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self { limits,
               ..Self::default() }
    }

    /// The constants defined so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Feeds every line, then finishes the session.
    ///
    /// # Errors
    /// The first error raised by [`Session::feed_line`] or
    /// [`Session::finish`].
    pub fn run<I, S>(mut self, lines: I) -> Result<Document, Error>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        for line in lines {
            self.feed_line(line.as_ref())?;
        }
        self.finish()
    }

    /// Classifies one raw line and applies it.
    ///
    /// Comments and blank lines are skipped, definitions bind a constant and
    /// array literals set the document's `array` key.
    ///
    /// # Errors
    /// - `SyntaxError::UnrecognizedLine` for a line of no known kind.
    /// - `Error::Eval` when a definition or array element fails to evaluate.
    pub fn feed_line(&mut self, raw: &str) -> Result<(), Error> {
        self.line += 1;
        let text = raw.trim();
        let kind = classify(text, self.block_comment.is_some());
        trace!(line = self.line, ?kind, "classified line");

        match kind {
            LineKind::Blank | LineKind::Comment => {},
            LineKind::BlockCommentStart { closed } => {
                if !closed {
                    self.block_comment = Some(self.line);
                }
            },
            LineKind::BlockCommentBody { closes } => {
                if closes {
                    self.block_comment = None;
                }
            },
            LineKind::Definition { name, expression } => self.define(name, expression)?,
            LineKind::ArrayLiteral { contents } => self.assign_array(contents)?,
            LineKind::Unrecognized => {
                return Err(SyntaxError::UnrecognizedLine { text: text.to_string(),
                                                           line: self.line, }.into());
            },
        }
        Ok(())
    }

    /// Ends the session and returns the document.
    ///
    /// # Errors
    /// `SyntaxError::UnterminatedBlockComment` if a block comment is still
    /// open.
    pub fn finish(self) -> Result<Document, Error> {
        if let Some(line) = self.block_comment {
            return Err(SyntaxError::UnterminatedBlockComment { line }.into());
        }
        debug!(lines = self.line,
               constants = self.environment.len(),
               "parse finished");
        Ok(self.document)
    }

    fn define(&mut self, name: &str, expression: &str) -> Result<(), Error> {
        let line = self.line;
        let value = evaluate_expression(expression, &self.environment, &self.limits)
            .map_err(|source| Error::Eval { line, source })?;

        debug!(line, name, %value, "defined constant");
        if let Some(previous) = self.environment.define(name, value) {
            debug!(line, name, %previous, "constant redefined");
        }
        Ok(())
    }

    fn assign_array(&mut self, contents: &str) -> Result<(), Error> {
        let line = self.line;
        let values = parse_array(contents, &self.environment, &self.limits)
            .map_err(|source| Error::Eval { line, source })?;

        debug!(line, elements = values.len(), "assigned array");
        if self.document.set_array(values).is_some() {
            warn!(line, "array literal replaces an earlier one");
        }
        Ok(())
    }
}
