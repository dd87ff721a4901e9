use std::fmt;

/// A parse error from a `.skin` document.
///
/// Positions are 1-based. When the error happens inside a `portrait` or
/// `landscape` block, `section` names it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub col: usize,
    /// Section being parsed when the error occurred, if any.
    pub section: Option<String>,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            message: msg.into(),
            line,
            col,
            section: None,
        }
    }

    pub(crate) fn in_section(mut self, name: &str) -> Self {
        self.section = Some(name.to_string());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skin parse error at {}:{}", self.line, self.col)?;
        if let Some(section) = &self.section {
            write!(f, " in {}", section)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for ParseError {}
