use std::error::Error;
use std::fmt;

use lexer::{LexError, Span};

/// An error that occurs during parsing.
///
/// The display form renders the offending part of the string with a caret
/// span underneath:
///
/// ```text
/// Invalid sequence: Expected the ranges
///   file.#.#
///          ^
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The sequence string that failed parsing.
    pub text: String,
    /// The byte span of the part that failed.
    pub span: Span,
    /// A human readable explanation of why parsing failed.
    pub reason: String,
    /// The category of the failure.
    pub kind: ParseErrorKind,
}

/// Categorizes a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// No range token is present anywhere in the string.
    NotASequence,
    /// The name does not fit the grammar dialect at the reported position.
    Invalid,
    /// A range token was found but its numbers break the range grammar.
    InvalidRanges,
}

impl ParseError {
    pub(crate) fn new(
        text: &str,
        span: Span,
        reason: impl Into<String>,
        kind: ParseErrorKind,
    ) -> Self {
        Self {
            text: text.to_owned(),
            span,
            reason: reason.into(),
            kind,
        }
    }

    pub(crate) fn not_a_sequence(text: &str) -> Self {
        let end = text.len().saturating_sub(1).max(1);
        Self::new(
            text,
            0..end,
            "No range string is present",
            ParseErrorKind::NotASequence,
        )
    }

    pub(crate) fn from_lex(text: &str, error: LexError) -> Self {
        match error {
            LexError::NotASequence => Self::not_a_sequence(text),
            LexError::Invalid { span, message } => {
                Self::new(text, span, message, ParseErrorKind::Invalid)
            }
        }
    }

    /// Whether the input was an ordinary name with no range token at all.
    pub fn is_not_a_sequence(&self) -> bool {
        self.kind == ParseErrorKind::NotASequence
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Invalid sequence: {}", self.reason)?;
        writeln!(f, "  {}", self.text)?;
        let width = self.span.end.saturating_sub(self.span.start).max(1);
        write!(
            f,
            "  {:indent$}{:^>width$}",
            "",
            "",
            indent = self.span.start,
            width = width
        )
    }
}

impl Error for ParseError {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_a_caret_under_the_span() {
        let error = ParseError::new(
            "file.#.#",
            7..8,
            "Expected the ranges",
            ParseErrorKind::Invalid,
        );
        assert_eq!(
            error.to_string(),
            "Invalid sequence: Expected the ranges\n  file.#.#\n         ^"
        );
    }

    #[test]
    fn caret_spans_cover_the_whole_token() {
        let error = ParseError::new(
            "1-10#_file.exr",
            0..5,
            "Expected a stem but got a range",
            ParseErrorKind::Invalid,
        );
        let caret_line = error.to_string().lines().last().unwrap().to_owned();
        assert_eq!(caret_line, "  ^^^^^");
    }
}
