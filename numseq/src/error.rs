use std::ops::Range;

use thiserror::Error;

/// An error that occurs when constructing a numeric range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The step of a range cannot be zero.
    #[error("a range step cannot be zero")]
    ZeroStep,
}

/// A positioned error produced while parsing a range string such as
/// `1001-1005,1010-1014x2`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid ranges: {reason}")]
pub struct RangeParseError {
    /// The byte range of the offending part of the parsed string.
    pub span: Range<usize>,
    /// A human readable explanation of why parsing failed.
    pub reason: String,
}

impl RangeParseError {
    pub(crate) fn new(span: Range<usize>, reason: impl Into<String>) -> Self {
        Self {
            span,
            reason: reason.into(),
        }
    }
}

/// An error that occurs when parsing a decimal literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decimal literal '{0}'")]
pub struct ParseDecimalError(pub String);
