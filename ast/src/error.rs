use thiserror::Error;

/// Errors produced by operations on parsed sequence values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// `format` was called with the wrong number of file numbers.
    #[error("expected {expected} file numbers, got {given}")]
    NumberCount { expected: usize, given: usize },

    /// Ranges and inter-range separators cannot interleave.
    #[error("{ranges} ranges cannot interleave with {separators} separators")]
    SeparatorCount { ranges: usize, separators: usize },

    /// A suffix must start with a dot and name an extension.
    #[error("invalid suffix '{0}'")]
    InvalidSuffix(String),

    /// The operation needs concrete file numbers on every range.
    #[error("the sequence has one or more pattern-only ranges")]
    UnknownRanges,
}
