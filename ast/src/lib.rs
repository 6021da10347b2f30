//! Immutable parsed representations of file sequence names.
//!
//! A parsed sequence is a value: the "mutation" operations (`with_stem`,
//! `with_suffix`) return new values that share the untouched ranges. The
//! [`Formatter`] trait renders a sequence field by field and is the seam for
//! the alternate output dialects (literal names, glob patterns, regex
//! patterns with one capture group per range).

pub mod error;
pub mod format;
pub mod loose;
mod names;
pub mod range;
pub mod strict;

pub use error::SequenceError;
pub use format::{
    FileNumberFormatter, Formatter, GlobFormatter, PlainFormatter, RegexFormatter, Sequence,
};
pub use loose::{ParsedLooseSequence, RangesEndName, RangesInName, RangesStartName};
pub use names::Names;
pub use range::{PadFormat, PaddedRange, Ranges};
pub use strict::ParsedSequence;
