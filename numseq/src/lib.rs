//! Exact numeric range algebra for file sequences.
//!
//! File numbers come in two domains, `i64` and the exact [`Decimal`], both
//! behind the [`FileNum`] trait. Arithmetic progressions over either domain
//! are modeled by [`ArithmeticSequence`], ordered consolidated collections
//! by [`FileNumSequence`], and range strings such as `1001-1005,1010x2`
//! round-trip through [`parse_ranges`] and `Display`.

pub mod collection;
pub mod decimal;
mod disjoint;
pub mod error;
pub mod num;
pub mod parse;
pub mod progression;
pub mod sequence;

pub use collection::{FileNumSequence, FileNums};
pub use decimal::Decimal;
pub use error::{ParseDecimalError, RangeError, RangeParseError};
pub use num::{FileNum, Number};
pub use parse::parse_ranges;
pub use progression::{DecimalRange, IntRange, Progression};
pub use sequence::ArithmeticSequence;
