//! Parsers for file sequence names.
//!
//! Two grammar dialects are supported. The strict dialect requires the
//! ranges to sit between a stem and the file suffixes
//! (`image.1-5####.exr`); the loose dialect additionally lets the ranges
//! start or end the name (`1-5#_image.exr`, `image.exr.1-5#`). Parsing
//! either returns an immutable [`ast`] value or a [`ParseError`] carrying
//! the failing column span.

pub mod err;
mod loose;
mod pad;
mod strict;

pub use err::{ParseError, ParseErrorKind};
pub use loose::parse_loose_sequence;
pub use strict::parse_sequence;
