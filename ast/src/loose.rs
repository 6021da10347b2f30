use std::fmt;

use crate::error::SequenceError;
use crate::format::{Formatter, PlainFormatter, Sequence};
use crate::range::Ranges;
use crate::strict::replace_last_suffix;

/// A loose-dialect sequence whose ranges open the name.
///
/// The prefix separator is structurally absent: nothing can precede the
/// ranges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangesStartName {
    /// The range tokens and their separators.
    pub ranges: Ranges,
    /// A separator between the ranges and the stem, or empty.
    pub postfix: String,
    /// The name after the ranges.
    pub stem: String,
    /// The file extensions, each with its leading `.`.
    pub suffixes: Vec<String>,
}

impl RangesStartName {
    pub fn with_stem(&self, stem: impl Into<String>) -> Self {
        let stem = stem.into();
        let postfix = if stem.is_empty() && !self.stem.is_empty() && !self.suffixes.is_empty() {
            String::new()
        } else {
            self.postfix.clone()
        };
        Self {
            ranges: self.ranges.clone(),
            postfix,
            stem,
            suffixes: self.suffixes.clone(),
        }
    }

    pub fn with_suffix(&self, suffix: &str) -> Result<Self, SequenceError> {
        Ok(Self {
            ranges: self.ranges.clone(),
            postfix: self.postfix.clone(),
            stem: self.stem.clone(),
            suffixes: replace_last_suffix(&self.suffixes, suffix)?,
        })
    }
}

impl Sequence for RangesStartName {
    fn stem(&self) -> &str {
        &self.stem
    }

    fn ranges(&self) -> &Ranges {
        &self.ranges
    }

    fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    fn render(&self, formatter: &mut dyn Formatter) -> String {
        let mut result = formatter.ranges(&self.ranges);
        result.push_str(&formatter.postfix(&self.postfix));
        result.push_str(&formatter.stem(&self.stem));
        result.push_str(&formatter.suffixes(&self.suffixes));
        result
    }
}

impl fmt::Display for RangesStartName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&mut PlainFormatter))
    }
}

/// A loose-dialect sequence whose ranges sit inside the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangesInName {
    /// The name before the ranges.
    pub stem: String,
    /// A separator between the stem and the ranges, or empty.
    pub prefix: String,
    /// The range tokens and their separators.
    pub ranges: Ranges,
    /// A separator after the ranges, or empty.
    pub postfix: String,
    /// The file extensions, each with its leading `.`.
    pub suffixes: Vec<String>,
}

impl RangesInName {
    pub fn with_stem(&self, stem: impl Into<String>) -> Self {
        let stem = stem.into();
        let prefix = if stem.is_empty() && !self.stem.is_empty() {
            String::new()
        } else {
            self.prefix.clone()
        };
        Self {
            stem,
            prefix,
            ranges: self.ranges.clone(),
            postfix: self.postfix.clone(),
            suffixes: self.suffixes.clone(),
        }
    }

    pub fn with_suffix(&self, suffix: &str) -> Result<Self, SequenceError> {
        let suffixes = replace_last_suffix(&self.suffixes, suffix)?;
        // Dropping the last suffix also drops the separator pointing at it.
        let postfix = if suffixes.is_empty() && !self.suffixes.is_empty() {
            String::new()
        } else {
            self.postfix.clone()
        };
        Ok(Self {
            stem: self.stem.clone(),
            prefix: self.prefix.clone(),
            ranges: self.ranges.clone(),
            postfix,
            suffixes,
        })
    }
}

impl Sequence for RangesInName {
    fn stem(&self) -> &str {
        &self.stem
    }

    fn ranges(&self) -> &Ranges {
        &self.ranges
    }

    fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    fn render(&self, formatter: &mut dyn Formatter) -> String {
        let mut result = formatter.stem(&self.stem);
        result.push_str(&formatter.prefix(&self.prefix));
        result.push_str(&formatter.ranges(&self.ranges));
        result.push_str(&formatter.postfix(&self.postfix));
        result.push_str(&formatter.suffixes(&self.suffixes));
        result
    }
}

impl fmt::Display for RangesInName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&mut PlainFormatter))
    }
}

/// A loose-dialect sequence whose ranges close the name.
///
/// The postfix separator is structurally absent: nothing can follow the
/// ranges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangesEndName {
    /// The name before the suffixes.
    pub stem: String,
    /// The file extensions, each with its leading `.`.
    pub suffixes: Vec<String>,
    /// A separator between the suffixes and the ranges, or empty.
    pub prefix: String,
    /// The range tokens and their separators.
    pub ranges: Ranges,
}

impl RangesEndName {
    pub fn with_stem(&self, stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            suffixes: self.suffixes.clone(),
            prefix: self.prefix.clone(),
            ranges: self.ranges.clone(),
        }
    }

    pub fn with_suffix(&self, suffix: &str) -> Result<Self, SequenceError> {
        Ok(Self {
            stem: self.stem.clone(),
            suffixes: replace_last_suffix(&self.suffixes, suffix)?,
            prefix: self.prefix.clone(),
            ranges: self.ranges.clone(),
        })
    }
}

impl Sequence for RangesEndName {
    fn stem(&self) -> &str {
        &self.stem
    }

    fn ranges(&self) -> &Ranges {
        &self.ranges
    }

    fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    fn render(&self, formatter: &mut dyn Formatter) -> String {
        let mut result = formatter.stem(&self.stem);
        result.push_str(&formatter.suffixes(&self.suffixes));
        result.push_str(&formatter.prefix(&self.prefix));
        result.push_str(&formatter.ranges(&self.ranges));
        result
    }
}

impl fmt::Display for RangesEndName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&mut PlainFormatter))
    }
}

/// A parsed loose-dialect sequence, one shape per range position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParsedLooseSequence {
    StartsName(RangesStartName),
    InName(RangesInName),
    EndsName(RangesEndName),
}

impl ParsedLooseSequence {
    pub fn with_stem(&self, stem: impl Into<String>) -> Self {
        match self {
            Self::StartsName(seq) => Self::StartsName(seq.with_stem(stem)),
            Self::InName(seq) => Self::InName(seq.with_stem(stem)),
            Self::EndsName(seq) => Self::EndsName(seq.with_stem(stem)),
        }
    }

    pub fn with_suffix(&self, suffix: &str) -> Result<Self, SequenceError> {
        Ok(match self {
            Self::StartsName(seq) => Self::StartsName(seq.with_suffix(suffix)?),
            Self::InName(seq) => Self::InName(seq.with_suffix(suffix)?),
            Self::EndsName(seq) => Self::EndsName(seq.with_suffix(suffix)?),
        })
    }
}

impl Sequence for ParsedLooseSequence {
    fn stem(&self) -> &str {
        match self {
            Self::StartsName(seq) => seq.stem(),
            Self::InName(seq) => seq.stem(),
            Self::EndsName(seq) => seq.stem(),
        }
    }

    fn ranges(&self) -> &Ranges {
        match self {
            Self::StartsName(seq) => seq.ranges(),
            Self::InName(seq) => seq.ranges(),
            Self::EndsName(seq) => seq.ranges(),
        }
    }

    fn suffixes(&self) -> &[String] {
        match self {
            Self::StartsName(seq) => seq.suffixes(),
            Self::InName(seq) => seq.suffixes(),
            Self::EndsName(seq) => seq.suffixes(),
        }
    }

    fn render(&self, formatter: &mut dyn Formatter) -> String {
        match self {
            Self::StartsName(seq) => seq.render(formatter),
            Self::InName(seq) => seq.render(formatter),
            Self::EndsName(seq) => seq.render(formatter),
        }
    }
}

impl fmt::Display for ParsedLooseSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&mut PlainFormatter))
    }
}
