use std::fmt;

use crate::error::SequenceError;
use crate::format::{Formatter, PlainFormatter, Sequence};
use crate::range::Ranges;

/// A parsed strict-dialect sequence name.
///
/// The strict grammar places the ranges between the stem and the file
/// suffixes: `stem [sep] ranges .suffixes`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedSequence {
    /// The name without the prefix, ranges and suffixes.
    pub stem: String,
    /// A single-character separator between stem and ranges, or empty.
    pub prefix: String,
    /// The range tokens and their separators.
    pub ranges: Ranges,
    /// The file extensions, each with its leading `.`.
    pub suffixes: Vec<String>,
}

impl ParsedSequence {
    /// Returns a copy with the stem replaced.
    ///
    /// Removing the stem also removes the now dangling prefix separator.
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
            suffixes: self.suffixes.clone(),
        }
    }

    /// Returns a copy with the last suffix replaced.
    ///
    /// An empty suffix removes the last one instead.
    pub fn with_suffix(&self, suffix: &str) -> Result<Self, SequenceError> {
        Ok(Self {
            stem: self.stem.clone(),
            prefix: self.prefix.clone(),
            ranges: self.ranges.clone(),
            suffixes: replace_last_suffix(&self.suffixes, suffix)?,
        })
    }
}

/// Replaces the last of `suffixes` with the (possibly multi-part) `suffix`.
pub(crate) fn replace_last_suffix(
    suffixes: &[String],
    suffix: &str,
) -> Result<Vec<String>, SequenceError> {
    let kept = suffixes.len().saturating_sub(1);
    let mut result: Vec<String> = suffixes[..kept].to_vec();
    if suffix.is_empty() {
        return Ok(result);
    }
    if !suffix.starts_with('.') || suffix == "." {
        return Err(SequenceError::InvalidSuffix(suffix.to_owned()));
    }
    result.extend(suffix[1..].split('.').map(|part| format!(".{part}")));
    Ok(result)
}

impl Sequence for ParsedSequence {
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
        result.push_str(&formatter.suffixes(&self.suffixes));
        result
    }
}

impl fmt::Display for ParsedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&mut PlainFormatter))
    }
}
