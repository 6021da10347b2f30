//! Reconciles a parsed sequence with the files present on disk.
//!
//! The core library never touches the filesystem; this collaborator globs a
//! directory with the sequence's glob pattern, matches the candidates with
//! its regex pattern, and feeds the captured file numbers back into the
//! range algebra.

use std::collections::BTreeSet;
use std::path::Path;

use ast::{PaddedRange, Sequence};
use numseq::{Decimal, FileNumSequence, FileNums};
use thiserror::Error;

/// Errors from reconciling a sequence against a directory.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The dimensions do not have a consistent number of files: the product
    /// of the per-dimension cardinalities must equal the matched file count.
    #[error("the sequence contains an inconsistent number of files across one or more dimensions")]
    IncompleteDimension,

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("cannot read a matched path: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("generated an invalid regex: {0}")]
    Regex(#[from] regex::Error),

    /// A capture group yielded text the range algebra cannot read back.
    #[error("captured an unreadable file number '{0}'")]
    InvalidCapture(String),
}

/// Finds the ranges of files that exist in `dir` for the parsed sequence.
///
/// Each returned dimension is ordered numerically and paired with the
/// dimension's original pad format. No partial result is returned: an
/// inconsistent dimension fails the whole reconciliation.
pub fn find_on_disk(dir: &Path, parsed: &impl Sequence) -> Result<Vec<PaddedRange>, ScanError> {
    let num_ranges = parsed.ranges().len();
    let pattern = regex::Regex::new(&format!("^{}$", parsed.as_regex()))?;
    let glob_pattern = dir.join(parsed.as_glob());

    let mut dimensions: Vec<BTreeSet<String>> = vec![BTreeSet::new(); num_ranges];
    let mut num_paths = 0usize;
    for entry in glob::glob(&glob_pattern.to_string_lossy())? {
        let path = entry?;
        let name = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name,
            None => continue,
        };
        let captures = match pattern.captures(name) {
            Some(captures) => captures,
            None => continue,
        };
        num_paths += 1;
        for (i, values) in dimensions.iter_mut().enumerate() {
            if let Some(group) = captures.name(&format!("range{i}")) {
                values.insert(group.as_str().to_owned());
            }
        }
    }

    let expected: usize = dimensions.iter().map(|values| values.len()).product();
    if num_paths != expected {
        return Err(ScanError::IncompleteDimension);
    }

    parsed
        .ranges()
        .ranges()
        .iter()
        .zip(dimensions)
        .map(|(range, values)| {
            Ok(PaddedRange::new(
                Some(file_nums(values)?),
                range.pad.clone(),
            ))
        })
        .collect()
}

/// Rebuilds one dimension's collection in its numeric domain.
fn file_nums(values: BTreeSet<String>) -> Result<FileNums, ScanError> {
    if values.iter().any(|value| value.contains('.')) {
        let numbers = values
            .iter()
            .map(|value| {
                value
                    .parse::<Decimal>()
                    .map_err(|_| ScanError::InvalidCapture(value.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FileNums::Decimal(FileNumSequence::from_unordered(numbers)))
    } else {
        let numbers = values
            .iter()
            .map(|value| {
                value
                    .parse::<i64>()
                    .map_err(|_| ScanError::InvalidCapture(value.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FileNums::Int(FileNumSequence::from_unordered(numbers)))
    }
}
