use std::fmt;

use numseq::{FileNums, Number};

use crate::error::SequenceError;
use crate::format::{Formatter, PlainFormatter};

/// The padding specifier of a range token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PadFormat {
    /// A `#` run, optionally followed by `.` and a second run giving the
    /// sub-integer precision.
    Hashes { head: usize, tail: Option<usize> },
    /// The `<UDIM>` tiling token, formatted as a four digit run.
    Udim,
    /// The `<UVTILE>` tiling token, formatted as `u{u}_v{v}`.
    Uvtile,
}

impl PadFormat {
    /// Splits `text` into its leading ranges part and trailing pad format.
    pub fn split_trailing(text: &str) -> Option<(&str, PadFormat)> {
        if let Some(rest) = text.strip_suffix("<UDIM>") {
            return Some((rest, PadFormat::Udim));
        }
        if let Some(rest) = text.strip_suffix("<UVTILE>") {
            return Some((rest, PadFormat::Uvtile));
        }
        let trimmed = text.trim_end_matches('#');
        let run = text.len() - trimmed.len();
        if run == 0 {
            return None;
        }
        if let Some(prefix) = trimmed.strip_suffix('.') {
            let head_trimmed = prefix.trim_end_matches('#');
            let head_run = prefix.len() - head_trimmed.len();
            if head_run > 0 {
                return Some((
                    head_trimmed,
                    PadFormat::Hashes {
                        head: head_run,
                        tail: Some(run),
                    },
                ));
            }
        }
        Some((
            trimmed,
            PadFormat::Hashes {
                head: run,
                tail: None,
            },
        ))
    }
}

impl fmt::Display for PadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PadFormat::Hashes { head, tail } => {
                for _ in 0..*head {
                    f.write_str("#")?;
                }
                if let Some(tail) = tail {
                    f.write_str(".")?;
                    for _ in 0..*tail {
                        f.write_str("#")?;
                    }
                }
                Ok(())
            }
            PadFormat::Udim => f.write_str("<UDIM>"),
            PadFormat::Uvtile => f.write_str("<UVTILE>"),
        }
    }
}

/// A range collection paired with its padding specifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaddedRange {
    /// The known file numbers, or `None` when the range only describes a
    /// pattern.
    pub file_nums: Option<FileNums>,
    /// How a file number renders inside each name of the sequence.
    pub pad: PadFormat,
}

impl PaddedRange {
    pub fn new(file_nums: Option<FileNums>, pad: PadFormat) -> Self {
        Self { file_nums, pad }
    }

    /// Whether the collection holds any sub-integer file numbers.
    pub fn has_subsamples(&self) -> bool {
        self.file_nums
            .as_ref()
            .map_or(false, FileNums::has_subsamples)
    }

    /// Formats `number` using the range's padding rules.
    pub fn format(&self, number: &Number) -> String {
        match &self.pad {
            PadFormat::Uvtile => uvtile(number),
            PadFormat::Udim => pad_number(number, 4, None),
            PadFormat::Hashes { head, tail } => pad_number(number, *head, *tail),
        }
    }
}

impl fmt::Display for PaddedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(file_nums) = &self.file_nums {
            write!(f, "{file_nums}")?;
        }
        write!(f, "{}", self.pad)
    }
}

/// The range tokens of a sequence and the separators between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ranges {
    ranges: Vec<PaddedRange>,
    inter_ranges: Vec<String>,
}

impl Ranges {
    /// `inter_ranges` separates consecutive ranges, so there must be exactly
    /// one fewer of them than there are ranges.
    pub fn new(ranges: Vec<PaddedRange>, inter_ranges: Vec<String>) -> Result<Self, SequenceError> {
        if inter_ranges.len() + 1 != ranges.len() {
            return Err(SequenceError::SeparatorCount {
                ranges: ranges.len(),
                separators: inter_ranges.len(),
            });
        }
        Ok(Self {
            ranges,
            inter_ranges,
        })
    }

    /// A single range with no separators.
    pub fn single(range: PaddedRange) -> Self {
        Self {
            ranges: vec![range],
            inter_ranges: Vec::new(),
        }
    }

    pub fn ranges(&self) -> &[PaddedRange] {
        &self.ranges
    }

    pub fn inter_ranges(&self) -> &[String] {
        &self.inter_ranges
    }

    /// The number of range dimensions.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl fmt::Display for Ranges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&PlainFormatter.ranges(self))
    }
}

/// Zero-pads `number` to `width` integral digits, quantizing to `places`
/// fractional digits when given.
///
/// Rounding is half to even, matching how printf renders floats under the
/// default IEEE rounding mode, so rendered frame numbers are reproducible
/// across platforms.
fn pad_number(number: &Number, width: usize, places: Option<usize>) -> String {
    match number {
        Number::Int(value) => {
            let mut text = format!("{value:0width$}");
            if let Some(places) = places {
                if places > 0 {
                    text.push('.');
                    text.extend(std::iter::repeat('0').take(places));
                }
            }
            text
        }
        Number::Decimal(value) => {
            let value = match places {
                Some(places) => value.quantize(places as u32),
                None => value.clone(),
            };
            let rendered = value.to_string();
            let (int_part, frac_part) = match rendered.split_once('.') {
                Some((int_part, frac_part)) => (int_part, frac_part),
                None => (rendered.as_str(), ""),
            };
            let mut text = zfill(int_part, width);
            let frac_width = places.unwrap_or(frac_part.len());
            if frac_width > 0 {
                text.push('.');
                text.push_str(frac_part);
                text.extend(std::iter::repeat('0').take(frac_width - frac_part.len()));
            }
            text
        }
    }
}

/// Pads with zeros after the sign.
fn zfill(text: &str, width: usize) -> String {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", text),
    };
    format!(
        "{sign}{digits:0>width$}",
        width = width.saturating_sub(sign.len())
    )
}

/// Renders the `u{u}_v{v}` tile coordinate of `number`.
///
/// `u = (n - 1) mod 10`, `v = (n - 1000 - u - 1) div 10`; the inverse
/// relation is `n = 1000 + v * 10 + (u + 1)`.
fn uvtile(number: &Number) -> String {
    let value = match number {
        Number::Int(value) => *value,
        // Tile numbers are whole; a stray fraction rounds to the nearest tile.
        Number::Decimal(value) => value.quantize(0).to_i64().unwrap_or_default(),
    };
    let u = (value - 1).rem_euclid(10);
    let v = (value - 1000 - u - 1).div_euclid(10);
    format!("u{}_v{}", u + 1, v + 1)
}
