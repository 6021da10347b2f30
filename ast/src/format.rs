use numseq::Number;

use crate::error::SequenceError;
use crate::names::Names;
use crate::range::{PadFormat, PaddedRange, Ranges};

/// Renders a parsed sequence field by field.
///
/// Every method has a default identity rendering; implementations override
/// only the fields they care about, which is how the glob and regex output
/// dialects are produced from the same traversal.
pub trait Formatter {
    fn stem(&mut self, stem: &str) -> String {
        stem.to_owned()
    }

    fn prefix(&mut self, prefix: &str) -> String {
        prefix.to_owned()
    }

    fn range(&mut self, range: &PaddedRange) -> String {
        range.to_string()
    }

    fn inter_range(&mut self, inter_range: &str) -> String {
        inter_range.to_owned()
    }

    fn postfix(&mut self, postfix: &str) -> String {
        postfix.to_owned()
    }

    fn suffixes(&mut self, suffixes: &[String]) -> String {
        suffixes.concat()
    }

    /// Renders the ranges interleaved with their separators.
    fn ranges(&mut self, ranges: &Ranges) -> String {
        let mut result = String::new();
        for (i, range) in ranges.ranges().iter().enumerate() {
            if i > 0 {
                let separator = self.inter_range(&ranges.inter_ranges()[i - 1]);
                result.push_str(&separator);
            }
            result.push_str(&self.range(range));
        }
        result
    }
}

/// The identity formatter; backs `Display` for every sequence shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl Formatter for PlainFormatter {}

/// Formats a sequence into a glob pattern matching its paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobFormatter {
    ignore_next_range: bool,
}

impl Formatter for GlobFormatter {
    fn range(&mut self, _range: &PaddedRange) -> String {
        if std::mem::take(&mut self.ignore_next_range) {
            String::new()
        } else {
            "*".to_owned()
        }
    }

    fn inter_range(&mut self, inter_range: &str) -> String {
        // Two ranges with nothing between them collapse into a single star.
        if inter_range.is_empty() {
            self.ignore_next_range = true;
        }
        inter_range.to_owned()
    }
}

/// Formats a sequence into a regex with one named group per range.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexFormatter {
    index: usize,
}

impl Formatter for RegexFormatter {
    fn stem(&mut self, stem: &str) -> String {
        regex::escape(stem)
    }

    fn prefix(&mut self, prefix: &str) -> String {
        regex::escape(prefix)
    }

    fn range(&mut self, range: &PaddedRange) -> String {
        let group = format!("(?P<range{}>{})", self.index, range_pattern(range));
        self.index += 1;
        group
    }

    fn inter_range(&mut self, inter_range: &str) -> String {
        regex::escape(inter_range)
    }

    fn postfix(&mut self, postfix: &str) -> String {
        regex::escape(postfix)
    }

    fn suffixes(&mut self, suffixes: &[String]) -> String {
        regex::escape(&suffixes.concat())
    }
}

fn range_pattern(range: &PaddedRange) -> String {
    match range.pad {
        PadFormat::Uvtile => r"u\d+_v\d+".to_owned(),
        PadFormat::Udim => number_pattern(4, None, range.has_subsamples()),
        PadFormat::Hashes { head, tail } => number_pattern(head, tail, range.has_subsamples()),
    }
}

fn number_pattern(head: usize, tail: Option<usize>, subsamples: bool) -> String {
    let tail_pattern = match tail {
        Some(tail) => format!(r"\.[0-9]*{}", "[0-9]".repeat(tail)),
        // Stay permissive for decimal collections without admitting
        // spurious fractions for integer-only ones.
        None if subsamples => r"(\.[0-9]+)?".to_owned(),
        None => String::new(),
    };
    let positive = format!("([1-9][0-9]*)?{}", "[0-9]".repeat(head));
    let negative = format!(
        "-([1-9][0-9]*)?{}",
        "[0-9]".repeat(head.saturating_sub(1))
    );
    format!("({positive}|{negative}){tail_pattern}")
}

/// Substitutes concrete file numbers for each range.
///
/// A `None` number leaves the whole range unsubstituted.
#[derive(Debug)]
pub struct FileNumberFormatter<'a> {
    numbers: std::slice::Iter<'a, Option<Number>>,
}

impl<'a> FileNumberFormatter<'a> {
    pub fn new(numbers: &'a [Option<Number>]) -> Self {
        Self {
            numbers: numbers.iter(),
        }
    }
}

impl Formatter for FileNumberFormatter<'_> {
    fn range(&mut self, range: &PaddedRange) -> String {
        match self.numbers.next() {
            Some(Some(number)) => range.format(number),
            _ => range.to_string(),
        }
    }
}

/// Generic access to any parsed sequence shape.
///
/// The strict type and the three loose shapes share this surface so that
/// formatting, pattern generation and reconciliation stay dialect agnostic.
pub trait Sequence {
    fn stem(&self) -> &str;

    fn ranges(&self) -> &Ranges;

    fn suffixes(&self) -> &[String];

    /// Renders each field through `formatter` in the shape's display order.
    fn render(&self, formatter: &mut dyn Formatter) -> String;

    /// Formats the name for the given file numbers.
    ///
    /// The number count must match the range count; `None` leaves that
    /// range's literal form in place.
    fn format(&self, numbers: &[Option<Number>]) -> Result<String, SequenceError> {
        let expected = self.ranges().len();
        if numbers.len() != expected {
            return Err(SequenceError::NumberCount {
                expected,
                given: numbers.len(),
            });
        }
        Ok(self.render(&mut FileNumberFormatter::new(numbers)))
    }

    /// A glob pattern matching every path in the sequence.
    fn as_glob(&self) -> String {
        self.render(&mut GlobFormatter::default())
    }

    /// A regex pattern with one `range{i}` capture group per range.
    fn as_regex(&self) -> String {
        self.render(&mut RegexFormatter::default())
    }

    /// Lazily iterates every concrete name in the sequence.
    fn names(&self) -> Result<Names<'_>, SequenceError>
    where
        Self: Sized,
    {
        Names::new(self)
    }

    /// The number of concrete names, the product of the range cardinalities.
    fn name_count(&self) -> Result<usize, SequenceError> {
        let mut count = 1usize;
        for range in self.ranges().ranges() {
            match &range.file_nums {
                Some(file_nums) => count *= file_nums.len(),
                None => return Err(SequenceError::UnknownRanges),
            }
        }
        Ok(count)
    }
}
