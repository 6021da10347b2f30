//! Parser for range strings such as `1001-1005,1010-1014x2`.
//!
//! The grammar is strict about numerals: leading zeros and trailing
//! fractional zeros are rejected, so every accepted string has exactly one
//! spelling per value.

use std::str::FromStr;

use crate::collection::{FileNumSequence, FileNums};
use crate::error::{RangeError, RangeParseError};
use crate::num::FileNum;
use crate::sequence::ArithmeticSequence;

/// A number slice together with its position in the input.
#[derive(Debug, Clone, Copy)]
struct RawNum<'a> {
    text: &'a str,
    at: usize,
}

/// One textual range spec before domain resolution.
#[derive(Debug, Clone, Copy)]
struct RawRange<'a> {
    start: RawNum<'a>,
    end: Option<RawNum<'a>>,
    step: Option<RawNum<'a>>,
}

impl RawRange<'_> {
    fn has_subsamples(&self) -> bool {
        [Some(&self.start), self.end.as_ref(), self.step.as_ref()]
            .into_iter()
            .flatten()
            .any(|num| num.text.contains('.'))
    }
}

/// Parses a range string into a file number collection.
///
/// Any `.` in any number promotes the whole collection to the decimal
/// domain. The empty string is rejected; callers represent "no numbers" on
/// their side before reaching this parser.
pub fn parse_ranges(text: &str) -> Result<FileNums, RangeParseError> {
    let mut cursor = Cursor { text, pos: 0 };
    let mut ranges = vec![cursor.range_spec()?];
    while cursor.eat(',') {
        ranges.push(cursor.range_spec()?);
    }
    if cursor.pos < text.len() {
        return Err(cursor.error("expected ',' or the end of the ranges"));
    }
    if ranges.iter().any(RawRange::has_subsamples) {
        Ok(FileNums::Decimal(build(&ranges)?))
    } else {
        Ok(FileNums::Int(build(&ranges)?))
    }
}

fn build<N>(ranges: &[RawRange<'_>]) -> Result<FileNumSequence<N>, RangeParseError>
where
    N: FileNum + FromStr,
{
    let mut sequences = Vec::with_capacity(ranges.len());
    for range in ranges {
        let start = number::<N>(&range.start)?;
        let end = match &range.end {
            Some(end) => number::<N>(end)?,
            None => start.clone(),
        };
        let step = match &range.step {
            Some(step) => number::<N>(step)?,
            None => N::one(),
        };
        let sequence = ArithmeticSequence::new(start, end, step).map_err(|error| match error {
            RangeError::ZeroStep => positioned(
                range.step.as_ref().unwrap_or(&range.start),
                "a range step cannot be zero",
            ),
        })?;
        sequences.push(sequence);
    }
    Ok(FileNumSequence::new(sequences))
}

fn number<N: FromStr>(raw: &RawNum<'_>) -> Result<N, RangeParseError> {
    raw.text
        .parse()
        .map_err(|_| positioned(raw, "the number is out of range"))
}

fn positioned(raw: &RawNum<'_>, reason: &str) -> RangeParseError {
    RangeParseError::new(raw.at..raw.at + raw.text.len(), reason)
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            return true;
        }
        false
    }

    fn error(&self, reason: &str) -> RangeParseError {
        RangeParseError::new(self.pos..self.pos + 1, reason)
    }

    fn range_spec(&mut self) -> Result<RawRange<'a>, RangeParseError> {
        let start = self.file_num()?;
        let mut end = None;
        let mut step = None;
        if self.eat('-') {
            end = Some(self.file_num()?);
            if self.eat('x') {
                step = Some(self.num()?);
            }
        }
        Ok(RawRange { start, end, step })
    }

    /// A possibly negative number.
    fn file_num(&mut self) -> Result<RawNum<'a>, RangeParseError> {
        let at = self.pos;
        self.eat('-');
        self.digits()?;
        Ok(RawNum {
            text: &self.text[at..self.pos],
            at,
        })
    }

    /// An unsigned number.
    fn num(&mut self) -> Result<RawNum<'a>, RangeParseError> {
        let at = self.pos;
        self.digits()?;
        Ok(RawNum {
            text: &self.text[at..self.pos],
            at,
        })
    }

    /// `(0|[1-9][0-9]*)("." ("0"|[0-9]*[1-9]))?`
    fn digits(&mut self) -> Result<(), RangeParseError> {
        match self.peek() {
            Some('0') => {
                self.eat('0');
                if matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                    return Err(self.error("a number cannot have leading zeros"));
                }
            }
            Some(c) if c.is_ascii_digit() => {
                while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                    self.pos += 1;
                }
            }
            _ => return Err(self.error("expected a number")),
        }
        if self.eat('.') {
            let fraction = self.pos;
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.pos += 1;
            }
            let digits = &self.text[fraction..self.pos];
            if digits.is_empty() {
                return Err(self.error("expected digits after the decimal point"));
            }
            if digits != "0" && digits.ends_with('0') {
                return Err(RangeParseError::new(
                    self.pos - 1..self.pos,
                    "a subsample cannot have trailing zeros",
                ));
            }
        }
        Ok(())
    }
}
