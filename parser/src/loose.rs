//! The loose dialect: the ranges may start, sit inside, or end the name.

use ast::{
    PaddedRange, ParsedLooseSequence, Ranges, RangesEndName, RangesInName, RangesStartName,
};
use lexer::{Token, TokenType};

use crate::err::{ParseError, ParseErrorKind};
use crate::pad;

/// How much of the loose grammar has been recognized so far.
///
/// Three state families mirror the three shapes: `Starts*` for a leading
/// range, the middle family for a range inside the name, and `Ends*` for a
/// trailing range. The first token decides the family; a leading range may
/// still fall through to the in-name shape when suffixes follow directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Init,

    RangeStartsName,
    StartsInterRange,
    StartsPostfix,
    StartsStem,
    StartsSuffixes,

    RangeLater,
    InPrefix,
    RangeInName,
    InInterRange,
    InPostfix,
    InSuffixes,

    RangeEndsName,
    EndsPrefix,
    EndsRange,
    EndsInterRange,
}

/// The shape the parse is committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    StartsName,
    InName,
    EndsName,
}

struct SeqParser<'a> {
    text: &'a str,
    state: State,
    shape: Option<Shape>,
    stem: String,
    prefix: String,
    ranges: Vec<PaddedRange>,
    inter_ranges: Vec<String>,
    postfix: String,
    suffixes: Vec<String>,
}

impl<'a> SeqParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            state: State::Init,
            shape: None,
            stem: String::new(),
            prefix: String::new(),
            ranges: Vec::new(),
            inter_ranges: Vec::new(),
            postfix: String::new(),
            suffixes: Vec::new(),
        }
    }

    fn pump(&mut self, token: &Token<'a>) -> Result<(), ParseError> {
        use State::*;
        use TokenType::*;

        self.state = match (self.state, token.token_type) {
            (Init, Range) => {
                self.shape = Some(Shape::StartsName);
                self.push_range(token)?;
                RangeStartsName
            }
            (Init, Stem) => {
                self.stem = token.value.to_owned();
                RangeLater
            }
            (Init, _) => return Err(self.expected(token, "a range or a stem")),

            (RangeStartsName, InterRange) => {
                self.inter_ranges.push(token.value.to_owned());
                StartsInterRange
            }
            (RangeStartsName, Range) => {
                // Two ranges with nothing between them.
                self.inter_ranges.push(String::new());
                self.push_range(token)?;
                RangeStartsName
            }
            (RangeStartsName, Suffixes) => {
                // Suffixes directly after the ranges leave no stem; the
                // in-name shape covers that.
                self.shape = Some(Shape::InName);
                self.suffixes = pad::parse_suffixes(token);
                InSuffixes
            }
            (RangeStartsName, Postfix) => {
                self.postfix = token.value.to_owned();
                StartsPostfix
            }
            (RangeStartsName, Stem) => {
                self.stem = token.value.to_owned();
                StartsStem
            }
            (RangeStartsName, _) => {
                return Err(self.expected(
                    token,
                    "an inter-range string, a prefix separator, or a stem",
                ))
            }
            (StartsInterRange, Range) => {
                self.push_range(token)?;
                RangeStartsName
            }
            (StartsInterRange, _) => return Err(self.expected(token, "the ranges")),
            (StartsPostfix, Stem) => {
                self.stem = token.value.to_owned();
                StartsStem
            }
            (StartsPostfix, _) => return Err(self.expected(token, "a stem")),
            (StartsStem, Suffixes) => {
                self.suffixes = pad::parse_suffixes(token);
                StartsSuffixes
            }
            (StartsStem, _) => return Err(self.expected(token, "the file suffixes")),
            (StartsSuffixes, _) => {
                return Err(self.expected(token, "the end of the sequence"))
            }

            (RangeLater, Prefix) => {
                self.prefix = token.value.to_owned();
                InPrefix
            }
            (RangeLater, Range) => {
                self.shape = Some(Shape::InName);
                self.push_range(token)?;
                RangeInName
            }
            (RangeLater, Suffixes) => {
                self.shape = Some(Shape::EndsName);
                self.suffixes = pad::parse_suffixes(token);
                RangeEndsName
            }
            (RangeLater, _) => {
                return Err(self.expected(token, "a prefix separator, a ranges, or file suffixes"))
            }
            (InPrefix, Range) => {
                self.shape = Some(Shape::InName);
                self.push_range(token)?;
                RangeInName
            }
            (InPrefix, _) => return Err(self.expected(token, "the ranges")),
            (RangeInName, InterRange) => {
                self.inter_ranges.push(token.value.to_owned());
                InInterRange
            }
            (RangeInName, Postfix) => {
                self.postfix = token.value.to_owned();
                InPostfix
            }
            (RangeInName, Suffixes) => {
                self.suffixes = pad::parse_suffixes(token);
                InSuffixes
            }
            (RangeInName, _) => {
                return Err(self.expected(
                    token,
                    "an inter-range string, a postfix, or file suffixes",
                ))
            }
            (InInterRange, Range) => {
                self.push_range(token)?;
                RangeInName
            }
            (InInterRange, _) => return Err(self.expected(token, "the ranges")),
            (InPostfix, Suffixes) => {
                self.suffixes = pad::parse_suffixes(token);
                InSuffixes
            }
            (InPostfix, _) => return Err(self.expected(token, "the file suffixes")),
            (InSuffixes, _) => return Err(self.expected(token, "the end of the sequence")),

            (RangeEndsName, Prefix) => {
                self.prefix = token.value.to_owned();
                EndsPrefix
            }
            (RangeEndsName, Range) => {
                self.push_range(token)?;
                EndsRange
            }
            (RangeEndsName, _) => {
                return Err(self.expected(token, "a prefix separator, or a range"))
            }
            (EndsPrefix, Range) => {
                self.push_range(token)?;
                EndsRange
            }
            (EndsPrefix, _) => return Err(self.expected(token, "the ranges")),
            (EndsRange, InterRange) => {
                self.inter_ranges.push(token.value.to_owned());
                EndsInterRange
            }
            (EndsRange, _) => return Err(self.expected(token, "an inter-range string")),
            (EndsInterRange, Range) => {
                self.push_range(token)?;
                EndsRange
            }
            (EndsInterRange, _) => return Err(self.expected(token, "the ranges")),
        };
        Ok(())
    }

    fn finish(mut self) -> Result<ParsedLooseSequence, ParseError> {
        use State::*;

        match self.state {
            // A lone leading range never gained a stem, so nothing
            // distinguishes it from a range inside an empty name.
            RangeStartsName => self.shape = Some(Shape::InName),
            StartsStem | StartsSuffixes | RangeInName | InPostfix | InSuffixes | EndsRange => {}
            Init | StartsInterRange | StartsPostfix | RangeLater | InPrefix | InInterRange
            | RangeEndsName | EndsPrefix | EndsInterRange => {
                return Err(ParseError::new(
                    self.text,
                    self.text.len()..self.text.len() + 1,
                    "Unexpected end of the sequence",
                    ParseErrorKind::Invalid,
                ));
            }
        }

        let ranges = Ranges::new(self.ranges, self.inter_ranges)
            .expect("the tokenizer yields one separator between consecutive ranges");
        let shape = self.shape.expect("a finished parse has decided its shape");
        Ok(match shape {
            Shape::StartsName => ParsedLooseSequence::StartsName(RangesStartName {
                ranges,
                postfix: self.postfix,
                stem: self.stem,
                suffixes: self.suffixes,
            }),
            Shape::InName => ParsedLooseSequence::InName(RangesInName {
                stem: self.stem,
                prefix: self.prefix,
                ranges,
                postfix: self.postfix,
                suffixes: self.suffixes,
            }),
            Shape::EndsName => ParsedLooseSequence::EndsName(RangesEndName {
                stem: self.stem,
                suffixes: self.suffixes,
                prefix: self.prefix,
                ranges,
            }),
        })
    }

    fn push_range(&mut self, token: &Token<'a>) -> Result<(), ParseError> {
        self.ranges.push(pad::parse_padded_range(self.text, token)?);
        Ok(())
    }

    fn expected(&self, token: &Token<'a>, what: &str) -> ParseError {
        ParseError::new(
            self.text,
            token.span.clone(),
            format!("Expected {what}"),
            ParseErrorKind::Invalid,
        )
    }
}

/// Parses a loose-dialect sequence name.
pub fn parse_loose_sequence(text: &str) -> Result<ParsedLooseSequence, ParseError> {
    let tokens = lexer::tokenize_loose(text).map_err(|error| ParseError::from_lex(text, error))?;
    let mut parser = SeqParser::new(text);
    for token in &tokens {
        parser.pump(token)?;
    }
    parser.finish()
}
