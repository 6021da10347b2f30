//! The strict dialect: `stem [sep] ranges .suffixes`.

use ast::{PaddedRange, ParsedSequence, Ranges};
use lexer::{Token, TokenType};

use crate::err::{ParseError, ParseErrorKind};
use crate::pad;

/// How much of the strict grammar has been recognized so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Init,
    Stem,
    InPrefix,
    Range,
    InInterRange,
    InSuffixes,
}

/// Accumulates the grammar fields while pumping tokens.
struct SeqParser<'a> {
    text: &'a str,
    state: State,
    stem: String,
    prefix: String,
    ranges: Vec<PaddedRange>,
    inter_ranges: Vec<String>,
    suffixes: Vec<String>,
}

impl<'a> SeqParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            state: State::Init,
            stem: String::new(),
            prefix: String::new(),
            ranges: Vec::new(),
            inter_ranges: Vec::new(),
            suffixes: Vec::new(),
        }
    }

    fn pump(&mut self, token: &Token<'a>) -> Result<(), ParseError> {
        self.state = match (self.state, token.token_type) {
            (State::Init, TokenType::Stem) => {
                self.stem = token.value.to_owned();
                State::Stem
            }
            (State::Init, _) => return Err(self.expected(token, "a stem")),
            (State::Stem, TokenType::Prefix) => {
                self.prefix = token.value.to_owned();
                State::InPrefix
            }
            (State::Stem, TokenType::Range) => {
                self.push_range(token)?;
                State::Range
            }
            (State::Stem, _) => {
                return Err(self.expected(token, "a prefix separator, or the ranges"))
            }
            (State::InPrefix, TokenType::Range) => {
                self.push_range(token)?;
                State::Range
            }
            (State::InPrefix, _) => return Err(self.expected(token, "the ranges")),
            (State::Range, TokenType::InterRange) => {
                self.inter_ranges.push(token.value.to_owned());
                State::InInterRange
            }
            (State::Range, TokenType::Suffixes) => {
                self.suffixes = pad::parse_suffixes_strict(self.text, token)?;
                State::InSuffixes
            }
            (State::Range, _) => {
                return Err(self.expected(token, "an inter-range string, or file suffixes"))
            }
            (State::InInterRange, TokenType::Range) => {
                self.push_range(token)?;
                State::Range
            }
            (State::InInterRange, _) => return Err(self.expected(token, "the ranges")),
            (State::InSuffixes, _) => {
                return Err(self.expected(token, "the end of the sequence"))
            }
        };
        Ok(())
    }

    fn finish(self) -> Result<ParsedSequence, ParseError> {
        if self.state != State::InSuffixes {
            return Err(ParseError::new(
                self.text,
                self.text.len()..self.text.len() + 1,
                "Expected the file suffixes",
                ParseErrorKind::Invalid,
            ));
        }
        let ranges = Ranges::new(self.ranges, self.inter_ranges)
            .expect("the tokenizer yields one separator between consecutive ranges");
        Ok(ParsedSequence {
            stem: self.stem,
            prefix: self.prefix,
            ranges,
            suffixes: self.suffixes,
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

/// Parses a strict-dialect sequence name.
pub fn parse_sequence(text: &str) -> Result<ParsedSequence, ParseError> {
    let tokens = lexer::tokenize(text).map_err(|error| ParseError::from_lex(text, error))?;
    let mut parser = SeqParser::new(text);
    for token in &tokens {
        parser.pump(token)?;
    }
    parser.finish()
}
