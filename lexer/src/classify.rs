//! Positional classification of raw segments into typed tokens.
//!
//! The raw split only knows "range token" and "text"; which text is a stem,
//! a separator or the suffixes depends on where it sits and on the dialect.

use crate::scan::{self, Segment, SegmentKind};
use crate::token::{LexError, Token, TokenType};

const PREFIX_SEPARATORS: [char; 2] = ['.', '_'];

/// Tokenizes `input` for the strict dialect.
///
/// Strict names must carry their ranges between a stem and the suffixes, so
/// a leading or trailing range, an empty or `.` inter-range separator and a
/// suffix block without a leading dot are all rejected here.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    let segments = scan::split(input);
    if segments.len() == 1 {
        return Err(LexError::NotASequence);
    }
    if input.ends_with('.') {
        return Err(LexError::invalid(
            input.len() - 1..input.len(),
            "Suffixes cannot end with a '.'",
        ));
    }
    if segments[0].value.is_empty() {
        return Err(LexError::invalid(0..1, "Expected a stem but got a range"));
    }
    if segments[segments.len() - 1].value.is_empty() {
        return Err(LexError::invalid(
            input.len()..input.len() + 1,
            "Expected file suffixes but the name ends with a range",
        ));
    }

    let mut tokens = Vec::new();
    let last_index = segments.len() - 1;
    for (i, segment) in segments.iter().enumerate() {
        if i == 0 {
            push_stem_and_prefix(segment, &mut tokens);
        } else if segment.kind == SegmentKind::Ranges {
            tokens.push(token(TokenType::Range, segment));
        } else if i != last_index {
            if segment.value.is_empty() {
                return Err(LexError::invalid(
                    segment.span.start..segment.span.start + 1,
                    "Expected a non-empty inter-range separator",
                ));
            }
            if segment.value == "." {
                return Err(LexError::invalid(
                    segment.span.clone(),
                    "Cannot use '.' as an inter-range separator",
                ));
            }
            tokens.push(token(TokenType::InterRange, segment));
        } else {
            if !segment.value.starts_with('.') {
                return Err(LexError::invalid(
                    segment.span.start..segment.span.start + 1,
                    "Expected a '.' to begin file suffixes",
                ));
            }
            tokens.push(token(TokenType::Suffixes, segment));
        }
    }
    Ok(tokens)
}

/// Tokenizes `input` for the loose dialect.
///
/// The ranges may start, sit inside or end the name; the boundary segments
/// are split accordingly instead of being rejected.
pub fn tokenize_loose(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut segments = scan::split(input);
    if segments.len() == 1 {
        return Err(LexError::NotASequence);
    }
    let starts_with_range = segments[0].value.is_empty();
    let ends_with_range = segments[segments.len() - 1].value.is_empty();
    if ends_with_range {
        segments.pop();
    }

    let mut tokens = Vec::new();
    let last_index = segments.len() - 1;
    for (i, segment) in segments.iter().enumerate() {
        if i == 0 {
            if segment.value.is_empty() {
                continue;
            }
            if ends_with_range {
                push_leading_name(segment, &mut tokens);
            } else {
                push_stem_and_prefix(segment, &mut tokens);
            }
        } else if segment.kind == SegmentKind::Ranges {
            tokens.push(token(TokenType::Range, segment));
        } else if i != last_index {
            tokens.push(token(TokenType::InterRange, segment));
        } else {
            push_trailing_name(segment, starts_with_range, &mut tokens);
        }
    }

    if !tokens.iter().any(|t| t.token_type == TokenType::Range) {
        return Err(LexError::NotASequence);
    }
    Ok(tokens)
}

fn token<'a>(token_type: TokenType, segment: &Segment<'a>) -> Token<'a> {
    Token::new(token_type, segment.value, segment.span.clone())
}

/// Splits an optional trailing separator off the first segment.
///
/// A first segment that is exactly `.` is a hidden-file stem, not a
/// separator.
fn push_stem_and_prefix<'a>(segment: &Segment<'a>, tokens: &mut Vec<Token<'a>>) {
    let (value, span) = (segment.value, segment.span.clone());
    if value != "." && value.ends_with(&PREFIX_SEPARATORS[..]) {
        let split = value.len() - 1;
        tokens.push(Token::new(
            TokenType::Stem,
            &value[..split],
            span.start..span.start + split,
        ));
        tokens.push(Token::new(
            TokenType::Prefix,
            &value[split..],
            span.start + split..span.end,
        ));
    } else {
        tokens.push(Token::new(TokenType::Stem, value, span));
    }
}

/// Splits the whole leading name of a trailing-range sequence into stem,
/// suffixes and the separator before the ranges, in token order
/// stem, suffixes, separator.
fn push_leading_name<'a>(segment: &Segment<'a>, tokens: &mut Vec<Token<'a>>) {
    let (mut value, span) = (segment.value, segment.span.clone());
    let mut separator = None;
    if value.ends_with(&PREFIX_SEPARATORS[..]) {
        let split = value.len() - 1;
        separator = Some(Token::new(
            TokenType::Prefix,
            &value[split..],
            span.start + split..span.end,
        ));
        value = &value[..split];
    }
    let stem_end = stem_split(value);
    tokens.push(Token::new(
        TokenType::Stem,
        &value[..stem_end],
        span.start..span.start + stem_end,
    ));
    if stem_end < value.len() {
        tokens.push(Token::new(
            TokenType::Suffixes,
            &value[stem_end..],
            span.start + stem_end..span.start + value.len(),
        ));
    }
    if let Some(separator) = separator {
        tokens.push(separator);
    }
}

/// Classifies the last segment.
///
/// After a leading range a separator followed by a stem is split off so that
/// `1-10#.file.exr` reads as ranges, separator, stem, suffixes; a tail with
/// no stem material keeps the plain suffixes classification.
fn push_trailing_name<'a>(
    segment: &Segment<'a>,
    starts_with_range: bool,
    tokens: &mut Vec<Token<'a>>,
) {
    let (value, span) = (segment.value, segment.span.clone());
    if starts_with_range {
        if let Some(first) = value.chars().next().filter(|c| PREFIX_SEPARATORS.contains(c)) {
            let rest = &value[1..];
            let has_stem = stem_split(rest) > 0;
            if has_stem || first == '_' {
                tokens.push(Token::new(
                    TokenType::Postfix,
                    &value[..1],
                    span.start..span.start + 1,
                ));
                push_split_name(rest, span.start + 1, tokens, TokenType::Stem);
                return;
            }
        }
        if value.starts_with('.') && !value.ends_with('.') {
            tokens.push(Token::new(TokenType::Suffixes, value, span));
            return;
        }
        push_split_name(value, span.start, tokens, TokenType::Stem);
    } else {
        if value.starts_with('.') && !value.ends_with('.') {
            tokens.push(Token::new(TokenType::Suffixes, value, span));
            return;
        }
        push_split_name(value, span.start, tokens, TokenType::Postfix);
    }
}

/// Pushes `value` as a leading token plus suffixes, split at the first
/// interior dot.
fn push_split_name<'a>(
    value: &'a str,
    at: usize,
    tokens: &mut Vec<Token<'a>>,
    leading: TokenType,
) {
    let stem_end = stem_split(value);
    if stem_end > 0 {
        tokens.push(Token::new(leading, &value[..stem_end], at..at + stem_end));
    }
    if stem_end < value.len() {
        tokens.push(Token::new(
            TokenType::Suffixes,
            &value[stem_end..],
            at + stem_end..at + value.len(),
        ));
    }
}

/// Where the stem part of `text` ends and the suffixes begin.
fn stem_split(text: &str) -> usize {
    if text.ends_with('.') {
        text.len()
    } else if text.starts_with('.') {
        0
    } else {
        text.find('.').unwrap_or(text.len())
    }
}
