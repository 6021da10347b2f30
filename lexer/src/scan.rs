use logos::Logos;

use crate::token::Span;

/// Raw lexical shape of a name: range tokens, and everything else.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    /// One or more comma-joined range specs immediately followed by a pad
    /// format. The token is atomic: it can never contain a nested range.
    ///
    /// The numeric part is deliberately permissive; the strict numeral rules
    /// are enforced later by the range-string parser.
    #[regex(r"(-?[0-9]+(\.[0-9]+)?(--?[0-9]+(\.[0-9]+)?(x[0-9]+(\.[0-9]+)?)?)?(,-?[0-9]+(\.[0-9]+)?(--?[0-9]+(\.[0-9]+)?(x[0-9]+(\.[0-9]+)?)?)?)*)?(#+(\.#+)?|<UDIM>|<UVTILE>)")]
    Ranges,

    #[error]
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SegmentKind {
    Text,
    Ranges,
}

/// A slice of the input together with its kind and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Segment<'a> {
    pub(crate) kind: SegmentKind,
    pub(crate) value: &'a str,
    pub(crate) span: Span,
}

impl<'a> Segment<'a> {
    fn new(input: &'a str, kind: SegmentKind, span: Span) -> Self {
        Self {
            kind,
            value: &input[span.clone()],
            span,
        }
    }
}

/// Splits `input` on the composite range token, keeping the matched tokens.
///
/// The result always alternates text, range, text, … and starts and ends
/// with a (possibly empty) text segment, so a name with `k` range tokens
/// yields `2k + 1` segments.
pub(crate) fn split(input: &str) -> Vec<Segment<'_>> {
    let mut lexer = RawToken::lexer(input);
    let mut segments = Vec::new();
    let mut text_start = 0;
    while let Some(token) = lexer.next() {
        if token == RawToken::Ranges {
            let span = lexer.span();
            segments.push(Segment::new(input, SegmentKind::Text, text_start..span.start));
            segments.push(Segment::new(input, SegmentKind::Ranges, span.clone()));
            text_start = span.end;
        }
    }
    segments.push(Segment::new(
        input,
        SegmentKind::Text,
        text_start..input.len(),
    ));
    segments
}
