use ast::{PadFormat, PaddedRange};
use lexer::Token;
use numseq::FileNums;

use crate::err::{ParseError, ParseErrorKind};

/// Builds a [`PaddedRange`] from a range token.
///
/// The token value is the atomic ranges-plus-pad text; an empty numeric part
/// yields a pattern-only range. Errors from the range grammar are
/// re-anchored at the token's offset in the whole string.
pub(crate) fn parse_padded_range(text: &str, token: &Token) -> Result<PaddedRange, ParseError> {
    let (ranges_part, pad) = match PadFormat::split_trailing(token.value) {
        Some(split) => split,
        None => {
            return Err(ParseError::new(
                text,
                token.span.clone(),
                format!("Tokenised an invalid range: {}", token.value),
                ParseErrorKind::Invalid,
            ));
        }
    };
    let file_nums = if ranges_part.is_empty() {
        None
    } else {
        match ranges_part.parse::<FileNums>() {
            Ok(file_nums) => Some(file_nums),
            Err(error) => {
                let start = token.span.start;
                return Err(ParseError::new(
                    text,
                    start + error.span.start..start + error.span.end,
                    error.reason,
                    ParseErrorKind::InvalidRanges,
                ));
            }
        }
    };
    Ok(PaddedRange::new(file_nums, pad))
}

/// Splits a suffixes token into its dot-prefixed extensions.
pub(crate) fn parse_suffixes(token: &Token) -> Vec<String> {
    split_suffixes(token.value)
}

/// Like [`parse_suffixes`], but rejects empty extensions such as `..exr`.
pub(crate) fn parse_suffixes_strict(
    text: &str,
    token: &Token,
) -> Result<Vec<String>, ParseError> {
    let value = token.value;
    for (i, window) in value.as_bytes().windows(2).enumerate() {
        if window == b".." {
            let column = token.span.start + i + 1;
            return Err(ParseError::new(
                text,
                column..column + 1,
                "Cannot have an empty file extension",
                ParseErrorKind::Invalid,
            ));
        }
    }
    Ok(split_suffixes(value))
}

fn split_suffixes(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    let mut suffixes = Vec::new();
    let mut chars = value.char_indices();
    chars.next();
    let mut buffer_start = 0;
    for (i, c) in chars {
        if c == '.' {
            suffixes.push(value[buffer_start..i].to_owned());
            buffer_start = i;
        }
    }
    suffixes.push(value[buffer_start..].to_owned());
    suffixes
}

#[cfg(test)]
mod tests {
    use lexer::TokenType;
    use pretty_assertions::assert_eq;

    use super::*;

    fn token(value: &str) -> Token<'_> {
        Token::new(TokenType::Suffixes, value, 0..value.len())
    }

    #[test]
    fn splits_suffixes_on_each_dot() {
        assert_eq!(parse_suffixes(&token(".exr")), [".exr"]);
        assert_eq!(parse_suffixes(&token(".tar.gz")), [".tar", ".gz"]);
        assert_eq!(parse_suffixes(&token("")), Vec::<String>::new());
    }

    #[test]
    fn strict_suffixes_reject_empty_extensions() {
        assert!(parse_suffixes_strict("file.#..exr", &token("..exr")).is_err());
        assert!(parse_suffixes_strict("file.#.exr", &token(".exr")).is_ok());
    }

    #[test]
    fn range_grammar_errors_are_anchored_in_the_whole_string() {
        let text = "file.01-10#.exr";
        let range = Token::new(TokenType::Range, "01-10#", 5..11);
        let error = parse_padded_range(text, &range).unwrap_err();
        assert_eq!(error.kind, ParseErrorKind::InvalidRanges);
        assert_eq!(error.span.start, 6);
    }
}
