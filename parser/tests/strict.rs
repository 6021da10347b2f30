use ast::{PadFormat, PaddedRange, ParsedSequence, Ranges, Sequence};
use parser::{parse_sequence, ParseErrorKind};
use pretty_assertions::assert_eq;

fn padded(text: &str) -> PaddedRange {
    let (nums, pad) = PadFormat::split_trailing(text).unwrap();
    let file_nums = if nums.is_empty() {
        None
    } else {
        Some(nums.parse().unwrap())
    };
    PaddedRange::new(file_nums, pad)
}

fn sequence(stem: &str, prefix: &str, range: &str, suffixes: &[&str]) -> ParsedSequence {
    ParsedSequence {
        stem: stem.to_owned(),
        prefix: prefix.to_owned(),
        ranges: Ranges::single(padded(range)),
        suffixes: suffixes.iter().map(|s| (*s).to_owned()).collect(),
    }
}

#[test]
fn parses_simple_sequences() {
    assert_eq!(
        parse_sequence("file.#.exr").unwrap(),
        sequence("file", ".", "#", &[".exr"])
    );
    assert_eq!(
        parse_sequence("file.1-10#.exr").unwrap(),
        sequence("file", ".", "1-10#", &[".exr"])
    );
    assert_eq!(
        parse_sequence("file.1-10x2#.exr").unwrap(),
        sequence("file", ".", "1-10x2#", &[".exr"])
    );
}

#[test]
fn parses_hidden_files() {
    assert_eq!(
        parse_sequence(".#.exr").unwrap(),
        sequence(".", "", "#", &[".exr"])
    );
    assert_eq!(
        parse_sequence(".hidden#.exr").unwrap(),
        sequence(".hidden", "", "#", &[".exr"])
    );
}

#[test]
fn parses_multi_dimensional_sequences() {
    let parsed = parse_sequence("texture.1011-1012<UDIM>_1-3#.tex").unwrap();
    assert_eq!(
        parsed,
        ParsedSequence {
            stem: "texture".to_owned(),
            prefix: ".".to_owned(),
            ranges: Ranges::new(
                vec![padded("1011-1012<UDIM>"), padded("1-3#")],
                vec!["_".to_owned()],
            )
            .unwrap(),
            suffixes: vec![".tex".to_owned()],
        }
    );
}

#[test]
fn parses_multiple_suffixes() {
    let parsed = parse_sequence("file.1-10#.tar.gz").unwrap();
    assert_eq!(parsed.suffixes, [".tar", ".gz"]);
}

#[test]
fn parses_decimal_subsample_sequences() {
    let parsed = parse_sequence("file.1001-1010x0.25#.#.exr").unwrap();
    assert_eq!(parsed.ranges.ranges().len(), 1);
    let range = &parsed.ranges.ranges()[0];
    assert_eq!(
        range.pad,
        PadFormat::Hashes {
            head: 1,
            tail: Some(1)
        }
    );
    assert!(range.has_subsamples());
}

#[test]
fn rejects_misplaced_ranges() {
    let cases = [
        "#",
        "#.exr",
        "#.tar.gz",
        "#_#",
        "#_file",
        "#_file.exr",
        "#file",
        "#file.exr",
        "#file.tar.gz",
        ".file.exr.#",
        "1-10#_file.exr",
        "1-10x2#_file.exr",
        "file.#",
        "file.#.",
        "file.#.#",
        "file.#..exr",
        "file.#.exr.",
        "file.#_",
        "file.1-10x0.5#",
        "file.1-10x0.5#.#",
        "file.exr.#",
        "file.exr.1-10#",
        "file.exr.1-10x2#",
        "file_#",
    ];
    for case in cases {
        let error = parse_sequence(case).unwrap_err();
        assert_eq!(error.kind, ParseErrorKind::Invalid, "{case}: {error}");
    }
}

#[test]
fn rejects_names_without_ranges() {
    for case in ["", "file", "dir", "file.exr", ".file.exr", ".file", "file.1.exr"] {
        let error = parse_sequence(case).unwrap_err();
        assert!(error.is_not_a_sequence(), "{case}: {error}");
    }
}

#[test]
fn rejects_bad_numerals_inside_a_range_token() {
    let error = parse_sequence("file.01-10#.exr").unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::InvalidRanges);
    assert_eq!(error.span.start, 6);
}

#[test]
fn rejects_a_zero_step() {
    let error = parse_sequence("file.1-10x0#.exr").unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::InvalidRanges);
    assert_eq!(error.reason, "a range step cannot be zero");
}

#[test]
fn round_trips_canonical_strings() {
    let cases = [
        "file.#.exr",
        "file.####.exr",
        "file.#.#.exr",
        "file.1-10#.exr",
        "file.1-9x2####.exr",
        "file.-10--1#.exr",
        "file.1-3,7,10-14x2#.exr",
        "file.1001-1010x0.25#.#.exr",
        "file_1-5#.exr",
        "texture.1011-1012<UDIM>_1-3#.tex",
        "tile.1001-1023<UVTILE>.tex",
        ".hidden#.exr",
        "file.1-10#.tar.gz",
    ];
    for case in cases {
        let parsed = parse_sequence(case).unwrap();
        assert_eq!(parsed.to_string(), case);
    }
}

#[test]
fn error_display_carries_a_caret() {
    let error = parse_sequence("file.exr").unwrap_err();
    let rendered = error.to_string();
    assert!(rendered.contains("Invalid sequence: No range string is present"));
    assert!(rendered.lines().last().unwrap().contains('^'));
}

#[test]
fn patterns_come_from_the_parsed_value() {
    let parsed = parse_sequence("file.1-5#.exr").unwrap();
    assert_eq!(parsed.as_glob(), "file.*.exr");
    assert_eq!(
        parsed.as_regex(),
        r"file\.(?P<range0>(([1-9][0-9]*)?[0-9]|-([1-9][0-9]*)?))\.exr"
    );
}
