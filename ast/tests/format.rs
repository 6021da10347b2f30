use ast::{PadFormat, PaddedRange, ParsedSequence, Ranges, Sequence, SequenceError};
use numseq::Number;
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

fn two_dimensional() -> ParsedSequence {
    ParsedSequence {
        stem: "file".to_owned(),
        prefix: ".".to_owned(),
        ranges: Ranges::new(
            vec![padded("1001,1002<UDIM>"), padded("1-3#")],
            vec!["_".to_owned()],
        )
        .unwrap(),
        suffixes: vec![".exr".to_owned()],
    }
}

#[test]
fn glob_pattern_replaces_each_range_with_a_star() {
    assert_eq!(two_dimensional().as_glob(), "file.*_*.exr");
}

#[test]
fn regex_pattern_captures_each_range() {
    let pattern = two_dimensional().as_regex();
    let regex = regex::Regex::new(&format!("^{pattern}$")).unwrap();

    let captures = regex.captures("file.1001_2.exr").unwrap();
    assert_eq!(&captures["range0"], "1001");
    assert_eq!(&captures["range1"], "2");

    assert!(regex.is_match("file.1002_3.exr"));
    assert!(!regex.is_match("file.1001_2.tif"));
    // Integer-only collections do not admit spurious fractions.
    assert!(!regex.is_match("file.1001_2.5.exr"));
}

#[test]
fn regex_pattern_allows_fractions_for_decimal_collections() {
    let sequence = ParsedSequence {
        stem: "file".to_owned(),
        prefix: ".".to_owned(),
        ranges: Ranges::single(padded("1-2x0.5#")),
        suffixes: vec![".exr".to_owned()],
    };
    let regex = regex::Regex::new(&format!("^{}$", sequence.as_regex())).unwrap();
    assert!(regex.is_match("file.1.5.exr"));
    assert!(regex.is_match("file.2.exr"));
}

#[test]
fn regex_escapes_literal_fields() {
    let sequence = ParsedSequence {
        stem: "shot(a)".to_owned(),
        prefix: ".".to_owned(),
        ranges: Ranges::single(padded("#")),
        suffixes: vec![".exr".to_owned()],
    };
    let regex = regex::Regex::new(&format!("^{}$", sequence.as_regex())).unwrap();
    assert!(regex.is_match("shot(a).5.exr"));
    assert!(!regex.is_match("shota.5.exr"));
}

#[test]
fn uvtile_regex_matches_tile_coordinates() {
    let sequence = ParsedSequence {
        stem: "tex".to_owned(),
        prefix: ".".to_owned(),
        ranges: Ranges::single(padded("1001-1002<UVTILE>")),
        suffixes: vec![".tex".to_owned()],
    };
    let regex = regex::Regex::new(&format!("^{}$", sequence.as_regex())).unwrap();
    assert!(regex.is_match("tex.u1_v1.tex"));
    assert!(!regex.is_match("tex.u1v1.tex"));
}

#[test]
fn names_iterate_the_cartesian_product() {
    let names: Vec<String> = two_dimensional().names().unwrap().collect();
    assert_eq!(
        names,
        [
            "file.1001_1.exr",
            "file.1001_2.exr",
            "file.1001_3.exr",
            "file.1002_1.exr",
            "file.1002_2.exr",
            "file.1002_3.exr",
        ]
    );
    assert_eq!(two_dimensional().name_count().unwrap(), 6);
}

#[test]
fn names_need_concrete_ranges() {
    let sequence = ParsedSequence {
        stem: "file".to_owned(),
        prefix: ".".to_owned(),
        ranges: Ranges::single(padded("#")),
        suffixes: vec![".exr".to_owned()],
    };
    assert!(matches!(
        sequence.names().map(|_| ()),
        Err(SequenceError::UnknownRanges)
    ));
}

#[test]
fn formatting_two_ranges_with_one_number_is_an_arity_error() {
    let error = two_dimensional()
        .format(&[Some(Number::Int(1001))])
        .unwrap_err();
    assert_eq!(
        error,
        SequenceError::NumberCount {
            expected: 2,
            given: 1
        }
    );
}

#[test]
fn pattern_mode_substitutes_only_given_numbers() {
    let formatted = two_dimensional()
        .format(&[Some(Number::Int(1001)), None])
        .unwrap();
    assert_eq!(formatted, "file.1001_1-3#.exr");
}
