use lexer::{tokenize, tokenize_loose, LexError, Token, TokenType};
use pretty_assertions::assert_eq;

#[test]
fn production_render_name() {
    let tokens = tokenize("sh010_comp.1001-1150####.exr").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenType::Stem, "sh010_comp", 0..10),
            Token::new(TokenType::Prefix, ".", 10..11),
            Token::new(TokenType::Range, "1001-1150####", 11..24),
            Token::new(TokenType::Suffixes, ".exr", 24..28),
        ]
    );
}

#[test]
fn tiled_texture_name() {
    let tokens = tokenize("diffuse.1001-1012<UDIM>_1-4#.tex").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenType::Stem, "diffuse", 0..7),
            Token::new(TokenType::Prefix, ".", 7..8),
            Token::new(TokenType::Range, "1001-1012<UDIM>", 8..23),
            Token::new(TokenType::InterRange, "_", 23..24),
            Token::new(TokenType::Range, "1-4#", 24..28),
            Token::new(TokenType::Suffixes, ".tex", 28..32),
        ]
    );
}

#[test]
fn subsampled_simulation_name() {
    let tokens = tokenize("sim.1-10x0.25#.##.bgeo.sc").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenType::Stem, "sim", 0..3),
            Token::new(TokenType::Prefix, ".", 3..4),
            Token::new(TokenType::Range, "1-10x0.25#.##", 4..17),
            Token::new(TokenType::Suffixes, ".bgeo.sc", 17..25),
        ]
    );
}

#[test]
fn loose_name_ending_with_its_range() {
    let tokens = tokenize_loose("plate.mov.1-24#").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenType::Stem, "plate", 0..5),
            Token::new(TokenType::Suffixes, ".mov", 5..9),
            Token::new(TokenType::Prefix, ".", 9..10),
            Token::new(TokenType::Range, "1-24#", 10..15),
        ]
    );
}

#[test]
fn loose_name_opening_with_its_range() {
    let tokens = tokenize_loose("1-24#_plate.mov").unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenType::Range, "1-24#", 0..5),
            Token::new(TokenType::Postfix, "_", 5..6),
            Token::new(TokenType::Stem, "plate", 6..11),
            Token::new(TokenType::Suffixes, ".mov", 11..15),
        ]
    );
}

#[test]
fn names_without_a_range_token() {
    assert_eq!(tokenize("plate.mov"), Err(LexError::NotASequence));
    assert_eq!(tokenize_loose("plate.mov"), Err(LexError::NotASequence));
    // A bare number is not a range token; only a pad format makes one.
    assert_eq!(tokenize("plate.1001.exr"), Err(LexError::NotASequence));
}
