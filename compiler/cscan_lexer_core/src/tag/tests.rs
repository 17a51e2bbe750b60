use super::*;

// === RawTag discriminants ===

#[test]
fn repr_u8_semantic_ranges() {
    assert_eq!(RawTag::Ident as u8, 0);
    assert_eq!(RawTag::Char as u8, 3);

    assert_eq!(RawTag::Plus as u8, 32);
    assert_eq!(RawTag::Question as u8, 69);

    assert_eq!(RawTag::LeftParen as u8, 80);
    assert_eq!(RawTag::Ellipsis as u8, 91);

    assert_eq!(RawTag::Whitespace as u8, 112);
    assert_eq!(RawTag::Directive as u8, 115);

    assert_eq!(RawTag::InvalidByte as u8, 240);
    assert_eq!(RawTag::ReversedCompoundAssign as u8, 244);

    assert_eq!(RawTag::Eof as u8, 255);
}

#[test]
fn category_predicates() {
    assert!(RawTag::ShrEqual.is_operator());
    assert!(!RawTag::ShrEqual.is_punctuation());
    assert!(RawTag::ColonColon.is_punctuation());
    assert!(RawTag::Directive.is_trivia());
    assert!(RawTag::BlockComment.is_trivia());
    assert!(!RawTag::Ident.is_trivia());
    assert!(RawTag::UnterminatedString.is_error());
    assert!(!RawTag::Eof.is_error());
    assert!(!RawTag::Eof.is_trivia());
}

// === Lexeme ===

#[test]
fn fixed_lexemes() {
    let cases = [
        (RawTag::Plus, "+"),
        (RawTag::Spaceship, "<=>"),
        (RawTag::ShlEqual, "<<="),
        (RawTag::ShrEqual, ">>="),
        (RawTag::ArrowStar, "->*"),
        (RawTag::DotStar, ".*"),
        (RawTag::ColonColon, "::"),
        (RawTag::Ellipsis, "..."),
        (RawTag::LeftBrace, "{"),
        (RawTag::Semicolon, ";"),
    ];
    for (tag, text) in cases {
        assert_eq!(tag.lexeme(), Some(text), "{tag:?}");
    }
}

#[test]
fn variable_tags_have_no_lexeme() {
    for tag in [
        RawTag::Ident,
        RawTag::Number,
        RawTag::String,
        RawTag::Char,
        RawTag::Whitespace,
        RawTag::LineComment,
        RawTag::BlockComment,
        RawTag::Directive,
        RawTag::InvalidByte,
        RawTag::ReversedCompoundAssign,
        RawTag::Eof,
    ] {
        assert_eq!(tag.lexeme(), None, "{tag:?}");
    }
}

#[test]
fn lexeme_lengths_are_short() {
    for tag in [RawTag::Plus, RawTag::Spaceship, RawTag::ArrowStar, RawTag::Ellipsis] {
        let text = tag.lexeme().unwrap_or_default();
        assert!((1..=3).contains(&text.len()), "{tag:?}");
    }
}

#[test]
fn names() {
    assert_eq!(RawTag::Ident.name(), "identifier");
    assert_eq!(RawTag::Eof.name(), "end of input");
    assert_eq!(RawTag::Arrow.name(), "->");
}

#[test]
fn raw_token_is_eight_bytes() {
    assert_eq!(std::mem::size_of::<RawToken>(), 8);
}
