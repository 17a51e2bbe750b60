use pretty_assertions::assert_eq;

use super::*;

#[test]
fn token_span_follows_positions() {
    let start = SourcePosition::new(2, 5, 14);
    let end = start.advance("counter");
    let tok = Token::new(TokenKind::Identifier, "counter", start, end);
    assert_eq!(tok.span(), Span::new(14, 21));
    assert_eq!(tok.end.column, 12);
}

#[test]
fn end_of_input_is_zero_length() {
    let pos = SourcePosition::new(3, 1, 40);
    let tok = Token::new(TokenKind::EndOfInput, "", pos, pos);
    assert!(tok.span().is_empty());
    assert!(tok.lexeme.is_empty());
}

#[test]
fn only_whitespace_is_trivia() {
    for kind in TokenKind::ALL {
        assert_eq!(kind.is_trivia(), kind == TokenKind::Whitespace, "{kind:?}");
    }
}

#[test]
fn literal_kinds() {
    let literals: Vec<_> = TokenKind::ALL
        .into_iter()
        .filter(|k| k.is_literal())
        .collect();
    assert_eq!(
        literals,
        vec![
            TokenKind::IntegerLiteral,
            TokenKind::FloatLiteral,
            TokenKind::StringLiteral,
            TokenKind::CharLiteral,
        ]
    );
}

#[test]
fn display_names_are_unique() {
    let mut names: Vec<_> = TokenKind::ALL.iter().map(|k| k.display_name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), TokenKind::ALL.len());
}

#[test]
fn debug_shows_kind_lexeme_and_span() {
    let start = SourcePosition::START;
    let tok = Token::new(TokenKind::Operator, "+=", start, start.advance("+="));
    assert_eq!(format!("{tok:?}"), "Operator(\"+=\") @ 0..2");
}
