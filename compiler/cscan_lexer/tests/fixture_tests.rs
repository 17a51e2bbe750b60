//! Scans the sample C++ programs under `tests/fixtures/`.
//!
//! `error_example.cpp` carries one numbered fault per comment block; the two
//! other programs are well-formed and must scan cleanly.

use cscan_diagnostic::ErrorKind;
use cscan_ir::{SourcePosition, Span, TokenKind};
use cscan_lexer::{scan, SymbolTable};
use pretty_assertions::assert_eq;

const ERROR_EXAMPLE: &str = include_str!("fixtures/error_example.cpp");
const OOP_EXAMPLE: &str = include_str!("fixtures/oop_example.cpp");
const PROCEDURAL_EXAMPLE: &str = include_str!("fixtures/procedural_example.cpp");

#[test]
fn error_example_reports_each_fault() {
    let output = scan(ERROR_EXAMPLE);
    let found: Vec<_> = output
        .diagnostics()
        .iter()
        .map(|d| (d.kind, d.position))
        .collect();

    assert_eq!(
        found,
        vec![
            // `int main() {` never closed: the comment swallows its `}`.
            (ErrorKind::UnmatchedDelimiter, SourcePosition::new(4, 12, 69)),
            (ErrorKind::InvalidIdentifierStart, SourcePosition::new(6, 9, 135)),
            (ErrorKind::InvalidCharacter, SourcePosition::new(10, 7, 220)),
            (ErrorKind::UnterminatedLiteral, SourcePosition::new(13, 27, 310)),
            (ErrorKind::InvalidCharacter, SourcePosition::new(16, 11, 398)),
            (ErrorKind::MalformedNumber, SourcePosition::new(19, 21, 473)),
            (ErrorKind::UnmatchedDelimiter, SourcePosition::new(22, 8, 532)),
            (ErrorKind::InvalidEscapeSequence, SourcePosition::new(27, 15, 648)),
            (ErrorKind::UnterminatedComment, SourcePosition::new(30, 5, 690)),
        ]
    );
}

#[test]
fn error_example_skipped_spans() {
    let output = scan(ERROR_EXAMPLE);
    let skipped: Vec<_> = output
        .diagnostics()
        .iter()
        .map(|d| d.skipped.map(|s| &ERROR_EXAMPLE[s.to_range()]))
        .collect();
    assert_eq!(
        skipped,
        vec![
            None,
            Some("123variable"),
            Some("=+"),
            Some("\"This is an unclosed string;"),
            Some("@"),
            Some("123.456.789"),
            None,
            None,
            Some(&ERROR_EXAMPLE[690..]),
        ]
    );
}

#[test]
fn error_example_stops_at_unterminated_comment() {
    let output = scan(ERROR_EXAMPLE);
    let last_two: Vec<_> = output
        .tokens()
        .iter()
        .rev()
        .take(2)
        .map(|t| (t.kind, t.span()))
        .collect();
    // Whitespace before the comment, then end of input.
    assert_eq!(
        last_two,
        vec![
            (TokenKind::EndOfInput, Span::new(847, 847)),
            (TokenKind::Whitespace, Span::new(685, 690)),
        ]
    );
}

#[test]
fn error_example_keeps_escape_literal() {
    let output = scan(ERROR_EXAMPLE);
    assert!(output
        .tokens()
        .iter()
        .any(|t| t.kind == TokenKind::CharLiteral && t.lexeme == "'\\q'"));
}

#[test]
fn clean_examples_have_no_diagnostics() {
    for (name, source) in [("oop", OOP_EXAMPLE), ("procedural", PROCEDURAL_EXAMPLE)] {
        let output = scan(source);
        assert!(
            output.diagnostics().is_empty(),
            "{name} example: {:?}",
            output.diagnostics()
        );
        assert_eq!(
            output.tokens().last().map(|t| t.kind),
            Some(TokenKind::EndOfInput)
        );
    }
}

#[test]
fn clean_examples_start_with_directives() {
    for source in [OOP_EXAMPLE, PROCEDURAL_EXAMPLE] {
        let first_directive = scan(source)
            .significant_tokens()
            .find(|t| t.kind == TokenKind::Directive)
            .map(|t| t.lexeme.clone());
        assert_eq!(first_directive.as_deref(), Some("#include <iostream>"));
    }
}

#[test]
fn oop_example_symbols() {
    let output = scan(OOP_EXAMPLE);
    let table = SymbolTable::build(output.tokens());
    let numbers: Vec<_> = table.numbers.iter().map(|(_, n)| n).collect();
    assert_eq!(numbers, vec!["0", "3.14159", "5.0", "4.0", "6.0"]);
    assert_eq!(table.identifiers.get("Shape"), Some(1));
    assert!(table.identifiers.get("virtual").is_none());
}
