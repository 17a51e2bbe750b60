use cscan_diagnostic::ErrorKind;
use cscan_ir::TokenKind;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn scan_returns_tokens_and_diagnostics() {
    let output = scan("int 123variable = 42;");
    assert!(output.has_errors());
    assert_eq!(output.diagnostics()[0].kind, ErrorKind::InvalidIdentifierStart);
    let lexemes: Vec<_> = output
        .significant_tokens()
        .map(|t| (t.kind, t.lexeme.as_str()))
        .collect();
    assert_eq!(
        lexemes,
        vec![
            (TokenKind::Identifier, "int"),
            (TokenKind::Operator, "="),
            (TokenKind::IntegerLiteral, "42"),
            (TokenKind::Punctuation, ";"),
            (TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn into_parts_matches_accessors() {
    let output = scan("a @ b");
    let tokens = output.tokens().to_vec();
    let diagnostics = output.diagnostics().to_vec();
    assert_eq!(output.into_parts(), (tokens, diagnostics));
}

#[test]
fn try_scan_rejects_oversized_source() {
    let config = LexerConfig::default().with_max_source_len(4);
    assert_eq!(
        try_scan("int x;", &config),
        Err(LexerError::SourceTooLarge { len: 6, limit: 4 })
    );
    assert!(try_scan("int", &config).is_ok());
}

#[test]
fn source_limit_is_capped() {
    let config = LexerConfig::default().with_max_source_len(usize::MAX);
    assert_eq!(config.source_limit(), u32::MAX as usize);
}

#[test]
fn error_message_names_sizes() {
    let err = LexerError::SourceTooLarge { len: 10, limit: 4 };
    assert_eq!(
        err.to_string(),
        "source is 10 bytes, exceeding the 4-byte limit"
    );
}

#[test]
fn check_collects_without_tokens() {
    let collector = check("x = 'a", &LexerConfig::default());
    assert_eq!(
        collector.map(|c| c.error_count_by_kind(ErrorKind::UnterminatedLiteral)),
        Ok(1)
    );
}

#[test]
fn scans_are_independent() {
    let first = scan("{ x");
    let second = scan("y }");
    assert_eq!(first.diagnostics().len(), 1);
    assert_eq!(second.diagnostics().len(), 1);
    assert_eq!(
        second.diagnostics()[0].message,
        "unexpected closing delimiter `}`"
    );
}

#[test]
fn outputs_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ScanOutput>();
    assert_send_sync::<LexerError>();
}
