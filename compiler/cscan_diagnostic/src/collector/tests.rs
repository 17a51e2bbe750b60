use cscan_ir::{SourcePosition, Span};
use pretty_assertions::assert_eq;

use super::*;

fn diag_at(kind: ErrorKind, offset: u32) -> Diagnostic {
    Diagnostic::new(kind, SourcePosition::new(1, offset + 1, offset), Span::new(offset, offset + 1))
}

#[test]
fn empty_collector() {
    let collector = DiagnosticCollector::new();
    assert!(!collector.has_errors());
    assert!(collector.is_empty());
    assert_eq!(collector.len(), 0);
    assert!(collector.all().is_empty());
}

#[test]
fn records_in_position_order() {
    let mut collector = DiagnosticCollector::new();
    collector.record(diag_at(ErrorKind::InvalidCharacter, 10));
    collector.record(diag_at(ErrorKind::MalformedNumber, 20));
    // Reported late, but positioned first.
    collector.record(diag_at(ErrorKind::UnmatchedDelimiter, 2));

    let offsets: Vec<_> = collector.all().iter().map(|d| d.span.start).collect();
    assert_eq!(offsets, vec![2, 10, 20]);
    assert!(collector.has_errors());
}

#[test]
fn equal_positions_keep_recording_order() {
    let mut collector = DiagnosticCollector::new();
    collector.record(diag_at(ErrorKind::InvalidCharacter, 5).with_message("first"));
    collector.record(diag_at(ErrorKind::InvalidCharacter, 5).with_message("second"));
    collector.record(diag_at(ErrorKind::InvalidCharacter, 5).with_message("third"));

    let messages: Vec<_> = collector.all().iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
}

#[test]
fn no_deduplication() {
    let mut collector = DiagnosticCollector::new();
    let diag = diag_at(ErrorKind::InvalidCharacter, 0);
    collector.record(diag.clone());
    collector.record(diag);
    assert_eq!(collector.len(), 2);
}

#[test]
fn counts_by_kind() {
    let mut collector = DiagnosticCollector::new();
    collector.extend([
        diag_at(ErrorKind::InvalidCharacter, 0),
        diag_at(ErrorKind::UnmatchedDelimiter, 3),
        diag_at(ErrorKind::InvalidCharacter, 7),
    ]);
    assert_eq!(collector.error_count_by_kind(ErrorKind::InvalidCharacter), 2);
    assert_eq!(collector.error_count_by_kind(ErrorKind::UnmatchedDelimiter), 1);
    assert_eq!(collector.error_count_by_kind(ErrorKind::MalformedNumber), 0);
}

#[test]
fn into_diagnostics_preserves_order() {
    let mut collector = DiagnosticCollector::new();
    collector.record(diag_at(ErrorKind::MalformedNumber, 9));
    collector.record(diag_at(ErrorKind::InvalidCharacter, 1));
    let kinds: Vec<_> = collector.into_diagnostics().into_iter().map(|d| d.kind).collect();
    assert_eq!(kinds, vec![ErrorKind::InvalidCharacter, ErrorKind::MalformedNumber]);
}
