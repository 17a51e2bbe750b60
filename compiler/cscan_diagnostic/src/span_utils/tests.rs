use super::*;

#[test]
fn test_line_offset_table_build_single_line() {
    let table = LineOffsetTable::build("hello world");
    assert_eq!(table.line_count(), 1);
    assert_eq!(table.line_start_offset(1), Some(0));
    assert_eq!(table.line_start_offset(2), None);
}

#[test]
fn test_line_offset_table_build_multiple_lines() {
    let table = LineOffsetTable::build("line1\nline2\nline3");
    assert_eq!(table.line_count(), 3);
    assert_eq!(table.line_start_offset(2), Some(6));
    assert_eq!(table.line_start_offset(3), Some(12));
    assert_eq!(table.line_start_offset(4), None);
}

#[test]
fn test_line_from_offset() {
    let table = LineOffsetTable::build("line1\nline2\nline3");
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(5), 1); // '\n' after line1
    assert_eq!(table.line_from_offset(6), 2);
    assert_eq!(table.line_from_offset(12), 3);
}

#[test]
fn test_position_counts_characters() {
    let source = "αβγ\nδε";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.position(source, 0), SourcePosition::new(1, 1, 0));
    assert_eq!(table.position(source, 4), SourcePosition::new(1, 3, 4));
    assert_eq!(table.position(source, 7), SourcePosition::new(2, 1, 7));
}

#[test]
fn test_position_matches_incremental_advance() {
    let source = "first line\nsecond \"é\" line\n\n\tfourth\r\nlast";
    let table = LineOffsetTable::build(source);
    let mut pos = SourcePosition::START;
    for (i, c) in source.char_indices() {
        let offset = u32::try_from(i).unwrap_or(u32::MAX);
        assert_eq!(table.position(source, offset), pos, "offset {i}");
        let mut buf = [0u8; 4];
        pos = pos.advance(c.encode_utf8(&mut buf));
    }
}

#[test]
fn test_position_empty_source() {
    let table = LineOffsetTable::build("");
    assert_eq!(table.position("", 0), SourcePosition::START);
}

#[test]
fn test_line_text_strips_terminators() {
    let source = "int a;\r\nint b;\nlast";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("int a;"));
    assert_eq!(table.line_text(source, 2), Some("int b;"));
    assert_eq!(table.line_text(source, 3), Some("last"));
    assert_eq!(table.line_text(source, 4), None);
    assert_eq!(table.line_text(source, 0), None);
}

#[test]
fn test_trailing_newline_has_empty_last_line() {
    let source = "line1\nline2\n";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_count(), 3);
    assert_eq!(table.line_from_offset(12), 3);
    assert_eq!(table.line_text(source, 3), Some(""));
}
