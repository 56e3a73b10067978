use super::*;

#[test]
fn line_col_across_lines() {
    let source = "abc\ndefgh\nij";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
    assert_eq!(table.offset_to_line_col(source, 4), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 7), (2, 4));
    assert_eq!(table.offset_to_line_col(source, 10), (3, 1));
}

#[test]
fn columns_count_characters() {
    let source = "αβγ\nδε";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 2), (1, 2));
    assert_eq!(table.offset_to_line_col(source, 7), (2, 1));
}

#[test]
fn empty_source() {
    let table = LineOffsetTable::build("");
    assert_eq!(table.offset_to_line_col("", 0), (1, 1));
    assert_eq!(table.line_text("", 1), Some(""));
}

#[test]
fn line_text_strips_newline() {
    let source = "int a = 1;\na / b;\n";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), Some("int a = 1;"));
    assert_eq!(table.line_text(source, 2), Some("a / b;"));
    assert_eq!(table.line_text(source, 3), Some(""));
    assert_eq!(table.line_text(source, 0), None);
    assert_eq!(table.line_text(source, 9), None);
}
