//! Tests for [`Cursor`] ordering and display.

use crate::Cursor;
use crate::FileRef;

/// Verifies that cursors in the same file order by byte offset alone,
/// regardless of line/column.
#[test]
fn cursors_order_by_index_within_a_file() {
    let file = FileRef::new("a.gdef");
    let early = Cursor::new(4, 1, 5, file.clone());
    let late = Cursor::new(10, 2, 1, file);

    assert!(early < late);
    assert_eq!(early.clone().max(late.clone()), late);
}

/// Verifies that cursors of different files order by file first.
#[test]
fn cursors_order_by_file_first() {
    let a = Cursor::new(100, 9, 9, FileRef::new("a.gdef"));
    let b = Cursor::new(0, 1, 1, FileRef::new("b.gdef"));

    assert!(a < b);
}

/// Verifies that a cursor renders as `file:line:column`.
#[test]
fn cursor_display_is_file_line_column() {
    let cursor = Cursor::new(17, 3, 6, FileRef::new("schemas/api.gdef"));

    assert_eq!(cursor.to_string(), "schemas/api.gdef:3:6");
}

/// Verifies that `start_of` points at the first byte of line 1.
#[test]
fn start_of_file() {
    let cursor = Cursor::start_of(FileRef::new("x.gdef"));

    assert_eq!(cursor.index(), 0);
    assert_eq!(cursor.line(), 1);
    assert_eq!(cursor.column(), 1);
    assert_eq!(cursor.file().path().to_str(), Some("x.gdef"));
}
