//! Tests for diagnostic rendering, notes and ordering.

use crate::diagnostics::Diagnostic;
use crate::diagnostics::SchemaError;
use crate::test_utils::parse_err;
use crate::ErrorCode;
use libgraphdef_parser::Cursor;
use libgraphdef_parser::FileRef;

fn cursor(index: u32, line: u32, column: u32) -> Cursor {
    Cursor::new(index, line, column, FileRef::new("test.gdef"))
}

// =============================================================================
// Rendering
// =============================================================================

/// Verifies the one-line form used by the CLI.
#[test]
fn oneline_format() {
    let diagnostic = Diagnostic::from(SchemaError::UndefinedType {
        type_name: "Nope".to_string(),
        position: cursor(17, 2, 9),
    });

    assert_eq!(
        diagnostic.format_oneline(),
        "test.gdef:2:9: ErrTypeUndef: undefined type `Nope`",
    );
}

/// Verifies the detailed form shows the source line and a caret under the
/// reported column.
#[test]
fn detailed_format_points_at_column() {
    let source = "schema t\nquery q Nope";
    let diagnostics = parse_err(source);
    let rendered = diagnostics.iter().next().unwrap().format_detailed(source);

    let expected = "\
error[ErrTypeUndef]: undefined type `Nope`
  --> test.gdef:2:9
   |
 2 | query q Nope
   |         ^
";
    assert_eq!(rendered, expected);
}

/// Verifies that a redeclaration names the earlier site in its message and
/// points at it with a note.
#[test]
fn redeclaration_references_prior_site() {
    let diagnostics = parse_err("schema t\nstruct A { a Int32 }\nenum A { x }\nquery q A");
    let diagnostic = diagnostics.iter().next().unwrap();

    assert_eq!(diagnostic.code, ErrorCode::TypeRedecl);
    assert_eq!(
        diagnostic.message,
        "type `A` is already declared at test.gdef:2:8",
    );
    assert_eq!(diagnostic.position.line(), 3);
    assert_eq!(diagnostic.notes.len(), 1);
    assert_eq!(diagnostic.notes[0].position.as_ref().unwrap().line(), 2);
}

/// Verifies that redeclaring a primitive explains that it is built in.
#[test]
fn primitive_redeclaration_note() {
    let diagnostics = parse_err("schema t\nstruct String { a Int32 }\nquery q Int32");
    let diagnostic = diagnostics.iter().next().unwrap();

    assert_eq!(diagnostic.code, ErrorCode::TypeRedecl);
    assert!(diagnostic.message.contains("built-in primitive"));
    assert_eq!(diagnostic.notes[0].position, None);
}

// =============================================================================
// Ordering
// =============================================================================

/// Verifies that diagnostics come out sorted by position regardless of the
/// phase that produced them.
#[test]
fn diagnostics_sorted_by_position() {
    let source = "\
schema t
struct A { r R }
resolver R { x Nope }
enum E { }
query q A";
    let diagnostics = parse_err(source);
    let lines: Vec<_> = diagnostics
        .iter()
        .map(|diagnostic| diagnostic.position.line())
        .collect();

    assert_eq!(
        diagnostics.codes(),
        vec![
            ErrorCode::StructFieldImpure,
            ErrorCode::TypeUndef,
            ErrorCode::EnumNoVal,
        ],
    );
    assert_eq!(lines, vec![2, 3, 4]);
}

/// Verifies that the `Diagnostics` error lists every diagnostic.
#[test]
fn diagnostics_display_lists_all() {
    let diagnostics = parse_err("schema t\nenum E { }\nenum F { }\nquery q E");
    let rendered = diagnostics.to_string();

    assert!(rendered.starts_with("2 diagnostic(s):"));
    assert!(rendered.contains("enum `E` has no values"));
    assert!(rendered.contains("enum `F` has no values"));
}
