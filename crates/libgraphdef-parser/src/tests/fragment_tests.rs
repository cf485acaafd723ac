//! Tests for fragment construction and span invariants.

use crate::fragment::ConstructBuilder;
use crate::fragment::ConstructKind;
use crate::fragment::Fragment;
use crate::lexer::Lexer;
use crate::tests::utils::test_file;
use crate::Cursor;

/// Builds `header` from the two non-space tokens of `source`.
fn build_header(source: &str) -> Fragment<'_> {
    let mut builder = ConstructBuilder::new(
        ConstructKind::SchemaHeader,
        Cursor::start_of(test_file()),
    );
    for token in Lexer::new(source, test_file()).map(Result::unwrap) {
        if !token.kind.is_trivia() {
            builder.push(token);
        }
    }
    builder.finish(source).into()
}

/// Verifies that a construct spans from its first to its last child and
/// slices its text from the source, excluding surrounding whitespace.
#[test]
fn construct_span_is_union_of_children() {
    let source = "  schema   test  ";
    let header = build_header(source);

    assert_eq!(header.begin().index(), 2);
    assert_eq!(header.end().index(), 15);
    assert_eq!(header.source_text(), "schema   test");
    assert_eq!(header.construct_kind(), Some(ConstructKind::SchemaHeader));
}

/// Verifies that children are kept in source order and whitespace is not
/// retained.
#[test]
fn children_in_source_order() {
    let header = build_header("schema test");
    let construct = header.as_construct().unwrap();
    let texts: Vec<_> = construct
        .children()
        .iter()
        .map(Fragment::source_text)
        .collect();

    assert_eq!(texts, vec!["schema", "test"]);
}

/// Verifies that nested constructs flatten back to their tokens in order.
#[test]
fn nested_tokens_in_order() {
    let source = "schema test";
    let inner = build_header(source);
    let mut outer = ConstructBuilder::new(
        ConstructKind::Document,
        Cursor::start_of(test_file()),
    );
    outer.push(inner.as_construct().unwrap().clone());
    let document = Fragment::from(outer.finish(source));

    let texts: Vec<_> = document
        .tokens()
        .into_iter()
        .map(|token| token.source_text)
        .collect();
    assert_eq!(texts, vec!["schema", "test"]);
    assert_eq!(document.source_text(), "schema test");
    assert_eq!(
        document
            .as_construct()
            .unwrap()
            .child_constructs(ConstructKind::SchemaHeader)
            .count(),
        1,
    );
}

/// Verifies that an empty construct has an empty span at its start.
#[test]
fn empty_construct() {
    let start = Cursor::new(3, 1, 4, test_file());
    let construct =
        ConstructBuilder::new(ConstructKind::EnumDeclaration, start.clone())
            .finish("abc");

    assert_eq!(construct.begin(), &start);
    assert_eq!(construct.end(), &start);
    assert_eq!(construct.source_text(), "");
    assert!(construct.children().is_empty());
}
