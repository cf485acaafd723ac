//! Tests for lexical errors.

use crate::lexer::LexErrorKind;
use crate::lexer::Lexer;
use crate::tests::utils::lex_error;
use crate::tests::utils::test_file;

/// Verifies that a `[` not immediately followed by `]` is a lexical error
/// reported at the `[`.
#[test]
fn unterminated_list_marker() {
    let error = lex_error("foo [Int32");

    assert_eq!(error.kind(), &LexErrorKind::UnterminatedListMarker);
    assert_eq!(error.position().index(), 4);
    assert_eq!(error.position().column(), 5);
}

/// Verifies that `[ ]` with whitespace between the brackets is rejected.
#[test]
fn list_marker_with_inner_space() {
    let error = lex_error("[ ]");

    assert_eq!(error.kind(), &LexErrorKind::UnterminatedListMarker);
}

/// Verifies that `[` at end of input is rejected.
#[test]
fn list_marker_at_eof() {
    let error = lex_error("[");

    assert_eq!(error.kind(), &LexErrorKind::UnterminatedListMarker);
}

/// Verifies that a `\r` not followed by `\n` is rejected at the `\r`.
#[test]
fn bare_carriage_return() {
    let error = lex_error("a \rb");

    assert_eq!(error.kind(), &LexErrorKind::BareCarriageReturn);
    assert_eq!(error.position().index(), 2);
}

/// Verifies that unrecognized characters are reported with the character.
#[test]
fn unexpected_characters() {
    let error = lex_error("foo # bar");
    assert_eq!(error.kind(), &LexErrorKind::UnexpectedCharacter('#'));
    assert_eq!(error.position().column(), 5);

    let error = lex_error("Foo\u{00e9}");
    assert_eq!(error.kind(), &LexErrorKind::UnexpectedCharacter('\u{00e9}'));
    assert_eq!(error.position().index(), 3);
}

/// Verifies that invisible characters are described by code point.
#[test]
fn invisible_character_message() {
    let error = lex_error("\u{feff}schema");

    assert!(error.to_string().contains("U+FEFF"));
    assert!(error.to_string().contains("BYTE ORDER MARK"));
}

/// Verifies that zero-width format characters are named, while ordinary
/// printable characters are only quoted.
#[test]
fn zero_width_character_message() {
    let error = lex_error("Foo\u{200b}Bar");
    assert_eq!(error.position().column(), 4);
    assert!(error.to_string().contains("U+200B: ZERO WIDTH SPACE"));

    let error = lex_error("foo # bar");
    assert!(error.to_string().starts_with("unexpected character `#` at"));
}

/// Verifies that the lexer is exhausted after an error.
#[test]
fn lexer_stops_after_error() {
    let mut lexer = Lexer::new("a ] b", test_file());
    let mut results = vec![];
    for result in lexer.by_ref() {
        results.push(result);
    }

    // `a`, space, then the error.
    assert_eq!(results.len(), 3);
    assert!(results[2].is_err());
    assert_eq!(lexer.next_token().unwrap(), None);
}
