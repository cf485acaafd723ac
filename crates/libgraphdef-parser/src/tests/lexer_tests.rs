//! Tests for token classification and position tracking in [`Lexer`].

use crate::lexer::Lexer;
use crate::tests::utils::kinds;
use crate::tests::utils::lex_all;
use crate::tests::utils::test_file;
use crate::token::Keyword;
use crate::token::TokenKind;

// =============================================================================
// Classification
// =============================================================================

/// Verifies that each structural symbol lexes to its own kind.
#[test]
fn structural_symbols() {
    assert_eq!(
        kinds("{ } ( ) , . ? = []"),
        vec![
            TokenKind::CurlyBraceOpen,
            TokenKind::CurlyBraceClose,
            TokenKind::ParenOpen,
            TokenKind::ParenClose,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::QuestionMark,
            TokenKind::Equals,
            TokenKind::ListMarker,
        ],
    );
}

/// Verifies that every keyword is recognized as such.
#[test]
fn keywords_are_classified() {
    for keyword in Keyword::ALL {
        assert_eq!(
            kinds(keyword.as_str()),
            vec![TokenKind::Keyword(keyword)],
            "keyword `{keyword}`",
        );
    }
}

/// Verifies the three identifier classes.
#[test]
fn identifier_classes() {
    assert_eq!(
        kinds("Foo getFoo foo_bar _x Int32 x1"),
        vec![
            TokenKind::TypeName,
            TokenKind::LowerName,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::TypeName,
            TokenKind::LowerName,
        ],
    );
}

/// Verifies that a keyword prefix does not make a longer word a keyword.
#[test]
fn keyword_prefix_is_a_plain_name() {
    assert_eq!(kinds("queryAll structs"), vec![
        TokenKind::LowerName,
        TokenKind::LowerName,
    ]);
}

/// Verifies that symbols need no surrounding whitespace and that the list
/// marker is matched greedily.
#[test]
fn adjacent_symbols_and_words() {
    assert_eq!(
        kinds("?[][]Foo{bar(x?Int32)}"),
        vec![
            TokenKind::QuestionMark,
            TokenKind::ListMarker,
            TokenKind::ListMarker,
            TokenKind::TypeName,
            TokenKind::CurlyBraceOpen,
            TokenKind::LowerName,
            TokenKind::ParenOpen,
            TokenKind::LowerName,
            TokenKind::QuestionMark,
            TokenKind::TypeName,
            TokenKind::ParenClose,
            TokenKind::CurlyBraceClose,
        ],
    );
}

// =============================================================================
// Whitespace
// =============================================================================

/// Verifies that a mixed run of spaces, tabs and line breaks is one token.
#[test]
fn whitespace_is_coalesced() {
    let tokens = lex_all("a \t\n\r\n  b");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::Space);
    assert_eq!(tokens[1].source_text, " \t\n\r\n  ");
}

/// Verifies that an empty source produces no tokens.
#[test]
fn empty_source() {
    assert!(lex_all("").is_empty());
}

// =============================================================================
// Positions
// =============================================================================

/// Verifies begin/end cursors of tokens on a single line.
#[test]
fn single_line_positions() {
    let tokens = lex_all("schema test");

    assert_eq!(tokens[0].begin.index(), 0);
    assert_eq!(tokens[0].begin.column(), 1);
    assert_eq!(tokens[0].end.index(), 6);
    assert_eq!(tokens[0].end.column(), 7);

    assert_eq!(tokens[2].source_text, "test");
    assert_eq!(tokens[2].begin.index(), 7);
    assert_eq!(tokens[2].begin.line(), 1);
    assert_eq!(tokens[2].begin.column(), 8);
}

/// Verifies that both `\n` and `\r\n` advance the line and reset the
/// column.
#[test]
fn line_breaks_advance_lines() {
    let tokens = lex_all("a\nb\r\nc");
    let words: Vec<_> = tokens
        .iter()
        .filter(|token| token.kind.is_word())
        .collect();

    assert_eq!(words[0].begin.line(), 1);
    assert_eq!(words[1].begin.line(), 2);
    assert_eq!(words[1].begin.column(), 1);
    assert_eq!(words[2].begin.line(), 3);
    assert_eq!(words[2].begin.column(), 1);
    assert_eq!(words[2].begin.index(), 5);
}

/// Verifies that each token's source text is the slice between its
/// cursors.
#[test]
fn source_text_matches_span() {
    let source = "struct Foo {\n  bar ?[]Int32\n}";
    for token in lex_all(source) {
        let slice =
            &source[token.begin.index() as usize..token.end.index() as usize];
        assert_eq!(token.source_text, slice);
    }
}

/// Verifies that the lexer's cursor tracks the next unconsumed byte.
#[test]
fn lexer_cursor_tracks_progress() {
    let mut lexer = Lexer::new("ab cd", test_file());

    assert_eq!(lexer.cursor().index(), 0);
    lexer.next_token().unwrap();
    assert_eq!(lexer.cursor().index(), 2);
    lexer.next_token().unwrap();
    assert_eq!(lexer.cursor().index(), 3);
    lexer.next_token().unwrap();
    assert!(lexer.is_at_end());
    assert_eq!(lexer.next_token().unwrap(), None);
}
