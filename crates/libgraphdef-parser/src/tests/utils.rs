//! Shared helpers for lexer tests.

use crate::lexer::LexError;
use crate::lexer::Lexer;
use crate::token::Token;
use crate::token::TokenKind;
use crate::FileRef;

pub(super) fn test_file() -> FileRef {
    FileRef::new("test.gdef")
}

/// Lexes `source` to completion, panicking on the first error.
pub(super) fn lex_all(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source, test_file())
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

/// Lexes `source` and returns the first error, panicking if there is none.
pub(super) fn lex_error(source: &str) -> LexError {
    Lexer::new(source, test_file())
        .find_map(Result::err)
        .expect("expected a lexical error")
}

/// Lexes `source` to completion and returns the non-trivia token kinds.
pub(super) fn kinds(source: &str) -> Vec<TokenKind> {
    lex_all(source)
        .into_iter()
        .map(|token| token.kind)
        .filter(|kind| !kind.is_trivia())
        .collect()
}
