//! This module provides the core token types produced by the
//! [`Lexer`](crate::lexer::Lexer) and consumed by the parser.

mod keyword;
#[allow(clippy::module_inception)]
mod token;
mod token_kind;

pub use keyword::Keyword;
pub use token::Token;
pub use token_kind::TokenKind;
