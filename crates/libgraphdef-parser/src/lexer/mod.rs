//! The graphdef lexer.

mod lex_error;
#[allow(clippy::module_inception)]
mod lexer;

pub use lex_error::LexError;
pub use lex_error::LexErrorKind;
pub use lexer::Lexer;
