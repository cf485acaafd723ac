//! Lexing and fragment-tree infrastructure for the graphdef
//! schema-definition language.
//!
//! This crate knows nothing about types or schemas: it turns source text
//! into positioned [`token::Token`]s on demand (with fork-based lookahead)
//! and defines the [`fragment::Fragment`] tree that the schema parser in
//! `libgraphdef-core` builds from them.

mod cursor;
mod file_ref;
pub mod fragment;
pub mod identifier_shape;
pub mod lexer;
pub mod token;

pub use cursor::Cursor;
pub use file_ref::FileRef;

#[cfg(test)]
mod tests;
