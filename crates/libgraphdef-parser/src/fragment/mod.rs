//! The fragment tree produced by parsing.
//!
//! A [`Fragment`] is either a terminal [`Token`](crate::token::Token) or a
//! non-terminal [`Construct`] that owns its ordered children. Whitespace
//! tokens are never retained as children.

mod construct;
mod construct_kind;
#[allow(clippy::module_inception)]
mod fragment;

pub use construct::Construct;
pub use construct::ConstructBuilder;
pub use construct_kind::ConstructKind;
pub use fragment::Fragment;
