//! The recursive-descent schema parser.
//!
//! Parsing is a single sequential scan over the token stream. Anything that
//! depends on a type declared later in the file is queued as a deferred job
//! and run once the scan is complete; the semantic passes then run over the
//! fully resolved registries.

mod deferred_jobs;
mod endpoint_declarations;
mod name_scope;
mod parse_result;
mod schema_context;
mod schema_parser;
mod type_declarations;
mod type_designation_parser;

pub(crate) use deferred_jobs::DeferredJobQueue;
pub(crate) use name_scope::NameScope;
pub use parse_result::ParseResult;
pub(crate) use schema_context::SchemaContext;
pub use schema_parser::SchemaHeader;
pub use schema_parser::SchemaParser;

#[cfg(test)]
mod tests;
