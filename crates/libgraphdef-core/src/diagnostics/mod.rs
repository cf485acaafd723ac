//! Diagnostics: typed schema errors, their stable codes, and the collector
//! that accumulates them over a parse.

mod diagnostic;
mod diagnostic_note;
mod diagnostics;
mod diagnostics_collector;
mod error_code;
mod schema_error;

pub use diagnostic::Diagnostic;
pub use diagnostic_note::DiagnosticNote;
pub use diagnostics::Diagnostics;
pub(crate) use diagnostics_collector::DiagnosticsCollector;
pub use error_code::ErrorCode;
pub use schema_error::SchemaError;

#[cfg(test)]
mod tests;
