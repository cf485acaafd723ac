//! Helpers shared by the unit tests of this crate.

use crate::diagnostics::Diagnostics;
use crate::ErrorCode;
use crate::SchemaModel;
use crate::SourceFile;

pub(crate) fn source(text: &str) -> SourceFile {
    SourceFile::new("test.gdef", text)
}

/// Parses `text`, panicking with the rendered diagnostics on failure.
pub(crate) fn parse_ok(text: &str) -> SchemaModel {
    let file = source(text);
    match crate::parse(&file) {
        Ok(model) => model,
        Err(diagnostics) => panic!(
            "expected a valid schema, got:\n{}",
            diagnostics.format_detailed(text),
        ),
    }
}

/// Parses `text`, panicking if it was accepted.
pub(crate) fn parse_err(text: &str) -> Diagnostics {
    match crate::parse(&source(text)) {
        Ok(model) => panic!("expected diagnostics, got schema `{}`", model.name()),
        Err(diagnostics) => diagnostics,
    }
}

/// The sorted diagnostic codes produced by `text`.
pub(crate) fn error_codes(text: &str) -> Vec<ErrorCode> {
    parse_err(text).codes()
}
