//! The outcome of a parse: the fragment tree plus the model or the
//! diagnostics.

use crate::diagnostics::Diagnostics;
use crate::SchemaModel;
use libgraphdef_parser::fragment::Fragment;

/// The result of [`SchemaParser::parse()`](crate::parser::SchemaParser::parse).
///
/// Unlike `Result<SchemaModel, Diagnostics>`, a `ParseResult` always keeps
/// the fragment tree, even when the model was rejected. After a syntax
/// error the tree holds every declaration completed before the error.
///
/// # Example
///
/// ```
/// use libgraphdef_core::parser::SchemaParser;
/// use libgraphdef_core::SourceFile;
///
/// let source = SourceFile::new("a.gdef", "schema a\nstruct S { }");
/// let result = SchemaParser::new(&source).parse();
///
/// assert!(result.has_errors());
/// assert_eq!(result.fragment().source_text(), "schema a\nstruct S { }");
/// ```
#[derive(Debug)]
pub struct ParseResult<'src> {
    fragment: Fragment<'src>,
    model: Result<SchemaModel, Diagnostics>,
}

impl<'src> ParseResult<'src> {
    pub(crate) fn new(
        fragment: Fragment<'src>,
        model: Result<SchemaModel, Diagnostics>,
    ) -> Self {
        Self { fragment, model }
    }

    /// The `Document` construct of the whole source.
    pub fn fragment(&self) -> &Fragment<'src> {
        &self.fragment
    }

    /// Returns the model only if no diagnostics were recorded.
    pub fn model(&self) -> Option<&SchemaModel> {
        self.model.as_ref().ok()
    }

    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        self.model.as_ref().err()
    }

    pub fn is_ok(&self) -> bool {
        self.model.is_ok()
    }

    pub fn has_errors(&self) -> bool {
        self.model.is_err()
    }

    /// Formats all diagnostics as a single string for display.
    pub fn format_errors(&self, source: &str) -> String {
        match &self.model {
            Ok(_) => String::new(),
            Err(diagnostics) => diagnostics.format_detailed(source),
        }
    }

    pub fn into_result(self) -> Result<SchemaModel, Diagnostics> {
        self.model
    }

    pub fn into_parts(self) -> (Fragment<'src>, Result<SchemaModel, Diagnostics>) {
        (self.fragment, self.model)
    }
}

impl From<ParseResult<'_>> for Result<SchemaModel, Diagnostics> {
    fn from(result: ParseResult<'_>) -> Self {
        result.model
    }
}
