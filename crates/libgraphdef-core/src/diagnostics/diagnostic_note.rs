use libgraphdef_parser::Cursor;

/// Additional context attached to a [`Diagnostic`](crate::diagnostics::Diagnostic).
///
/// A note with a position points at a related site, such as the earlier
/// declaration of a redeclared name or another member of a cycle.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct DiagnosticNote {
    pub message: String,
    pub position: Option<Cursor>,
}

impl DiagnosticNote {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position: None,
        }
    }

    pub fn at(message: impl Into<String>, position: Cursor) -> Self {
        Self {
            message: message.into(),
            position: Some(position),
        }
    }
}
