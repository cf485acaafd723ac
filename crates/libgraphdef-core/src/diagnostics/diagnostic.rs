use crate::diagnostics::DiagnosticNote;
use crate::diagnostics::ErrorCode;
use crate::diagnostics::SchemaError;
use libgraphdef_parser::Cursor;
use smallvec::SmallVec;

/// A single reported problem: a stable code, a message, the position it
/// concerns and optional notes pointing at related sites.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub position: Cursor,
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub notes: SmallVec<[DiagnosticNote; 2]>,
}

impl Diagnostic {
    /// Formats this diagnostic as a single line:
    ///
    /// ```text
    /// api.gdef:5:12: ErrTypeUndef: undefined type `Fooo`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!("{}: {}: {}", self.position, self.code, self.message)
    }

    /// Formats this diagnostic with the offending source line and a caret
    /// under the reported column, followed by its notes.
    ///
    /// ```text
    /// error[ErrTypeUndef]: undefined type `Fooo`
    ///   --> api.gdef:3:15
    ///    |
    ///  3 | query getFoo Fooo
    ///    |              ^
    /// ```
    pub fn format_detailed(&self, source: &str) -> String {
        let mut output = String::new();
        output.push_str(&format!("error[{}]: {}\n", self.code, self.message));
        output.push_str(&format!("  --> {}\n", self.position));
        if let Some(snippet) = format_snippet(source, &self.position) {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            match &note.position {
                Some(position) => {
                    output.push_str(&format!("   = note: {} ({position})\n", note.message));
                    if let Some(snippet) = format_snippet(source, position) {
                        output.push_str(&snippet);
                    }
                },
                None => output.push_str(&format!("   = note: {}\n", note.message)),
            }
        }
        output
    }
}

impl From<SchemaError> for Diagnostic {
    fn from(error: SchemaError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            position: error.position().clone(),
            notes: error.notes(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_oneline())
    }
}

/// Renders the source line at `position` with a caret under its column.
fn format_snippet(source: &str, position: &Cursor) -> Option<String> {
    let line_index = position.line().checked_sub(1)? as usize;
    let line_content = source.lines().nth(line_index)?;
    let display_line_num = position.line();
    let width = display_line_num.to_string().len().max(2);
    let caret_offset = position.column().saturating_sub(1) as usize;

    let mut output = String::new();
    output.push_str(&format!("{:>width$} |\n", ""));
    output.push_str(&format!("{display_line_num:>width$} | {line_content}\n"));
    output.push_str(&format!(
        "{:>width$} | {:caret_offset$}^\n",
        "",
        "",
    ));
    Some(output)
}
