use crate::diagnostics::Diagnostic;
use crate::diagnostics::ErrorCode;

/// The failure value of a parse: every diagnostic recorded, sorted by
/// `(position, code)`. Never empty.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("{} diagnostic(s):\n{}", .0.len(), format_list(.0))]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Wraps `diagnostics`, sorting them by `(position, code)`.
    pub(crate) fn from_unsorted(mut diagnostics: Vec<Diagnostic>) -> Self {
        diagnostics.sort_by(|a, b| {
            a.position.cmp(&b.position).then(a.code.cmp(&b.code))
        });
        Self(diagnostics)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The codes of all diagnostics, in order.
    pub fn codes(&self) -> Vec<ErrorCode> {
        self.0.iter().map(|diagnostic| diagnostic.code).collect()
    }

    /// Returns `true` if any diagnostic carries `code`.
    pub fn contains(&self, code: ErrorCode) -> bool {
        self.0.iter().any(|diagnostic| diagnostic.code == code)
    }

    /// Formats every diagnostic with [`Diagnostic::format_detailed`].
    pub fn format_detailed(&self, source: &str) -> String {
        self.0
            .iter()
            .map(|diagnostic| diagnostic.format_detailed(source))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn format_list(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| format!("  {diagnostic}"))
        .collect::<Vec<_>>()
        .join("\n")
}
