use crate::diagnostics::Diagnostic;
use crate::diagnostics::Diagnostics;
use crate::diagnostics::SchemaError;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Accumulates diagnostics over one parse.
///
/// Reporting takes `&self` so that the parallel semantic passes can share
/// one collector; appends are serialized by a mutex.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticsCollector {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self, error: SchemaError) {
        log::trace!("diagnostic {}: {error}", error.code());
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(error.into());
    }

    pub fn report_all(&self, errors: impl IntoIterator<Item = SchemaError>) {
        let mut diagnostics = self
            .diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        diagnostics.extend(errors.into_iter().map(Diagnostic::from));
    }

    /// Consumes the collector. Returns `None` when nothing was reported.
    pub fn finish(self) -> Option<Diagnostics> {
        let diagnostics = self
            .diagnostics
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        if diagnostics.is_empty() {
            None
        } else {
            Some(Diagnostics::from_unsorted(diagnostics))
        }
    }
}
