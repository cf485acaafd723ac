use crate::diagnostics::Diagnostics;
use crate::diagnostics::DiagnosticsCollector;
use crate::diagnostics::SchemaError;
use crate::graph::GraphRegistry;
use crate::parser::SchemaHeader;
use crate::schema::SchemaModel;
use crate::schema::SortedCategories;
use crate::types::TypeDesignation;
use crate::types::TypeId;
use crate::types::TypeRegistry;
use libgraphdef_parser::Cursor;

/// The mutable state of one parse: registries and diagnostics.
///
/// Owned by a single [`SchemaParser`](crate::parser::SchemaParser) run and
/// consumed when the model (or the diagnostics) is produced.
#[derive(Debug)]
pub(crate) struct SchemaContext {
    pub types: TypeRegistry,
    pub graph: GraphRegistry,
    pub diagnostics: DiagnosticsCollector,
}

impl SchemaContext {
    pub fn new() -> Self {
        Self {
            types: TypeRegistry::new(),
            graph: GraphRegistry::new(),
            diagnostics: DiagnosticsCollector::new(),
        }
    }

    pub fn report(&self, error: SchemaError) {
        self.diagnostics.report(error);
    }

    /// Looks up a named type, reporting [`SchemaError::UndefinedType`] if it
    /// does not exist.
    pub fn resolve_name(&self, name: &str, position: &Cursor) -> Option<TypeId> {
        let resolved = self.types.lookup_name(name);
        if resolved.is_none() {
            self.report(SchemaError::UndefinedType {
                type_name: name.to_string(),
                position: position.clone(),
            });
        }
        resolved
    }

    /// Resolves the terminal of `designation` and interns its containers
    /// from the innermost outward.
    pub fn resolve_designation(
        &mut self,
        designation: &TypeDesignation,
    ) -> Option<TypeId> {
        let mut resolved = self.resolve_name(
            designation.terminal(),
            designation.terminal_position(),
        )?;
        for modifier in designation.modifiers().iter().rev() {
            resolved = self.types.intern_container(*modifier, resolved);
        }
        Some(resolved)
    }

    /// Produces the finished model, or every diagnostic recorded.
    pub fn into_result(
        self,
        header: SchemaHeader,
        categories: SortedCategories,
    ) -> Result<SchemaModel, Diagnostics> {
        if let Some(diagnostics) = self.diagnostics.finish() {
            return Err(diagnostics);
        }
        Ok(SchemaModel::new(header, self.types, self.graph, categories))
    }

    /// Consumes the context after a fatal error.
    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
            .finish()
            .unwrap_or_else(|| Diagnostics::from_unsorted(vec![]))
    }
}
