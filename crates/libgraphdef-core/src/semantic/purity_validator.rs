use crate::diagnostics::SchemaError;
use crate::graph::GraphNode;
use crate::graph::GraphRegistry;
use crate::types::TypeId;
use crate::types::TypeLookup;
use crate::types::TypeRegistry;

/// Checks that struct fields and parameters only carry data.
///
/// Entities whose type failed to resolve are skipped; they already carry
/// an undefined-type diagnostic.
pub(crate) struct PurityValidator<'a> {
    types: &'a TypeRegistry,
    graph: &'a GraphRegistry,
    errors: Vec<SchemaError>,
}

impl<'a> PurityValidator<'a> {
    pub fn new(types: &'a TypeRegistry, graph: &'a GraphRegistry) -> Self {
        Self {
            types,
            graph,
            errors: vec![],
        }
    }

    pub fn validate(mut self) -> Vec<SchemaError> {
        self.validate_struct_fields();
        self.validate_params();
        self.errors
    }

    fn designation(&self, type_id: TypeId) -> String {
        self.types
            .designation_of(type_id)
            .unwrap_or_default()
            .to_string()
    }

    fn validate_struct_fields(&mut self) {
        for node in self.graph.nodes() {
            let (GraphNode::StructField { parent, .. }, Some(type_id)) = (node, node.type_id())
            else {
                continue;
            };
            if self.types.is_pure(type_id) {
                continue;
            }

            let error = SchemaError::ImpureStructField {
                struct_name: self.designation(*parent),
                field_name: node.name().to_string(),
                type_designation: self.designation(type_id),
                position: node.def_location().clone(),
            };
            self.errors.push(error);
        }
    }

    fn validate_params(&mut self) {
        for param in self.graph.params() {
            let Some(type_id) = param.type_id() else {
                continue;
            };
            if self.types.is_pure(type_id) {
                continue;
            }

            let node_name = self
                .graph
                .node(param.target())
                .map(|node| node.graph_name().to_string())
                .unwrap_or_default();
            let error = SchemaError::ImpureParameter {
                node_name,
                param_name: param.name().to_string(),
                type_designation: self.designation(type_id),
                position: param.def_location().clone(),
            };
            self.errors.push(error);
        }
    }
}
