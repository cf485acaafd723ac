use crate::diagnostics::SchemaError;
use crate::graph::GraphRegistry;
use crate::parser::SchemaHeader;

/// Checks that a schema exposes at least one query or mutation.
pub(crate) struct EndpointValidator<'a> {
    graph: &'a GraphRegistry,
    header: &'a SchemaHeader,
}

impl<'a> EndpointValidator<'a> {
    pub fn new(graph: &'a GraphRegistry, header: &'a SchemaHeader) -> Self {
        Self { graph, header }
    }

    pub fn validate(self) -> Vec<SchemaError> {
        if self.graph.has_endpoints() {
            return vec![];
        }
        vec![SchemaError::NoEndpoints {
            schema_name: self.header.name.clone(),
            position: self.header.position.clone(),
        }]
    }
}
