use crate::graph::GraphNodeId;
use crate::types::TypeId;
use libgraphdef_parser::Cursor;

/// `struct Name { field1 Type1 ... }`
///
/// Fields are graph nodes; their names, positions and types live in the
/// graph registry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StructType {
    pub(crate) id: TypeId,
    pub(crate) name: String,
    pub(crate) def_location: Cursor,
    pub(crate) fields: Vec<GraphNodeId>,
}

impl StructType {
    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn def_location(&self) -> &Cursor {
        &self.def_location
    }

    /// Field graph nodes in declaration order.
    pub fn fields(&self) -> &[GraphNodeId] {
        &self.fields
    }
}
