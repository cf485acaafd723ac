use crate::graph::GraphNodeId;
use crate::graph::ParamId;
use crate::types::TypeId;
use libgraphdef_parser::Cursor;

/// A parameter of a query, mutation or resolver property.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parameter {
    pub(crate) id: ParamId,
    pub(crate) target: GraphNodeId,
    pub(crate) name: String,
    pub(crate) def_location: Cursor,
    pub(crate) type_id: Option<TypeId>,
}

impl Parameter {
    pub fn id(&self) -> ParamId {
        self.id
    }

    /// The graph node this parameter belongs to.
    pub fn target(&self) -> GraphNodeId {
        self.target
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn def_location(&self) -> &Cursor {
        &self.def_location
    }

    /// The resolved type. Always `Some` in a finished
    /// [`SchemaModel`](crate::SchemaModel).
    pub fn type_id(&self) -> Option<TypeId> {
        self.type_id
    }
}
