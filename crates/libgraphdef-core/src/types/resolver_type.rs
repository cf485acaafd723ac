use crate::graph::GraphNodeId;
use crate::types::TypeId;
use libgraphdef_parser::Cursor;

/// `resolver Name { prop1 (params)? Type1 ... }`
///
/// A resolver represents computed behavior rather than data and is
/// therefore always impure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolverType {
    pub(crate) id: TypeId,
    pub(crate) name: String,
    pub(crate) def_location: Cursor,
    pub(crate) properties: Vec<GraphNodeId>,
}

impl ResolverType {
    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn def_location(&self) -> &Cursor {
        &self.def_location
    }

    /// Property graph nodes in declaration order.
    pub fn properties(&self) -> &[GraphNodeId] {
        &self.properties
    }
}
