use crate::graph::GraphNodeId;
use crate::graph::ParamId;
use crate::types::TypeId;
use libgraphdef_parser::Cursor;

/// The accessor contract shared by every [`GraphNode`] variant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphNodeData {
    pub(crate) id: GraphNodeId,
    pub(crate) name: String,
    pub(crate) graph_name: String,
    pub(crate) def_location: Cursor,
    pub(crate) type_id: Option<TypeId>,
}

impl GraphNodeData {
    pub(crate) fn new(
        id: GraphNodeId,
        parent_name: Option<&str>,
        name: &str,
        def_location: Cursor,
    ) -> Self {
        let graph_name = match parent_name {
            Some(parent_name) => format!("{parent_name}.{name}"),
            None => name.to_string(),
        };
        Self {
            id,
            name: name.to_string(),
            graph_name,
            def_location,
            type_id: None,
        }
    }
}

/// A named entity on the public surface of a schema.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GraphNode {
    StructField {
        node: GraphNodeData,
        parent: TypeId,
    },
    ResolverProperty {
        node: GraphNodeData,
        parent: TypeId,
        params: Vec<ParamId>,
    },
    Query {
        node: GraphNodeData,
        params: Vec<ParamId>,
    },
    Mutation {
        node: GraphNodeData,
        params: Vec<ParamId>,
    },
}

impl GraphNode {
    pub fn data(&self) -> &GraphNodeData {
        match self {
            GraphNode::StructField { node, .. }
            | GraphNode::ResolverProperty { node, .. }
            | GraphNode::Query { node, .. }
            | GraphNode::Mutation { node, .. } => node,
        }
    }

    pub(crate) fn data_mut(&mut self) -> &mut GraphNodeData {
        match self {
            GraphNode::StructField { node, .. }
            | GraphNode::ResolverProperty { node, .. }
            | GraphNode::Query { node, .. }
            | GraphNode::Mutation { node, .. } => node,
        }
    }

    pub fn id(&self) -> GraphNodeId {
        self.data().id
    }

    /// The local name (`foo` in `Bar.foo`).
    pub fn name(&self) -> &str {
        &self.data().name
    }

    /// `Parent.name`, or just `name` for query and mutation endpoints.
    pub fn graph_name(&self) -> &str {
        &self.data().graph_name
    }

    pub fn def_location(&self) -> &Cursor {
        &self.data().def_location
    }

    /// The node's resolved type. Always `Some` in a finished
    /// [`SchemaModel`](crate::SchemaModel).
    pub fn type_id(&self) -> Option<TypeId> {
        self.data().type_id
    }

    /// The owning struct or resolver; `None` for endpoints.
    pub fn parent(&self) -> Option<TypeId> {
        match self {
            GraphNode::StructField { parent, .. }
            | GraphNode::ResolverProperty { parent, .. } => Some(*parent),
            GraphNode::Query { .. } | GraphNode::Mutation { .. } => None,
        }
    }

    /// Parameters in declaration order. Struct fields have none.
    pub fn params(&self) -> &[ParamId] {
        match self {
            GraphNode::StructField { .. } => &[],
            GraphNode::ResolverProperty { params, .. }
            | GraphNode::Query { params, .. }
            | GraphNode::Mutation { params, .. } => params,
        }
    }

    pub(crate) fn params_mut(&mut self) -> Option<&mut Vec<ParamId>> {
        match self {
            GraphNode::StructField { .. } => None,
            GraphNode::ResolverProperty { params, .. }
            | GraphNode::Query { params, .. }
            | GraphNode::Mutation { params, .. } => Some(params),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            GraphNode::StructField { .. } => "struct field",
            GraphNode::ResolverProperty { .. } => "resolver property",
            GraphNode::Query { .. } => "query",
            GraphNode::Mutation { .. } => "mutation",
        }
    }

    pub fn is_query(&self) -> bool {
        matches!(self, GraphNode::Query { .. })
    }

    pub fn is_mutation(&self) -> bool {
        matches!(self, GraphNode::Mutation { .. })
    }
}
