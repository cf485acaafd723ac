use crate::diagnostics::SchemaError;
use crate::graph::GraphNode;
use crate::graph::GraphNodeId;
use crate::graph::ParamId;
use crate::graph::Parameter;
use indexmap::IndexMap;
use libgraphdef_parser::Cursor;
use std::collections::HashMap;

/// The per-parse catalog of graph nodes and parameters.
///
/// IDs come from two independent counters starting at 1 and are only
/// consumed when a node or parameter is actually added.
#[derive(Debug)]
pub(crate) struct GraphRegistry {
    nodes: IndexMap<GraphNodeId, GraphNode>,
    params: IndexMap<ParamId, Parameter>,
    root_names: HashMap<String, Cursor>,
    next_node_id: u32,
    next_param_id: u32,
}

impl GraphRegistry {
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            params: IndexMap::new(),
            root_names: HashMap::new(),
            next_node_id: 1,
            next_param_id: 1,
        }
    }

    /// Reserves `name` in the root namespace shared by queries and
    /// mutations.
    pub fn claim_root_name(
        &mut self,
        name: &str,
        position: &Cursor,
    ) -> Result<(), SchemaError> {
        if let Some(prior) = self.root_names.get(name) {
            return Err(SchemaError::RootNodeRedeclaration {
                name: name.to_string(),
                position: position.clone(),
                prior: prior.clone(),
            });
        }
        self.root_names.insert(name.to_string(), position.clone());
        Ok(())
    }

    pub fn add_node(
        &mut self,
        build: impl FnOnce(GraphNodeId) -> GraphNode,
    ) -> GraphNodeId {
        let id = GraphNodeId::new(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.insert(id, build(id));
        id
    }

    /// Adds a parameter to `target` and returns its ID.
    pub fn add_param(
        &mut self,
        target: GraphNodeId,
        name: &str,
        def_location: Cursor,
    ) -> ParamId {
        let id = ParamId::new(self.next_param_id);
        self.next_param_id += 1;
        self.params.insert(id, Parameter {
            id,
            target,
            name: name.to_string(),
            def_location,
            type_id: None,
        });
        if let Some(params) = self
            .nodes
            .get_mut(&target)
            .and_then(GraphNode::params_mut)
        {
            params.push(id);
        }
        id
    }

    pub fn node(&self, id: GraphNodeId) -> Option<&GraphNode> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: GraphNodeId) -> Option<&mut GraphNode> {
        self.nodes.get_mut(&id)
    }

    pub fn param_mut(&mut self, id: ParamId) -> Option<&mut Parameter> {
        self.params.get_mut(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    pub fn params(&self) -> impl Iterator<Item = &Parameter> {
        self.params.values()
    }

    pub fn has_endpoints(&self) -> bool {
        self.nodes
            .values()
            .any(|node| node.is_query() || node.is_mutation())
    }

    pub fn into_parts(
        self,
    ) -> (IndexMap<GraphNodeId, GraphNode>, IndexMap<ParamId, Parameter>) {
        (self.nodes, self.params)
    }
}
