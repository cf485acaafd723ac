//! Graph nodes: the named, identity-bearing entities that make up a
//! schema's public surface, and their parameters.

mod graph_node;
mod graph_node_id;
mod graph_registry;
mod parameter;

pub use graph_node::GraphNode;
pub use graph_node::GraphNodeData;
pub use graph_node_id::GraphNodeId;
pub use graph_node_id::ParamId;
pub(crate) use graph_registry::GraphRegistry;
pub use parameter::Parameter;

#[cfg(test)]
mod tests;
