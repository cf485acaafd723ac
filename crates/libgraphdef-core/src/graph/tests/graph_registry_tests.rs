//! Tests for [`GraphRegistry`]: ID counters, the root namespace and
//! parameter ownership.

use crate::diagnostics::SchemaError;
use crate::graph::GraphNode;
use crate::graph::GraphNodeData;
use crate::graph::GraphNodeId;
use crate::graph::GraphRegistry;
use crate::types::TypeId;
use libgraphdef_parser::Cursor;
use libgraphdef_parser::FileRef;

fn position(line: u32) -> Cursor {
    Cursor::new(line * 10, line, 1, FileRef::new("test.gdef"))
}

fn add_query(graph: &mut GraphRegistry, name: &str) -> GraphNodeId {
    graph.add_node(|id| GraphNode::Query {
        node: GraphNodeData::new(id, None, name, position(1)),
        params: vec![],
    })
}

/// Verifies that node and parameter IDs count independently from 1.
#[test]
fn node_and_param_ids_are_independent() {
    let mut graph = GraphRegistry::new();

    let first = add_query(&mut graph, "first");
    let param = graph.add_param(first, "limit", position(2));
    let second = add_query(&mut graph, "second");

    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 2);
    assert_eq!(param.get(), 1);
}

/// Verifies that a parameter is recorded on the node it targets.
#[test]
fn params_attach_to_target() {
    let mut graph = GraphRegistry::new();
    let query = add_query(&mut graph, "search");

    let text = graph.add_param(query, "text", position(1));
    let limit = graph.add_param(query, "limit", position(1));

    assert_eq!(graph.node(query).unwrap().params(), &[text, limit]);
    let names: Vec<_> = graph.params().map(|param| param.name()).collect();
    assert_eq!(names, vec!["text", "limit"]);
}

/// Verifies that queries and mutations share one root namespace.
#[test]
fn root_names_are_shared() {
    let mut graph = GraphRegistry::new();

    graph.claim_root_name("ping", &position(1)).unwrap();
    let error = graph.claim_root_name("ping", &position(4)).unwrap_err();

    match error {
        SchemaError::RootNodeRedeclaration { name, prior, .. } => {
            assert_eq!(name, "ping");
            assert_eq!(prior.line(), 1);
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

/// Verifies graph names of root nodes and struct fields.
#[test]
fn graph_names() {
    let mut graph = GraphRegistry::new();
    let field = graph.add_node(|id| GraphNode::StructField {
        node: GraphNodeData::new(id, Some("User"), "email", position(2)),
        parent: TypeId::new(100),
    });
    let query = add_query(&mut graph, "me");

    assert_eq!(graph.node(field).unwrap().graph_name(), "User.email");
    assert_eq!(graph.node(field).unwrap().parent(), Some(TypeId::new(100)));
    assert_eq!(graph.node(query).unwrap().graph_name(), "me");
    assert!(graph.has_endpoints());
}

/// Verifies that a registry with only struct fields has no endpoints.
#[test]
fn fields_are_not_endpoints() {
    let mut graph = GraphRegistry::new();
    graph.add_node(|id| GraphNode::StructField {
        node: GraphNodeData::new(id, Some("User"), "email", position(2)),
        parent: TypeId::new(100),
    });

    assert!(!graph.has_endpoints());
}
