//! Borrowed views of a [`SchemaModel`] in its JSON export shape.

use crate::graph::GraphNode;
use crate::graph::GraphNodeId;
use crate::graph::ParamId;
use crate::types::TypeId;
use crate::SchemaModel;

#[derive(serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub(super) struct SchemaJson<'a> {
    schema_name: &'a str,
    alias_types: Vec<AliasJson<'a>>,
    enum_types: Vec<EnumJson<'a>>,
    union_types: Vec<UnionJson<'a>>,
    struct_types: Vec<StructJson<'a>>,
    resolver_types: Vec<ResolverJson<'a>>,
    anonymous_types: Vec<AnonymousJson<'a>>,
    query_endpoints: Vec<NodeJson<'a>>,
    mutations: Vec<NodeJson<'a>>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "kebab-case")]
struct AliasJson<'a> {
    name: &'a str,
    id: TypeId,
    aliased_type_id: Option<TypeId>,
}

#[derive(serde::Serialize)]
struct EnumJson<'a> {
    name: &'a str,
    id: TypeId,
    values: Vec<&'a str>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "kebab-case")]
struct UnionJson<'a> {
    name: &'a str,
    id: TypeId,
    option_types: Vec<TypeId>,
}

#[derive(serde::Serialize)]
struct StructJson<'a> {
    name: &'a str,
    id: TypeId,
    fields: Vec<NodeJson<'a>>,
}

#[derive(serde::Serialize)]
struct ResolverJson<'a> {
    name: &'a str,
    id: TypeId,
    properties: Vec<NodeJson<'a>>,
}

#[derive(serde::Serialize)]
struct AnonymousJson<'a> {
    designation: &'a str,
    id: TypeId,
}

/// A struct field, resolver property, query or mutation. Struct fields
/// carry no parameter list.
#[derive(serde::Serialize)]
#[serde(rename_all = "kebab-case")]
struct NodeJson<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    type_id: Option<TypeId>,
    graph_node_id: GraphNodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<Vec<ParamJson<'a>>>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "kebab-case")]
struct ParamJson<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    type_id: Option<TypeId>,
    graph_param_id: ParamId,
}

impl<'a> SchemaJson<'a> {
    pub(super) fn from_model(model: &'a SchemaModel) -> Self {
        Self {
            schema_name: model.name(),
            alias_types: model
                .alias_types()
                .map(|alias| AliasJson {
                    name: alias.name(),
                    id: alias.id(),
                    aliased_type_id: alias.aliased(),
                })
                .collect(),
            enum_types: model
                .enum_types()
                .map(|enum_| EnumJson {
                    name: enum_.name(),
                    id: enum_.id(),
                    values: enum_.values().iter().map(|value| value.name()).collect(),
                })
                .collect(),
            union_types: model
                .union_types()
                .map(|union_| UnionJson {
                    name: union_.name(),
                    id: union_.id(),
                    option_types: union_.option_type_ids().collect(),
                })
                .collect(),
            struct_types: model
                .struct_types()
                .map(|struct_| StructJson {
                    name: struct_.name(),
                    id: struct_.id(),
                    fields: model
                        .fields_of(struct_)
                        .map(|field| NodeJson::new(model, field))
                        .collect(),
                })
                .collect(),
            resolver_types: model
                .resolver_types()
                .map(|resolver| ResolverJson {
                    name: resolver.name(),
                    id: resolver.id(),
                    properties: model
                        .properties_of(resolver)
                        .map(|property| NodeJson::new(model, property))
                        .collect(),
                })
                .collect(),
            anonymous_types: model
                .anonymous_types()
                .map(|container| AnonymousJson {
                    designation: container.designation(),
                    id: container.id(),
                })
                .collect(),
            query_endpoints: model
                .queries()
                .map(|query| NodeJson::new(model, query))
                .collect(),
            mutations: model
                .mutations()
                .map(|mutation| NodeJson::new(model, mutation))
                .collect(),
        }
    }
}

impl<'a> NodeJson<'a> {
    fn new(model: &'a SchemaModel, node: &'a GraphNode) -> Self {
        let parameters = match node {
            GraphNode::StructField { .. } => None,
            _ => Some(
                model
                    .params_of(node)
                    .map(|param| ParamJson {
                        name: param.name(),
                        type_id: param.type_id(),
                        graph_param_id: param.id(),
                    })
                    .collect(),
            ),
        };
        Self {
            name: node.name(),
            type_id: node.type_id(),
            graph_node_id: node.id(),
            parameters,
        }
    }
}
