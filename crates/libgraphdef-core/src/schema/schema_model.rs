use crate::graph::GraphNode;
use crate::graph::GraphNodeId;
use crate::graph::GraphRegistry;
use crate::graph::ParamId;
use crate::graph::Parameter;
use crate::parser::SchemaHeader;
use crate::schema::schema_json::SchemaJson;
use crate::schema::SortedCategories;
use crate::types::AliasType;
use crate::types::ContainerType;
use crate::types::EnumType;
use crate::types::ResolverType;
use crate::types::StructType;
use crate::types::Type;
use crate::types::TypeId;
use crate::types::TypeLookup;
use crate::types::TypeRegistry;
use crate::types::UnionType;
use indexmap::IndexMap;
use libgraphdef_parser::Cursor;
use std::collections::HashMap;

/// A fully resolved and validated, immutable schema.
///
/// Only produced when a parse recorded no diagnostics, so every type
/// reference in it is resolved; the accessors below rely on that.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaModel {
    name: String,
    def_location: Cursor,
    types: IndexMap<TypeId, Type>,
    types_by_name: HashMap<String, TypeId>,
    graph_nodes: IndexMap<GraphNodeId, GraphNode>,
    params: IndexMap<ParamId, Parameter>,
    categories: SortedCategories,
}

impl SchemaModel {
    pub(crate) fn new(
        header: SchemaHeader,
        types: TypeRegistry,
        graph: GraphRegistry,
        categories: SortedCategories,
    ) -> Self {
        let types = types.into_types();
        let types_by_name = types
            .values()
            .filter(|type_| !type_.is_anonymous())
            .map(|type_| (type_.designation().to_string(), type_.id()))
            .collect();
        let (graph_nodes, params) = graph.into_parts();

        Self {
            name: header.name,
            def_location: header.position,
            types,
            types_by_name,
            graph_nodes,
            params,
            categories,
        }
    }

    /// The name given in the `schema` header.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position of the schema name in the header.
    pub fn def_location(&self) -> &Cursor {
        &self.def_location
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn type_by_id(&self, id: TypeId) -> Option<&Type> {
        self.types.get(&id)
    }

    /// Looks up a primitive or user-declared type by name.
    pub fn type_by_name(&self, name: &str) -> Option<&Type> {
        self.types_by_name
            .get(name)
            .and_then(|id| self.types.get(id))
    }

    /// Looks up an anonymous container by designation, e.g. `?[]Int32`.
    pub fn anonymous_type(&self, designation: &str) -> Option<&ContainerType> {
        self.anonymous_types()
            .find(|container| container.designation() == designation)
    }

    pub fn graph_node(&self, id: GraphNodeId) -> Option<&GraphNode> {
        self.graph_nodes.get(&id)
    }

    /// Looks up a graph node by its graph name (`Parent.name` or `name`).
    pub fn graph_node_by_name(&self, graph_name: &str) -> Option<&GraphNode> {
        self.graph_nodes
            .values()
            .find(|node| node.graph_name() == graph_name)
    }

    pub fn param(&self, id: ParamId) -> Option<&Parameter> {
        self.params.get(&id)
    }

    /// The resolved type of a graph node.
    pub fn node_type(&self, node: &GraphNode) -> &Type {
        node.type_id()
            .and_then(|id| self.types.get(&id))
            .expect("type is present in schema")
    }

    /// The resolved type of a parameter.
    pub fn param_type(&self, param: &Parameter) -> &Type {
        param
            .type_id()
            .and_then(|id| self.types.get(&id))
            .expect("type is present in schema")
    }

    /// The parameters of `node`, in declaration order.
    pub fn params_of<'a>(
        &'a self,
        node: &'a GraphNode,
    ) -> impl Iterator<Item = &'a Parameter> + 'a {
        node.params().iter().map(|id| {
            self.params.get(id).expect("parameter is present in schema")
        })
    }

    /// The field nodes of `struct_`, in declaration order.
    pub fn fields_of<'a>(
        &'a self,
        struct_: &'a StructType,
    ) -> impl Iterator<Item = &'a GraphNode> + 'a {
        self.nodes_by_id(struct_.fields())
    }

    /// The property nodes of `resolver`, in declaration order.
    pub fn properties_of<'a>(
        &'a self,
        resolver: &'a ResolverType,
    ) -> impl Iterator<Item = &'a GraphNode> + 'a {
        self.nodes_by_id(resolver.properties())
    }

    // =========================================================================
    // Sorted categories
    // =========================================================================

    /// Every type, primitives included, in ID order.
    pub fn types(&self) -> impl Iterator<Item = &Type> {
        self.types.values()
    }

    pub fn alias_types(&self) -> impl Iterator<Item = &AliasType> {
        self.types_by_id(&self.categories.aliases)
            .filter_map(Type::as_alias)
    }

    pub fn enum_types(&self) -> impl Iterator<Item = &EnumType> {
        self.types_by_id(&self.categories.enums)
            .filter_map(Type::as_enum)
    }

    pub fn union_types(&self) -> impl Iterator<Item = &UnionType> {
        self.types_by_id(&self.categories.unions)
            .filter_map(Type::as_union)
    }

    pub fn struct_types(&self) -> impl Iterator<Item = &StructType> {
        self.types_by_id(&self.categories.structs)
            .filter_map(Type::as_struct)
    }

    pub fn resolver_types(&self) -> impl Iterator<Item = &ResolverType> {
        self.types_by_id(&self.categories.resolvers)
            .filter_map(Type::as_resolver)
    }

    /// Anonymous `?T` and `[]T` types, sorted by designation.
    pub fn anonymous_types(&self) -> impl Iterator<Item = &ContainerType> {
        self.types_by_id(&self.categories.anonymous)
            .filter_map(Type::as_container)
    }

    /// Every graph node, sorted by graph name.
    pub fn graph_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes_by_id(&self.categories.graph_nodes)
    }

    pub fn queries(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes_by_id(&self.categories.queries)
    }

    pub fn mutations(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes_by_id(&self.categories.mutations)
    }

    fn types_by_id<'a>(
        &'a self,
        ids: &'a [TypeId],
    ) -> impl Iterator<Item = &'a Type> + 'a {
        ids.iter()
            .map(|id| self.types.get(id).expect("type is present in schema"))
    }

    fn nodes_by_id<'a>(
        &'a self,
        ids: &'a [GraphNodeId],
    ) -> impl Iterator<Item = &'a GraphNode> + 'a {
        ids.iter().map(|id| {
            self.graph_nodes
                .get(id)
                .expect("graph node is present in schema")
        })
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Serializes this schema to compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&SchemaJson::from_model(self))
    }

    /// Serializes this schema to indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&SchemaJson::from_model(self))
    }
}

impl TypeLookup for SchemaModel {
    fn lookup_type(&self, id: TypeId) -> Option<&Type> {
        self.types.get(&id)
    }
}
