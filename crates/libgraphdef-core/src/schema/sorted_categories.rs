use crate::graph::GraphNode;
use crate::graph::GraphNodeId;
use crate::graph::GraphRegistry;
use crate::types::Type;
use crate::types::TypeId;
use crate::types::TypeRegistry;

/// The IDs of each type and endpoint category, sorted by name.
///
/// Anonymous types sort by designation and graph nodes by graph name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct SortedCategories {
    pub aliases: Vec<TypeId>,
    pub enums: Vec<TypeId>,
    pub unions: Vec<TypeId>,
    pub structs: Vec<TypeId>,
    pub resolvers: Vec<TypeId>,
    pub anonymous: Vec<TypeId>,
    pub graph_nodes: Vec<GraphNodeId>,
    pub queries: Vec<GraphNodeId>,
    pub mutations: Vec<GraphNodeId>,
}

impl SortedCategories {
    /// Sorts every category, one parallel task per category.
    pub fn build(types: &TypeRegistry, graph: &GraphRegistry) -> Self {
        let mut sorted = Self::default();
        let Self {
            aliases,
            enums,
            unions,
            structs,
            resolvers,
            anonymous,
            graph_nodes,
            queries,
            mutations,
        } = &mut sorted;

        rayon::scope(|scope| {
            scope.spawn(move |_| *aliases = sorted_types(types, |t| matches!(t, Type::Alias(_))));
            scope.spawn(move |_| *enums = sorted_types(types, |t| matches!(t, Type::Enum(_))));
            scope.spawn(move |_| *unions = sorted_types(types, |t| matches!(t, Type::Union(_))));
            scope.spawn(move |_| *structs = sorted_types(types, |t| matches!(t, Type::Struct(_))));
            scope.spawn(move |_| {
                *resolvers = sorted_types(types, |t| matches!(t, Type::Resolver(_)))
            });
            scope.spawn(move |_| *anonymous = sorted_types(types, Type::is_anonymous));
            scope.spawn(move |_| *graph_nodes = sorted_nodes(graph, |_| true));
            scope.spawn(move |_| *queries = sorted_nodes(graph, GraphNode::is_query));
            scope.spawn(move |_| *mutations = sorted_nodes(graph, GraphNode::is_mutation));
        });

        sorted
    }
}

fn sorted_types(types: &TypeRegistry, include: impl Fn(&Type) -> bool) -> Vec<TypeId> {
    let mut selected: Vec<&Type> = types.iter().filter(|t| include(t)).collect();
    selected.sort_by(|a, b| a.designation().cmp(b.designation()));
    selected.into_iter().map(Type::id).collect()
}

fn sorted_nodes(
    graph: &GraphRegistry,
    include: impl Fn(&GraphNode) -> bool,
) -> Vec<GraphNodeId> {
    let mut selected: Vec<&GraphNode> = graph.nodes().filter(|n| include(n)).collect();
    selected.sort_by(|a, b| a.graph_name().cmp(b.graph_name()));
    selected.into_iter().map(GraphNode::id).collect()
}
