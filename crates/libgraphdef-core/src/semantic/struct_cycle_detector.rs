use crate::diagnostics::SchemaError;
use crate::graph::GraphNode;
use crate::graph::GraphRegistry;
use crate::types::StructType;
use crate::types::Type;
use crate::types::TypeId;
use crate::types::TypeLookup;
use crate::types::TypeRegistry;
use std::collections::HashMap;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Visit {
    InProgress,
    Done,
}

/// A field whose type reaches another struct.
struct Edge<'a> {
    field: &'a GraphNode,
    target: TypeId,
}

struct Frame<'a> {
    struct_: &'a StructType,
    edges: Vec<Edge<'a>>,
    next: usize,
}

/// Finds structs that contain themselves through a chain of fields.
///
/// An edge runs from a struct to the struct its field's type reaches once
/// containers and aliases are unwrapped, so `?[]B` and an alias of `B`
/// both count as `B`. The search is an iterative depth-first walk in which
/// every struct is entered once; a back edge closes a cycle, which is
/// reported unless one of its members already belongs to a reported
/// cycle.
pub(crate) struct StructCycleDetector<'a> {
    types: &'a TypeRegistry,
    graph: &'a GraphRegistry,
    visits: HashMap<TypeId, Visit>,
    cyclic: HashSet<TypeId>,
}

impl<'a> StructCycleDetector<'a> {
    pub fn new(types: &'a TypeRegistry, graph: &'a GraphRegistry) -> Self {
        Self {
            types,
            graph,
            visits: HashMap::new(),
            cyclic: HashSet::new(),
        }
    }

    pub fn detect(mut self) -> Vec<SchemaError> {
        let types = self.types;
        let mut errors = vec![];
        for struct_ in types.iter().filter_map(Type::as_struct) {
            if !self.visits.contains_key(&struct_.id()) {
                self.walk_from(struct_, &mut errors);
            }
        }
        errors
    }

    fn frame(&self, struct_: &'a StructType) -> Frame<'a> {
        let types = self.types;
        let graph = self.graph;
        let edges = struct_
            .fields()
            .iter()
            .filter_map(|field_id| graph.node(*field_id))
            .filter_map(|field| {
                let target = types.struct_target(field.type_id()?)?;
                Some(Edge { field, target })
            })
            .collect();
        Frame {
            struct_,
            edges,
            next: 0,
        }
    }

    fn walk_from(&mut self, root: &'a StructType, errors: &mut Vec<SchemaError>) {
        let types = self.types;
        self.visits.insert(root.id(), Visit::InProgress);
        let mut stack = vec![self.frame(root)];

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.edges.len() {
                let finished = frame.struct_.id();
                stack.pop();
                self.visits.insert(finished, Visit::Done);
                continue;
            }
            let target = frame.edges[frame.next].target;
            frame.next += 1;

            match self.visits.get(&target).copied() {
                None => {
                    if let Some(target_struct) =
                        types.lookup_type(target).and_then(Type::as_struct)
                    {
                        self.visits.insert(target, Visit::InProgress);
                        stack.push(self.frame(target_struct));
                    }
                },
                Some(Visit::InProgress) => {
                    if let Some(error) = self.close_cycle(&stack, target) {
                        errors.push(error);
                    }
                },
                Some(Visit::Done) => (),
            }
        }
    }

    /// Builds the report for the cycle formed by the stack suffix starting
    /// at `target`, unless it overlaps a cycle already reported.
    fn close_cycle(&mut self, stack: &[Frame<'a>], target: TypeId) -> Option<SchemaError> {
        let start = stack.iter().position(|frame| frame.struct_.id() == target)?;
        let members = &stack[start..];
        if members.iter().any(|frame| self.cyclic.contains(&frame.struct_.id())) {
            return None;
        }
        self.cyclic
            .extend(members.iter().map(|frame| frame.struct_.id()));

        let mut links: Vec<_> = members
            .iter()
            .map(|frame| {
                let field = frame.edges[frame.next - 1].field;
                (
                    frame.struct_.name().to_string(),
                    field.name().to_string(),
                    field.def_location().clone(),
                )
            })
            .collect();
        let first = links
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.0.cmp(&b.0))
            .map(|(index, _)| index)
            .unwrap_or(0);
        links.rotate_left(first);

        Some(SchemaError::StructCycle { links })
    }
}
