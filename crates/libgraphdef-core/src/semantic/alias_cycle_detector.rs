use crate::diagnostics::SchemaError;
use crate::types::AliasType;
use crate::types::Type;
use crate::types::TypeId;
use crate::types::TypeLookup;
use crate::types::TypeRegistry;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Classification {
    Acyclic,
    Cyclic,
}

/// Finds cycles among alias declarations.
///
/// Each alias points at its aliased type; the walk only continues while
/// that type is itself an alias. Every alias is classified exactly once,
/// so each cycle is reported exactly once no matter how many chains lead
/// into it.
pub(crate) struct AliasCycleDetector<'a> {
    types: &'a TypeRegistry,
    classified: HashMap<TypeId, Classification>,
}

impl<'a> AliasCycleDetector<'a> {
    pub fn new(types: &'a TypeRegistry) -> Self {
        Self {
            types,
            classified: HashMap::new(),
        }
    }

    pub fn detect(mut self) -> Vec<SchemaError> {
        let types = self.types;
        let aliases: Vec<&AliasType> = types.iter().filter_map(Type::as_alias).collect();

        let mut errors = vec![];
        for alias in aliases {
            if !self.classified.contains_key(&alias.id()) {
                errors.extend(self.walk_chain(alias.id()));
            }
        }
        errors
    }

    /// Follows the chain starting at `start` until it leaves the aliases,
    /// reaches an already classified alias, or repeats itself.
    fn walk_chain(&mut self, start: TypeId) -> Option<SchemaError> {
        let types = self.types;
        let mut chain: Vec<&'a AliasType> = vec![];
        let mut in_chain: HashMap<TypeId, usize> = HashMap::new();
        let mut current = start;

        loop {
            if self.classified.contains_key(&current) {
                self.mark(&chain, Classification::Acyclic);
                return None;
            }

            if let Some(&cycle_start) = in_chain.get(&current) {
                let (tail, cycle) = chain.split_at(cycle_start);
                self.mark(tail, Classification::Acyclic);
                self.mark(cycle, Classification::Cyclic);
                return Some(Self::cycle_error(cycle));
            }

            let alias = match types.lookup_type(current).and_then(Type::as_alias) {
                Some(alias) => alias,
                None => {
                    self.mark(&chain, Classification::Acyclic);
                    return None;
                },
            };
            in_chain.insert(current, chain.len());
            chain.push(alias);

            match alias.aliased() {
                Some(next) => current = next,
                None => {
                    self.mark(&chain, Classification::Acyclic);
                    return None;
                },
            }
        }
    }

    fn mark(&mut self, aliases: &[&AliasType], classification: Classification) {
        for alias in aliases {
            self.classified.insert(alias.id(), classification);
        }
    }

    fn cycle_error(cycle: &[&AliasType]) -> SchemaError {
        let mut members: Vec<_> = cycle
            .iter()
            .map(|alias| (alias.name().to_string(), alias.def_location().clone()))
            .collect();
        members.sort_by(|a, b| a.0.cmp(&b.0));
        SchemaError::AliasCycle { members }
    }
}
