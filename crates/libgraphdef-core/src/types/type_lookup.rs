use crate::types::Type;
use crate::types::TypeId;
use std::collections::HashSet;

/// Read access to a set of types by [`TypeId`], plus the derived queries
/// that need to follow references between types.
///
/// Implemented by the registry used while parsing and by the finished
/// [`SchemaModel`](crate::SchemaModel).
pub trait TypeLookup {
    fn lookup_type(&self, id: TypeId) -> Option<&Type>;

    /// Returns `true` if values of type `id` carry only data.
    ///
    /// Resolvers and `None` are impure. Aliases, unions and containers
    /// inherit purity from what they reference. An alias or union reached
    /// again while its own purity is being computed counts as pure, as do
    /// unresolved references.
    fn is_pure(&self, id: TypeId) -> bool {
        is_pure_guarded(self, id, &mut HashSet::new())
    }

    /// The canonical designation of `id`, if it is known.
    fn designation_of(&self, id: TypeId) -> Option<&str> {
        self.lookup_type(id).map(Type::designation)
    }

    /// Unwraps containers: returns the terminal type of `id`, or `id`
    /// itself if it is not a container.
    fn terminal_of(&self, id: TypeId) -> TypeId {
        match self.lookup_type(id) {
            Some(Type::Optional(container) | Type::List(container)) => {
                container.terminal
            },
            _ => id,
        }
    }

    /// Follows aliases from `id` to the first non-alias type. Returns
    /// `None` for an unresolved or cyclic alias chain.
    fn alias_target(&self, id: TypeId) -> Option<TypeId> {
        let mut visited = HashSet::new();
        let mut current = id;
        loop {
            if !visited.insert(current) {
                return None;
            }
            match self.lookup_type(current)? {
                Type::Alias(alias) => current = alias.aliased?,
                _ => return Some(current),
            }
        }
    }

    /// Follows containers and aliases from `id` and returns the struct
    /// reached, if any.
    fn struct_target(&self, id: TypeId) -> Option<TypeId> {
        let mut visited = HashSet::new();
        let mut current = id;
        loop {
            if !visited.insert(current) {
                return None;
            }
            match self.lookup_type(current)? {
                Type::Struct(_) => return Some(current),
                Type::Optional(container) | Type::List(container) => {
                    current = container.terminal;
                },
                Type::Alias(alias) => current = alias.aliased?,
                _ => return None,
            }
        }
    }
}

fn is_pure_guarded<L: TypeLookup + ?Sized>(
    lookup: &L,
    id: TypeId,
    visited: &mut HashSet<TypeId>,
) -> bool {
    let type_ = match lookup.lookup_type(id) {
        Some(type_) => type_,
        None => return true,
    };

    match type_ {
        Type::Primitive(primitive) => primitive.is_pure(),
        Type::Enum(_) | Type::Struct(_) => true,
        Type::Resolver(_) => false,
        Type::Optional(container) | Type::List(container) => {
            is_pure_guarded(lookup, container.terminal, visited)
        },
        Type::Alias(alias) => {
            if !visited.insert(id) {
                return true;
            }
            alias
                .aliased
                .is_none_or(|aliased| is_pure_guarded(lookup, aliased, visited))
        },
        Type::Union(union_) => {
            if !visited.insert(id) {
                return true;
            }
            union_
                .option_type_ids()
                .all(|option| is_pure_guarded(lookup, option, visited))
        },
    }
}
