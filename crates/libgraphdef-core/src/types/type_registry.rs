use crate::diagnostics::SchemaError;
use crate::types::ContainerType;
use crate::types::PrimitiveType;
use crate::types::Type;
use crate::types::TypeId;
use crate::types::TypeLookup;
use crate::types::TypeModifier;
use indexmap::IndexMap;
use libgraphdef_parser::Cursor;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaError>;

/// The per-parse catalog of types.
///
/// Primitives are registered up front under their reserved IDs. Named
/// types are registered when their declaration is accepted and anonymous
/// containers when a designation using them is resolved. Both share one
/// monotonic counter starting at [`TypeId::FIRST_ASSIGNED`].
#[derive(Debug)]
pub(crate) struct TypeRegistry {
    types: IndexMap<TypeId, Type>,
    named: HashMap<String, TypeId>,
    anonymous: HashMap<String, TypeId>,
    next_id: u32,
}

impl TypeRegistry {
    pub fn new() -> Self {
        let mut types = IndexMap::new();
        let mut named = HashMap::new();
        for primitive in PrimitiveType::ALL {
            types.insert(primitive.id(), Type::Primitive(primitive));
            named.insert(primitive.name().to_string(), primitive.id());
        }

        Self {
            types,
            named,
            anonymous: HashMap::new(),
            next_id: TypeId::FIRST_ASSIGNED.get(),
        }
    }

    fn allocate_id(&mut self) -> TypeId {
        let id = TypeId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Registers a named type built by `build` from its freshly assigned ID.
    ///
    /// Fails without assigning an ID if `name` is a primitive or was
    /// already declared; the error carries the earlier declaration's
    /// position (none for primitives).
    pub fn declare(
        &mut self,
        name: &str,
        position: &Cursor,
        build: impl FnOnce(TypeId) -> Type,
    ) -> Result<TypeId> {
        if let Some(existing) = self.named.get(name) {
            let prior = self
                .types
                .get(existing)
                .and_then(Type::def_location)
                .cloned();
            return Err(SchemaError::TypeRedeclaration {
                type_name: name.to_string(),
                position: position.clone(),
                prior,
            });
        }

        let id = self.allocate_id();
        self.types.insert(id, build(id));
        self.named.insert(name.to_string(), id);
        Ok(id)
    }

    /// Returns the shared container `modifier` over `store`, creating it on
    /// first use.
    pub fn intern_container(
        &mut self,
        modifier: TypeModifier,
        store: TypeId,
    ) -> TypeId {
        let store_designation = self.designation_of(store).unwrap_or_default();
        let designation = format!("{}{store_designation}", modifier.as_str());
        if let Some(id) = self.anonymous.get(&designation) {
            return *id;
        }

        let terminal = self.terminal_of(store);
        let id = self.allocate_id();
        let container = ContainerType {
            id,
            designation: designation.clone(),
            store,
            terminal,
        };
        let type_ = match modifier {
            TypeModifier::Optional => Type::Optional(container),
            TypeModifier::List => Type::List(container),
        };
        log::trace!("interned anonymous type `{designation}` as {id}");
        self.types.insert(id, type_);
        self.anonymous.insert(designation, id);
        id
    }

    pub fn lookup_name(&self, name: &str) -> Option<TypeId> {
        self.named.get(name).copied()
    }

    pub fn get_mut(&mut self, id: TypeId) -> Option<&mut Type> {
        self.types.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Type> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn into_types(self) -> IndexMap<TypeId, Type> {
        self.types
    }
}

impl TypeLookup for TypeRegistry {
    fn lookup_type(&self, id: TypeId) -> Option<&Type> {
        self.types.get(&id)
    }
}
