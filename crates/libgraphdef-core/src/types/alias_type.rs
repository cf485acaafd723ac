use crate::types::TypeId;
use libgraphdef_parser::Cursor;

/// `alias Name = Target`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AliasType {
    pub(crate) id: TypeId,
    pub(crate) name: String,
    pub(crate) def_location: Cursor,
    pub(crate) target_name: String,
    pub(crate) target_location: Cursor,
    pub(crate) aliased: Option<TypeId>,
}

impl AliasType {
    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn def_location(&self) -> &Cursor {
        &self.def_location
    }

    /// The name written on the right-hand side of the declaration.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn target_location(&self) -> &Cursor {
        &self.target_location
    }

    /// The aliased type, once resolved. Always `Some` in a finished
    /// [`SchemaModel`](crate::SchemaModel).
    pub fn aliased(&self) -> Option<TypeId> {
        self.aliased
    }
}
