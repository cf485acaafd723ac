use crate::types::TypeDesignation;
use crate::types::TypeId;
use libgraphdef_parser::Cursor;

/// One option of a [`UnionType`] as written, plus its resolved type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnionOption {
    pub(crate) designation: TypeDesignation,
    pub(crate) type_id: Option<TypeId>,
}

impl UnionOption {
    pub fn designation(&self) -> &TypeDesignation {
        &self.designation
    }

    /// The resolved option type. Always `Some` in a finished
    /// [`SchemaModel`](crate::SchemaModel).
    pub fn type_id(&self) -> Option<TypeId> {
        self.type_id
    }
}

/// `union Name { Option1 Option2 ... }`
///
/// Options are kept in declaration order and are unique by canonical
/// designation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnionType {
    pub(crate) id: TypeId,
    pub(crate) name: String,
    pub(crate) def_location: Cursor,
    pub(crate) options: Vec<UnionOption>,
}

impl UnionType {
    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn def_location(&self) -> &Cursor {
        &self.def_location
    }

    pub fn options(&self) -> &[UnionOption] {
        &self.options
    }

    /// The resolved option type IDs, skipping unresolved options.
    pub fn option_type_ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.options.iter().filter_map(|option| option.type_id)
    }
}
