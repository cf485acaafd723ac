use crate::types::TypeId;
use libgraphdef_parser::Cursor;

/// A single named value of an [`EnumType`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumValue {
    pub(crate) name: String,
    pub(crate) def_location: Cursor,
}

impl EnumValue {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn def_location(&self) -> &Cursor {
        &self.def_location
    }
}

/// `enum Name { value1 value2 ... }`
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumType {
    pub(crate) id: TypeId,
    pub(crate) name: String,
    pub(crate) def_location: Cursor,
    pub(crate) values: Vec<EnumValue>,
}

impl EnumType {
    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn def_location(&self) -> &Cursor {
        &self.def_location
    }

    /// Values in declaration order.
    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }

    pub fn value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|value| value.name == name)
    }
}
