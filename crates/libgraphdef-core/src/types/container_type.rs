use crate::types::TypeId;

/// An anonymous `?T` or `[]T` type.
///
/// `store` is the directly wrapped type (one level of nesting) and
/// `terminal` the non-container type reached by unwrapping the whole chain.
/// Containers are interned by `designation`, so equal designations share
/// one instance and one [`TypeId`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContainerType {
    pub(crate) id: TypeId,
    pub(crate) designation: String,
    pub(crate) store: TypeId,
    pub(crate) terminal: TypeId,
}

impl ContainerType {
    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn store(&self) -> TypeId {
        self.store
    }

    pub fn terminal(&self) -> TypeId {
        self.terminal
    }
}
