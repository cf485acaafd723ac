use crate::types::TypeId;

/// The built-in types. Each is a singleton with a reserved [`TypeId`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum PrimitiveType {
    None,
    Bool,
    Byte,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float64,
    String,
    Time,
}

impl PrimitiveType {
    /// Every primitive, in reserved-ID order.
    pub const ALL: [PrimitiveType; 10] = [
        PrimitiveType::None,
        PrimitiveType::Bool,
        PrimitiveType::Byte,
        PrimitiveType::Int32,
        PrimitiveType::Uint32,
        PrimitiveType::Int64,
        PrimitiveType::Uint64,
        PrimitiveType::Float64,
        PrimitiveType::String,
        PrimitiveType::Time,
    ];

    pub fn id(&self) -> TypeId {
        TypeId::new(match self {
            PrimitiveType::None => 1,
            PrimitiveType::Bool => 2,
            PrimitiveType::Byte => 3,
            PrimitiveType::Int32 => 4,
            PrimitiveType::Uint32 => 5,
            PrimitiveType::Int64 => 6,
            PrimitiveType::Uint64 => 7,
            PrimitiveType::Float64 => 8,
            PrimitiveType::String => 9,
            PrimitiveType::Time => 10,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::None => "None",
            PrimitiveType::Bool => "Bool",
            PrimitiveType::Byte => "Byte",
            PrimitiveType::Int32 => "Int32",
            PrimitiveType::Uint32 => "Uint32",
            PrimitiveType::Int64 => "Int64",
            PrimitiveType::Uint64 => "Uint64",
            PrimitiveType::Float64 => "Float64",
            PrimitiveType::String => "String",
            PrimitiveType::Time => "Time",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|primitive| primitive.name() == name)
    }

    /// `None` carries no data and is the only impure primitive.
    pub fn is_pure(&self) -> bool {
        !matches!(self, PrimitiveType::None)
    }
}

impl std::fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
