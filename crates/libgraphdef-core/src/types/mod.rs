//! The graphdef type system: primitive, user-declared and anonymous
//! container types, each identified by a stable [`TypeId`].

mod alias_type;
mod container_type;
mod enum_type;
mod primitive_type;
mod resolver_type;
mod schema_type;
mod struct_type;
mod type_designation;
mod type_id;
mod type_lookup;
mod type_registry;
mod union_type;

pub use alias_type::AliasType;
pub use container_type::ContainerType;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use primitive_type::PrimitiveType;
pub use resolver_type::ResolverType;
pub use schema_type::Type;
pub use struct_type::StructType;
pub use type_designation::TypeDesignation;
pub use type_designation::TypeModifier;
pub use type_id::TypeId;
pub use type_lookup::TypeLookup;
pub(crate) use type_registry::TypeRegistry;
pub use union_type::UnionOption;
pub use union_type::UnionType;
