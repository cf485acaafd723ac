use crate::types::AliasType;
use crate::types::ContainerType;
use crate::types::EnumType;
use crate::types::PrimitiveType;
use crate::types::ResolverType;
use crate::types::StructType;
use crate::types::TypeId;
use crate::types::UnionType;
use libgraphdef_parser::Cursor;

/// Any type known to a schema.
///
/// There is no trait variant: a `trait` declaration aborts the parse with
/// [`ErrorCode::Unimplemented`](crate::ErrorCode::Unimplemented).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Type {
    Primitive(PrimitiveType),
    Alias(AliasType),
    Enum(EnumType),
    Union(UnionType),
    Struct(StructType),
    Resolver(ResolverType),
    Optional(ContainerType),
    List(ContainerType),
}

impl Type {
    pub fn id(&self) -> TypeId {
        match self {
            Type::Primitive(primitive) => primitive.id(),
            Type::Alias(alias) => alias.id,
            Type::Enum(enum_) => enum_.id,
            Type::Union(union_) => union_.id,
            Type::Struct(struct_) => struct_.id,
            Type::Resolver(resolver) => resolver.id,
            Type::Optional(container) | Type::List(container) => container.id,
        }
    }

    /// The canonical designation: the type name for named types, or the
    /// full modifier chain (e.g. `?[]Int32`) for containers.
    pub fn designation(&self) -> &str {
        match self {
            Type::Primitive(primitive) => primitive.name(),
            Type::Alias(alias) => &alias.name,
            Type::Enum(enum_) => &enum_.name,
            Type::Union(union_) => &union_.name,
            Type::Struct(struct_) => &struct_.name,
            Type::Resolver(resolver) => &resolver.name,
            Type::Optional(container) | Type::List(container) => {
                &container.designation
            },
        }
    }

    /// The declaration site. Primitives and containers have none.
    pub fn def_location(&self) -> Option<&Cursor> {
        match self {
            Type::Primitive(_) | Type::Optional(_) | Type::List(_) => None,
            Type::Alias(alias) => Some(&alias.def_location),
            Type::Enum(enum_) => Some(&enum_.def_location),
            Type::Union(union_) => Some(&union_.def_location),
            Type::Struct(struct_) => Some(&struct_.def_location),
            Type::Resolver(resolver) => Some(&resolver.def_location),
        }
    }

    /// A lower-case word naming this type's category.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::Primitive(_) => "primitive",
            Type::Alias(_) => "alias",
            Type::Enum(_) => "enum",
            Type::Union(_) => "union",
            Type::Struct(_) => "struct",
            Type::Resolver(_) => "resolver",
            Type::Optional(_) => "optional",
            Type::List(_) => "list",
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Type::Optional(_) | Type::List(_))
    }

    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        if let Self::Primitive(primitive) = self {
            Some(*primitive)
        } else {
            None
        }
    }

    pub fn as_alias(&self) -> Option<&AliasType> {
        if let Self::Alias(alias) = self {
            Some(alias)
        } else {
            None
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(enum_) = self {
            Some(enum_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(union_) = self {
            Some(union_)
        } else {
            None
        }
    }

    pub fn as_struct(&self) -> Option<&StructType> {
        if let Self::Struct(struct_) = self {
            Some(struct_)
        } else {
            None
        }
    }

    pub fn as_resolver(&self) -> Option<&ResolverType> {
        if let Self::Resolver(resolver) = self {
            Some(resolver)
        } else {
            None
        }
    }

    /// Unwrap the [`ContainerType`] of an `Optional` or `List`.
    pub fn as_container(&self) -> Option<&ContainerType> {
        match self {
            Self::Optional(container) | Self::List(container) => Some(container),
            _ => None,
        }
    }
}
