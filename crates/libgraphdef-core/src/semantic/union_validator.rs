use crate::diagnostics::SchemaError;
use crate::types::PrimitiveType;
use crate::types::Type;
use crate::types::TypeLookup;
use crate::types::TypeRegistry;

/// Checks that no union option is the union itself or `None`, looking
/// through aliases.
///
/// Containers are distinct types, so `[]U` and `?None` are valid options.
pub(crate) struct UnionValidator<'a> {
    types: &'a TypeRegistry,
}

impl<'a> UnionValidator<'a> {
    pub fn new(types: &'a TypeRegistry) -> Self {
        Self { types }
    }

    pub fn validate(self) -> Vec<SchemaError> {
        let mut errors = vec![];
        for type_ in self.types.iter() {
            let Type::Union(union_) = type_ else {
                continue;
            };
            for option in union_.options() {
                let Some(target) = option.type_id().and_then(|id| self.types.alias_target(id))
                else {
                    continue;
                };
                if target == union_.id() {
                    errors.push(SchemaError::UnionSelfReference {
                        union_name: union_.name().to_string(),
                        position: option.designation().position().clone(),
                    });
                } else if target == PrimitiveType::None.id() {
                    errors.push(SchemaError::UnionIncludesNone {
                        union_name: union_.name().to_string(),
                        position: option.designation().position().clone(),
                    });
                }
            }
        }
        errors
    }
}
