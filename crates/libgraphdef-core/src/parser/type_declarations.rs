//! Rules for the type declarations: alias, enum, union, struct, resolver.

use crate::diagnostics::SchemaError;
use crate::graph::GraphNode;
use crate::graph::GraphNodeData;
use crate::parser::schema_parser::PResult;
use crate::parser::NameScope;
use crate::parser::SchemaContext;
use crate::parser::SchemaParser;
use crate::types::AliasType;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::ResolverType;
use crate::types::StructType;
use crate::types::Type;
use crate::types::TypeId;
use crate::types::UnionOption;
use crate::types::UnionType;
use libgraphdef_parser::fragment::Construct;
use libgraphdef_parser::fragment::ConstructBuilder;
use libgraphdef_parser::fragment::ConstructKind;
use libgraphdef_parser::identifier_shape::NamingRule;
use libgraphdef_parser::token::Keyword;
use libgraphdef_parser::token::Token;
use libgraphdef_parser::token::TokenKind;
use libgraphdef_parser::Cursor;
use std::collections::HashMap;

impl<'src> SchemaParser<'src> {
    /// Registers a named type, reporting a redeclaration. Returns `None` if
    /// the declaration was rejected.
    fn declare_type(
        &mut self,
        name: &Token<'src>,
        build: impl FnOnce(TypeId) -> Type,
    ) -> Option<TypeId> {
        match self.context.types.declare(name.source_text, &name.begin, build) {
            Ok(id) => Some(id),
            Err(error) => {
                self.context.report(error);
                None
            },
        }
    }

    /// Parses `{ item* }`, calling `parse_item` until the closing brace.
    /// Returns the number of items parsed.
    fn parse_block(
        &mut self,
        builder: &mut ConstructBuilder<'src>,
        mut parse_item: impl FnMut(&mut Self, &mut ConstructBuilder<'src>) -> PResult<()>,
    ) -> PResult<usize> {
        self.expect(TokenKind::CurlyBraceOpen, builder)?;
        let mut count = 0;
        while !self.peek_is(TokenKind::CurlyBraceClose)? {
            parse_item(self, builder)?;
            count += 1;
        }
        self.expect(TokenKind::CurlyBraceClose, builder)?;
        Ok(count)
    }

    // =========================================================================
    // Alias
    // =========================================================================

    /// `alias Name = Target`
    pub(super) fn parse_alias(&mut self) -> PResult<Construct<'src>> {
        let mut builder =
            ConstructBuilder::new(ConstructKind::AliasDeclaration, self.lexer.cursor());
        self.expect(TokenKind::Keyword(Keyword::Alias), &mut builder)?;
        let name = self.expect_name(NamingRule::TypeName, &mut builder)?;
        self.expect(TokenKind::Equals, &mut builder)?;
        let target = self.expect_name(NamingRule::TypeName, &mut builder)?;

        let target_name = target.source_text.to_string();
        let target_location = target.begin.clone();
        let declared = self.declare_type(&name, |id| {
            Type::Alias(AliasType {
                id,
                name: name.source_text.to_string(),
                def_location: name.begin.clone(),
                target_name: target_name.clone(),
                target_location: target_location.clone(),
                aliased: None,
            })
        });

        if let Some(alias_id) = declared {
            self.jobs.push(move |context| {
                let aliased = context.resolve_name(&target_name, &target_location);
                if let Some(Type::Alias(alias)) = context.types.get_mut(alias_id) {
                    alias.aliased = aliased;
                }
            });
        }

        Ok(builder.finish(self.source))
    }

    // =========================================================================
    // Enum
    // =========================================================================

    /// `enum Name { value* }`
    pub(super) fn parse_enum(&mut self) -> PResult<Construct<'src>> {
        let mut builder =
            ConstructBuilder::new(ConstructKind::EnumDeclaration, self.lexer.cursor());
        self.expect(TokenKind::Keyword(Keyword::Enum), &mut builder)?;
        let name = self.expect_name(NamingRule::TypeName, &mut builder)?;
        let enum_name = name.source_text.to_string();
        let declared = self.declare_type(&name, |id| {
            Type::Enum(EnumType {
                id,
                name: enum_name.clone(),
                def_location: name.begin.clone(),
                values: vec![],
            })
        });

        let mut scope = NameScope::new();
        let mut values = vec![];
        let count = self.parse_block(&mut builder, |parser, builder| {
            let mut value_builder =
                ConstructBuilder::new(ConstructKind::EnumValue, parser.lexer.cursor());
            let value =
                parser.expect_name(NamingRule::LowerCamelCase, &mut value_builder)?;
            builder.push(value_builder.finish(parser.source));

            match scope.claim(value.source_text, &value.begin) {
                Ok(()) => values.push(EnumValue {
                    name: value.source_text.to_string(),
                    def_location: value.begin,
                }),
                Err(prior) => parser.context.report(SchemaError::EnumValueRedeclaration {
                    enum_name: enum_name.clone(),
                    value: value.source_text.to_string(),
                    position: value.begin,
                    prior,
                }),
            }
            Ok(())
        })?;

        if count == 0 {
            self.context.report(SchemaError::EnumWithoutValues {
                enum_name,
                position: name.begin.clone(),
            });
        }
        if let Some(Type::Enum(enum_)) = declared.and_then(|id| self.context.types.get_mut(id)) {
            enum_.values = values;
        }

        Ok(builder.finish(self.source))
    }

    // =========================================================================
    // Union
    // =========================================================================

    /// `union Name { designation* }`
    ///
    /// Redundant options are detected here by canonical designation;
    /// self-reference and `None` are checked once the options resolve.
    pub(super) fn parse_union(&mut self) -> PResult<Construct<'src>> {
        let mut builder =
            ConstructBuilder::new(ConstructKind::UnionDeclaration, self.lexer.cursor());
        self.expect(TokenKind::Keyword(Keyword::Union), &mut builder)?;
        let name = self.expect_name(NamingRule::TypeName, &mut builder)?;
        let union_name = name.source_text.to_string();
        let declared = self.declare_type(&name, |id| {
            Type::Union(UnionType {
                id,
                name: union_name.clone(),
                def_location: name.begin.clone(),
                options: vec![],
            })
        });

        let mut seen: HashMap<String, Cursor> = HashMap::new();
        let mut options = vec![];
        let count = self.parse_block(&mut builder, |parser, builder| {
            let (designation, construct) = parser.parse_type_designation()?;
            builder.push(construct);

            let canonical = designation.canonical();
            if let Some(prior) = seen.get(&canonical) {
                parser.context.report(SchemaError::UnionRedundantOption {
                    union_name: union_name.clone(),
                    designation: canonical,
                    position: designation.position().clone(),
                    prior: prior.clone(),
                });
            } else {
                seen.insert(canonical, designation.position().clone());
                options.push(UnionOption {
                    designation,
                    type_id: None,
                });
            }
            Ok(())
        })?;

        if count < 2 {
            self.context.report(SchemaError::UnionMissingOptions {
                union_name,
                option_count: count,
                position: name.begin.clone(),
            });
        }

        if let Some(union_id) = declared {
            if let Some(Type::Union(union_)) = self.context.types.get_mut(union_id) {
                union_.options = options;
            }
            self.jobs.push(move |context| resolve_union_options(context, union_id));
        }

        Ok(builder.finish(self.source))
    }

    // =========================================================================
    // Struct
    // =========================================================================

    /// `struct Name { (name designation)* }`
    pub(super) fn parse_struct(&mut self) -> PResult<Construct<'src>> {
        let mut builder =
            ConstructBuilder::new(ConstructKind::StructDeclaration, self.lexer.cursor());
        self.expect(TokenKind::Keyword(Keyword::Struct), &mut builder)?;
        let name = self.expect_name(NamingRule::TypeName, &mut builder)?;
        let struct_name = name.source_text.to_string();
        let declared = self.declare_type(&name, |id| {
            Type::Struct(StructType {
                id,
                name: struct_name.clone(),
                def_location: name.begin.clone(),
                fields: vec![],
            })
        });

        let mut scope = NameScope::new();
        let mut fields = vec![];
        let count = self.parse_block(&mut builder, |parser, builder| {
            let mut field_builder =
                ConstructBuilder::new(ConstructKind::StructField, parser.lexer.cursor());
            let field =
                parser.expect_name(NamingRule::LowerCamelCase, &mut field_builder)?;
            let (designation, construct) = parser.parse_type_designation()?;
            field_builder.push(construct);
            builder.push(field_builder.finish(parser.source));

            if let Err(prior) = scope.claim(field.source_text, &field.begin) {
                parser.context.report(SchemaError::StructFieldRedeclaration {
                    struct_name: struct_name.clone(),
                    field_name: field.source_text.to_string(),
                    position: field.begin,
                    prior,
                });
                return Ok(());
            }

            if let Some(parent) = declared {
                let node_id = parser.context.graph.add_node(|id| GraphNode::StructField {
                    node: GraphNodeData::new(
                        id,
                        Some(struct_name.as_str()),
                        field.source_text,
                        field.begin.clone(),
                    ),
                    parent,
                });
                fields.push(node_id);
                parser.schedule_node_type(node_id, designation);
            }
            Ok(())
        })?;

        if count == 0 {
            self.context.report(SchemaError::StructWithoutFields {
                struct_name,
                position: name.begin.clone(),
            });
        }
        if let Some(Type::Struct(struct_)) = declared.and_then(|id| self.context.types.get_mut(id)) {
            struct_.fields = fields;
        }

        Ok(builder.finish(self.source))
    }

    // =========================================================================
    // Resolver
    // =========================================================================

    /// `resolver Name { (name params? designation)* }`
    pub(super) fn parse_resolver(&mut self) -> PResult<Construct<'src>> {
        let mut builder =
            ConstructBuilder::new(ConstructKind::ResolverDeclaration, self.lexer.cursor());
        self.expect(TokenKind::Keyword(Keyword::Resolver), &mut builder)?;
        let name = self.expect_name(NamingRule::TypeName, &mut builder)?;
        let resolver_name = name.source_text.to_string();
        let declared = self.declare_type(&name, |id| {
            Type::Resolver(ResolverType {
                id,
                name: resolver_name.clone(),
                def_location: name.begin.clone(),
                properties: vec![],
            })
        });

        let mut scope = NameScope::new();
        let mut properties = vec![];
        let count = self.parse_block(&mut builder, |parser, builder| {
            let mut property_builder = ConstructBuilder::new(
                ConstructKind::ResolverProperty,
                parser.lexer.cursor(),
            );
            let property =
                parser.expect_name(NamingRule::LowerCamelCase, &mut property_builder)?;

            let accepted = match scope.claim(property.source_text, &property.begin) {
                Ok(()) => true,
                Err(prior) => {
                    parser.context.report(SchemaError::ResolverPropertyRedeclaration {
                        resolver_name: resolver_name.clone(),
                        property_name: property.source_text.to_string(),
                        position: property.begin.clone(),
                        prior,
                    });
                    false
                },
            };

            let node_id = match declared {
                Some(parent) if accepted => {
                    let node_id =
                        parser.context.graph.add_node(|id| GraphNode::ResolverProperty {
                            node: GraphNodeData::new(
                                id,
                                Some(resolver_name.as_str()),
                                property.source_text,
                                property.begin.clone(),
                            ),
                            parent,
                            params: vec![],
                        });
                    properties.push(node_id);
                    Some(node_id)
                },
                _ => None,
            };

            let graph_name = format!("{resolver_name}.{}", property.source_text);
            if parser.peek_is(TokenKind::ParenOpen)? {
                let params = parser.parse_parameter_list(node_id, &graph_name)?;
                property_builder.push(params);
            }
            let (designation, construct) = parser.parse_type_designation()?;
            property_builder.push(construct);
            builder.push(property_builder.finish(parser.source));

            if let Some(node_id) = node_id {
                parser.schedule_node_type(node_id, designation);
            }
            Ok(())
        })?;

        if count == 0 {
            self.context.report(SchemaError::ResolverWithoutProperties {
                resolver_name,
                position: name.begin.clone(),
            });
        }
        if let Some(Type::Resolver(resolver)) =
            declared.and_then(|id| self.context.types.get_mut(id))
        {
            resolver.properties = properties;
        }

        Ok(builder.finish(self.source))
    }
}

/// Resolves every option of a union. Self-reference and `None` are
/// checked by the semantic passes once aliases have resolved too.
fn resolve_union_options(context: &mut SchemaContext, union_id: TypeId) {
    let designations: Vec<_> = match context.types.get_mut(union_id) {
        Some(Type::Union(union_)) => union_
            .options
            .iter()
            .map(|option| option.designation.clone())
            .collect(),
        _ => return,
    };

    let resolved: Vec<_> = designations
        .iter()
        .map(|designation| context.resolve_designation(designation))
        .collect();

    if let Some(Type::Union(union_)) = context.types.get_mut(union_id) {
        for (option, type_id) in union_.options.iter_mut().zip(resolved) {
            option.type_id = type_id;
        }
    }
}
