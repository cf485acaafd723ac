use crate::diagnostics::SchemaError;
use crate::graph::GraphNodeId;
use crate::graph::ParamId;
use crate::parser::schema_parser::PResult;
use crate::parser::SchemaParser;
use crate::types::TypeDesignation;
use crate::types::TypeModifier;
use libgraphdef_parser::fragment::Construct;
use libgraphdef_parser::fragment::ConstructBuilder;
use libgraphdef_parser::fragment::ConstructKind;
use libgraphdef_parser::identifier_shape::NamingRule;
use libgraphdef_parser::token::TokenKind;
use smallvec::SmallVec;

impl<'src> SchemaParser<'src> {
    /// Parses `("?" | "[]")* TypeName`.
    ///
    /// `??` is rejected at the second `?`. The terminal is only recorded
    /// here; it is resolved by a deferred job once the scan is complete.
    pub(super) fn parse_type_designation(
        &mut self,
    ) -> PResult<(TypeDesignation, Construct<'src>)> {
        let mut builder =
            ConstructBuilder::new(ConstructKind::TypeDesignation, self.lexer.cursor());
        let mut modifiers: SmallVec<[TypeModifier; 4]> = SmallVec::new();
        let mut first_position = None;

        loop {
            let token = match self.next_token()? {
                Some(token) => token,
                None => {
                    return Err(SchemaError::UnexpectedEof {
                        expected: "a type designation".to_string(),
                        position: self.eof_cursor(),
                    });
                },
            };
            let start = first_position
                .get_or_insert_with(|| token.begin.clone())
                .clone();

            match token.kind {
                TokenKind::QuestionMark => {
                    if modifiers.last() == Some(&TypeModifier::Optional) {
                        return Err(SchemaError::OptionalChain {
                            position: token.begin,
                        });
                    }
                    modifiers.push(TypeModifier::Optional);
                },
                TokenKind::ListMarker => modifiers.push(TypeModifier::List),
                TokenKind::TypeName => {
                    let designation = TypeDesignation::new(
                        modifiers,
                        token.source_text,
                        start,
                        token.begin.clone(),
                    );
                    builder.push(token);
                    return Ok((designation, builder.finish(self.source)));
                },
                kind if kind.is_word() => {
                    return Err(SchemaError::IllegalIdentifier {
                        name: token.source_text.to_string(),
                        rule: NamingRule::TypeName,
                        position: token.begin,
                    });
                },
                _ => return Err(Self::unexpected("a type designation", &token)),
            }
            builder.push(token);
        }
    }

    /// Queues resolution of a graph node's type.
    pub(super) fn schedule_node_type(
        &mut self,
        node_id: GraphNodeId,
        designation: TypeDesignation,
    ) {
        self.jobs.push(move |context| {
            let resolved = context.resolve_designation(&designation);
            if let Some(node) = context.graph.node_mut(node_id) {
                node.data_mut().type_id = resolved;
            }
        });
    }

    /// Queues resolution of a parameter's type.
    pub(super) fn schedule_param_type(
        &mut self,
        param_id: ParamId,
        designation: TypeDesignation,
    ) {
        self.jobs.push(move |context| {
            let resolved = context.resolve_designation(&designation);
            if let Some(param) = context.graph.param_mut(param_id) {
                param.type_id = resolved;
            }
        });
    }
}
