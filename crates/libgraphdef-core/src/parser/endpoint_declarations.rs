//! Rules for root endpoints and parameter lists.

use crate::diagnostics::SchemaError;
use crate::graph::GraphNode;
use crate::graph::GraphNodeData;
use crate::graph::GraphNodeId;
use crate::parser::schema_parser::PResult;
use crate::parser::NameScope;
use crate::parser::SchemaParser;
use libgraphdef_parser::fragment::Construct;
use libgraphdef_parser::fragment::ConstructBuilder;
use libgraphdef_parser::fragment::ConstructKind;
use libgraphdef_parser::identifier_shape::NamingRule;
use libgraphdef_parser::token::Keyword;
use libgraphdef_parser::token::TokenKind;

impl<'src> SchemaParser<'src> {
    /// `query name params? designation` or
    /// `mutation name params? designation`.
    ///
    /// Queries and mutations share one root namespace.
    pub(super) fn parse_endpoint(
        &mut self,
        keyword: Keyword,
    ) -> PResult<Construct<'src>> {
        let kind = match keyword {
            Keyword::Mutation => ConstructKind::MutationDeclaration,
            _ => ConstructKind::QueryDeclaration,
        };
        let mut builder = ConstructBuilder::new(kind, self.lexer.cursor());
        self.expect(TokenKind::Keyword(keyword), &mut builder)?;
        let name = self.expect_name(NamingRule::LowerCamelCase, &mut builder)?;

        let node_id = match self.context.graph.claim_root_name(name.source_text, &name.begin) {
            Ok(()) => Some(self.context.graph.add_node(|id| {
                let node = GraphNodeData::new(id, None, name.source_text, name.begin.clone());
                if keyword == Keyword::Mutation {
                    GraphNode::Mutation { node, params: vec![] }
                } else {
                    GraphNode::Query { node, params: vec![] }
                }
            })),
            Err(error) => {
                self.context.report(error);
                None
            },
        };

        if self.peek_is(TokenKind::ParenOpen)? {
            let params = self.parse_parameter_list(node_id, name.source_text)?;
            builder.push(params);
        }
        let (designation, construct) = self.parse_type_designation()?;
        builder.push(construct);

        if let Some(node_id) = node_id {
            self.schedule_node_type(node_id, designation);
        }
        Ok(builder.finish(self.source))
    }

    /// `( name designation (, name designation)* )`
    ///
    /// Parameters get IDs only when `target` is `Some`, i.e. when the node
    /// they belong to was accepted. Empty lists and trailing commas are
    /// syntax errors.
    pub(super) fn parse_parameter_list(
        &mut self,
        target: Option<GraphNodeId>,
        node_name: &str,
    ) -> PResult<Construct<'src>> {
        let mut builder =
            ConstructBuilder::new(ConstructKind::ParameterList, self.lexer.cursor());
        self.expect(TokenKind::ParenOpen, &mut builder)?;

        let mut scope = NameScope::new();
        loop {
            let mut param_builder =
                ConstructBuilder::new(ConstructKind::Parameter, self.lexer.cursor());
            let param = self.expect_name(NamingRule::LowerCamelCase, &mut param_builder)?;
            let (designation, construct) = self.parse_type_designation()?;
            param_builder.push(construct);
            builder.push(param_builder.finish(self.source));

            match scope.claim(param.source_text, &param.begin) {
                Err(prior) => self.context.report(SchemaError::ParameterRedeclaration {
                    node_name: node_name.to_string(),
                    param_name: param.source_text.to_string(),
                    position: param.begin,
                    prior,
                }),
                Ok(()) => {
                    if let Some(target) = target {
                        let param_id = self.context.graph.add_param(
                            target,
                            param.source_text,
                            param.begin,
                        );
                        self.schedule_param_type(param_id, designation);
                    }
                },
            }

            match self.next_token()? {
                Some(token) if token.kind == TokenKind::Comma => builder.push(token),
                Some(token) if token.kind == TokenKind::ParenClose => {
                    builder.push(token);
                    break;
                },
                Some(token) => return Err(Self::unexpected("`,` or `)`", &token)),
                None => {
                    return Err(SchemaError::UnexpectedEof {
                        expected: "`,` or `)`".to_string(),
                        position: self.eof_cursor(),
                    });
                },
            }
        }

        Ok(builder.finish(self.source))
    }
}
