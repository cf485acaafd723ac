//! The driver of the recursive-descent parser: token helpers, the document
//! and header rules, and the phases that run after the scan.
//!
//! Declaration rules live in sibling modules as further `impl` blocks on
//! [`SchemaParser`].

use crate::diagnostics::SchemaError;
use crate::parser::DeferredJobQueue;
use crate::parser::ParseResult;
use crate::parser::SchemaContext;
use crate::semantic;
use crate::SourceFile;
use libgraphdef_parser::fragment::ConstructBuilder;
use libgraphdef_parser::fragment::ConstructKind;
use libgraphdef_parser::fragment::Fragment;
use libgraphdef_parser::identifier_shape::NamingRule;
use libgraphdef_parser::lexer::Lexer;
use libgraphdef_parser::token::Keyword;
use libgraphdef_parser::token::Token;
use libgraphdef_parser::token::TokenKind;
use libgraphdef_parser::Cursor;

pub(super) type PResult<T> = Result<T, SchemaError>;

/// The `schema name` header that opens every document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SchemaHeader {
    pub name: String,
    pub position: Cursor,
}

/// Parses one [`SourceFile`] into a [`SchemaModel`](crate::SchemaModel).
///
/// A syntax-tier error aborts the scan: deferred jobs and semantic passes
/// are skipped and the error is returned together with any diagnostics
/// already recorded. Semantic-tier errors are recorded and the scan goes on.
///
/// # Example
///
/// ```
/// use libgraphdef_core::parser::SchemaParser;
/// use libgraphdef_core::SourceFile;
///
/// let source = SourceFile::new("a.gdef", "schema a\nquery ping Bool");
/// let result = SchemaParser::new(&source).parse();
/// assert!(result.is_ok());
/// ```
pub struct SchemaParser<'src> {
    pub(super) source: &'src str,
    pub(super) lexer: Lexer<'src>,
    pub(super) context: SchemaContext,
    pub(super) jobs: DeferredJobQueue,
    document: ConstructBuilder<'src>,
}

impl<'src> SchemaParser<'src> {
    pub fn new(source_file: &'src SourceFile) -> Self {
        let lexer = Lexer::new(source_file.text(), source_file.name().clone());
        let document = ConstructBuilder::new(ConstructKind::Document, lexer.cursor());
        Self {
            source: source_file.text(),
            lexer,
            context: SchemaContext::new(),
            jobs: DeferredJobQueue::new(),
            document,
        }
    }

    /// Runs the scan, the deferred jobs and the semantic passes.
    pub fn parse(mut self) -> ParseResult<'src> {
        let scan = self.parse_document();
        let Self {
            source,
            mut context,
            jobs,
            document,
            ..
        } = self;
        let fragment = Fragment::from(document.finish(source));

        let model = match scan {
            Ok(header) => {
                log::debug!(
                    "scanned schema `{}`: {} type(s), {} graph node(s)",
                    header.name,
                    context.types.len(),
                    context.graph.nodes().count(),
                );
                jobs.run(&mut context);
                let categories = semantic::analyze(&context, &header);
                context.into_result(header, categories)
            },
            Err(error) => {
                log::debug!("aborting parse at {}: {error}", error.position());
                context.report(error);
                Err(context.into_diagnostics())
            },
        };

        ParseResult::new(fragment, model)
    }

    // =========================================================================
    // Document structure
    // =========================================================================

    fn parse_document(&mut self) -> PResult<SchemaHeader> {
        let header = self.parse_schema_header()?;

        let mut declaration_count = 0usize;
        while let Some(token) = self.peek()? {
            let construct = match token.kind {
                TokenKind::Keyword(Keyword::Alias) => self.parse_alias()?,
                TokenKind::Keyword(Keyword::Enum) => self.parse_enum()?,
                TokenKind::Keyword(Keyword::Union) => self.parse_union()?,
                TokenKind::Keyword(Keyword::Struct) => self.parse_struct()?,
                TokenKind::Keyword(Keyword::Resolver) => self.parse_resolver()?,
                TokenKind::Keyword(Keyword::Query) => {
                    self.parse_endpoint(Keyword::Query)?
                },
                TokenKind::Keyword(Keyword::Mutation) => {
                    self.parse_endpoint(Keyword::Mutation)?
                },
                TokenKind::Keyword(keyword @ (Keyword::Trait | Keyword::Subscription)) => {
                    return Err(SchemaError::Unsupported {
                        keyword,
                        position: token.begin,
                    });
                },
                _ => return Err(Self::unexpected("a declaration", &token)),
            };
            self.document.push(construct);
            declaration_count += 1;
        }

        log::trace!("scanned {declaration_count} declaration(s)");
        Ok(header)
    }

    fn parse_schema_header(&mut self) -> PResult<SchemaHeader> {
        let mut builder =
            ConstructBuilder::new(ConstructKind::SchemaHeader, self.lexer.cursor());
        self.expect(TokenKind::Keyword(Keyword::Schema), &mut builder)?;
        let name = self.expect_name(NamingRule::LowerCamelCase, &mut builder)?;
        self.document.push(builder.finish(self.source));

        Ok(SchemaHeader {
            name: name.source_text.to_string(),
            position: name.begin,
        })
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Consumes and returns the next non-whitespace token.
    pub(super) fn next_token(&mut self) -> PResult<Option<Token<'src>>> {
        loop {
            match self.lexer.next_token()? {
                Some(token) if token.kind.is_trivia() => continue,
                other => return Ok(other),
            }
        }
    }

    /// Returns the next non-whitespace token without consuming it.
    pub(super) fn peek(&self) -> PResult<Option<Token<'src>>> {
        let mut fork = self.lexer.peek_fork();
        loop {
            match fork.next_token()? {
                Some(token) if token.kind.is_trivia() => continue,
                other => return Ok(other),
            }
        }
    }

    pub(super) fn peek_is(&self, kind: TokenKind) -> PResult<bool> {
        Ok(self.peek()?.is_some_and(|token| token.kind == kind))
    }

    /// The position just past the last byte of input.
    pub(super) fn eof_cursor(&self) -> Cursor {
        let mut fork = self.lexer.peek_fork();
        while let Ok(Some(_)) = fork.next_token() {}
        fork.cursor()
    }

    /// Consumes a token of `kind`, adding it to `builder`.
    pub(super) fn expect(
        &mut self,
        kind: TokenKind,
        builder: &mut ConstructBuilder<'src>,
    ) -> PResult<Token<'src>> {
        let expected = kind.describe();
        match self.next_token()? {
            Some(token) if token.kind == kind => {
                builder.push(token.clone());
                Ok(token)
            },
            Some(token) => Err(Self::unexpected(&expected, &token)),
            None => Err(SchemaError::UnexpectedEof {
                expected,
                position: self.eof_cursor(),
            }),
        }
    }

    /// Consumes a word satisfying `rule`, adding it to `builder`.
    ///
    /// A word of the wrong shape is an illegal identifier; anything else is
    /// an unexpected token.
    pub(super) fn expect_name(
        &mut self,
        rule: NamingRule,
        builder: &mut ConstructBuilder<'src>,
    ) -> PResult<Token<'src>> {
        match self.next_token()? {
            Some(token) if token.kind.is_word() => {
                if !rule.accepts(token.source_text) {
                    return Err(SchemaError::IllegalIdentifier {
                        name: token.source_text.to_string(),
                        rule,
                        position: token.begin,
                    });
                }
                builder.push(token.clone());
                Ok(token)
            },
            Some(token) => Err(Self::unexpected(rule.description(), &token)),
            None => Err(SchemaError::UnexpectedEof {
                expected: rule.description().to_string(),
                position: self.eof_cursor(),
            }),
        }
    }

    pub(super) fn unexpected(expected: &str, found: &Token<'_>) -> SchemaError {
        SchemaError::UnexpectedToken {
            expected: expected.to_string(),
            found: found.describe(),
            position: found.begin.clone(),
        }
    }
}
