use crate::diagnostics::DiagnosticNote;
use crate::diagnostics::ErrorCode;
use libgraphdef_parser::identifier_shape::NamingRule;
use libgraphdef_parser::lexer::LexError;
use libgraphdef_parser::token::Keyword;
use libgraphdef_parser::Cursor;
use smallvec::SmallVec;

/// Every problem the schema parser and its semantic passes can report.
///
/// Each variant carries the names and positions it reports. Variants that
/// refer to an earlier declaration carry its position as `prior` and name it
/// in the message.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SchemaError {
    // =========================================================================
    // Syntax tier
    // =========================================================================
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: Cursor,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEof {
        expected: String,
        position: Cursor,
    },

    #[error("illegal {} `{name}`: must match `{}`", .rule.description(), .rule.pattern())]
    IllegalIdentifier {
        name: String,
        rule: NamingRule,
        position: Cursor,
    },

    #[error("{}", .0.kind())]
    Lex(#[from] LexError),

    #[error("optional of optional (`??`) is not a valid type designation")]
    OptionalChain {
        position: Cursor,
    },

    #[error("`{keyword}` declarations are not implemented")]
    Unsupported {
        keyword: Keyword,
        position: Cursor,
    },

    // =========================================================================
    // Types
    // =========================================================================
    #[error("type `{type_name}` is already declared{}", describe_prior(.prior.as_ref()))]
    TypeRedeclaration {
        type_name: String,
        position: Cursor,
        prior: Option<Cursor>,
    },

    #[error("undefined type `{type_name}`")]
    UndefinedType {
        type_name: String,
        position: Cursor,
    },

    #[error("alias cycle: {}", format_alias_cycle(.members))]
    AliasCycle {
        /// Members of the cycle, sorted by name.
        members: Vec<(String, Cursor)>,
    },

    // =========================================================================
    // Enums
    // =========================================================================
    #[error("enum `{enum_name}` has no values")]
    EnumWithoutValues {
        enum_name: String,
        position: Cursor,
    },

    #[error("value `{value}` of enum `{enum_name}` is already declared at {prior}")]
    EnumValueRedeclaration {
        enum_name: String,
        value: String,
        position: Cursor,
        prior: Cursor,
    },

    // =========================================================================
    // Unions
    // =========================================================================
    #[error("union `{union_name}` must have at least 2 options, found {option_count}")]
    UnionMissingOptions {
        union_name: String,
        option_count: usize,
        position: Cursor,
    },

    #[error("option `{designation}` of union `{union_name}` is already listed at {prior}")]
    UnionRedundantOption {
        union_name: String,
        designation: String,
        position: Cursor,
        prior: Cursor,
    },

    #[error("union `{union_name}` lists itself as an option")]
    UnionSelfReference {
        union_name: String,
        position: Cursor,
    },

    #[error("union `{union_name}` lists `None` as an option")]
    UnionIncludesNone {
        union_name: String,
        position: Cursor,
    },

    // =========================================================================
    // Structs
    // =========================================================================
    #[error("struct `{struct_name}` has no fields")]
    StructWithoutFields {
        struct_name: String,
        position: Cursor,
    },

    #[error("field `{field_name}` of struct `{struct_name}` is already declared at {prior}")]
    StructFieldRedeclaration {
        struct_name: String,
        field_name: String,
        position: Cursor,
        prior: Cursor,
    },

    #[error(
        "field `{struct_name}.{field_name}` has impure type `{type_designation}`: \
        struct fields must carry data only"
    )]
    ImpureStructField {
        struct_name: String,
        field_name: String,
        type_designation: String,
        position: Cursor,
    },

    #[error("struct cycle: {}", format_struct_cycle(.links))]
    StructCycle {
        /// `(struct name, field name, field position)` for each link,
        /// starting at the alphabetically smallest struct.
        links: Vec<(String, String, Cursor)>,
    },

    // =========================================================================
    // Resolvers
    // =========================================================================
    #[error("resolver `{resolver_name}` has no properties")]
    ResolverWithoutProperties {
        resolver_name: String,
        position: Cursor,
    },

    #[error(
        "property `{property_name}` of resolver `{resolver_name}` is already \
        declared at {prior}"
    )]
    ResolverPropertyRedeclaration {
        resolver_name: String,
        property_name: String,
        position: Cursor,
        prior: Cursor,
    },

    // =========================================================================
    // Graph roots and parameters
    // =========================================================================
    #[error("root node `{name}` is already declared at {prior}")]
    RootNodeRedeclaration {
        name: String,
        position: Cursor,
        prior: Cursor,
    },

    #[error("parameter `{param_name}` of `{node_name}` is already declared at {prior}")]
    ParameterRedeclaration {
        node_name: String,
        param_name: String,
        position: Cursor,
        prior: Cursor,
    },

    #[error(
        "parameter `{param_name}` of `{node_name}` has impure type \
        `{type_designation}`: parameters must carry data only"
    )]
    ImpureParameter {
        node_name: String,
        param_name: String,
        type_designation: String,
        position: Cursor,
    },

    #[error("schema `{schema_name}` declares no query or mutation endpoints")]
    NoEndpoints {
        schema_name: String,
        position: Cursor,
    },
}

impl SchemaError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SchemaError::UnexpectedToken { .. }
            | SchemaError::UnexpectedEof { .. }
            | SchemaError::IllegalIdentifier { .. }
            | SchemaError::Lex(_) => ErrorCode::Syntax,
            SchemaError::OptionalChain { .. } => ErrorCode::TypeOptChain,
            SchemaError::Unsupported { .. } => ErrorCode::Unimplemented,
            SchemaError::TypeRedeclaration { .. } => ErrorCode::TypeRedecl,
            SchemaError::UndefinedType { .. } => ErrorCode::TypeUndef,
            SchemaError::AliasCycle { .. } => ErrorCode::AliasRecurs,
            SchemaError::EnumWithoutValues { .. } => ErrorCode::EnumNoVal,
            SchemaError::EnumValueRedeclaration { .. } => ErrorCode::EnumValRedecl,
            SchemaError::UnionMissingOptions { .. } => ErrorCode::UnionMissingOpts,
            SchemaError::UnionRedundantOption { .. } => ErrorCode::UnionRedund,
            SchemaError::UnionSelfReference { .. } => ErrorCode::UnionRecurs,
            SchemaError::UnionIncludesNone { .. } => ErrorCode::UnionIncludesNone,
            SchemaError::StructWithoutFields { .. } => ErrorCode::StructNoFields,
            SchemaError::StructFieldRedeclaration { .. } => ErrorCode::StructFieldRedecl,
            SchemaError::ImpureStructField { .. } => ErrorCode::StructFieldImpure,
            SchemaError::StructCycle { .. } => ErrorCode::StructRecurs,
            SchemaError::ResolverWithoutProperties { .. } => ErrorCode::ResolverNoProps,
            SchemaError::ResolverPropertyRedeclaration { .. } => {
                ErrorCode::ResolverPropRedecl
            },
            SchemaError::RootNodeRedeclaration { .. } => ErrorCode::GraphRootNodeRedecl,
            SchemaError::ParameterRedeclaration { .. } => ErrorCode::ParamRedecl,
            SchemaError::ImpureParameter { .. } => ErrorCode::ParamImpure,
            SchemaError::NoEndpoints { .. } => ErrorCode::NoEndpoints,
        }
    }

    /// The primary position of this error.
    pub fn position(&self) -> &Cursor {
        match self {
            SchemaError::Lex(error) => error.position(),
            SchemaError::AliasCycle { members } => &members[0].1,
            SchemaError::StructCycle { links } => &links[0].2,

            SchemaError::UnexpectedToken { position, .. }
            | SchemaError::UnexpectedEof { position, .. }
            | SchemaError::IllegalIdentifier { position, .. }
            | SchemaError::OptionalChain { position }
            | SchemaError::Unsupported { position, .. }
            | SchemaError::TypeRedeclaration { position, .. }
            | SchemaError::UndefinedType { position, .. }
            | SchemaError::EnumWithoutValues { position, .. }
            | SchemaError::EnumValueRedeclaration { position, .. }
            | SchemaError::UnionMissingOptions { position, .. }
            | SchemaError::UnionRedundantOption { position, .. }
            | SchemaError::UnionSelfReference { position, .. }
            | SchemaError::UnionIncludesNone { position, .. }
            | SchemaError::StructWithoutFields { position, .. }
            | SchemaError::StructFieldRedeclaration { position, .. }
            | SchemaError::ImpureStructField { position, .. }
            | SchemaError::ResolverWithoutProperties { position, .. }
            | SchemaError::ResolverPropertyRedeclaration { position, .. }
            | SchemaError::RootNodeRedeclaration { position, .. }
            | SchemaError::ParameterRedeclaration { position, .. }
            | SchemaError::ImpureParameter { position, .. }
            | SchemaError::NoEndpoints { position, .. } => position,
        }
    }

    /// Notes pointing at related sites.
    pub fn notes(&self) -> SmallVec<[DiagnosticNote; 2]> {
        let mut notes = SmallVec::new();
        match self {
            SchemaError::TypeRedeclaration { prior: None, type_name, .. } => {
                notes.push(DiagnosticNote::new(format!(
                    "`{type_name}` is a built-in primitive type",
                )));
            },
            SchemaError::TypeRedeclaration { prior: Some(prior), .. }
            | SchemaError::EnumValueRedeclaration { prior, .. }
            | SchemaError::StructFieldRedeclaration { prior, .. }
            | SchemaError::ResolverPropertyRedeclaration { prior, .. }
            | SchemaError::RootNodeRedeclaration { prior, .. }
            | SchemaError::ParameterRedeclaration { prior, .. } => {
                notes.push(DiagnosticNote::at("previously declared here", prior.clone()));
            },
            SchemaError::UnionRedundantOption { prior, .. } => {
                notes.push(DiagnosticNote::at("first listed here", prior.clone()));
            },
            SchemaError::AliasCycle { members } => {
                for (name, position) in members.iter().skip(1) {
                    notes.push(DiagnosticNote::at(
                        format!("`{name}` is part of the cycle"),
                        position.clone(),
                    ));
                }
            },
            SchemaError::StructCycle { links } => {
                for (struct_name, field_name, position) in links.iter().skip(1) {
                    notes.push(DiagnosticNote::at(
                        format!("`{struct_name}.{field_name}` continues the cycle"),
                        position.clone(),
                    ));
                }
            },
            SchemaError::Unsupported { .. } => {
                notes.push(DiagnosticNote::new(
                    "supported declarations are alias, enum, union, struct, \
                    resolver, query and mutation",
                ));
            },
            _ => (),
        }
        notes
    }
}

fn describe_prior(prior: Option<&Cursor>) -> String {
    match prior {
        Some(prior) => format!(" at {prior}"),
        None => " as a built-in primitive".to_string(),
    }
}

fn format_alias_cycle(members: &[(String, Cursor)]) -> String {
    members
        .iter()
        .map(|(name, position)| format!("`{name}` ({position})"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders links as `A.b (file:l:c) -> B.a (file:l:c) -> A`.
fn format_struct_cycle(links: &[(String, String, Cursor)]) -> String {
    let mut rendered = String::new();
    for (struct_name, field_name, position) in links {
        rendered.push_str(&format!("{struct_name}.{field_name} ({position}) -> "));
    }
    if let Some((first, _, _)) = links.first() {
        rendered.push_str(first);
    }
    rendered
}
