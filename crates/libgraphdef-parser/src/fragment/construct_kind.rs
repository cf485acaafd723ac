/// The semantic tag of a [`Construct`](crate::fragment::Construct).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConstructKind {
    /// The whole source file.
    Document,
    /// `schema name`
    SchemaHeader,
    /// `alias Name = Target`
    AliasDeclaration,
    /// `enum Name { ... }`
    EnumDeclaration,
    /// A single value inside an enum body.
    EnumValue,
    /// `union Name { ... }`
    UnionDeclaration,
    /// `struct Name { ... }`
    StructDeclaration,
    /// `name Type` inside a struct body.
    StructField,
    /// `resolver Name { ... }`
    ResolverDeclaration,
    /// `name (params)? Type` inside a resolver body.
    ResolverProperty,
    /// `query name (params)? Type`
    QueryDeclaration,
    /// `mutation name (params)? Type`
    MutationDeclaration,
    /// `( ... )`
    ParameterList,
    /// `name Type` inside a parameter list.
    Parameter,
    /// A chain of `?`/`[]` modifiers ending in a type name.
    TypeDesignation,
}

impl ConstructKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructKind::Document => "document",
            ConstructKind::SchemaHeader => "schema header",
            ConstructKind::AliasDeclaration => "alias declaration",
            ConstructKind::EnumDeclaration => "enum declaration",
            ConstructKind::EnumValue => "enum value",
            ConstructKind::UnionDeclaration => "union declaration",
            ConstructKind::StructDeclaration => "struct declaration",
            ConstructKind::StructField => "struct field",
            ConstructKind::ResolverDeclaration => "resolver declaration",
            ConstructKind::ResolverProperty => "resolver property",
            ConstructKind::QueryDeclaration => "query declaration",
            ConstructKind::MutationDeclaration => "mutation declaration",
            ConstructKind::ParameterList => "parameter list",
            ConstructKind::Parameter => "parameter",
            ConstructKind::TypeDesignation => "type designation",
        }
    }
}

impl std::fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
