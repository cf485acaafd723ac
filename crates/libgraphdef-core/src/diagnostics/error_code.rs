/// The stable code of a diagnostic, suitable for exact comparison.
///
/// Codes serialize (and display) as their `Err*` spelling. The derived
/// ordering is used as a tie-breaker when sorting diagnostics that share a
/// position.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
pub enum ErrorCode {
    #[serde(rename = "ErrSyntax")]
    Syntax,
    #[serde(rename = "ErrUnimplemented")]
    Unimplemented,
    #[serde(rename = "ErrTypeOptChain")]
    TypeOptChain,
    #[serde(rename = "ErrTypeRedecl")]
    TypeRedecl,
    #[serde(rename = "ErrTypeUndef")]
    TypeUndef,
    #[serde(rename = "ErrAliasRecurs")]
    AliasRecurs,
    #[serde(rename = "ErrEnumNoVal")]
    EnumNoVal,
    #[serde(rename = "ErrEnumValRedecl")]
    EnumValRedecl,
    #[serde(rename = "ErrUnionMissingOpts")]
    UnionMissingOpts,
    #[serde(rename = "ErrUnionRedund")]
    UnionRedund,
    #[serde(rename = "ErrUnionRecurs")]
    UnionRecurs,
    #[serde(rename = "ErrUnionIncludesNone")]
    UnionIncludesNone,
    #[serde(rename = "ErrStructNoFields")]
    StructNoFields,
    #[serde(rename = "ErrStructFieldRedecl")]
    StructFieldRedecl,
    #[serde(rename = "ErrStructFieldImpure")]
    StructFieldImpure,
    #[serde(rename = "ErrStructRecurs")]
    StructRecurs,
    #[serde(rename = "ErrResolverNoProps")]
    ResolverNoProps,
    #[serde(rename = "ErrResolverPropRedecl")]
    ResolverPropRedecl,
    #[serde(rename = "ErrGraphRootNodeRedecl")]
    GraphRootNodeRedecl,
    #[serde(rename = "ErrParamRedecl")]
    ParamRedecl,
    #[serde(rename = "ErrParamImpure")]
    ParamImpure,
    #[serde(rename = "ErrNoEndpoints")]
    NoEndpoints,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Syntax => "ErrSyntax",
            ErrorCode::Unimplemented => "ErrUnimplemented",
            ErrorCode::TypeOptChain => "ErrTypeOptChain",
            ErrorCode::TypeRedecl => "ErrTypeRedecl",
            ErrorCode::TypeUndef => "ErrTypeUndef",
            ErrorCode::AliasRecurs => "ErrAliasRecurs",
            ErrorCode::EnumNoVal => "ErrEnumNoVal",
            ErrorCode::EnumValRedecl => "ErrEnumValRedecl",
            ErrorCode::UnionMissingOpts => "ErrUnionMissingOpts",
            ErrorCode::UnionRedund => "ErrUnionRedund",
            ErrorCode::UnionRecurs => "ErrUnionRecurs",
            ErrorCode::UnionIncludesNone => "ErrUnionIncludesNone",
            ErrorCode::StructNoFields => "ErrStructNoFields",
            ErrorCode::StructFieldRedecl => "ErrStructFieldRedecl",
            ErrorCode::StructFieldImpure => "ErrStructFieldImpure",
            ErrorCode::StructRecurs => "ErrStructRecurs",
            ErrorCode::ResolverNoProps => "ErrResolverNoProps",
            ErrorCode::ResolverPropRedecl => "ErrResolverPropRedecl",
            ErrorCode::GraphRootNodeRedecl => "ErrGraphRootNodeRedecl",
            ErrorCode::ParamRedecl => "ErrParamRedecl",
            ErrorCode::ParamImpure => "ErrParamImpure",
            ErrorCode::NoEndpoints => "ErrNoEndpoints",
        }
    }

    /// Returns `true` for codes that abort the parse.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ErrorCode::Syntax
                | ErrorCode::Unimplemented
                | ErrorCode::TypeOptChain
        )
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
