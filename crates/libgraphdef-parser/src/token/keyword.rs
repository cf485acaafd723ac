/// The reserved words of the graphdef language.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Keyword {
    Alias,
    Enum,
    Mutation,
    Query,
    Resolver,
    Schema,
    Struct,
    Subscription,
    Trait,
    Union,
}

impl Keyword {
    pub const ALL: [Keyword; 10] = [
        Keyword::Alias,
        Keyword::Enum,
        Keyword::Mutation,
        Keyword::Query,
        Keyword::Resolver,
        Keyword::Schema,
        Keyword::Struct,
        Keyword::Subscription,
        Keyword::Trait,
        Keyword::Union,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Alias => "alias",
            Keyword::Enum => "enum",
            Keyword::Mutation => "mutation",
            Keyword::Query => "query",
            Keyword::Resolver => "resolver",
            Keyword::Schema => "schema",
            Keyword::Struct => "struct",
            Keyword::Subscription => "subscription",
            Keyword::Trait => "trait",
            Keyword::Union => "union",
        }
    }

    pub fn from_word(word: &str) -> Option<Self> {
        Some(match word {
            "alias" => Keyword::Alias,
            "enum" => Keyword::Enum,
            "mutation" => Keyword::Mutation,
            "query" => Keyword::Query,
            "resolver" => Keyword::Resolver,
            "schema" => Keyword::Schema,
            "struct" => Keyword::Struct,
            "subscription" => Keyword::Subscription,
            "trait" => Keyword::Trait,
            "union" => Keyword::Union,
            _ => return None,
        })
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
