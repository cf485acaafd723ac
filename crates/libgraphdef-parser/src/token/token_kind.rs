use crate::token::Keyword;

/// The kind of a graphdef token.
///
/// This is a closed enumeration: structural symbols, the `[]` list marker,
/// keywords, three identifier classes and coalesced whitespace. The
/// identifier classes let the parser reject a badly shaped name at the point
/// of declaration without re-scanning its text.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    // =========================================================================
    // Structural symbols
    // =========================================================================
    /// `,`
    Comma,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `.`
    Dot,
    /// `=`
    Equals,
    /// `[]`
    ListMarker,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `?`
    QuestionMark,

    // =========================================================================
    // Words
    // =========================================================================
    /// A reserved word.
    Keyword(Keyword),

    /// A word shaped like a type name: `[A-Z][A-Za-z0-9]*`.
    TypeName,

    /// A word shaped like a lower-camel-case name: `[a-z][A-Za-z0-9]*`.
    LowerName,

    /// Any other word (e.g. one containing `_`). Never valid as a declared
    /// name, but lexed as a word so the parser can report which naming rule
    /// was violated.
    Identifier,

    // =========================================================================
    // Trivia
    // =========================================================================
    /// A run of spaces, tabs and line breaks.
    Space,
}

impl TokenKind {
    /// Returns the fixed spelling of this token kind, if it has one.
    pub fn as_symbol_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::Comma => Some(","),
            TokenKind::CurlyBraceClose => Some("}"),
            TokenKind::CurlyBraceOpen => Some("{"),
            TokenKind::Dot => Some("."),
            TokenKind::Equals => Some("="),
            TokenKind::ListMarker => Some("[]"),
            TokenKind::ParenClose => Some(")"),
            TokenKind::ParenOpen => Some("("),
            TokenKind::QuestionMark => Some("?"),
            TokenKind::Keyword(keyword) => Some(keyword.as_str()),

            TokenKind::TypeName
            | TokenKind::LowerName
            | TokenKind::Identifier
            | TokenKind::Space => None,
        }
    }

    /// Returns `true` for the three identifier classes and for keywords.
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            TokenKind::Keyword(_)
                | TokenKind::TypeName
                | TokenKind::LowerName
                | TokenKind::Identifier
        )
    }

    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Space)
    }

    /// A short human-readable description used in "expected ..." messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::TypeName => "type name".to_string(),
            TokenKind::LowerName => "name".to_string(),
            TokenKind::Identifier => "identifier".to_string(),
            TokenKind::Space => "whitespace".to_string(),
            TokenKind::Keyword(keyword) => format!("`{keyword}`"),
            other => format!(
                "`{}`",
                other.as_symbol_str().unwrap_or_default(),
            ),
        }
    }
}
