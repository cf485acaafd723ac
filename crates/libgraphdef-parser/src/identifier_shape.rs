//! Classification of words into the identifier shapes the grammar accepts.

use crate::token::TokenKind;

/// The naming rule a declared name must satisfy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NamingRule {
    /// Type names: `[A-Z][A-Za-z0-9]*`.
    TypeName,
    /// Schema, member, endpoint, parameter and enum-value names:
    /// `[a-z][A-Za-z0-9]*`.
    LowerCamelCase,
}

impl NamingRule {
    pub fn pattern(&self) -> &'static str {
        match self {
            NamingRule::TypeName => "[A-Z][A-Za-z0-9]*",
            NamingRule::LowerCamelCase => "[a-z][A-Za-z0-9]*",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NamingRule::TypeName => "type name",
            NamingRule::LowerCamelCase => "lower-camel-case name",
        }
    }

    /// Returns `true` if `word` satisfies this rule.
    pub fn accepts(&self, word: &str) -> bool {
        match self {
            NamingRule::TypeName => {
                classify_word(word) == TokenKind::TypeName
            },
            NamingRule::LowerCamelCase => matches!(
                classify_word(word),
                TokenKind::LowerName | TokenKind::Keyword(_),
            ),
        }
    }
}

impl std::fmt::Display for NamingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (`{}`)", self.description(), self.pattern())
    }
}

/// Classifies a lexed word (`[A-Za-z_][A-Za-z0-9_]*`) into a keyword or one
/// of the three identifier classes.
pub fn classify_word(word: &str) -> TokenKind {
    if let Some(keyword) = crate::token::Keyword::from_word(word) {
        return TokenKind::Keyword(keyword);
    }

    let mut bytes = word.bytes();
    let first = match bytes.next() {
        Some(byte) => byte,
        None => return TokenKind::Identifier,
    };
    if !bytes.all(|byte| byte.is_ascii_alphanumeric()) {
        return TokenKind::Identifier;
    }

    if first.is_ascii_uppercase() {
        TokenKind::TypeName
    } else if first.is_ascii_lowercase() {
        TokenKind::LowerName
    } else {
        TokenKind::Identifier
    }
}

/// Returns `true` if `ch` can start a word.
pub(crate) fn is_word_start(ch: u8) -> bool {
    ch == b'_' || ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` can continue a word.
pub(crate) fn is_word_continue(ch: u8) -> bool {
    ch == b'_' || ch.is_ascii_alphanumeric()
}
