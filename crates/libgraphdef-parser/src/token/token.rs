use crate::token::TokenKind;
use crate::Cursor;

/// A terminal fragment: a classified slice of source text with the cursors
/// of its first byte and of the byte immediately after it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub source_text: &'src str,
    pub begin: Cursor,
    pub end: Cursor,
}

impl<'src> Token<'src> {
    pub fn new(
        kind: TokenKind,
        source_text: &'src str,
        begin: Cursor,
        end: Cursor,
    ) -> Self {
        Self {
            kind,
            source_text,
            begin,
            end,
        }
    }

    /// Returns `true` if this token may serve as a lower-camel-case name.
    ///
    /// Keywords qualify because every keyword is spelled in lower camel case
    /// and names only appear where no declaration can start.
    pub fn is_lower_name(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::LowerName | TokenKind::Keyword(_),
        )
    }

    /// A description of this token for "found ..." messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Space => "whitespace".to_string(),
            _ => format!("`{}`", self.source_text),
        }
    }
}
