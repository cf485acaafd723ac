use crate::Cursor;

/// Categorizes lexical errors for programmatic handling.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("unexpected character {}", describe_char(*.0))]
    UnexpectedCharacter(char),

    /// A `[` that is not immediately followed by `]`.
    #[error("unterminated list marker: expected `]` immediately after `[`")]
    UnterminatedListMarker,

    /// A `\r` that is not immediately followed by `\n`.
    #[error("bare carriage return: `\\r` must be followed by `\\n`")]
    BareCarriageReturn,
}

/// A lexical error with the position at which it was detected.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind} at {position}")]
pub struct LexError {
    kind: LexErrorKind,
    position: Cursor,
}

impl LexError {
    pub fn new(kind: LexErrorKind, position: Cursor) -> Self {
        Self { kind, position }
    }

    pub fn kind(&self) -> &LexErrorKind {
        &self.kind
    }

    pub fn position(&self) -> &Cursor {
        &self.position
    }
}

/// Returns a human-readable description of a character for error messages.
///
/// Printable characters are shown in backticks. Invisible, control and
/// named format characters additionally show their code point.
fn describe_char(ch: char) -> String {
    if ch.is_control()
        || (ch.is_whitespace() && ch != ' ')
        || unicode_char_name(ch).is_some()
    {
        match unicode_char_name(ch) {
            Some(name) => format!("`{}` (U+{:04X}: {name})", ch.escape_default(), ch as u32),
            None => format!("(U+{:04X})", ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

/// Names for the invisible characters most commonly pasted into source
/// files by accident.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0009}' => Some("HORIZONTAL TAB"),
        '\u{000A}' => Some("LINE FEED"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{000D}' => Some("CARRIAGE RETURN"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{007F}' => Some("DELETE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        '\u{FEFF}' => Some("BYTE ORDER MARK"),
        _ => None,
    }
}
