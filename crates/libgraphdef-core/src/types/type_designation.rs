use libgraphdef_parser::Cursor;
use smallvec::SmallVec;

/// A single `?` or `[]` in a type designation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeModifier {
    Optional,
    List,
}

impl TypeModifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeModifier::Optional => "?",
            TypeModifier::List => "[]",
        }
    }
}

/// A parsed, not yet resolved reference to a type: a chain of modifiers
/// (outermost first) ending in a terminal type name.
///
/// `?[]Int32` has modifiers `[Optional, List]` and terminal `Int32`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeDesignation {
    modifiers: SmallVec<[TypeModifier; 4]>,
    terminal: String,
    position: Cursor,
    terminal_position: Cursor,
}

impl TypeDesignation {
    pub fn new(
        modifiers: SmallVec<[TypeModifier; 4]>,
        terminal: impl Into<String>,
        position: Cursor,
        terminal_position: Cursor,
    ) -> Self {
        Self {
            modifiers,
            terminal: terminal.into(),
            position,
            terminal_position,
        }
    }

    /// Outermost modifier first.
    pub fn modifiers(&self) -> &[TypeModifier] {
        &self.modifiers
    }

    pub fn terminal(&self) -> &str {
        &self.terminal
    }

    /// Position of the first character of the designation.
    pub fn position(&self) -> &Cursor {
        &self.position
    }

    pub fn terminal_position(&self) -> &Cursor {
        &self.terminal_position
    }

    /// The canonical string form, e.g. `?[]Int32`.
    pub fn canonical(&self) -> String {
        let mut canonical: String = self
            .modifiers
            .iter()
            .map(TypeModifier::as_str)
            .collect();
        canonical.push_str(&self.terminal);
        canonical
    }
}

impl std::fmt::Display for TypeDesignation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.canonical())
    }
}
