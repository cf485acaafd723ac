use libgraphdef_parser::Cursor;
use std::collections::HashMap;

/// Tracks the names declared within one block (an enum body, a struct or
/// resolver body, a parameter list) to detect local redeclarations.
#[derive(Debug, Default)]
pub(crate) struct NameScope {
    names: HashMap<String, Cursor>,
}

impl NameScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` at `position`. Returns the earlier position if the
    /// name was already declared in this scope.
    pub fn claim(&mut self, name: &str, position: &Cursor) -> Result<(), Cursor> {
        if let Some(prior) = self.names.get(name) {
            return Err(prior.clone());
        }
        self.names.insert(name.to_string(), position.clone());
        Ok(())
    }
}
