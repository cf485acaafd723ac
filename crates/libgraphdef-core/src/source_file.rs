use libgraphdef_parser::FileRef;

/// One graphdef source text plus the logical name it is reported under.
///
/// The core never touches the filesystem; reading files is up to the
/// caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceFile {
    name: FileRef,
    text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<FileRef>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> &FileRef {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
