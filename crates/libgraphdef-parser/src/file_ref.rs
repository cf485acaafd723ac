use std::path::Path;
use std::sync::Arc;

/// A cheaply clonable handle to the logical name of a source file.
///
/// Every [`Cursor`](crate::Cursor) carries one of these, so cloning must stay
/// a reference-count bump rather than a path allocation.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FileRef(Arc<Path>);

impl FileRef {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(Arc::from(path.as_ref()))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for FileRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl serde::Serialize for FileRef {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.display())
    }
}

impl From<&str> for FileRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FileRef {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&Path> for FileRef {
    fn from(value: &Path) -> Self {
        Self::new(value)
    }
}

impl From<std::path::PathBuf> for FileRef {
    fn from(value: std::path::PathBuf) -> Self {
        Self::new(value)
    }
}
