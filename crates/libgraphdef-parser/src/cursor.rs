use crate::FileRef;
use std::cmp::Ordering;

/// A position within a source file.
///
/// This is a pure data struct. The [`Lexer`](crate::lexer::Lexer) is
/// responsible for computing position values as it scans input, and every
/// token and fragment carries the cursors of its beginning and end.
///
/// # Indexing Convention
///
/// - `index`: byte offset within the whole file (0-based)
/// - `line`: line number (1-based: the first line is 1)
/// - `column`: character count within the current line (1-based)
///
/// Within one lexer run cursors are strictly monotonic, so they can be used
/// to order diagnostics. Cursors of different files order by file first.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct Cursor {
    index: u32,
    line: u32,
    column: u32,
    file: FileRef,
}

impl Cursor {
    pub fn new(index: u32, line: u32, column: u32, file: FileRef) -> Self {
        Self {
            index,
            line,
            column,
            file,
        }
    }

    /// A cursor pointing at the very first byte of `file`.
    pub fn start_of(file: FileRef) -> Self {
        Self::new(0, 1, 1, file)
    }

    /// Returns the 0-based byte offset from the start of the file.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the 1-based character column within the line.
    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn file(&self) -> &FileRef {
        &self.file
    }
}

impl Ord for Cursor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.file
            .cmp(&other.file)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
