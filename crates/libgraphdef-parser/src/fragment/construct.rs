use crate::fragment::ConstructKind;
use crate::fragment::Fragment;
use crate::Cursor;

/// A non-terminal fragment.
///
/// The span of a construct is the union of its children's spans, and its
/// `source_text` is exactly the source slice covered by that span. A
/// construct without children (only possible when parsing was aborted
/// inside it) has an empty span at the position where it started.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Construct<'src> {
    kind: ConstructKind,
    begin: Cursor,
    end: Cursor,
    source_text: &'src str,
    children: Vec<Fragment<'src>>,
}

impl<'src> Construct<'src> {
    pub fn kind(&self) -> ConstructKind {
        self.kind
    }

    pub fn begin(&self) -> &Cursor {
        &self.begin
    }

    pub fn end(&self) -> &Cursor {
        &self.end
    }

    pub fn source_text(&self) -> &'src str {
        self.source_text
    }

    pub fn children(&self) -> &[Fragment<'src>] {
        &self.children
    }

    /// Iterates over the direct children that are constructs of `kind`.
    pub fn child_constructs(
        &self,
        kind: ConstructKind,
    ) -> impl Iterator<Item = &Construct<'src>> {
        self.children
            .iter()
            .filter_map(Fragment::as_construct)
            .filter(move |construct| construct.kind == kind)
    }
}

/// Accumulates the children of a [`Construct`] while it is being parsed.
#[derive(Debug)]
pub struct ConstructBuilder<'src> {
    kind: ConstructKind,
    start: Cursor,
    children: Vec<Fragment<'src>>,
}

impl<'src> ConstructBuilder<'src> {
    /// Starts a construct whose first child will begin at or after `start`.
    pub fn new(kind: ConstructKind, start: Cursor) -> Self {
        Self {
            kind,
            start,
            children: vec![],
        }
    }

    pub fn kind(&self) -> ConstructKind {
        self.kind
    }

    pub fn push(&mut self, fragment: impl Into<Fragment<'src>>) {
        self.children.push(fragment.into());
    }

    pub fn children(&self) -> &[Fragment<'src>] {
        &self.children
    }

    /// Closes the construct, slicing its text out of `source`.
    ///
    /// `source` must be the full text the children were lexed from.
    pub fn finish(self, source: &'src str) -> Construct<'src> {
        let begin = self
            .children
            .first()
            .map(|child| child.begin().clone())
            .unwrap_or_else(|| self.start.clone());
        let end = self
            .children
            .last()
            .map(|child| child.end().clone())
            .unwrap_or_else(|| self.start.clone());
        let source_text = source
            .get(begin.index() as usize..end.index() as usize)
            .unwrap_or_default();

        Construct {
            kind: self.kind,
            begin,
            end,
            source_text,
            children: self.children,
        }
    }
}
