use crate::fragment::Construct;
use crate::fragment::ConstructKind;
use crate::token::Token;
use crate::Cursor;

/// A node of the fragment tree: a terminal token or a non-terminal
/// construct.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Fragment<'src> {
    Token(Token<'src>),
    Construct(Construct<'src>),
}

impl<'src> Fragment<'src> {
    pub fn begin(&self) -> &Cursor {
        match self {
            Fragment::Token(token) => &token.begin,
            Fragment::Construct(construct) => construct.begin(),
        }
    }

    pub fn end(&self) -> &Cursor {
        match self {
            Fragment::Token(token) => &token.end,
            Fragment::Construct(construct) => construct.end(),
        }
    }

    pub fn source_text(&self) -> &'src str {
        match self {
            Fragment::Token(token) => token.source_text,
            Fragment::Construct(construct) => construct.source_text(),
        }
    }

    pub fn as_token(&self) -> Option<&Token<'src>> {
        match self {
            Fragment::Token(token) => Some(token),
            Fragment::Construct(_) => None,
        }
    }

    pub fn as_construct(&self) -> Option<&Construct<'src>> {
        match self {
            Fragment::Token(_) => None,
            Fragment::Construct(construct) => Some(construct),
        }
    }

    /// Returns the construct kind, or `None` for a token.
    pub fn construct_kind(&self) -> Option<ConstructKind> {
        self.as_construct().map(Construct::kind)
    }

    /// Collects every token under this fragment in source order.
    pub fn tokens(&self) -> Vec<&Token<'src>> {
        let mut tokens = vec![];
        let mut stack = vec![self];
        while let Some(fragment) = stack.pop() {
            match fragment {
                Fragment::Token(token) => tokens.push(token),
                Fragment::Construct(construct) => {
                    stack.extend(construct.children().iter().rev());
                },
            }
        }
        tokens
    }
}

impl<'src> From<Token<'src>> for Fragment<'src> {
    fn from(token: Token<'src>) -> Self {
        Fragment::Token(token)
    }
}

impl<'src> From<Construct<'src>> for Fragment<'src> {
    fn from(construct: Construct<'src>) -> Self {
        Fragment::Construct(construct)
    }
}
