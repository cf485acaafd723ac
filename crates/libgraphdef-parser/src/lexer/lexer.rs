//! A lexer that classifies graphdef source text into [`Token`]s on demand.
//!
//! Tokens borrow their text directly from the source string. Lookahead is
//! done by forking: [`Lexer::peek_fork()`] returns an independent copy of the
//! lexer that can be advanced freely without moving the original.
//!
//! # Usage
//!
//! ```rust
//! use libgraphdef_parser::lexer::Lexer;
//! use libgraphdef_parser::token::TokenKind;
//! use libgraphdef_parser::FileRef;
//!
//! let mut lexer = Lexer::new("query getFoo []Foo", FileRef::new("a.gdef"));
//! let mut kinds = vec![];
//! while let Some(token) = lexer.next_token().unwrap() {
//!     kinds.push(token.kind);
//! }
//! assert_eq!(kinds.len(), 6);
//! assert_eq!(kinds[4], TokenKind::ListMarker);
//! ```

use crate::identifier_shape;
use crate::lexer::LexError;
use crate::lexer::LexErrorKind;
use crate::token::Token;
use crate::token::TokenKind;
use crate::Cursor;
use crate::FileRef;

/// Converts graphdef source text into a stream of classified [`Token`]s.
///
/// See module documentation for details.
#[derive(Clone, Debug)]
pub struct Lexer<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// The logical file the source text belongs to.
    file: FileRef,

    /// Current byte offset from the start of `source`.
    ///
    /// The remaining text to lex is `&source[curr_index..]`.
    curr_index: usize,

    /// Current 1-based line number.
    curr_line: u32,

    /// Current 1-based character column.
    curr_column: u32,

    /// Set once the end of input was reached or an error was returned.
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, file: FileRef) -> Self {
        Self {
            source,
            file,
            curr_index: 0,
            curr_line: 1,
            curr_column: 1,
            finished: false,
        }
    }

    /// Returns the cursor of the next byte to be lexed.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(
            self.curr_index as u32,
            self.curr_line,
            self.curr_column,
            self.file.clone(),
        )
    }

    pub fn file(&self) -> &FileRef {
        &self.file
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns an independent lexer positioned exactly where this one is.
    ///
    /// Tokens consumed from the fork do not advance `self`, which makes this
    /// the building block for arbitrary lookahead.
    pub fn peek_fork(&self) -> Self {
        self.clone()
    }

    /// Returns `true` if no input remains.
    pub fn is_at_end(&self) -> bool {
        self.finished || self.curr_index >= self.source.len()
    }

    /// Returns the next token, or `None` at the end of input.
    ///
    /// After returning an error the lexer is exhausted: every further call
    /// returns `Ok(None)`.
    pub fn next_token(&mut self) -> Result<Option<Token<'src>>, LexError> {
        if self.finished {
            return Ok(None);
        }

        let result = self.lex_token();
        match &result {
            Ok(None) | Err(_) => self.finished = true,
            Ok(Some(_)) => (),
        }
        result
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn peek_byte(&self) -> Option<u8> {
        self.peek_byte_nth(0)
    }

    fn peek_byte_nth(&self, n: usize) -> Option<u8> {
        self.source.as_bytes().get(self.curr_index + n).copied()
    }

    /// Consumes `len` bytes that are known to contain no line break.
    fn advance(&mut self, len: usize) {
        self.curr_index += len;
        self.curr_column += len as u32;
    }

    /// Consumes a line break of `len` bytes (`\n` or `\r\n`).
    fn advance_line_break(&mut self, len: usize) {
        self.curr_index += len;
        self.curr_line += 1;
        self.curr_column = 1;
    }

    fn make_token(
        &self,
        kind: TokenKind,
        begin: Cursor,
    ) -> Token<'src> {
        let text = &self.source[begin.index() as usize..self.curr_index];
        Token::new(kind, text, begin, self.cursor())
    }

    // =========================================================================
    // Lexer main dispatch
    // =========================================================================

    fn lex_token(&mut self) -> Result<Option<Token<'src>>, LexError> {
        let begin = self.cursor();
        let byte = match self.peek_byte() {
            None => return Ok(None),
            Some(byte) => byte,
        };

        let kind = match byte {
            b' ' | b'\t' | b'\n' | b'\r' => return self.lex_space(begin).map(Some),
            b'[' => return self.lex_list_marker(begin).map(Some),
            b',' => TokenKind::Comma,
            b'{' => TokenKind::CurlyBraceOpen,
            b'}' => TokenKind::CurlyBraceClose,
            b'.' => TokenKind::Dot,
            b'=' => TokenKind::Equals,
            b'(' => TokenKind::ParenOpen,
            b')' => TokenKind::ParenClose,
            b'?' => TokenKind::QuestionMark,
            byte if identifier_shape::is_word_start(byte) => {
                return Ok(Some(self.lex_word(begin)));
            },
            _ => return Err(self.invalid_character_error(begin)),
        };

        self.advance(1);
        Ok(Some(self.make_token(kind, begin)))
    }

    // =========================================================================
    // Whitespace handling
    // =========================================================================

    /// Coalesces a run of spaces, tabs and line breaks into a single
    /// [`TokenKind::Space`] token.
    ///
    /// Both `\n` and `\r\n` count as one line break. A `\r` that is not
    /// followed by `\n` is an error.
    fn lex_space(&mut self, begin: Cursor) -> Result<Token<'src>, LexError> {
        while let Some(byte) = self.peek_byte() {
            match byte {
                b' ' | b'\t' => self.advance(1),
                b'\n' => self.advance_line_break(1),
                b'\r' => {
                    if self.peek_byte_nth(1) != Some(b'\n') {
                        return Err(LexError::new(
                            LexErrorKind::BareCarriageReturn,
                            self.cursor(),
                        ));
                    }
                    self.advance_line_break(2);
                },
                _ => break,
            }
        }
        Ok(self.make_token(TokenKind::Space, begin))
    }

    // =========================================================================
    // Composite symbols
    // =========================================================================

    /// Lexes the `[]` list marker. The two brackets must be adjacent.
    fn lex_list_marker(
        &mut self,
        begin: Cursor,
    ) -> Result<Token<'src>, LexError> {
        if self.peek_byte_nth(1) != Some(b']') {
            return Err(LexError::new(
                LexErrorKind::UnterminatedListMarker,
                begin,
            ));
        }
        self.advance(2);
        Ok(self.make_token(TokenKind::ListMarker, begin))
    }

    // =========================================================================
    // Words
    // =========================================================================

    /// Lexes a keyword or identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    fn lex_word(&mut self, begin: Cursor) -> Token<'src> {
        let mut len = 1;
        while let Some(byte) = self.peek_byte_nth(len) {
            if !identifier_shape::is_word_continue(byte) {
                break;
            }
            len += 1;
        }
        let word = &self.source[self.curr_index..self.curr_index + len];
        self.advance(len);
        self.make_token(identifier_shape::classify_word(word), begin)
    }

    // =========================================================================
    // Invalid character handling
    // =========================================================================

    fn invalid_character_error(&self, begin: Cursor) -> LexError {
        let ch = self.source[self.curr_index..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        LexError::new(LexErrorKind::UnexpectedCharacter(ch), begin)
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
