//! Character cursor for traversing lexer input.
//!
//! This module provides the `Cursor` struct which reads the input one
//! character at a time, tracks the start of the token being scanned, and
//! keeps the line/column of both. It can undo exactly one `next()` call,
//! which is all the lookahead the grammar needs.

use tracing::trace;

use crate::charset::is_blank;
use crate::token::{Position, Token, TokenKind};

/// A cursor over the lexer input with single-step pushback.
///
/// The text between the token start and the read position is the pending
/// token; [`Cursor::emit`] turns it into a [`Token`] and [`Cursor::skip`]
/// throws it away.
///
/// # Example
///
/// ```
/// use arith_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("12+");
/// assert_eq!(cursor.next(), Some('1'));
/// assert_eq!(cursor.next(), Some('2'));
/// assert_eq!(cursor.pending(), "12");
/// cursor.prev();
/// assert_eq!(cursor.pending(), "1");
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The input text being traversed.
    source: &'a str,

    /// Byte offset where the pending token starts.
    start: usize,

    /// Byte offset of the next character to read.
    index: usize,

    /// UTF-8 width of the last character read, 0 after end of input or `prev`.
    width: usize,

    /// Position where the pending token starts.
    start_pos: Position,

    /// Position of the next character to read.
    index_pos: Position,

    /// Value of `index_pos` before the last `next()`.
    last_pos: Position,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            index: 0,
            width: 0,
            start_pos: Position::START,
            index_pos: Position::START,
            last_pos: Position::START,
        }
    }

    /// Reads the next character and advances past it.
    ///
    /// Returns `None` at end of input. Consuming `'\n'` moves the read
    /// position to column 1 of the following line.
    ///
    /// # Example
    ///
    /// ```
    /// use arith_lex::cursor::Cursor;
    /// use arith_lex::Position;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.next();
    /// assert_eq!(cursor.position(), Position::new(2, 1));
    /// cursor.next();
    /// assert_eq!(cursor.position(), Position::new(1, 2));
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        self.last_pos = self.index_pos;

        let Some(c) = self.source[self.index..].chars().next() else {
            self.width = 0;
            return None;
        };

        self.width = c.len_utf8();
        self.index += self.width;
        if c == '\n' {
            self.index_pos.column = 1;
            self.index_pos.line += 1;
        } else {
            self.index_pos.column += 1;
        }
        Some(c)
    }

    /// Undoes the last call to [`Cursor::next`].
    ///
    /// Only one step of pushback is kept: a second `prev()` without an
    /// intervening `next()` does nothing.
    pub fn prev(&mut self) {
        self.index -= self.width;
        self.index_pos = self.last_pos;
        self.width = 0;
    }

    /// Returns the next character without consuming it.
    ///
    /// # Example
    ///
    /// ```
    /// use arith_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("x");
    /// assert_eq!(cursor.peek(), Some('x'));
    /// assert_eq!(cursor.next(), Some('x'));
    /// assert_eq!(cursor.peek(), None);
    /// ```
    pub fn peek(&mut self) -> Option<char> {
        let c = self.next();
        self.prev();
        c
    }

    /// Drops the pending text: the read position becomes the token start.
    pub fn skip(&mut self) {
        self.start = self.index;
        self.start_pos = self.index_pos;
    }

    /// Consumes the next character if it is one of `set`.
    ///
    /// # Example
    ///
    /// ```
    /// use arith_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("x1");
    /// assert!(!cursor.consume_one_of("0123456789"));
    /// assert!(cursor.consume_one_of("xX"));
    /// assert!(cursor.consume_one_of("0123456789"));
    /// assert!(!cursor.consume_one_of("0123456789"));
    /// ```
    pub fn consume_one_of(&mut self, set: &str) -> bool {
        match self.next() {
            Some(c) if set.contains(c) => true,
            _ => {
                self.prev();
                false
            },
        }
    }

    /// Consumes characters for as long as they are in `set`.
    ///
    /// Returns the number of characters consumed.
    pub fn consume_all(&mut self, set: &str) -> usize {
        let mut count = 0;
        while self.consume_one_of(set) {
            count += 1;
        }
        count
    }

    /// Skips whitespace other than `'\n'`.
    ///
    /// Each skipped character is dropped from the pending text.
    pub fn skip_whitespace(&mut self) {
        loop {
            match self.next() {
                Some(c) if is_blank(c) => self.skip(),
                _ => {
                    self.prev();
                    return;
                },
            }
        }
    }

    /// Produces a token of `kind` from the pending text and starts a new one.
    ///
    /// # Example
    ///
    /// ```
    /// use arith_lex::cursor::Cursor;
    /// use arith_lex::{Position, TokenKind};
    ///
    /// let mut cursor = Cursor::new("7*");
    /// cursor.next();
    /// let token = cursor.emit(TokenKind::Decimal);
    /// assert_eq!(token.text, "7");
    /// assert_eq!(cursor.start_position(), Position::new(2, 1));
    /// ```
    pub fn emit(&mut self, kind: TokenKind) -> Token {
        let token = Token::new(self.start_pos, kind, self.pending());
        trace!(target: "arith_lex", token = %token, "emit");
        self.skip();
        token
    }

    /// Returns the text between the token start and the read position.
    pub fn pending(&self) -> &'a str {
        &self.source[self.start..self.index]
    }

    /// Returns the position where the pending token starts.
    pub fn start_position(&self) -> Position {
        self.start_pos
    }

    /// Returns the position of the next character to read.
    pub fn position(&self) -> Position {
        self.index_pos
    }

    /// Returns the byte offset of the next character to read.
    pub fn offset(&self) -> usize {
        self.index
    }

    /// Returns true if every character has been read.
    pub fn is_at_end(&self) -> bool {
        self.index >= self.source.len()
    }
}
