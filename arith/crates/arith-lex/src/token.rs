//! Token definitions.
//!
//! A [`Token`] is a classified, positioned slice of the input. Tokens own
//! their text so they can be handed across the producer thread of
//! [`crate::stream`] without borrowing the input.

use std::cmp::Ordering;
use std::fmt;

use crate::error::LexErrorKind;

/// A 1-indexed `(column, line)` pair.
///
/// Columns count characters, not bytes. Positions order by line first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column number (1-based, in characters).
    pub column: u32,
    /// Line number (1-based).
    pub line: u32,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Position = Position { column: 1, line: 1 };

    /// Creates a position from a column and a line.
    pub const fn new(column: u32, line: u32) -> Self {
        Self { column, line }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.line, self.column).cmp(&(other.line, other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column, self.line)
    }
}

/// The class of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Always the last token of a successful scan.
    EndOfFile,
    /// Statement separator: a newline or a `;`.
    EndOfLine,
    /// Lexical failure. The token text holds the error message.
    Error,
    /// Decimal literal, including `1.`, `0.5` and octal-looking runs
    /// containing `8` or `9`.
    Decimal,
    /// Hexadecimal literal with optional fraction and `p` exponent.
    Hexadecimal,
    /// Octal literal: a leading `0` followed by digits `0`-`7`.
    Octal,
    /// One of `+ - * /`.
    Operator,
}

impl TokenKind {
    /// Returns the name used in the textual token representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EndOfFile => "EndOfFile",
            TokenKind::EndOfLine => "EndOfLine",
            TokenKind::Error => "Error",
            TokenKind::Decimal => "Decimal",
            TokenKind::Hexadecimal => "Hexadecimal",
            TokenKind::Octal => "Octal",
            TokenKind::Operator => "Operator",
        }
    }

    /// Returns true for the numeric literal kinds.
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            TokenKind::Decimal | TokenKind::Hexadecimal | TokenKind::Octal
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token produced by the lexer.
///
/// `text` is the exact source slice the token was scanned from, sign and
/// prefix included. For [`TokenKind::Error`] it is the error message and for
/// [`TokenKind::EndOfFile`] it is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Position of the first character of the token.
    pub pos: Position,
    /// Token class.
    pub kind: TokenKind,
    /// Source text, or the message of an error token.
    pub text: String,
}

impl Token {
    /// Creates a new token.
    pub fn new(pos: Position, kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            pos,
            kind,
            text: text.into(),
        }
    }

    /// Returns true if no token can follow this one.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfFile | TokenKind::Error)
    }

    /// Returns the error kind carried by an [`TokenKind::Error`] token.
    ///
    /// Returns `None` for every other kind.
    pub fn error_kind(&self) -> Option<LexErrorKind> {
        if self.kind != TokenKind::Error {
            return None;
        }
        LexErrorKind::from_message(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.kind {
            TokenKind::EndOfFile => "EOF",
            _ => self.text.as_str(),
        };
        write!(f, "{} ({}) {:?}", self.pos, self.kind, text)
    }
}
