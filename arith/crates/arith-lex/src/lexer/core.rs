//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the state dispatch loop and
//! the `start` state.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::charset::is_number_start;
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::lexer::State;
use crate::token::{Position, Token, TokenKind};

/// Lexer for arithmetic expression input.
///
/// The lexer advances its state machine exactly one token per call to
/// [`Lexer::next_token`]. A scan always ends with exactly one terminal
/// token, [`TokenKind::EndOfFile`] or [`TokenKind::Error`], after which no
/// more tokens are produced.
///
/// # Example
///
/// ```
/// use arith_lex::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("1 + 0x2").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Decimal, TokenKind::Operator, TokenKind::Hexadecimal, TokenKind::EndOfFile]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Character cursor for input traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Reject `8`/`9` in leading-zero literals instead of reclassifying.
    pub(crate) strict_octal: bool,

    /// State to run on the next step.
    state: State,

    /// Token produced by the last step, not yet handed out.
    pending: Option<Token>,

    /// The failure that ended the scan, if any.
    error: Option<LexError>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, &LexerConfig::default())
    }

    /// Creates a new lexer for the given input and configuration.
    pub fn with_config(source: &'a str, config: &LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            strict_octal: config.strict_octal,
            state: State::Start,
            pending: None,
            error: None,
        }
    }

    /// Returns the next token, or `None` once the terminal token was returned.
    ///
    /// # Example
    ///
    /// ```
    /// use arith_lex::{Lexer, Position, TokenKind};
    ///
    /// let mut lexer = Lexer::new("");
    /// let eof = lexer.next_token().unwrap();
    /// assert_eq!(eof.kind, TokenKind::EndOfFile);
    /// assert_eq!(eof.pos, Position::new(1, 1));
    /// assert_eq!(lexer.next_token(), None);
    /// ```
    pub fn next_token(&mut self) -> Option<Token> {
        while self.state != State::Done {
            let next = self.step(self.state);
            trace!(target: "arith_lex", from = ?self.state, to = ?next, "transition");
            self.state = next;

            if let Some(token) = self.pending.take() {
                return Some(token);
            }
        }
        None
    }

    /// Runs one state and returns the state to run next.
    fn step(&mut self, state: State) -> State {
        match state {
            State::Start => self.lex_start(),
            State::Number => self.lex_number(),
            State::Decimal => self.lex_decimal(),
            State::DecimalFloat => self.lex_decimal_float(),
            State::Octal => self.lex_octal(),
            State::Hexadecimal => self.lex_hexadecimal(),
            State::Operator => self.lex_operator(),
            State::Done => State::Done,
        }
    }

    /// Handles the `start` state.
    ///
    /// Skips blanks, then dispatches on the next character: a sign or digit
    /// begins a number, `'\n'` and `;` are statement separators, and end of
    /// input finishes the scan.
    pub(crate) fn lex_start(&mut self) -> State {
        self.cursor.skip_whitespace();

        match self.cursor.next() {
            Some(c) if is_number_start(c) => {
                self.cursor.prev();
                State::Number
            },
            Some('\n' | ';') => {
                self.emit(TokenKind::EndOfLine);
                State::Start
            },
            None => {
                self.emit(TokenKind::EndOfFile);
                State::Done
            },
            Some(_) => {
                self.cursor.prev();
                self.fail(LexErrorKind::UnexpectedCharacter)
            },
        }
    }

    /// Emits the pending text as a token of `kind`.
    pub(crate) fn emit(&mut self, kind: TokenKind) {
        debug_assert!(self.pending.is_none(), "one token per step");
        self.pending = Some(self.cursor.emit(kind));
    }

    /// Emits an error token at the start of the pending text and ends the scan.
    pub(crate) fn fail(&mut self, kind: LexErrorKind) -> State {
        let error = LexError::new(self.cursor.start_position(), kind);
        debug!(target: "arith_lex", %error, "lexing failed");

        self.pending = Some(Token::new(error.pos, TokenKind::Error, kind.message()));
        self.error = Some(error);
        State::Done
    }

    /// Returns the error that ended the scan, if it ended with one.
    pub fn error(&self) -> Option<LexError> {
        self.error
    }

    /// Returns true once the terminal token has been produced.
    pub fn is_finished(&self) -> bool {
        self.state == State::Done && self.pending.is_none()
    }

    /// Returns the position of the next character to scan.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl<'a> FusedIterator for Lexer<'a> {}

/// Lexes the whole input.
///
/// On success the returned tokens end with the [`TokenKind::EndOfFile`]
/// token. If the scan ends with an error token, that error is returned
/// instead and the tokens before it are discarded.
///
/// # Example
///
/// ```
/// use arith_lex::{tokenize, LexErrorKind, Position};
///
/// let tokens = tokenize("1 * 2").unwrap();
/// assert_eq!(tokens.len(), 4);
///
/// let err = tokenize("1 +").unwrap_err();
/// assert_eq!(err.kind, LexErrorKind::ExpectedNumber);
/// assert_eq!(err.pos, Position::new(4, 1));
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    for token in lexer.by_ref() {
        if token.kind == TokenKind::Error {
            break;
        }
        tokens.push(token);
    }

    match lexer.error() {
        Some(error) => Err(error),
        None => Ok(tokens),
    }
}
