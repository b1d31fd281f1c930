//! Error types for arith-lex.
//!
//! Lexical failures are reported in-band as [`TokenKind::Error`] tokens whose
//! text is one of the fixed messages below. [`LexErrorKind`] is the typed
//! view of that catalog.
//!
//! [`TokenKind::Error`]: crate::TokenKind::Error

use thiserror::Error;

use crate::token::Position;

/// The catalog of lexical failures.
///
/// The `Display` strings are stable and form part of the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// A number was required (after an operator, or after a sign).
    #[error("expected a number")]
    ExpectedNumber,

    /// A number was followed by something that is not an operator or separator.
    #[error("expected an operator")]
    ExpectedOperator,

    /// `0x` or `0X` was not followed by a hexadecimal digit.
    #[error("hexadecimal has no digits")]
    HexadecimalNoDigits,

    /// A hexadecimal fraction was not followed by a `p` exponent.
    #[error("hexadecimal needs exponent")]
    HexadecimalNeedsExponent,

    /// A `p` exponent marker was not followed by a decimal digit.
    #[error("exponent has no digits")]
    ExponentNoDigits,

    /// A leading-zero literal contained `8` or `9`.
    ///
    /// Only produced when [`LexerConfig::strict_octal`] is set.
    ///
    /// [`LexerConfig::strict_octal`]: crate::LexerConfig::strict_octal
    #[error("invalid octal digit")]
    InvalidOctalDigit,

    /// A statement started with a character that cannot begin one.
    #[error("unexpected character")]
    UnexpectedCharacter,
}

impl LexErrorKind {
    /// All error kinds, in catalog order.
    pub const ALL: [LexErrorKind; 7] = [
        LexErrorKind::ExpectedNumber,
        LexErrorKind::ExpectedOperator,
        LexErrorKind::HexadecimalNoDigits,
        LexErrorKind::HexadecimalNeedsExponent,
        LexErrorKind::ExponentNoDigits,
        LexErrorKind::InvalidOctalDigit,
        LexErrorKind::UnexpectedCharacter,
    ];

    /// Returns the catalog message for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            LexErrorKind::ExpectedNumber => "expected a number",
            LexErrorKind::ExpectedOperator => "expected an operator",
            LexErrorKind::HexadecimalNoDigits => "hexadecimal has no digits",
            LexErrorKind::HexadecimalNeedsExponent => "hexadecimal needs exponent",
            LexErrorKind::ExponentNoDigits => "exponent has no digits",
            LexErrorKind::InvalidOctalDigit => "invalid octal digit",
            LexErrorKind::UnexpectedCharacter => "unexpected character",
        }
    }

    /// Looks up the kind whose catalog message is `message`.
    pub fn from_message(message: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.message() == message)
    }
}

/// A lexical failure together with where it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{pos}: {kind}")]
pub struct LexError {
    /// Start position of the token being scanned when the failure was found.
    pub pos: Position,
    /// What went wrong.
    pub kind: LexErrorKind,
}

impl LexError {
    /// Creates a new lexical error.
    pub fn new(pos: Position, kind: LexErrorKind) -> Self {
        Self { pos, kind }
    }
}

/// Error type for token stream operations.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The producer thread panicked before closing the stream.
    #[error("token producer panicked: {0}")]
    ProducerPanicked(String),
}

/// Result type alias for lexing a whole input.
pub type LexResult<T> = std::result::Result<T, LexError>;
