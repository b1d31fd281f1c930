//! Lexer module.
//!
//! The scanner is a finite-state machine over a [`Cursor`](crate::cursor::Cursor).
//! The state is an explicit [`State`] tag and each state is handled by one
//! method, split by concern:
//! - `core` - Main Lexer struct, dispatch, and the `start` state
//! - `number` - Numeric literal states
//! - `operator` - The `operator` state between two numbers

mod core;
mod number;
mod operator;

pub use self::core::{tokenize, Lexer};

/// States of the scanner.
///
/// Numbers and operators strictly alternate: every number state moves to
/// [`State::Operator`] and an operator always moves back to [`State::Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Between statements: skips blanks, emits separators and end of input.
    Start,
    /// Optional sign, then picks the literal form from the leading digit.
    Number,
    /// Decimal integer, possibly continuing into a fraction.
    Decimal,
    /// Digits after the fractional point.
    DecimalFloat,
    /// Leading-zero literal.
    Octal,
    /// Literal after a `0x` prefix.
    Hexadecimal,
    /// Expects an operator, a separator, or end of input.
    Operator,
    /// A terminal token has been produced.
    Done,
}
