//! Number literal lexing.
//!
//! This module handles the numeric literal states of the scanner.
//!
//! # Number Formats
//!
//! - Decimal: `42`, `-7`, `1.5`, `1.`, `0.25`
//! - Octal: `017` (leading zero, digits `0`-`7` only)
//! - Hexadecimal: `0xFF`, `0X1.8p3`, `0x1p-2`
//!
//! A leading-zero run containing `8` or `9` is reclassified as decimal, so
//! `0189` is a single decimal literal. With strict octal validation it is an
//! error instead. An `8` or `9` directly after the zero is not part of the
//! literal: `08` is the decimal `0` followed by a stray `8`.

use crate::charset::{
    DIGITS, HEXADECIMAL_DIGITS, HEXADECIMAL_EXPONENT, HEXADECIMAL_PREFIX, OCTAL_DIGITS, POINT,
    SIGNS, ZERO,
};
use crate::error::LexErrorKind;
use crate::lexer::State;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles the `number` state.
    ///
    /// Consumes an optional sign and picks the literal form: `0x` leads to
    /// hexadecimal, `0.` to a decimal fraction, any other leading `0` to
    /// octal, and everything else to decimal.
    pub(crate) fn lex_number(&mut self) -> State {
        self.cursor.consume_one_of(SIGNS);

        if !self.cursor.consume_one_of(ZERO) {
            return State::Decimal;
        }

        if self.cursor.consume_one_of(HEXADECIMAL_PREFIX) {
            return State::Hexadecimal;
        }

        if self.cursor.consume_one_of(POINT) {
            return State::DecimalFloat;
        }

        State::Octal
    }

    /// Handles the `decimal` state.
    pub(crate) fn lex_decimal(&mut self) -> State {
        if self.cursor.consume_all(DIGITS) == 0 {
            return self.fail(LexErrorKind::ExpectedNumber);
        }

        if self.cursor.consume_one_of(POINT) {
            return State::DecimalFloat;
        }

        self.emit(TokenKind::Decimal);
        State::Operator
    }

    /// Handles the `decimalFloat` state: the digits after the point, if any.
    pub(crate) fn lex_decimal_float(&mut self) -> State {
        self.cursor.consume_all(DIGITS);
        self.emit(TokenKind::Decimal);
        State::Operator
    }

    /// Handles the `octal` state, entered after a leading `0`.
    ///
    /// A zero with no octal digit after it is the decimal `0`, and whatever
    /// follows is left for the `operator` state. Otherwise the rest of the
    /// digit run is consumed, and the literal is octal unless that run holds
    /// an `8` or `9`.
    pub(crate) fn lex_octal(&mut self) -> State {
        if self.cursor.consume_all(OCTAL_DIGITS) == 0 {
            self.emit(TokenKind::Decimal);
            return State::Operator;
        }

        if self.cursor.consume_all(DIGITS) == 0 {
            self.emit(TokenKind::Octal);
            return State::Operator;
        }

        if self.strict_octal {
            return self.fail(LexErrorKind::InvalidOctalDigit);
        }

        self.emit(TokenKind::Decimal);
        State::Operator
    }

    /// Handles the `hexadecimal` state, entered after the `0x` prefix.
    ///
    /// A fractional part requires a `p` exponent; an exponent takes an
    /// optional sign and at least one decimal digit.
    pub(crate) fn lex_hexadecimal(&mut self) -> State {
        if self.cursor.consume_all(HEXADECIMAL_DIGITS) == 0 {
            return self.fail(LexErrorKind::HexadecimalNoDigits);
        }

        let has_fraction = self.cursor.consume_one_of(POINT);
        if has_fraction {
            self.cursor.consume_all(HEXADECIMAL_DIGITS);
        }

        if !self.cursor.consume_one_of(HEXADECIMAL_EXPONENT) {
            if has_fraction {
                return self.fail(LexErrorKind::HexadecimalNeedsExponent);
            }
            self.emit(TokenKind::Hexadecimal);
            return State::Operator;
        }

        self.cursor.consume_one_of(SIGNS);
        if self.cursor.consume_all(DIGITS) == 0 {
            return self.fail(LexErrorKind::ExponentNoDigits);
        }

        self.emit(TokenKind::Hexadecimal);
        State::Operator
    }
}
