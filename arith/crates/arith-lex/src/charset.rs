//! Character classes used by the scanner.
//!
//! Each class is a string of its members so it can be passed straight to
//! [`Cursor::consume_one_of`](crate::cursor::Cursor::consume_one_of) and
//! [`Cursor::consume_all`](crate::cursor::Cursor::consume_all).

/// Digits valid in an octal literal.
pub const OCTAL_DIGITS: &str = "01234567";

/// Decimal digits.
pub const DIGITS: &str = "0123456789";

/// Hexadecimal digits, either case.
pub const HEXADECIMAL_DIGITS: &str = "0123456789ABCDEFabcdef";

/// Signs allowed in front of a number or an exponent.
pub const SIGNS: &str = "+-";

/// Binary operators.
pub const OPERATORS: &str = "+-*/";

/// Second character of the `0x` prefix.
pub const HEXADECIMAL_PREFIX: &str = "Xx";

/// Exponent marker of a hexadecimal float.
pub const HEXADECIMAL_EXPONENT: &str = "Pp";

/// Fractional point.
pub const POINT: &str = ".";

/// Leading digit of octal and hexadecimal literals.
pub const ZERO: &str = "0";

/// Returns true if `c` can start a number.
#[inline]
pub fn is_number_start(c: char) -> bool {
    SIGNS.contains(c) || c.is_ascii_digit()
}

/// Returns true if `c` is skipped between tokens.
///
/// Newlines are statement separators and never skipped.
#[inline]
pub fn is_blank(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}
