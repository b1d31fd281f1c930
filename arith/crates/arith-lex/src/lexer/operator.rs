//! Operator lexing.
//!
//! This module handles the state between two numbers.

use crate::charset::OPERATORS;
use crate::error::LexErrorKind;
use crate::lexer::State;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles the `operator` state, entered after every number.
    ///
    /// An operator must be followed by another number. A separator or end
    /// of input is left in place for the `start` state.
    pub(crate) fn lex_operator(&mut self) -> State {
        self.cursor.skip_whitespace();

        if self.cursor.consume_one_of(OPERATORS) {
            self.emit(TokenKind::Operator);
            self.cursor.skip_whitespace();
            return State::Number;
        }

        match self.cursor.peek() {
            None | Some('\n' | ';') => State::Start,
            Some(_) => self.fail(LexErrorKind::ExpectedOperator),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Position, Token, TokenKind};
    use crate::Lexer;

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_all_operators() {
        for op in ["+", "-", "*", "/"] {
            let source = format!("1{op}2");
            let tokens = lex_all(&source);
            assert_eq!(tokens[1], Token::new(Position::new(2, 1), TokenKind::Operator, op));
            assert_eq!(tokens[2], Token::new(Position::new(3, 1), TokenKind::Decimal, "2"));
        }
    }

    #[test]
    fn test_operator_then_signed_number() {
        let tokens = lex_all("1 - -2");
        assert_eq!(tokens[1], Token::new(Position::new(3, 1), TokenKind::Operator, "-"));
        assert_eq!(tokens[2], Token::new(Position::new(5, 1), TokenKind::Decimal, "-2"));
    }

    #[test]
    fn test_adjacent_sign_is_part_of_number() {
        assert_eq!(
            kinds("1+-2"),
            [TokenKind::Decimal, TokenKind::Operator, TokenKind::Decimal, TokenKind::EndOfFile]
        );
    }

    #[test]
    fn test_trailing_operator() {
        assert_eq!(
            lex_all("1+"),
            vec![
                Token::new(Position::new(1, 1), TokenKind::Decimal, "1"),
                Token::new(Position::new(2, 1), TokenKind::Operator, "+"),
                Token::new(Position::new(3, 1), TokenKind::Error, "expected a number"),
            ]
        );
    }

    #[test]
    fn test_operator_before_newline() {
        let tokens = lex_all("1 *\n2");
        assert_eq!(
            tokens.last(),
            Some(&Token::new(Position::new(4, 1), TokenKind::Error, "expected a number"))
        );
    }

    #[test]
    fn test_double_operator() {
        let tokens = lex_all("1 * * 2");
        assert_eq!(
            tokens.last(),
            Some(&Token::new(Position::new(5, 1), TokenKind::Error, "expected a number"))
        );
    }

    #[test]
    fn test_adjacent_numbers() {
        let tokens = lex_all("1 2");
        assert_eq!(
            tokens.last(),
            Some(&Token::new(Position::new(3, 1), TokenKind::Error, "expected an operator"))
        );
    }

    #[test]
    fn test_number_then_garbage() {
        let tokens = lex_all("0x1g");
        assert_eq!(
            tokens,
            vec![
                Token::new(Position::new(1, 1), TokenKind::Hexadecimal, "0x1"),
                Token::new(Position::new(4, 1), TokenKind::Error, "expected an operator"),
            ]
        );
    }

    #[test]
    fn test_separators_after_number() {
        assert_eq!(
            kinds("1;2\n3"),
            [
                TokenKind::Decimal,
                TokenKind::EndOfLine,
                TokenKind::Decimal,
                TokenKind::EndOfLine,
                TokenKind::Decimal,
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_whitespace_before_separator() {
        let tokens = lex_all("1 \t;");
        assert_eq!(tokens[1], Token::new(Position::new(4, 1), TokenKind::EndOfLine, ";"));
    }
}
