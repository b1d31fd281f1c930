//! Edge case tests for arith-lex

#[cfg(test)]
mod tests {
    use crate::{LexerConfig, Lexer, Position, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    fn last(source: &str) -> Token {
        lex_all(source).pop().unwrap()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_newline() {
        assert_eq!(
            lex_all("\n"),
            vec![
                Token::new(Position::new(1, 1), TokenKind::EndOfLine, "\n"),
                Token::new(Position::new(1, 2), TokenKind::EndOfFile, ""),
            ]
        );
    }

    #[test]
    fn test_edge_newline_then_semicolon() {
        let t = lex_all("\n;");
        assert_eq!(t[0], Token::new(Position::new(1, 1), TokenKind::EndOfLine, "\n"));
        assert_eq!(t[1], Token::new(Position::new(1, 2), TokenKind::EndOfLine, ";"));
    }

    #[test]
    fn test_edge_blank_lines_count() {
        let t = last("\n\n\n   ");
        assert_eq!(t, Token::new(Position::new(4, 4), TokenKind::EndOfFile, ""));
    }

    #[test]
    fn test_edge_long_number() {
        let digits = "9".repeat(10_000);
        let t = lex_all(&digits);
        assert_eq!(t[0].text, digits);
        assert_eq!(t[1].pos, Position::new(10_001, 1));
    }

    #[test]
    fn test_edge_long_expression() {
        let source = vec!["1"; 500].join(" + ");
        let t = lex_all(&source);
        assert_eq!(t.len(), 500 + 499 + 1);
        assert!(t.iter().all(|t| t.kind != TokenKind::Error));
    }

    #[test]
    fn test_edge_multibyte_columns() {
        // U+3000 IDEOGRAPHIC SPACE is whitespace three bytes wide.
        let t = lex_all("\u{3000}1 *\u{3000}2");
        assert_eq!(t[0], Token::new(Position::new(2, 1), TokenKind::Decimal, "1"));
        assert_eq!(t[1], Token::new(Position::new(4, 1), TokenKind::Operator, "*"));
        assert_eq!(t[2], Token::new(Position::new(6, 1), TokenKind::Decimal, "2"));
    }

    #[test]
    fn test_edge_multibyte_unexpected() {
        assert_eq!(
            last("1;é"),
            Token::new(Position::new(3, 1), TokenKind::Error, "unexpected character")
        );
    }

    #[test]
    fn test_edge_unexpected_after_sign() {
        assert_eq!(
            last("-x"),
            Token::new(Position::new(1, 1), TokenKind::Error, "expected a number")
        );
    }

    #[test]
    fn test_edge_double_point() {
        let t = lex_all("1..2");
        assert_eq!(t[0], Token::new(Position::new(1, 1), TokenKind::Decimal, "1."));
        assert_eq!(
            t[1],
            Token::new(Position::new(3, 1), TokenKind::Error, "expected an operator")
        );
    }

    #[test]
    fn test_edge_octal_followed_by_point() {
        let t = lex_all("017.5");
        assert_eq!(t[0], Token::new(Position::new(1, 1), TokenKind::Octal, "017"));
        assert_eq!(t[1].text, "expected an operator");
    }

    #[test]
    fn test_edge_decimal_exponent_not_supported() {
        let t = lex_all("1e5");
        assert_eq!(t[0].text, "1");
        assert_eq!(
            t[1],
            Token::new(Position::new(2, 1), TokenKind::Error, "expected an operator")
        );
    }

    #[test]
    fn test_edge_hex_letters_after_exponent() {
        let t = lex_all("0x1p2f");
        assert_eq!(t[0].text, "0x1p2");
        assert_eq!(t[1].text, "expected an operator");
    }

    #[test]
    fn test_edge_hex_e_is_a_digit() {
        let t = lex_all("0x1e+2");
        assert_eq!(t[0], Token::new(Position::new(1, 1), TokenKind::Hexadecimal, "0x1e"));
        assert_eq!(t[1].kind, TokenKind::Operator);
        assert_eq!(t[2].text, "2");
    }

    #[test]
    fn test_edge_operator_at_line_start() {
        // A leading operator is read as the sign of a number.
        assert_eq!(
            last("*1"),
            Token::new(Position::new(1, 1), TokenKind::Error, "unexpected character")
        );
        assert_eq!(lex_all("+1")[0].text, "+1");
    }

    #[test]
    fn test_edge_error_is_last_token() {
        for source in ["0x", "0x1.", "0x1p", "1+", "1 2", "(", "1;2 3;4"] {
            let t = lex_all(source);
            let errors = t.iter().filter(|t| t.kind == TokenKind::Error).count();
            assert_eq!(errors, 1, "{source:?}");
            assert_eq!(t.last().map(|t| t.kind), Some(TokenKind::Error), "{source:?}");
            assert!(t.iter().all(|t| t.kind != TokenKind::EndOfFile), "{source:?}");
        }
    }

    #[test]
    fn test_edge_positions_monotonic() {
        let t = lex_all("1 + 2\n  3 * 4; 5\n\n6");
        for pair in t.windows(2) {
            assert!(pair[0].pos < pair[1].pos, "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_edge_strict_octal_message_in_stream() {
        let config = LexerConfig::default().with_strict_octal(true);
        let t: Vec<Token> = Lexer::with_config("1 + 0128", &config).collect();
        assert_eq!(
            t.last(),
            Some(&Token::new(Position::new(5, 1), TokenKind::Error, "invalid octal digit"))
        );
    }
}
