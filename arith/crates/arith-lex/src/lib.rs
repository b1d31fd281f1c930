//! arith-lex - Lexical Analyzer for arithmetic expressions
//!
//! This crate turns text containing arithmetic expressions into a stream of
//! classified, positioned tokens. It is meant to sit in front of a parser
//! or evaluator, which only needs to pull tokens until a terminal one.
//!
//! # Example Usage
//!
//! ```
//! use arith_lex::{lex, Lexer, Position, TokenKind};
//!
//! // Pull tokens one at a time on the calling thread
//! let mut lexer = Lexer::new("1 + 0x2");
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::Decimal);
//! assert_eq!(first.pos, Position::new(1, 1));
//!
//! // Or let a background producer feed them through a channel
//! for token in lex("1.2; 0. / 0XA * 0023") {
//!     println!("{}", token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and position definitions
//! - [`cursor`] - Character cursor with single-step pushback
//! - [`lexer`] - The scanning state machine
//! - [`stream`] - Background producer and token stream
//! - [`config`] - Lexer configuration
//! - [`error`] - Error catalog
//! - [`charset`] - Character classes
//!
//! # Token Categories
//!
//! ## Numbers
//!
//! Every number may carry a leading `+` or `-`.
//!
//! - **Decimal**: `42`, `1.5`, `1.`, `0.25`, and leading-zero runs with an
//!   `8` or `9` such as `0189`
//! - **Octal**: `017`
//! - **Hexadecimal**: `0xFF`, `0X1.8p3`, `0x1p-2` (a fraction needs an exponent)
//!
//! ## Operators
//!
//! `+`, `-`, `*`, `/`. Numbers and operators strictly alternate.
//!
//! ## Separators
//!
//! - **EndOfLine**: a newline or `;`
//! - **EndOfFile**: end of input
//!
//! ## Errors
//!
//! A lexical error produces a single `Error` token carrying a fixed message
//! and ends the stream. There is no recovery.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod charset;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod stream;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind, LexResult, StreamError};
pub use lexer::{tokenize, Lexer};
pub use stream::{lex, lex_with, TokenStream};
pub use token::{Position, Token, TokenKind};
