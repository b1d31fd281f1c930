//! Error handling module for the arith-tok CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use arith_lex::{LexError, StreamError};
use thiserror::Error;

/// Main error type for the arith-tok CLI application.
#[derive(Error, Debug)]
pub enum TokError {
    /// Error when the configuration cannot be found or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The token stream ended with an error token.
    #[error("{0}")]
    Lex(#[from] LexError),

    /// The token producer thread failed.
    #[error("Stream error: {0}")]
    Stream(#[from] StreamError),
}

/// Result type alias using TokError.
pub type Result<T> = std::result::Result<T, TokError>;
