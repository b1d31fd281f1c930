//! Lexer configuration.

use serde::{Deserialize, Serialize};

/// Options that change how input is scanned and delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Reject `8` and `9` in leading-zero literals.
    ///
    /// When unset (the default) such literals are reclassified as decimal,
    /// so `0189` is a single `Decimal` token. When set, they fail with
    /// `invalid octal digit`.
    #[serde(default)]
    pub strict_octal: bool,

    /// Capacity of the channel used by [`crate::lex_with`].
    ///
    /// `0` makes it a rendezvous channel: the producer blocks on every token
    /// until the consumer takes it.
    #[serde(default)]
    pub stream_capacity: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            strict_octal: false,
            stream_capacity: 0,
        }
    }
}

impl LexerConfig {
    /// Returns a copy of this config with strict octal validation toggled.
    pub fn with_strict_octal(mut self, strict_octal: bool) -> Self {
        self.strict_octal = strict_octal;
        self
    }

    /// Returns a copy of this config with a different stream capacity.
    pub fn with_stream_capacity(mut self, stream_capacity: usize) -> Self {
        self.stream_capacity = stream_capacity;
        self
    }
}
