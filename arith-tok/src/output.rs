//! Token output formats.

use std::io::Write;

use arith_lex::Token;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How tokens are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `column:line (Kind) "text"`, one token per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Serialized shape of a token in JSON output.
#[derive(Debug, Serialize)]
struct JsonToken<'a> {
    column: u32,
    line: u32,
    kind: &'static str,
    text: &'a str,
}

impl<'a> From<&'a Token> for JsonToken<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            column: token.pos.column,
            line: token.pos.line,
            kind: token.kind.as_str(),
            text: &token.text,
        }
    }
}

/// Writes one token followed by a newline.
pub fn write_token<W: Write>(out: &mut W, token: &Token, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{token}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &JsonToken::from(token))?;
            writeln!(out)?;
        }
    }
    Ok(())
}
