//! arith-tok - dump the token stream of arithmetic expression input.
//!
//! This is the main entry point for the arith-tok CLI application.
//! It uses clap for argument parsing, feeds the input through the
//! channel-backed lexer and prints one token per line.

mod config;
mod error;
mod output;

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use arith_lex::{lex_with, LexError, LexerConfig, TokenKind};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use error::{Result, TokError};
use output::{write_token, OutputFormat};

/// arith-tok - print the tokens of arithmetic expressions
///
/// Reads FILE (or standard input) and prints every token the lexer
/// produces. Exits with a non-zero status when lexing fails.
#[derive(Parser, Debug)]
#[command(name = "arith-tok")]
#[command(author = "Arith Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the token stream of arithmetic expressions", long_about = None)]
struct Cli {
    /// Input file; standard input when absent or `-`
    file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Reject 8 and 9 in leading-zero literals instead of reading them as decimal
    #[arg(long)]
    strict_octal: bool,

    /// Token channel capacity (0 hands over one token at a time)
    #[arg(short, long, value_name = "N")]
    buffer: Option<usize>,

    /// Enable verbose output
    #[arg(short, long, env = "ARITH_TOK_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "ARITH_TOK_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "ARITH_TOK_NO_COLOR")]
    no_color: bool,
}

/// Settings after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    format: OutputFormat,
    verbose: bool,
    lexer: LexerConfig,
}

impl Settings {
    fn merge(cli: &Cli, config: Config) -> Self {
        let mut lexer = config.lexer;
        if cli.strict_octal {
            lexer.strict_octal = true;
        }
        if let Some(capacity) = cli.buffer {
            lexer.stream_capacity = capacity;
        }

        Self {
            format: cli.format.unwrap_or(config.format),
            verbose: cli.verbose || config.verbose,
            lexer,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Loads settings, lexes the input and writes the tokens to stdout.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::merge(&cli, config);

    init_logging(settings.verbose, cli.no_color)?;
    debug!(?settings, "configuration loaded");

    let source = read_input(cli.file.as_deref())?;
    debug!(bytes = source.len(), "input read");

    let mut stream = lex_with(source, &settings.lexer);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failure = None;

    while let Some(token) = stream.next_token() {
        write_token(&mut out, &token, settings.format)?;
        if token.kind == TokenKind::Error {
            failure = token.error_kind().map(|kind| LexError::new(token.pos, kind));
        }
    }
    out.flush()?;
    stream.cancel()?;

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Initialize the logging system.
///
/// Logs are written to stderr so they never mix with the token output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| TokError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Read the whole input, from stdin when no file (or `-`) is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["arith-tok"]);
        assert_eq!(cli.file, None);
        assert_eq!(cli.format, None);
        assert!(!cli.strict_octal);
        assert_eq!(cli.buffer, None);
    }

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::parse_from(["arith-tok", "input.txt"]);
        assert_eq!(cli.file, Some(PathBuf::from("input.txt")));
    }

    #[test]
    fn test_cli_parse_format() {
        let cli = Cli::parse_from(["arith-tok", "--format", "json"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["arith-tok", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_cli_parse_lexer_flags() {
        let cli = Cli::parse_from(["arith-tok", "--strict-octal", "--buffer", "8"]);
        assert!(cli.strict_octal);
        assert_eq!(cli.buffer, Some(8));
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "arith-tok",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/arith-tok.toml",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/arith-tok.toml")));
    }

    #[test]
    fn test_settings_use_config_values() {
        let cli = Cli::parse_from(["arith-tok"]);
        let config = Config {
            verbose: true,
            format: OutputFormat::Json,
            lexer: LexerConfig::default().with_strict_octal(true),
        };
        let settings = Settings::merge(&cli, config);
        assert!(settings.verbose);
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.lexer.strict_octal);
    }

    #[test]
    fn test_settings_flags_override_config() {
        let cli = Cli::parse_from(["arith-tok", "--format", "text", "--buffer", "4"]);
        let config = Config {
            format: OutputFormat::Json,
            lexer: LexerConfig::default().with_stream_capacity(64),
            ..Config::default()
        };
        let settings = Settings::merge(&cli, config);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.lexer.stream_capacity, 4);
        assert!(!settings.verbose);
    }
}
