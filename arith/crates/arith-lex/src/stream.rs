//! Background token production.
//!
//! [`lex`] runs a [`Lexer`] on its own thread and hands tokens to the caller
//! through a crossbeam channel. With the default capacity of zero the
//! channel is a rendezvous: the producer blocks on each token until the
//! consumer pulls it, so at most one token is in flight.
//!
//! Dropping the [`TokenStream`] disconnects the channel. The producer sees
//! the failed send and exits, so abandoning a stream never strands the
//! producer thread.

use std::any::Any;
use std::iter::FusedIterator;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver, Sender};
use tracing::debug;

use crate::config::LexerConfig;
use crate::error::StreamError;
use crate::lexer::Lexer;
use crate::token::Token;

/// Consumer end of a background lexer.
///
/// Yields tokens in source order and ends after the terminal token.
///
/// # Example
///
/// ```
/// use arith_lex::lex;
///
/// let texts: Vec<String> = lex("1 + 2").map(|t| t.text).collect();
/// assert_eq!(texts, ["1", "+", "2", ""]);
/// ```
#[derive(Debug)]
pub struct TokenStream {
    /// Receiving side of the channel; `None` once cancelled.
    receiver: Option<Receiver<Token>>,

    /// Producer thread handle; `None` once joined.
    producer: Option<JoinHandle<()>>,
}

impl TokenStream {
    /// Blocks until the next token is available.
    ///
    /// Returns `None` once the producer has closed the stream.
    pub fn next_token(&mut self) -> Option<Token> {
        self.receiver.as_ref()?.recv().ok()
    }

    /// Stops the producer and waits for its thread to exit.
    ///
    /// Tokens not yet pulled are discarded.
    pub fn cancel(mut self) -> Result<(), StreamError> {
        drop(self.receiver.take());

        match self.producer.take() {
            Some(handle) => handle
                .join()
                .map_err(|payload| StreamError::ProducerPanicked(panic_message(payload.as_ref()))),
            None => Ok(()),
        }
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl FusedIterator for TokenStream {}

/// Starts lexing `input` on a background thread with the default configuration.
pub fn lex(input: impl Into<String>) -> TokenStream {
    lex_with(input, &LexerConfig::default())
}

/// Starts lexing `input` on a background thread.
///
/// The channel capacity comes from [`LexerConfig::stream_capacity`].
pub fn lex_with(input: impl Into<String>, config: &LexerConfig) -> TokenStream {
    let input = input.into();
    let config = config.clone();
    let (sender, receiver) = channel::bounded(config.stream_capacity);

    let producer = thread::spawn(move || produce(&input, &config, sender));

    TokenStream {
        receiver: Some(receiver),
        producer: Some(producer),
    }
}

/// Producer loop: sends every token, stopping early if the consumer is gone.
fn produce(input: &str, config: &LexerConfig, sender: Sender<Token>) {
    debug!(
        target: "arith_lex",
        bytes = input.len(),
        capacity = config.stream_capacity,
        "token producer started"
    );

    for token in Lexer::with_config(input, config) {
        if sender.send(token).is_err() {
            debug!(target: "arith_lex", "token consumer disconnected, stopping producer");
            return;
        }
    }

    debug!(target: "arith_lex", "token producer finished");
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
