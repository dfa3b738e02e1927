//! Error types for the bot core.
//!
//! [`JbotError`] is the top-level error; [`HandlerError`] is used for handler failures and
//! [`FetchError`] for failures of a [`crate::JokeSource`].

use thiserror::Error;

/// Top-level error for jbot dispatch (handler, joke fetch). Startup failures (config, logging,
/// stdin/stdout) are `anyhow` errors in the app crate.
#[derive(Error, Debug)]
pub enum JbotError {
    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
}

/// Errors produced by handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Errors produced while fetching a joke from the completion API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// No API key configured; no request was sent.
    #[error("OPENROUTER_API_KEY is not set")]
    MissingCredential,

    /// Connection failure, malformed request, or body read failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Remote answered with a non-success status.
    #[error("API request failed with status: {status}, body: {body}")]
    RemoteStatus { status: u16, body: String },

    /// Success body did not match the completion response shape.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result type for core operations; uses [`JbotError`].
pub type Result<T> = std::result::Result<T, JbotError>;
