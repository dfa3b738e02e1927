//! # jbot-core
//!
//! Core types and traits for the joke bot: [`Task`], [`Command`], [`Handler`], [`JokeSource`],
//! error types, and tracing initialization. Transport-agnostic; used by handler-chain,
//! joke-handlers, joke-client and joke-bot.

pub mod command;
pub mod error;
pub mod logger;
pub mod types;

pub use command::{normalize, Command};
pub use error::{FetchError, HandlerError, JbotError, Result};
pub use logger::init_tracing;
pub use types::{Handler, HandlerResponse, JokeSource, Task};
