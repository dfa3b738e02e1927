//! Core types: task, handler response, and the Handler / JokeSource traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::command::Command;
use crate::error::FetchError;

/// A single raw text instruction delivered by the host. `id` and `received_at` are only used
/// to correlate log lines; the task is never stored.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: String,
    pub content: String,
    pub received_at: DateTime<Utc>,
}

impl Task {
    /// Wraps raw input text with a fresh id and the current time.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            received_at: Utc::now(),
        }
    }
}

/// Handler result for the chain. `Reply(text)` carries the response body and ends dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Not handled here; pass to next handler.
    Continue,
    /// Stop the chain and reply with this text.
    Reply(String),
}

/// A command handler. Returns Continue when the command is not its own.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, command: &Command) -> crate::error::Result<HandlerResponse>;
}

/// Source of jokes. Implementations map to a remote completion API (e.g. OpenRouter).
#[async_trait]
pub trait JokeSource: Send + Sync {
    /// Fetches one joke. An empty completion list is not an error.
    async fn fetch_joke(&self) -> std::result::Result<String, FetchError>;
}
