//! # OpenRouter joke client
//!
//! Minimal client for OpenRouter's OpenAI-compatible chat-completion endpoint, plus the
//! [`DadJokeFetcher`] that implements [`jbot_core::JokeSource`] on top of it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use jbot_core::JokeSource;
//! use joke_client::{DadJokeFetcher, OpenRouterClient, OpenRouterConfig};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let config = OpenRouterConfig::default().with_api_key("sk-or-...");
//!     let fetcher = DadJokeFetcher::new(OpenRouterClient::new(config)?);
//!     println!("{}", fetcher.fetch_joke().await?);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See [`OpenRouterConfig::from_env`]: `OPENROUTER_API_KEY`, `OPENROUTER_API_URL`,
//! `OPENROUTER_MODEL`. Only the key is required, and only when a request is actually made.

mod client;
mod config;
mod fetcher;
mod types;

pub use client::OpenRouterClient;
pub use config::{
    OpenRouterConfig, DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_REFERER, DEFAULT_TITLE,
};
pub use fetcher::{DadJokeFetcher, DAD_JOKE_SYSTEM_PROMPT, DAD_JOKE_USER_PROMPT, NO_JOKE_FOUND};
pub use types::{ChatMessage, Choice, CompletionRequest, CompletionResponse, ResponseMessage};

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}
