//! Dad joke fetcher: fixed prompt, first completion wins.

use async_trait::async_trait;
use jbot_core::{FetchError, JokeSource};
use tracing::instrument;

use crate::client::OpenRouterClient;
use crate::types::{ChatMessage, CompletionRequest};

pub const DAD_JOKE_SYSTEM_PROMPT: &str =
    "You are a dad joke expert. Tell me a short, classic dad joke.";
pub const DAD_JOKE_USER_PROMPT: &str = "Tell me a dad joke.";
/// Returned (as success) when the API answers with no choices.
pub const NO_JOKE_FOUND: &str = "No joke found.";

/// [`JokeSource`] backed by OpenRouter. The prompt is fixed; task text is not forwarded.
#[derive(Debug, Clone)]
pub struct DadJokeFetcher {
    client: OpenRouterClient,
}

impl DadJokeFetcher {
    pub fn new(client: OpenRouterClient) -> Self {
        Self { client }
    }

    /// Request payload built fresh for each fetch.
    pub fn build_request(&self) -> CompletionRequest {
        CompletionRequest {
            model: self.client.config().model.clone(),
            messages: vec![
                ChatMessage::system(DAD_JOKE_SYSTEM_PROMPT),
                ChatMessage::user(DAD_JOKE_USER_PROMPT),
            ],
        }
    }
}

#[async_trait]
impl JokeSource for DadJokeFetcher {
    #[instrument(skip(self))]
    async fn fetch_joke(&self) -> Result<String, FetchError> {
        let request = self.build_request();
        let response = self.client.chat_completion(&request).await?;
        Ok(response
            .first_content()
            .unwrap_or_else(|| NO_JOKE_FOUND.to_string()))
    }
}
