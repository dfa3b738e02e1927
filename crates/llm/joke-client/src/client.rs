//! HTTP client for the OpenRouter chat-completion endpoint.

use jbot_core::FetchError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::{info, instrument, warn};

use crate::config::OpenRouterConfig;
use crate::mask_token;
use crate::types::{CompletionRequest, CompletionResponse};

/// OpenRouter chat client. One POST per call; no timeout beyond the transport default, no retry.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: Client,
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    /// Builds a client from an explicit config.
    pub fn new(config: OpenRouterConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &OpenRouterConfig {
        &self.config
    }

    /// Sends one chat completion request and decodes the response.
    ///
    /// Fails with `MissingCredential` before any network activity when no key is configured,
    /// with `RemoteStatus` (status + body) for anything other than 200 OK, with `Transport`
    /// for connection or body read failures, and with `Decode` when the body is not a
    /// completion response.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, FetchError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => key,
            _ => {
                warn!("step: chat_completion skipped, no API key configured");
                return Err(FetchError::MissingCredential);
            }
        };

        info!(
            url = %self.config.api_url,
            model = %request.model,
            message_count = request.messages.len(),
            api_key = %mask_token(api_key),
            "step: OpenRouter chat_completion request"
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .header(AUTHORIZATION, format!("Bearer {}", api_key))
            .header(CONTENT_TYPE, "application/json")
            .header("HTTP-Referer", &self.config.referer)
            .header("X-Title", &self.config.title)
            .json(request)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body_len = body.len(), "OpenRouter API error");
            return Err(FetchError::RemoteStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        // Only the first JSON value counts; trailing bytes after it are ignored.
        let completion = serde_json::Deserializer::from_str(&body)
            .into_iter::<CompletionResponse>()
            .next()
            .ok_or_else(|| FetchError::Decode("empty response body".to_string()))?
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        info!(
            choice_count = completion.choice_count(),
            "step: OpenRouter chat_completion done"
        );
        Ok(completion)
    }
}
