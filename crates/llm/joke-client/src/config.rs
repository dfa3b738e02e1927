//! OpenRouter configuration: explicit struct with fixed defaults, optionally loaded from env.

use anyhow::{bail, Result};
use std::env;

/// Chat-completion endpoint.
pub const DEFAULT_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
/// Model used for every joke request.
pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";
/// `HTTP-Referer` header identifying the caller to OpenRouter.
pub const DEFAULT_REFERER: &str = "https://github.com/TeneoProtocolAI/teneo-agent-sdk";
/// `X-Title` header identifying the caller to OpenRouter.
pub const DEFAULT_TITLE: &str = "Dad Joke Agent";

/// Configuration handed to [`crate::OpenRouterClient`] at construction.
///
/// `api_key` is optional on purpose: a bot without a key still answers every other command,
/// and a fetch without a key fails with [`jbot_core::FetchError::MissingCredential`].
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub referer: String,
    pub title: String,
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl OpenRouterConfig {
    /// Load from environment variables: OPENROUTER_API_KEY (blank counts as unset),
    /// OPENROUTER_API_URL, OPENROUTER_MODEL.
    pub fn from_env() -> Self {
        let api_key = env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let api_url =
            env::var("OPENROUTER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = env::var("OPENROUTER_MODEL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Self {
            api_key,
            api_url,
            model,
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// True when a non-blank API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate config: api_url must be an http(s) URL. A missing key is not an error here.
    pub fn validate(&self) -> Result<()> {
        match reqwest::Url::parse(&self.api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            _ => bail!(
                "OPENROUTER_API_URL is not a valid http(s) URL: {}",
                self.api_url
            ),
        }
    }
}
