//! Wire types for the chat-completion request and response.

use serde::{Deserialize, Serialize};

/// One role/content pair in the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body: `{ "model": ..., "messages": [...] }`.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Response body. Fields other than `choices` are ignored; a missing or null `choices`
/// reads as empty. Null entries and null messages read as empty content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Option<Vec<Option<Choice>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

/// Message inside a choice. Both fields may be null or absent in the wild.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Content of the first choice; None when there are no choices. A first choice without
    /// content (null entry, null message or null content) yields an empty string.
    pub fn first_content(&self) -> Option<String> {
        self.choices
            .as_deref()
            .and_then(|choices| choices.first())
            .map(|choice| {
                choice
                    .as_ref()
                    .and_then(|c| c.message.as_ref())
                    .and_then(|m| m.content.clone())
                    .unwrap_or_default()
            })
    }

    pub fn choice_count(&self) -> usize {
        self.choices.as_ref().map_or(0, Vec::len)
    }
}
