//! Terminal handler: free-form input is not interpreted yet, so echo it back with a placeholder.

use async_trait::async_trait;
use jbot_core::{Command, Handler, HandlerResponse, Result};

use crate::replies::placeholder_reply;

/// Always replies with the NLP placeholder and the case-preserved command text.
#[derive(Clone)]
pub struct FallbackHandler;

impl FallbackHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FallbackHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Handler for FallbackHandler {
    async fn handle(&self, command: &Command) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Reply(placeholder_reply(&command.text)))
    }
}
