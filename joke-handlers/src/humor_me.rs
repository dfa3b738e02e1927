//! `humor_me` handler: fetches one joke from the configured [`JokeSource`].

use async_trait::async_trait;
use jbot_core::{Command, Handler, HandlerResponse, JokeSource, Result};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::replies::HUMOR_ME_COMMAND;

/// Replies to `humor_me` with a joke; continues for any other command. Fetch errors are
/// returned to the caller, not converted here.
#[derive(Clone)]
pub struct HumorMeHandler {
    source: Arc<dyn JokeSource>,
}

impl HumorMeHandler {
    pub fn new(source: Arc<dyn JokeSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Handler for HumorMeHandler {
    #[instrument(skip(self, command))]
    async fn handle(&self, command: &Command) -> Result<HandlerResponse> {
        if !command.is(HUMOR_ME_COMMAND) {
            return Ok(HandlerResponse::Continue);
        }

        info!("step: fetching joke");
        let joke = self.source.fetch_joke().await?;
        info!(joke_len = joke.len(), "step: joke fetched");
        Ok(HandlerResponse::Reply(joke))
    }
}
