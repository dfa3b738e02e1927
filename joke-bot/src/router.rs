//! Command router: normalize a task, dispatch it through the handler chain, and turn any
//! failure into the fixed apology reply.

use handler_chain::HandlerChain;
use jbot_core::{Command, HandlerError, HandlerResponse, JokeSource, Result};
use joke_client::{DadJokeFetcher, OpenRouterClient, OpenRouterConfig};
use joke_handlers::{FallbackHandler, HumorMeHandler, APOLOGY_JOKE, NO_COMMAND_REPLY};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Routes tasks to handlers. `process` never fails; `dispatch` exposes the typed result.
#[derive(Clone)]
pub struct CommandRouter {
    chain: HandlerChain,
}

impl CommandRouter {
    /// Router with the standard chain: `humor_me` → joke source, anything else → placeholder.
    pub fn new(source: Arc<dyn JokeSource>) -> Self {
        let chain = HandlerChain::new()
            .add_handler(Arc::new(HumorMeHandler::new(source)))
            .add_handler(Arc::new(FallbackHandler::new()));
        Self { chain }
    }

    /// Router over a custom chain.
    pub fn with_chain(chain: HandlerChain) -> Self {
        Self { chain }
    }

    /// Router backed by OpenRouter with the given config.
    pub fn from_config(config: OpenRouterConfig) -> anyhow::Result<Self> {
        let client = OpenRouterClient::new(config)?;
        Ok(Self::new(Arc::new(DadJokeFetcher::new(client))))
    }

    /// Processes one task and returns the reply text. Errors are logged and mapped by
    /// [`reply_for`]; nothing is propagated to the caller.
    #[instrument(skip(self, task))]
    pub async fn process(&self, task: &str) -> String {
        info!(task = %task, "Processing task");
        reply_for(self.dispatch(task).await)
    }

    /// Parses and dispatches a task. Empty input is answered directly; a chain that ends
    /// without a reply is an `InvalidCommand` error.
    pub async fn dispatch(&self, task: &str) -> Result<String> {
        let Some(command) = Command::parse(task) else {
            info!("step: empty task, no command");
            return Ok(NO_COMMAND_REPLY.to_string());
        };

        match self.chain.handle(&command).await? {
            HandlerResponse::Reply(reply) => Ok(reply),
            HandlerResponse::Continue => Err(HandlerError::InvalidCommand(command.name).into()),
        }
    }
}

/// Maps a dispatch result to the text returned to the host. Every error becomes the apology.
pub fn reply_for(result: Result<String>) -> String {
    match result {
        Ok(reply) => reply,
        Err(e) => {
            error!(error = %e, "Error fetching joke");
            APOLOGY_JOKE.to_string()
        }
    }
}
