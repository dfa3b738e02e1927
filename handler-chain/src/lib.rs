//! # Handler chain
//!
//! Runs a sequence of command handlers in order. The first handler that returns Reply ends
//! dispatch; Continue passes the command on. A chain where nobody replies returns Continue.

use jbot_core::{Command, Handler, HandlerResponse, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered chain of command handlers; first Reply wins.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler (runs in order; first Reply ends dispatch).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Number of handlers in the chain.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs handlers in order until one replies. Handler errors are returned as-is.
    #[instrument(skip(self, command), fields(command = %command.name))]
    pub async fn handle(&self, command: &Command) -> Result<HandlerResponse> {
        info!(
            command = %command.name,
            arg_count = command.args.len(),
            "step: handler_chain started"
        );

        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            info!(handler = %handler_name, "step: handler processing");
            let response = handler.handle(command).await?;
            debug!(
                handler = %handler_name,
                response = ?response,
                "Handler processed"
            );

            if let HandlerResponse::Reply(ref text) = response {
                info!(
                    handler = %handler_name,
                    reply_len = text.len(),
                    "step: handler chain stopped by handler"
                );
                return Ok(response);
            }
        }

        info!(command = %command.name, "step: handler_chain finished without reply");
        Ok(HandlerResponse::Continue)
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
