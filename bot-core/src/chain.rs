//! # Handler chain
//!
//! Runs a sequence of handlers in registration order. The first handler that
//! returns Stop or Reply ends the chain; Continue passes the message on.

use crate::error::Result;
use crate::types::{Handler, HandlerResponse, Message};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Ordered dispatch chain: handlers run until one returns Stop or Reply.
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

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Dispatches one message through the chain.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let response = h.handle(message).await?;
            debug!(handler = %name, response = ?response, "Handler processed");

            match response {
                HandlerResponse::Continue => {}
                HandlerResponse::Stop | HandlerResponse::Reply(_) => return Ok(response),
            }
        }

        Ok(HandlerResponse::Continue)
    }
}
