//! Chain handler that records every inbound event in before() and the sent reply in after().

use std::sync::Arc;

use anibot_core::{Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use tracing::{error, instrument};

use crate::logger::DialogLogger;

/// Writes a USER line for each message and a BOT line for each `HandlerResponse::Reply`; always continues.
#[derive(Clone)]
pub struct DialogLogHandler {
    logger: Arc<DialogLogger>,
}

impl DialogLogHandler {
    pub fn new(logger: Arc<DialogLogger>) -> Self {
        Self { logger }
    }
}

#[async_trait]
impl Handler for DialogLogHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        self.logger
            .log_user(message.user.id, &message.event.log_text())
            .await
            .map_err(|e| {
                error!(error = %e, user_id = message.user.id, "Failed to log inbound event");
                e
            })?;
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        if let HandlerResponse::Reply(text) = response {
            self.logger
                .log_bot(message.user.id, text)
                .await
                .map_err(|e| {
                    error!(error = %e, user_id = message.user.id, "Failed to log reply");
                    e
                })?;
        }
        Ok(())
    }
}
