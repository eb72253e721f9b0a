//! Bot abstraction for sending and editing replies.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in `anibot-telegram`.

use crate::error::{AnibotError, Result};
use crate::reply::Reply;
use crate::types::Chat;
use async_trait::async_trait;

/// Abstraction for outbound chat operations. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a reply (text, format, optional keyboard) to the chat and returns the new message id.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<String>;
    /// Replaces the text of an already-sent message. `message_id` is transport-specific (e.g. Telegram numeric string).
    async fn edit_reply(&self, chat: &Chat, message_id: &str, reply: &Reply) -> Result<()>;
    /// Shows a "typing" indicator while a slow operation runs.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
}

/// Parses a message id string into an i32. Used by edit implementations.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| AnibotError::Bot(format!("Invalid message_id for edit: {}", s)))
}
