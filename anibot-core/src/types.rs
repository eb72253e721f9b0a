//! Core types: user, chat, inbound message and its conversation event, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// Persistent main-menu buttons. Pressing one sends its label as an ordinary text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuButton {
    Search,
    Top,
    Random,
    Help,
    Back,
}

impl MenuButton {
    pub const ALL: [MenuButton; 5] = [
        MenuButton::Search,
        MenuButton::Top,
        MenuButton::Random,
        MenuButton::Help,
        MenuButton::Back,
    ];

    /// Label shown on the reply keyboard.
    pub fn label(&self) -> &'static str {
        match self {
            MenuButton::Search => "Поиск аниме",
            MenuButton::Top => "Топ аниме",
            MenuButton::Random => "Случайное аниме",
            MenuButton::Help => "Помощь",
            MenuButton::Back => "Назад",
        }
    }

    /// Exact label match; anything else is free text.
    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == text)
    }
}

/// One inbound chat event. Transient; no identity beyond the enclosing [`Message`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationEvent {
    /// Slash command without the leading `/`, lowercased (e.g. `start`).
    Command(String),
    /// Text that exactly matches a menu label.
    ButtonPress(MenuButton),
    /// Inline-button press. `message_id` is the message carrying the button, used for edit-in-place.
    CallbackQuery {
        id: String,
        payload: String,
        message_id: Option<String>,
    },
    /// Any other text.
    FreeText(String),
}

impl ConversationEvent {
    /// Classifies raw message text into a command, a menu button press, or free text.
    pub fn from_text(text: &str) -> Self {
        if let Some(rest) = text.strip_prefix('/') {
            let word = rest.split_whitespace().next().unwrap_or("");
            let name = word.split('@').next().unwrap_or("");
            return ConversationEvent::Command(name.to_lowercase());
        }
        match MenuButton::from_label(text) {
            Some(button) => ConversationEvent::ButtonPress(button),
            None => ConversationEvent::FreeText(text.to_string()),
        }
    }

    /// Text recorded for this event in the user's dialog log.
    pub fn log_text(&self) -> String {
        match self {
            ConversationEvent::Command(name) => format!("/{}", name),
            ConversationEvent::ButtonPress(button) => button.label().to_string(),
            ConversationEvent::CallbackQuery { payload, .. } => payload.clone(),
            ConversationEvent::FreeText(text) => text.clone(),
        }
    }

    /// Short tag for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ConversationEvent::Command(_) => "command",
            ConversationEvent::ButtonPress(_) => "button",
            ConversationEvent::CallbackQuery { .. } => "callback",
            ConversationEvent::FreeText(_) => "text",
        }
    }
}

/// A single inbound message: who sent it, where, and what it means.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub event: ConversationEvent,
    pub created_at: DateTime<Utc>,
}

/// Handler result for the chain. `Reply(text)` carries the sent text so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Stop the chain and attach the reply text that was sent to the user.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific update type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
