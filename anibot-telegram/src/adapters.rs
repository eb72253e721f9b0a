//! Adapters from Telegram (teloxide) types to anibot_core types.
//! Depends only on teloxide and anibot_core type definitions.

use anibot_core::{Chat, ConversationEvent, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn unknown_user() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}

fn to_core_chat(chat: &teloxide::types::Chat) -> Chat {
    let chat_type = if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else {
        "channel"
    };
    Chat {
        id: chat.id.0,
        chat_type: chat_type.to_string(),
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`]. Text is classified with
/// [`ConversationEvent::from_text`]; a message without text becomes empty free text.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(unknown_user),
            chat: to_core_chat(&self.0.chat),
            event: ConversationEvent::from_text(self.0.text().unwrap_or("")),
            created_at: self.0.date,
        }
    }
}

/// Wraps a teloxide CallbackQuery for conversion to core [`Message`] with a
/// [`ConversationEvent::CallbackQuery`] event.
///
/// The chat comes from the message carrying the button, falling back to the private chat with the
/// sender. `message_id` is set only while that message is still accessible, so it can be edited.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Message {
        let query = self.0;
        let user = TelegramUserWrapper(&query.from).to_core();
        let chat = query
            .message
            .as_ref()
            .map(|m| to_core_chat(m.chat()))
            .unwrap_or_else(|| Chat {
                id: user.id,
                chat_type: "private".to_string(),
            });
        let message_id = query
            .message
            .as_ref()
            .and_then(|m| m.regular_message())
            .map(|m| m.id.to_string());

        Message {
            id: query.id.to_string(),
            user,
            chat,
            event: ConversationEvent::CallbackQuery {
                id: query.id.to_string(),
                payload: query.data.clone().unwrap_or_default(),
                message_id,
            },
            created_at: chrono::Utc::now(),
        }
    }
}
