//! Wraps teloxide::Bot and implements [`anibot_core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use anibot_core::{
    parse_message_id, AnibotError, Bot as CoreBot, Chat, InlineButton, Reply, ReplyMarkup, Result,
    TextFormat,
};
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{
    ChatAction, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton,
    KeyboardMarkup, MessageId, ParseMode,
};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements anibot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn bot_error(e: teloxide::RequestError) -> AnibotError {
    AnibotError::Bot(e.to_string())
}

pub(crate) fn parse_mode(format: TextFormat) -> Option<ParseMode> {
    match format {
        TextFormat::Plain => None,
        TextFormat::Html => Some(ParseMode::Html),
    }
}

fn inline_rows(rows: &[Vec<InlineButton>]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(rows.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.payload.clone()))
            .collect::<Vec<_>>()
    }))
}

/// Inline keyboard for `markup`; None for reply keyboards, which Telegram cannot attach to edits.
pub(crate) fn inline_keyboard(markup: &ReplyMarkup) -> Option<InlineKeyboardMarkup> {
    match markup {
        ReplyMarkup::Inline(rows) => Some(inline_rows(rows)),
        ReplyMarkup::Keyboard(_) => None,
    }
}

/// Maps a core keyboard to Telegram markup. Reply keyboards are resized to fit their buttons.
pub(crate) fn to_telegram_markup(markup: &ReplyMarkup) -> teloxide::types::ReplyMarkup {
    match markup {
        ReplyMarkup::Keyboard(rows) => teloxide::types::ReplyMarkup::Keyboard(
            KeyboardMarkup::new(rows.iter().map(|row| {
                row.iter()
                    .map(|label| KeyboardButton::new(label.clone()))
                    .collect::<Vec<_>>()
            }))
            .resize_keyboard(),
        ),
        ReplyMarkup::Inline(rows) => teloxide::types::ReplyMarkup::InlineKeyboard(inline_rows(rows)),
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<String> {
        let mut request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        if let Some(mode) = parse_mode(reply.format) {
            request = request.parse_mode(mode);
        }
        if let Some(markup) = &reply.markup {
            request = request.reply_markup(to_telegram_markup(markup));
        }
        let sent = request.await.map_err(bot_error)?;
        Ok(sent.id.to_string())
    }

    async fn edit_reply(&self, chat: &Chat, message_id: &str, reply: &Reply) -> Result<()> {
        let id = parse_message_id(message_id)?;
        let mut request = self
            .bot
            .edit_message_text(ChatId(chat.id), MessageId(id), reply.text.clone());
        if let Some(mode) = parse_mode(reply.format) {
            request = request.parse_mode(mode);
        }
        if let Some(markup) = &reply.markup {
            match inline_keyboard(markup) {
                Some(keyboard) => request = request.reply_markup(keyboard),
                None => debug!(chat_id = chat.id, "Reply keyboard dropped on edit"),
            }
        }
        request.await.map_err(bot_error)?;
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(bot_error)?;
        Ok(())
    }
}
