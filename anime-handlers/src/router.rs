//! Conversation router: maps each inbound event to an action, keeps the per-user state, and sends the reply.
//!
//! Menu labels and commands always win; free text is a search query only after the search prompt was shown.
//! Every handled event returns `HandlerResponse::Reply(text)` with the sent text so the dialog log can record it.

use std::sync::Arc;

use anibot_core::{
    Bot, Chat, ConversationEvent, Handler, HandlerResponse, MenuButton, Message, Reply, Result,
};
use anime_api::AnimeApi;
use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use crate::formatter::{
    cancel_menu, format_detail, format_random, format_top, main_menu, parse_details_payload,
    search_results_markup, welcome_text, DETAILS_PREFIX, HELP_TEXT, TOP_LIMIT,
};
use crate::session::{ConversationState, SessionStore};

// --- User-facing texts ---
pub const MSG_SEARCH_PROMPT: &str = "🔍 Введите название аниме для поиска:";
pub const MSG_SEARCH_RESULTS: &str = "🔍 Результаты поиска:";
pub const MSG_SEARCH_NOT_FOUND: &str = "❌ Аниме не найдено. Попробуйте другое название.";
pub const MSG_SEARCH_FAILED: &str = "⚠️ Произошла ошибка при поиске. Попробуйте позже.";
pub const MSG_TOP_EMPTY: &str = "❌ Не удалось получить топ аниме.";
pub const MSG_TOP_FAILED: &str = "⚠️ Произошла ошибка при получении топа аниме.";
pub const MSG_RANDOM_EMPTY: &str = "❌ Не удалось получить случайное аниме.";
pub const MSG_RANDOM_FAILED: &str = "⚠️ Произошла ошибка при получении случайного аниме.";
pub const MSG_DETAILS_NOT_FOUND: &str = "❌ Не удалось получить информацию об аниме.";
pub const MSG_DETAILS_FAILED: &str = "⚠️ Произошла ошибка при получении информации.";
pub const MSG_USE_MENU: &str =
    "Используйте кнопки меню. Чтобы найти аниме, нажмите «Поиск аниме».";

const DEFAULT_NAME: &str = "друг";

/// Routes conversation events. The API client, bot and session store are injected; the router owns no other state.
#[derive(Clone)]
pub struct AnimeRouter {
    api: Arc<dyn AnimeApi>,
    bot: Arc<dyn Bot>,
    sessions: Arc<SessionStore>,
}

impl AnimeRouter {
    pub fn new(api: Arc<dyn AnimeApi>, bot: Arc<dyn Bot>, sessions: Arc<SessionStore>) -> Self {
        Self { api, bot, sessions }
    }

    /// Sends `reply` and returns the chain response recording its text.
    async fn send(&self, chat: &Chat, reply: Reply) -> Result<HandlerResponse> {
        self.bot.send_reply(chat, &reply).await?;
        Ok(HandlerResponse::Reply(reply.text))
    }

    async fn send_with_menu(&self, chat: &Chat, text: impl Into<String>) -> Result<HandlerResponse> {
        self.send(chat, Reply::plain(text).with_markup(main_menu()))
            .await
    }

    async fn typing(&self, chat: &Chat) {
        if let Err(e) = self.bot.send_typing(chat).await {
            warn!(error = %e, chat_id = chat.id, "Failed to send typing action");
        }
    }

    async fn start(&self, message: &Message) -> Result<HandlerResponse> {
        self.sessions.reset(message.user.id).await;
        let name = message
            .user
            .first_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_NAME);
        self.send_with_menu(&message.chat, welcome_text(name)).await
    }

    async fn help(&self, message: &Message) -> Result<HandlerResponse> {
        self.sessions.reset(message.user.id).await;
        self.send_with_menu(&message.chat, HELP_TEXT).await
    }

    async fn prompt_search(&self, message: &Message) -> Result<HandlerResponse> {
        self.sessions
            .set(message.user.id, ConversationState::AwaitingSearchQuery)
            .await;
        self.send(
            &message.chat,
            Reply::plain(MSG_SEARCH_PROMPT).with_markup(cancel_menu()),
        )
        .await
    }

    async fn search(&self, message: &Message, query: &str) -> Result<HandlerResponse> {
        self.sessions.reset(message.user.id).await;
        self.typing(&message.chat).await;

        match self.api.search_anime(query).await {
            Ok(results) if results.is_empty() => {
                info!(user_id = message.user.id, query = %query, "Search found nothing");
                self.send_with_menu(&message.chat, MSG_SEARCH_NOT_FOUND).await
            }
            Ok(results) => {
                info!(user_id = message.user.id, query = %query, count = results.len(), "Search results");
                self.send(
                    &message.chat,
                    Reply::plain(MSG_SEARCH_RESULTS).with_markup(search_results_markup(&results)),
                )
                .await
            }
            Err(e) => {
                error!(error = %e, user_id = message.user.id, query = %query, "Search failed");
                self.send_with_menu(&message.chat, MSG_SEARCH_FAILED).await
            }
        }
    }

    async fn top(&self, message: &Message) -> Result<HandlerResponse> {
        self.sessions.reset(message.user.id).await;
        self.typing(&message.chat).await;

        match self.api.get_top_anime().await {
            Ok(list) if list.is_empty() => self.send_with_menu(&message.chat, MSG_TOP_EMPTY).await,
            Ok(list) => {
                let shown = list.len().min(TOP_LIMIT);
                info!(user_id = message.user.id, count = shown, "Top list");
                self.send_with_menu(&message.chat, format_top(&list)).await
            }
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "Top list failed");
                self.send_with_menu(&message.chat, MSG_TOP_FAILED).await
            }
        }
    }

    async fn random(&self, message: &Message) -> Result<HandlerResponse> {
        self.sessions.reset(message.user.id).await;
        self.typing(&message.chat).await;

        match self.api.get_random_anime().await {
            Ok(Some(detail)) => {
                info!(user_id = message.user.id, anime_id = detail.id, "Random pick");
                self.send(
                    &message.chat,
                    Reply::html(format_random(&detail)).with_markup(main_menu()),
                )
                .await
            }
            Ok(None) => self.send_with_menu(&message.chat, MSG_RANDOM_EMPTY).await,
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "Random pick failed");
                self.send_with_menu(&message.chat, MSG_RANDOM_FAILED).await
            }
        }
    }

    async fn free_text(&self, message: &Message, text: &str) -> Result<HandlerResponse> {
        match self.sessions.get(message.user.id).await {
            ConversationState::AwaitingSearchQuery if text.trim().is_empty() => {
                self.prompt_search(message).await
            }
            ConversationState::AwaitingSearchQuery => self.search(message, text.trim()).await,
            ConversationState::Idle => {
                info!(user_id = message.user.id, "Free text outside search prompt");
                self.send_with_menu(&message.chat, MSG_USE_MENU).await
            }
        }
    }

    /// Shows the detail card by editing the message that carried the button.
    async fn details(
        &self,
        message: &Message,
        payload: &str,
        message_id: Option<&str>,
    ) -> Result<HandlerResponse> {
        self.sessions.reset(message.user.id).await;

        let reply = match parse_details_payload(payload) {
            Ok(id) => match self.api.get_anime_details(id).await {
                Ok(Some(detail)) => Reply::html(format_detail(&detail)),
                Ok(None) => {
                    info!(user_id = message.user.id, anime_id = id, "Details not found");
                    Reply::plain(MSG_DETAILS_NOT_FOUND)
                }
                Err(e) => {
                    error!(error = %e, user_id = message.user.id, anime_id = id, "Details failed");
                    Reply::plain(MSG_DETAILS_FAILED)
                }
            },
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "Details failed");
                Reply::plain(MSG_DETAILS_FAILED)
            }
        };

        match message_id {
            Some(id) => {
                self.bot.edit_reply(&message.chat, id, &reply).await?;
                Ok(HandlerResponse::Reply(reply.text))
            }
            // The button message is no longer accessible; answer with a new message instead.
            None => self.send(&message.chat, reply).await,
        }
    }
}

#[async_trait]
impl Handler for AnimeRouter {
    #[instrument(skip(self, message), fields(user_id = message.user.id, event = message.event.kind()))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match &message.event {
            ConversationEvent::Command(name) => match name.as_str() {
                "start" => self.start(message).await,
                "help" => self.help(message).await,
                other => {
                    info!(user_id = message.user.id, command = %other, "Ignoring unknown command");
                    Ok(HandlerResponse::Stop)
                }
            },
            ConversationEvent::ButtonPress(button) => match button {
                MenuButton::Search => self.prompt_search(message).await,
                MenuButton::Top => self.top(message).await,
                MenuButton::Random => self.random(message).await,
                MenuButton::Help | MenuButton::Back => self.help(message).await,
            },
            ConversationEvent::FreeText(text) => self.free_text(message, text).await,
            ConversationEvent::CallbackQuery {
                payload,
                message_id,
                ..
            } if payload.starts_with(DETAILS_PREFIX) => {
                self.details(message, payload, message_id.as_deref()).await
            }
            ConversationEvent::CallbackQuery { payload, .. } => {
                info!(user_id = message.user.id, payload = %payload, "Ignoring unknown callback");
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
