//! # anibot-core
//!
//! Core types and traits for the anime bot: [`Bot`], [`Handler`], [`Message`] and [`ConversationEvent`],
//! [`Reply`] with keyboards, and tracing initialization. Transport-agnostic; used by every other crate.

pub mod bot;
pub mod error;
pub mod logger;
pub mod reply;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{AnibotError, Result};
pub use logger::init_tracing;
pub use reply::{InlineButton, Reply, ReplyMarkup, TextFormat};
pub use types::{
    Chat, ConversationEvent, Handler, HandlerResponse, MenuButton, Message, ToCoreMessage,
    ToCoreUser, User,
};
