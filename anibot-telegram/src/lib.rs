//! # anibot-telegram
//!
//! Telegram transport layer: adapters, [`anibot_core::Bot`] implementation, connectivity config, dispatcher runner.
//! Handles only Telegram connectivity and handler-chain execution; routing and logging live in the handlers.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::run_dispatcher;
