//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anibot_core::Bot;
use anibot_telegram::TelegramBotAdapter;
use anime_api::{AnimeApi, JikanClient};
use anime_handlers::{AnimeRouter, SessionStore};
use anyhow::Result;
use dialog_log::{DialogLogHandler, DialogLogger};
use handler_chain::HandlerChain;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::config::BotConfig;

/// Shared services for the handler chain; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    /// Outbound transport used by the router. Tests substitute a recording implementation.
    pub bot: Arc<dyn Bot>,
    pub api: Arc<dyn AnimeApi>,
    pub dialog_logger: Arc<DialogLogger>,
    pub sessions: Arc<SessionStore>,
}

/// Builds BotComponents: Telegram bot, Jikan client and dialog logger (creates the log directory).
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = config.telegram().build_bot();

    let api = JikanClient::new(config.anime_api_url()).map_err(|e| {
        error!(error = %e, url = %config.anime_api_url(), "Failed to create anime API client");
        anyhow::anyhow!("Failed to create anime API client: {}", e)
    })?;
    info!(base_url = %api.base_url(), "Using anime API");

    let dialog_logger = DialogLogger::init(config.dialog_log_dir()).map_err(|e| {
        error!(error = %e, dir = %config.dialog_log_dir(), "Failed to initialize dialog log");
        anyhow::anyhow!("Failed to initialize dialog log: {}", e)
    })?;

    Ok(BotComponents {
        bot: Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
        teloxide_bot,
        api: Arc::new(api),
        dialog_logger: Arc::new(dialog_logger),
        sessions: Arc::new(SessionStore::new()),
    })
}

/// Chain order: dialog log first (records the inbound event in `before`, the reply in `after`), then the router.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    let router = AnimeRouter::new(
        components.api.clone(),
        components.bot.clone(),
        components.sessions.clone(),
    );
    HandlerChain::new()
        .add_handler(Arc::new(DialogLogHandler::new(
            components.dialog_logger.clone(),
        )))
        .add_handler(Arc::new(router))
}
