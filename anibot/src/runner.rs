use anibot_core::init_tracing;
use anibot_telegram::run_dispatcher;
use anyhow::Result;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;

/// Main entry: validate config, init logging, build components and handler chain, then run the dispatcher.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        anime_api_url = %config.anime_api_url(),
        dialog_log_dir = %config.dialog_log_dir(),
        log_file = %config.log_file(),
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;
    let handler_chain = build_handler_chain(&components);

    info!(handlers = handler_chain.len(), "Bot started successfully");

    run_dispatcher(components.teloxide_bot, handler_chain).await
}
