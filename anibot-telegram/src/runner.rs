//! Dispatcher runner: converts teloxide messages and callback queries to core::Message and passes them to HandlerChain.
//! Updates from one chat are processed in arrival order; different chats run concurrently.

use anibot_core::{Message as CoreMessage, ToCoreMessage};
use anyhow::Result;
use handler_chain::HandlerChain;
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message};
use tracing::{error, info, instrument, warn};

use crate::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

async fn run_chain(chain: &HandlerChain, core_msg: CoreMessage) {
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        message_id = %core_msg.id,
        "step: processing update (handler chain started)"
    );
    if let Err(e) = chain.handle(&core_msg).await {
        error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
    }
}

async fn on_message(msg: Message, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();

    match msg.text() {
        Some(text) => {
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %text,
                "Received message"
            );
            run_chain(&chain, core_msg).await;
        }
        None => {
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                "Received non-text message, ignored"
            );
        }
    }

    Ok(())
}

/// Answers the callback right away so the client stops its spinner, then runs the chain.
async fn on_callback(bot: Bot, q: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!(error = %e, user_id = q.from.id.0, "Failed to answer callback query");
    }

    let core_msg = TelegramCallbackWrapper(&q).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        payload = %core_msg.event.log_text(),
        "Received callback query"
    );
    run_chain(&chain, core_msg).await;

    Ok(())
}

/// Starts long polling with the given teloxide Bot and HandlerChain. Returns on Ctrl-C.
#[instrument(skip(bot, handler_chain))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(username = ?me.user.username, "Connected to Telegram"),
        Err(e) => warn!(error = %e, "get_me failed, starting dispatcher anyway"),
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    info!("step: dispatcher started");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    info!("step: dispatcher stopped");

    Ok(())
}
