//! REPL runner: converts teloxide messages to core messages and dispatches
//! them through the handler chain. Each update is handled in its own spawned
//! task so a slow weather request never blocks the loop.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{error, info};

use bot_core::{Bot as CoreBot, HandlerChain, HandlerResponse, Message as CoreMessage, ToCoreMessage};

use super::adapters::TelegramMessageWrapper;

/// Last-resort reply when the chain itself fails.
pub const FALLBACK_REPLY: &str = "❌ Произошла непредвиденная ошибка.";

/// Starts the long-polling loop. Runs until the process is terminated;
/// in-flight requests are abandoned on exit.
pub async fn run_repl(
    bot: teloxide::Bot,
    sender: Arc<dyn CoreBot>,
    chain: HandlerChain,
) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Connected to Telegram");
        }
    }

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let sender = sender.clone();

        async move {
            let Some(text) = msg.text() else {
                return Ok(());
            };

            let core_msg = TelegramMessageWrapper(&msg).to_core();
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %text,
                "Received message"
            );

            tokio::spawn(async move {
                handle_update(sender, chain, core_msg).await;
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}

/// Dispatches one message and sends the resulting reply. Chain failures are
/// logged and answered with a canned apology; nothing here can take the loop
/// down.
pub async fn handle_update(sender: Arc<dyn CoreBot>, chain: HandlerChain, message: CoreMessage) {
    match chain.handle(&message).await {
        Ok(HandlerResponse::Reply(reply)) => {
            if let Err(e) = sender.send_reply(&message.chat, &reply).await {
                error!(error = %e, chat_id = message.chat.id, "Failed to send reply");
            }
        }
        Ok(HandlerResponse::Continue) | Ok(HandlerResponse::Stop) => {}
        Err(e) => {
            error!(error = %e, chat_id = message.chat.id, "Handler chain failed");
            if let Err(send_err) = sender.send_message(&message.chat, FALLBACK_REPLY).await {
                error!(error = %send_err, chat_id = message.chat.id, "Failed to send fallback reply");
            }
        }
    }
}
