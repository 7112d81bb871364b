//! Bot abstraction for sending messages and chat actions.
//!
//! [`Bot`] is transport-agnostic; [`TelegramBotAdapter`] implements it via
//! teloxide. Tests substitute their own recording implementations.

use crate::error::{BotError, Result};
use crate::types::{Chat, Reply};
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ChatId, ParseMode};

/// Abstraction for sending replies and presence indicators to a chat.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a Markdown-formatted message to the given chat.
    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Signals a "typing" presence indicator on the given chat.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;

    /// Sends a [`Reply`], honoring its parse mode.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        if reply.markdown {
            self.send_markdown(chat, &reply.text).await
        } else {
            self.send_message(chat, &reply.text).await
        }
    }
}

/// Thin wrapper around `teloxide::Bot` that implements the core [`Bot`] trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl Bot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_markdown(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .parse_mode(ParseMode::Markdown)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
