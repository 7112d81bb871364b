//! # bot-core
//!
//! Core types and traits for the weather bot: the [`Bot`] send abstraction,
//! the [`Handler`] trait and [`HandlerChain`], message and user types, and
//! tracing initialization. Transport specifics stay behind [`Bot`]; only the
//! teloxide adapter knows about Telegram.

pub mod bot;
pub mod chain;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, TelegramBotAdapter};
pub use chain::HandlerChain;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, Reply, ToCoreMessage, ToCoreUser, User};
