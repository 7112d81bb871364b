//! Telegram transport layer: teloxide-to-core adapters and the REPL runner.

mod adapters;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use runner::{handle_update, run_repl, FALLBACK_REPLY};
