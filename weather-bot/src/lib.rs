//! # weather-bot
//!
//! The deployable Telegram weather bot: env config, command routing via the
//! core handler chain, the OpenWeather reply path, an axum health endpoint,
//! and the teloxide REPL bootstrap.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod health;
pub mod runner;
pub mod telegram;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use handlers::{CityHandler, CommandHandler};
pub use runner::{build_handler_chain, run_bot};
