//! Process bootstrap: build components, spawn the health endpoint, run the
//! Telegram REPL until termination.

use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};

use bot_core::{init_tracing, Bot, HandlerChain, TelegramBotAdapter};
use weather_client::WeatherClient;

use crate::config::Config;
use crate::handlers::{CityHandler, CommandHandler};
use crate::health;
use crate::telegram::run_repl;

/// Dispatch order implements the command precedence: commands (including the
/// unknown-command reply) first, then free text as a city name.
pub fn build_handler_chain(
    config: &Config,
    client: Arc<WeatherClient>,
    bot: Arc<dyn Bot>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(CommandHandler::new(
            client.clone(),
            bot.clone(),
            config.default_city.clone(),
        )))
        .add_handler(Arc::new(CityHandler::new(client, bot)))
}

/// Main entry: init logging, build the weather client and Telegram adapter,
/// start the health endpoint on a background task, then block on the REPL.
pub async fn run_bot(config: Config) -> Result<()> {
    init_tracing()?;

    let client = Arc::new(WeatherClient::new(
        config.api_key.clone(),
        config.weather_api_url.clone(),
    )?);

    let mut teloxide_bot = teloxide::Bot::new(&config.bot_token);
    if let Some(url) = &config.telegram_api_url {
        teloxide_bot = teloxide_bot.set_api_url(reqwest::Url::parse(url)?);
    }

    let sender: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let chain = build_handler_chain(&config, client, sender.clone());

    let health_port = config.health_port;
    tokio::spawn(async move {
        if let Err(e) = health::serve(health_port).await {
            error!(error = %e, port = health_port, "Health endpoint failed");
        }
    });

    info!(default_city = %config.default_city, "Bot started");

    run_repl(teloxide_bot, sender, chain).await
}
