//! Free-text handler: the whole message is treated as a city name.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use bot_core::{Bot, Handler, HandlerResponse, Message, Reply, Result};
use weather_client::{weather_reply, WeatherClient};

/// Terminal handler of the chain: looks up the weather for the message text.
/// Commands never reach it; they are consumed by [`super::CommandHandler`].
pub struct CityHandler {
    client: Arc<WeatherClient>,
    bot: Arc<dyn Bot>,
}

impl CityHandler {
    pub fn new(client: Arc<WeatherClient>, bot: Arc<dyn Bot>) -> Self {
        Self { client, bot }
    }
}

#[async_trait]
impl Handler for CityHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let city = message.content.trim();
        if city.is_empty() {
            return Ok(HandlerResponse::Stop);
        }

        // Best effort; a failed typing action must not block the reply.
        if let Err(e) = self.bot.send_typing(&message.chat).await {
            warn!(error = %e, chat_id = message.chat.id, "Failed to send typing action");
        }

        let reply = weather_reply(&self.client, city).await;
        Ok(HandlerResponse::Reply(Reply::markdown(reply)))
    }
}
