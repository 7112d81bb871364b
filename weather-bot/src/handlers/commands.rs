//! Command handler: /start, /help, /weather, and the unknown-command reply.
//! Anything not starting with the command marker passes through to the next
//! handler in the chain.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use bot_core::{Bot, Handler, HandlerResponse, Message, Reply, Result};
use weather_client::{weather_reply, WeatherClient};

pub const UNKNOWN_COMMAND_REPLY: &str = "❓ Извините, я не понимаю эту команду.\n\
Используйте /help для просмотра доступных команд.";

/// Routes command messages. `/weather` shares the weather reply path with the
/// free-text handler; the other commands are static templates.
pub struct CommandHandler {
    client: Arc<WeatherClient>,
    bot: Arc<dyn Bot>,
    default_city: String,
}

impl CommandHandler {
    pub fn new(client: Arc<WeatherClient>, bot: Arc<dyn Bot>, default_city: String) -> Self {
        Self {
            client,
            bot,
            default_city,
        }
    }

    fn welcome(&self, name: &str) -> String {
        format!(
            "👋 Привет, {name}!\n\n\
             Я бот погоды! Я могу показать тебе текущую погоду в любом городе.\n\n\
             📋 Доступные команды:\n\
             /start - Начать работу\n\
             /weather - Погода в {city}\n\
             /help - Помощь\n\n\
             🌍 Или просто напиши название города, и я покажу погоду там!",
            city = self.default_city,
        )
    }

    fn help(&self) -> String {
        format!(
            "📖 Помощь по боту:\n\n\
             • Используй /weather для получения погоды в {city}\n\
             • Напиши название любого города для получения погоды там\n\
             • Пример: \"Москва\", \"London\", \"Париж\"\n\n\
             🌤️ Бот использует данные OpenWeatherMap",
            city = self.default_city,
        )
    }
}

/// Extracts the leading command token, with any `@botname` suffix stripped.
/// Returns None when the text does not start with the command marker.
fn command_of(text: &str) -> Option<&str> {
    let first = text.split_whitespace().next()?;
    if !first.starts_with('/') {
        return None;
    }
    first.split('@').next()
}

#[async_trait]
impl Handler for CommandHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = command_of(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };

        let reply = match command {
            "/start" => Reply::plain(self.welcome(message.user.display_name())),
            "/help" => Reply::plain(self.help()),
            "/weather" => {
                if let Err(e) = self.bot.send_typing(&message.chat).await {
                    warn!(error = %e, chat_id = message.chat.id, "Failed to send typing action");
                }
                Reply::markdown(weather_reply(&self.client, &self.default_city).await)
            }
            _ => Reply::plain(UNKNOWN_COMMAND_REPLY),
        };

        Ok(HandlerResponse::Reply(reply))
    }
}
