//! Bot config, loaded once from environment variables at startup and treated
//! as immutable for the process lifetime.

use anyhow::Result;
use std::env;

pub const DEFAULT_CITY: &str = "Saint Petersburg";
const DEFAULT_HEALTH_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    /// API_KEY — OpenWeatherMap key. Required.
    pub api_key: String,
    /// BOT_TOKEN — Telegram bot token. Required.
    pub bot_token: String,
    /// DEFAULT_CITY — city used by /start, /help and /weather.
    pub default_city: String,
    /// PORT — health endpoint bind port.
    pub health_port: u16,
    /// WEATHER_API_URL — optional OpenWeather base-URL override (tests point
    /// it at a mock server).
    pub weather_api_url: Option<String>,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL — optional Bot API base URL.
    pub telegram_api_url: Option<String>,
}

impl Config {
    /// Load from environment variables. `token` overrides BOT_TOKEN if
    /// provided. Missing or empty API_KEY/BOT_TOKEN is a fatal error.
    pub fn load(token: Option<String>) -> Result<Self> {
        let api_key = env::var("API_KEY").unwrap_or_default();
        if api_key.is_empty() {
            anyhow::bail!("API_KEY is not set (put the OpenWeatherMap key in .env or the environment)");
        }

        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").unwrap_or_default(),
        };
        if bot_token.is_empty() {
            anyhow::bail!("BOT_TOKEN is not set (put the Telegram bot token in .env or the environment)");
        }

        let default_city = env::var("DEFAULT_CITY")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CITY.to_string());

        let health_port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_HEALTH_PORT);

        let weather_api_url = env::var("WEATHER_API_URL").ok();
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            api_key,
            bot_token,
            default_city,
            health_port,
            weather_api_url,
            telegram_api_url,
        })
    }
}
