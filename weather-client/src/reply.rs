//! The always-succeeding reply surface: every failure maps to a canned
//! user-facing message, the cause goes to the log.

use tracing::{error, warn};

use crate::client::{WeatherClient, WeatherError};
use crate::format::format_report;

pub const NETWORK_ERROR_REPLY: &str = "❌ Ошибка сети. Попробуйте позже.";
pub const PAYLOAD_ERROR_REPLY: &str = "❌ Не удалось обработать данные о погоде.";

fn not_found_reply(city: &str) -> String {
    format!("❌ Город '{city}' не найден. Попробуйте другое название.")
}

/// Fetches and formats the weather for `city`. Never fails at this interface:
/// network, not-found, and payload errors each become their canned message.
pub async fn weather_reply(client: &WeatherClient, city: &str) -> String {
    match client.fetch_current(city).await {
        Ok(weather) => match format_report(&weather) {
            Ok(report) => report,
            Err(e) => {
                error!(error = %e, city, "Failed to format weather payload");
                PAYLOAD_ERROR_REPLY.to_string()
            }
        },
        Err(WeatherError::CityNotFound { city }) => {
            warn!(%city, "City not found");
            not_found_reply(&city)
        }
        Err(e @ (WeatherError::Network(_) | WeatherError::Status(_))) => {
            error!(error = %e, city, "Weather request failed");
            NETWORK_ERROR_REPLY.to_string()
        }
        Err(e) => {
            error!(error = %e, city, "Failed to process weather payload");
            PAYLOAD_ERROR_REPLY.to_string()
        }
    }
}
