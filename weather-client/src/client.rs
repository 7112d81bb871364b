//! HTTP client for the OpenWeatherMap current-weather endpoint.
//!
//! One GET per call, no retries, no caching. Failures classify into
//! [`WeatherError`] variants that the reply layer maps to canned messages.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::model::CurrentWeather;

const DEFAULT_API_BASE: &str = "https://api.openweathermap.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("weather provider returned status {0}")]
    Status(StatusCode),

    #[error("city not found: {city}")]
    CityNotFound { city: String },

    #[error("malformed weather payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("weather payload missing field: {0}")]
    MissingField(&'static str),

    #[error("sunset timestamp out of range: {0}")]
    InvalidTimestamp(i64),
}

/// OpenWeatherMap client bound to one API key.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl WeatherClient {
    /// Creates a client with a bounded request timeout. `base_url` overrides
    /// the API host (tests point it at a mock server).
    pub fn new(api_key: String, base_url: Option<String>) -> Result<Self, WeatherError> {
        let base = base_url.unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            api_key,
            endpoint: format!("{}/data/2.5/weather", base.trim_end_matches('/')),
            http,
        })
    }

    /// Fetches current weather for the given city, metric units, Russian
    /// descriptions. The upstream API is authoritative on city validity.
    pub async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", "ru"),
            ])
            .send()
            .await?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Err(WeatherError::CityNotFound {
                city: city.to_string(),
            });
        }
        if !status.is_success() {
            return Err(WeatherError::Status(status));
        }

        let body: Value = serde_json::from_str(&res.text().await?)?;
        if !cod_is_success(&body) {
            return Err(WeatherError::CityNotFound {
                city: city.to_string(),
            });
        }

        Ok(serde_json::from_value(body)?)
    }
}

/// The provider embeds its own status in the body; 200 is success. It arrives
/// as a number on success and as a string on errors.
fn cod_is_success(body: &Value) -> bool {
    match body.get("cod") {
        Some(Value::Number(n)) => n.as_i64() == Some(200),
        Some(Value::String(s)) => s == "200",
        _ => false,
    }
}
