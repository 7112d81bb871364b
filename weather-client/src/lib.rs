//! # weather-client
//!
//! OpenWeatherMap "current weather" client plus the report formatter that
//! turns a payload into the Russian text block the bot replies with.
//!
//! The crate has two surfaces:
//! - [`WeatherClient::fetch_current`] returns a typed payload or a
//!   [`WeatherError`];
//! - [`weather_reply`] never fails: every error kind maps to a canned
//!   user-facing message, with the cause logged.

pub mod client;
pub mod format;
pub mod model;
pub mod reply;

pub use client::{WeatherClient, WeatherError};
pub use format::format_report;
pub use model::CurrentWeather;
pub use reply::weather_reply;
