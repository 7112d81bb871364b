//! Serde model of the OpenWeatherMap current-weather payload.
//! Only the fields the report consumes are declared.

use serde::Deserialize;

/// The current-weather payload, minus the top-level `cod` status field which
/// is checked before deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    /// Resolved location name.
    pub name: String,
    pub weather: Vec<Condition>,
    pub main: MainReadings,
    /// Missing in some payloads; wind speed then defaults to 0.
    #[serde(default)]
    pub wind: Wind,
    pub sys: Sys,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    /// Condition category, e.g. "Clear", "Rain". Keys the icon table.
    pub main: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u8,
    /// Sea-level pressure, hPa.
    pub pressure: u32,
    /// Ground-level pressure, hPa; only some stations report it.
    pub grnd_level: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sys {
    /// Sunset time, unix epoch seconds.
    pub sunset: i64,
}
