//! Turns a weather payload into the fixed-order Russian report block.

use chrono::{DateTime, Local};
use std::fmt::Write;

use crate::client::WeatherError;
use crate::model::CurrentWeather;

/// Display icon for a condition category; unknown categories get 🌤️.
pub fn condition_icon(category: &str) -> &'static str {
    match category {
        "Clear" => "☀️",
        "Clouds" => "☁️",
        "Rain" => "🌧️",
        "Drizzle" => "🌦️",
        "Thunderstorm" => "⛈️",
        "Snow" => "❄️",
        "Mist" | "Fog" | "Haze" | "Dust" | "Sand" => "🌫️",
        "Ash" => "🌋",
        "Squall" => "💨",
        "Tornado" => "🌪️",
        _ => "🌤️",
    }
}

/// Formats the report. Temperatures pass through unrounded; the ground-level
/// pressure line appears only when the payload carries the field; sunset is
/// rendered as local wall-clock HH:MM:SS.
pub fn format_report(weather: &CurrentWeather) -> Result<String, WeatherError> {
    let condition = weather
        .weather
        .first()
        .ok_or(WeatherError::MissingField("weather"))?;
    let icon = condition_icon(&condition.main);

    let sunset = DateTime::from_timestamp(weather.sys.sunset, 0)
        .ok_or(WeatherError::InvalidTimestamp(weather.sys.sunset))?
        .with_timezone(&Local)
        .format("%H:%M:%S");

    let mut out = String::new();
    let _ = writeln!(out, "{icon} **Погода в {}**\n", weather.name);
    let _ = writeln!(
        out,
        "• **Описание:** {}",
        capitalize_first(&condition.description)
    );
    let _ = writeln!(out, "• **Температура:** {} °C", weather.main.temp);
    let _ = writeln!(out, "• **Ощущается как:** {} °C", weather.main.feels_like);
    let _ = writeln!(out, "• **Влажность:** {}%", weather.main.humidity);
    let _ = writeln!(out, "• **Давление:** {} гПа", weather.main.pressure);
    if let Some(grnd_level) = weather.main.grnd_level {
        let _ = writeln!(out, "• **Давление у земли:** {} гПа", grnd_level);
    }
    let _ = writeln!(out, "• **Скорость ветра:** {} м/с", weather.wind.speed);
    let _ = writeln!(out, "• **Закат:** {}", sunset);

    Ok(out)
}

/// Upper-cases the first character only; the rest passes through as-is.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
