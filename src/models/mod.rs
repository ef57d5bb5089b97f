//! Data models for the weather tracker
//!
//! - Location: a named place with coordinates and optional country/state
//! - Weather: a tracked location with its current weather measurements

pub mod location;
pub mod weather;

pub use location::Location;
pub use weather::{WeatherLocation, WeatherState};

use serde::{Deserialize, Deserializer};

/// Accepts a JSON number or a numeric string.
///
/// The backend serializes coordinates as decimals, which arrive as strings.
pub(crate) fn number_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| serde::de::Error::custom(format!("invalid number: {text:?}"))),
    }
}
