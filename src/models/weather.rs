//! Current weather for a tracked location

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::{Location, number_from_any};

/// Weather categories reported by the backend as `mainState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum WeatherState {
    Clear,
    Clouds,
    Snow,
    Rain,
    Drizzle,
    Thunderstorm,
    Mist,
}

impl WeatherState {
    /// Parse the backend's category name. Matching is case-sensitive.
    #[must_use]
    pub fn from_main(main: &str) -> Option<Self> {
        main.parse().ok()
    }
}

/// A tracked location together with its current weather
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherLocation {
    #[serde(flatten)]
    pub location: Location,
    /// Temperature in Celsius
    #[serde(deserialize_with = "number_from_any")]
    pub temperature: f64,
    /// Apparent temperature in Celsius
    #[serde(deserialize_with = "number_from_any")]
    pub temperature_feels: f64,
    /// Relative humidity in percent
    #[serde(deserialize_with = "number_from_any")]
    pub humidity: f64,
    /// Wind speed in m/s
    #[serde(deserialize_with = "number_from_any")]
    pub wind_speed: f64,
    /// Raw category name; anything outside [`WeatherState`] is unknown
    #[serde(default)]
    pub main_state: Option<String>,
}

impl WeatherLocation {
    /// Rounded `feels - actual`, in whole degrees
    #[must_use]
    pub fn temperature_difference(&self) -> i64 {
        crate::cards::round_half_up(self.temperature_feels - self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn sample() -> WeatherLocation {
        WeatherLocation {
            location: Location::new("Berlin", 52.52, 13.405).with_country("DE"),
            temperature: 12.4,
            temperature_feels: 10.1,
            humidity: 81.0,
            wind_speed: 4.0,
            main_state: Some("Rain".to_string()),
        }
    }

    #[test]
    fn test_deserialize_weather_response() {
        let json = r#"{
            "name": "Berlin",
            "latitude": "52.52",
            "longitude": "13.405",
            "country": "DE",
            "state": null,
            "temperature": 12,
            "mainState": "Rain",
            "windSpeed": 4,
            "temperatureFeels": 10,
            "humidity": 81
        }"#;
        let weather: WeatherLocation = serde_json::from_str(json).unwrap();
        assert_eq!(weather.location.name, "Berlin");
        assert_eq!(weather.location.latitude, 52.52);
        assert_eq!(weather.temperature, 12.0);
        assert_eq!(weather.temperature_feels, 10.0);
        assert_eq!(weather.wind_speed, 4.0);
        assert_eq!(weather.main_state.as_deref(), Some("Rain"));
    }

    #[test]
    fn test_missing_main_state_is_unknown() {
        let json = r#"{"name":"X","latitude":1,"longitude":2,"temperature":1,"temperatureFeels":1,"humidity":1,"windSpeed":1}"#;
        let weather: WeatherLocation = serde_json::from_str(json).unwrap();
        assert!(weather.main_state.is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["temperatureFeels"], 10.1);
        assert_eq!(value["windSpeed"], 4.0);
        assert_eq!(value["mainState"], "Rain");
        assert_eq!(value["name"], "Berlin");
    }

    #[test]
    fn test_state_names_round_trip_through_parser() {
        for state in WeatherState::iter() {
            assert_eq!(WeatherState::from_main(&state.to_string()), Some(state));
        }
        assert_eq!(WeatherState::from_main("rain"), None);
        assert_eq!(WeatherState::from_main(""), None);
    }

    #[test]
    fn test_temperature_difference() {
        let mut weather = sample();
        assert_eq!(weather.temperature_difference(), -2);

        weather.temperature_feels = 14.0;
        assert_eq!(weather.temperature_difference(), 2);

        weather.temperature_feels = 12.6;
        assert_eq!(weather.temperature_difference(), 0);
    }
}
