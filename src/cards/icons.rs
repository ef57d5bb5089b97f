//! Weather category to icon font class

use crate::models::WeatherState;

/// Used for `Clear` and for every category outside the table
pub const DEFAULT_ICON_CLASS: &str = "wi wi-day-sunny";

#[must_use]
pub fn icon_class(state: WeatherState) -> &'static str {
    match state {
        WeatherState::Clear => DEFAULT_ICON_CLASS,
        WeatherState::Clouds => "wi wi-cloudy",
        WeatherState::Snow => "wi wi-snow",
        WeatherState::Rain => "wi wi-rain",
        WeatherState::Drizzle => "wi wi-sprinkle",
        WeatherState::Thunderstorm => "wi wi-thunderstorm",
        WeatherState::Mist => "wi wi-fog",
    }
}

/// Icon class for a raw `mainState` value. Never fails.
#[must_use]
pub fn weather_icon_class(main_weather: Option<&str>) -> &'static str {
    main_weather
        .and_then(WeatherState::from_main)
        .map_or(DEFAULT_ICON_CLASS, icon_class)
}
