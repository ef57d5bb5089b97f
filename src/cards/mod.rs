//! Card rendering
//!
//! Turns location and weather records into detached HTML fragments. Every
//! function here is pure: it reads its input and returns markup.
//!
//! Actions on a card are bound to the page's `addLocation` and
//! `deleteLocation` functions, keyed by name, latitude and longitude.

pub mod flag;
pub mod icons;
pub mod markup;

pub use flag::{GLOBE_FALLBACK, country_flag_emoji};
pub use icons::{DEFAULT_ICON_CLASS, weather_icon_class};
pub use markup::round_half_up;

use std::fmt;

use markup::{collaborator_call, escape_html, format_number};

use crate::models::{Location, WeatherLocation};

const COLUMN_CLASS: &str = "col-12 col-lg-3 col-md-6 mb-4";
const NOT_AVAILABLE: &str = "N/A";

/// A piece of rendered markup, not yet attached to any page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment(String);

impl Fragment {
    #[must_use]
    pub fn new(markup: String) -> Self {
        Self(markup)
    }

    /// Wrap a card body in its grid column
    fn column(body: &str) -> Self {
        Self(format!("<div class=\"{COLUMN_CLASS}\">{body}</div>"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Signed `feels - actual` label, e.g. `+2°` or `-3°`; empty when equal
#[must_use]
pub fn temperature_difference_text(weather: &WeatherLocation) -> String {
    match weather.temperature_difference() {
        0 => String::new(),
        difference if difference > 0 => format!("+{difference}°"),
        difference => format!("{difference}°"),
    }
}

/// Card for a tracked location with its current weather
#[must_use]
pub fn weather_card(weather: &WeatherLocation) -> Fragment {
    let location = &weather.location;
    let icon_class = weather_icon_class(weather.main_state.as_deref());
    let flag = country_flag_emoji(location.country.as_deref());
    let delete = collaborator_call(
        "deleteLocation",
        &location.name,
        location.latitude,
        location.longitude,
    );

    let difference = temperature_difference_text(weather);
    let difference_badge = if difference.is_empty() {
        String::new()
    } else {
        format!(" <span class=\"temp-difference\">{difference}</span>")
    };

    let body = format!(
        r#"<div class="card h-100 weather-card">
    <div class="position-absolute" style="top: 12px; right: 12px;">
        <button class="btn-close" onclick="{delete}" aria-label="Delete">
            <i class="fas fa-times"></i>
        </button>
    </div>
    <div class="card-body">
        <h2 class="weather-temp">{temperature}°{difference_badge}</h2>
        <div class="d-flex justify-content-between align-items-center mb-1">
            <h3 class="location-name mb-0">{name} <span class="flag-emoji">{flag}</span></h3>
            <div class="weather-icon ms-2">
                <i class="{icon_class}"></i>
            </div>
        </div>
        <div class="info-section">
            <div class="info-row">
                <span class="info-label">Feels like</span>
                <span>{feels}°</span>
            </div>
            <div class="info-row">
                <span class="info-label">Humidity</span>
                <span>{humidity}%</span>
            </div>
            <div class="info-row">
                <span class="info-label">Wind</span>
                <span>{wind} m/s</span>
            </div>
        </div>
    </div>
</div>"#,
        temperature = round_half_up(weather.temperature),
        name = escape_html(&location.name),
        flag = escape_html(&flag),
        feels = format_number(weather.temperature_feels),
        humidity = format_number(weather.humidity),
        wind = format_number(weather.wind_speed),
    );

    Fragment::column(&body)
}

/// Card for a search result that can be added to the tracked list
#[must_use]
pub fn location_card(location: &Location) -> Fragment {
    let flag = country_flag_emoji(location.country.as_deref());
    let add = collaborator_call(
        "addLocation",
        &location.name,
        location.latitude,
        location.longitude,
    );

    let body = format!(
        r#"<div class="card h-100 location-card">
    <div class="card-body d-flex flex-column">
        <h5 class="location-name">{name} <span class="flag-emoji">{flag}</span></h5>
        <div class="info-section">
            <div class="info-row">
                <span class="info-label">Latitude</span>
                <span>{latitude}</span>
            </div>
            <div class="info-row">
                <span class="info-label">Longitude</span>
                <span>{longitude}</span>
            </div>
            <div class="info-row">
                <span class="info-label">Country</span>
                <span>{country}</span>
            </div>
            <div class="info-row">
                <span class="info-label">State</span>
                <span>{state}</span>
            </div>
        </div>
        <div class="mt-auto pt-4">
            <button class="btn w-100" onclick="{add}">Add</button>
        </div>
    </div>
</div>"#,
        name = escape_html(&location.name),
        flag = escape_html(&flag),
        latitude = format_number(location.latitude),
        longitude = format_number(location.longitude),
        country = escape_html(or_not_available(location.country.as_deref())),
        state = escape_html(or_not_available(location.state.as_deref())),
    );

    Fragment::column(&body)
}

/// Grid of weather cards for the tracked locations page
#[must_use]
pub fn weather_cards(locations: &[WeatherLocation]) -> Fragment {
    grid(locations.iter().map(weather_card))
}

/// Grid of location cards for the search results page
#[must_use]
pub fn location_cards(locations: &[Location]) -> Fragment {
    grid(locations.iter().map(location_card))
}

fn grid(cards: impl Iterator<Item = Fragment>) -> Fragment {
    let mut markup = String::from("<div class=\"row\">");
    for card in cards {
        markup.push_str(card.as_str());
    }
    markup.push_str("</div>");
    Fragment(markup)
}

fn or_not_available(value: Option<&str>) -> &str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => NOT_AVAILABLE,
    }
}
