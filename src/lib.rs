//! Weather tracker presentation layer
//!
//! Renders location and weather cards, drives the registration form and
//! serves both to the browser.

pub mod cards;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod register;
pub mod web;

// Re-export core types for public API
pub use cards::{Fragment, country_flag_emoji, location_card, weather_card, weather_icon_class};
pub use config::WeatherTrackerConfig;
pub use error::WeatherTrackerError;
pub use models::{Location, WeatherLocation, WeatherState};
pub use register::{
    ApiClient, RegisterFormController, RegistrationClient, RegistrationForm, RegistrationPayload,
    SubmitOutcome,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherTrackerError>;
