//! Location model for geographic coordinates and metadata

use serde::{Deserialize, Serialize};

use super::number_from_any;
use crate::{Result, WeatherTrackerError};

/// A named place as returned by the location search and the tracked list
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Location name (city, region, etc.)
    pub name: String,
    /// Latitude in decimal degrees
    #[serde(deserialize_with = "number_from_any")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(deserialize_with = "number_from_any")]
    pub longitude: f64,
    /// Country code (ISO 3166-1 alpha-2)
    #[serde(default)]
    pub country: Option<String>,
    /// State or region, when the geocoder knows it
    #[serde(default)]
    pub state: Option<String>,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            country: None,
            state: None,
        }
    }

    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Check that the location can be rendered and sent back to the backend
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(WeatherTrackerError::validation(
                "Location name cannot be empty",
            ));
        }

        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(WeatherTrackerError::validation(format!(
                "Latitude {} of '{}' is outside [-90, 90]",
                self.latitude, self.name
            )));
        }

        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(WeatherTrackerError::validation(format!(
                "Longitude {} of '{}' is outside [-180, 180]",
                self.longitude, self.name
            )));
        }

        Ok(())
    }
}
