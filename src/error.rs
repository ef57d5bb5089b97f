//! Error types and handling for the weather tracker presentation layer

use axum::http::StatusCode;
use thiserror::Error;

/// Main error type for the weather tracker
#[derive(Error, Debug)]
pub enum WeatherTrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Backend API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WeatherTrackerError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherTrackerError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            WeatherTrackerError::Api { .. } => {
                "Unable to reach the weather tracker API. Please try again later.".to_string()
            }
            WeatherTrackerError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            WeatherTrackerError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }

    /// HTTP status used when the error is answered to a browser
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            WeatherTrackerError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            WeatherTrackerError::Api { .. } => StatusCode::BAD_GATEWAY,
            WeatherTrackerError::Config { .. } | WeatherTrackerError::Io { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
