//! Backend registration endpoint

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::RegistrationPayload;
use crate::config::ApiConfig;
use crate::{Result, WeatherTrackerError};

/// Status and raw body of a completed registration request. The body is
/// only read for non-success statuses.
#[derive(Debug, Clone)]
pub struct RegistrationResponse {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl RegistrationResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The `message` field of a JSON error body, if there is a non-empty one
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty())
    }
}

/// Sends registration requests. `Err` means the request never completed.
#[async_trait]
pub trait RegistrationClient: Send + Sync {
    async fn register(&self, payload: &RegistrationPayload) -> Result<RegistrationResponse>;
}

/// HTTP client for the backend API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    register_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("weather-tracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WeatherTrackerError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            register_url: config.register_url(),
        })
    }

    #[must_use]
    pub fn register_url(&self) -> &str {
        &self.register_url
    }
}

#[async_trait]
impl RegistrationClient for ApiClient {
    #[instrument(name = "register", skip(self, payload), fields(login = %payload.login))]
    async fn register(&self, payload: &RegistrationPayload) -> Result<RegistrationResponse> {
        let response = self
            .client
            .post(&self.register_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| WeatherTrackerError::api(format!("Registration request failed: {e}")))?;

        let status = response.status();
        debug!(%status, "Registration endpoint answered");
        if status.is_success() {
            return Ok(RegistrationResponse::new(status, String::new()));
        }

        // A broken error body still leaves a definite rejection
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(%status, error = %e, "Failed to read registration error body");
                String::new()
            }
        };
        Ok(RegistrationResponse { status, body })
    }
}
