//! Registration form
//!
//! The controller reads the submitted fields, checks that both passwords
//! match, posts the credentials to the backend and turns the answer into
//! either a redirect to the login page or an error banner.

pub mod client;
pub mod controller;
pub mod page;

pub use client::{ApiClient, RegistrationClient, RegistrationResponse};
pub use controller::{
    ErrorBanner, FormState, PASSWORD_MISMATCH, REGISTRATION_FAILED, RegisterFormController,
    SubmitOutcome, TRANSPORT_FAILURE,
};
pub use page::RegisterPage;

use serde::{Deserialize, Serialize};

/// Field values as the page holds them
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default, rename = "repeat-password")]
    pub repeat_password: String,
}

impl RegistrationForm {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        repeat_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            repeat_password: repeat_password.into(),
        }
    }
}

/// Body of `POST /api/register`
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    pub login: String,
    pub password: String,
}

impl std::fmt::Debug for RegistrationPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationPayload")
            .field("login", &self.login)
            .field("password", &"***")
            .finish()
    }
}
