//! Submission handling for the registration form

use tracing::{info, warn};

use super::page::RegisterPage;
use super::{RegistrationClient, RegistrationForm, RegistrationPayload};

pub const PASSWORD_MISMATCH: &str = "Passwords don't match.";
pub const REGISTRATION_FAILED: &str = "Registration failed.";
pub const TRANSPORT_FAILURE: &str = "An error occurred. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
}

/// The page's single error container. Displaying replaces its text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    message: Option<String>,
}

impl ErrorBanner {
    pub fn display(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn remove(&mut self) {
        self.message = None;
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// How a submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Registered; the browser goes to `location`
    Redirected { location: String },
    /// Passwords differ; nothing was sent
    PasswordMismatch,
    /// The backend refused; `message` is what the banner shows
    Rejected { message: String },
    /// The request never completed
    TransportFailed,
}

pub struct RegisterFormController<C> {
    client: C,
    login_path: String,
    state: FormState,
    banner: ErrorBanner,
    username: String,
    repeat_password_invalid: bool,
    location: Option<String>,
}

impl<C: RegistrationClient> RegisterFormController<C> {
    pub fn new(client: C, login_path: impl Into<String>) -> Self {
        Self {
            client,
            login_path: login_path.into(),
            state: FormState::Idle,
            banner: ErrorBanner::default(),
            username: String::new(),
            repeat_password_invalid: false,
            location: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }

    #[must_use]
    pub fn banner(&self) -> &ErrorBanner {
        &self.banner
    }

    #[must_use]
    pub fn is_repeat_password_invalid(&self) -> bool {
        self.repeat_password_invalid
    }

    /// Where the browser was sent, once registration succeeded
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn display_error(&mut self, message: impl Into<String>) {
        self.banner.display(message);
    }

    pub fn remove_error(&mut self) {
        self.banner.remove();
    }

    /// Current view of the form
    #[must_use]
    pub fn page(&self) -> RegisterPage<'_> {
        RegisterPage::new(
            &self.banner,
            &self.username,
            self.repeat_password_invalid,
            &self.login_path,
        )
    }

    /// Handle one submission of the form. The controller is `Idle` again
    /// when this returns, whatever the outcome.
    pub async fn submit(&mut self, form: RegistrationForm) -> SubmitOutcome {
        self.state = FormState::Submitting;
        let outcome = self.process(form).await;
        self.state = FormState::Idle;
        outcome
    }

    async fn process(&mut self, form: RegistrationForm) -> SubmitOutcome {
        self.remove_error();
        self.repeat_password_invalid = false;

        self.username = form.username.trim().to_string();
        if form.password != form.repeat_password {
            self.display_error(PASSWORD_MISMATCH);
            self.repeat_password_invalid = true;
            return SubmitOutcome::PasswordMismatch;
        }

        let payload = RegistrationPayload {
            login: self.username.clone(),
            password: form.password,
        };

        match self.client.register(&payload).await {
            Ok(response) if response.is_success() => {
                info!(login = %payload.login, "User registered");
                let location = self.login_path.clone();
                self.location = Some(location.clone());
                SubmitOutcome::Redirected { location }
            }
            Ok(response) => {
                let message = response
                    .error_message()
                    .unwrap_or_else(|| REGISTRATION_FAILED.to_string());
                warn!(login = %payload.login, status = %response.status, %message, "Registration rejected");
                self.display_error(message.clone());
                SubmitOutcome::Rejected { message }
            }
            Err(e) => {
                warn!(login = %payload.login, error = %e, "Registration request failed");
                self.display_error(TRANSPORT_FAILURE);
                SubmitOutcome::TransportFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::RegistrationResponse;
    use crate::{Result, WeatherTrackerError};
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    enum Reply {
        Status(StatusCode, &'static str),
        Unreachable,
    }

    /// Answers every request with a fixed reply and records what was sent
    struct ScriptedClient {
        reply: Reply,
        sent: Mutex<Vec<RegistrationPayload>>,
    }

    impl ScriptedClient {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<RegistrationPayload> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl<'a> RegistrationClient for &'a ScriptedClient {
        async fn register(&self, payload: &RegistrationPayload) -> Result<RegistrationResponse> {
            self.sent.lock().unwrap().push(payload.clone());
            match self.reply {
                Reply::Status(status, body) => Ok(RegistrationResponse::new(status, body)),
                Reply::Unreachable => Err(WeatherTrackerError::api("connection refused")),
            }
        }
    }

    #[tokio::test]
    async fn test_password_mismatch_sends_nothing() {
        let client = ScriptedClient::new(Reply::Status(StatusCode::OK, ""));
        let mut controller = RegisterFormController::new(&client, "/login");

        let outcome = controller
            .submit(RegistrationForm::new("alice", "a", "b"))
            .await;

        assert_eq!(outcome, SubmitOutcome::PasswordMismatch);
        assert!(client.sent().is_empty());
        assert_eq!(controller.banner().message(), Some("Passwords don't match."));
        assert!(controller.is_repeat_password_invalid());
        assert_eq!(controller.state(), FormState::Idle);
        assert!(controller.location().is_none());
    }

    #[tokio::test]
    async fn test_success_redirects_to_login() {
        let client = ScriptedClient::new(Reply::Status(StatusCode::OK, ""));
        let mut controller = RegisterFormController::new(&client, "/login");

        let outcome = controller
            .submit(RegistrationForm::new("  alice  ", " pass word1 ", " pass word1 "))
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Redirected {
                location: "/login".to_string()
            }
        );
        assert_eq!(controller.location(), Some("/login"));
        assert!(controller.banner().message().is_none());

        let sent = client.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].login, "alice");
        assert_eq!(sent[0].password, " pass word1 ");
    }

    #[tokio::test]
    async fn test_rejection_shows_server_message() {
        let client = ScriptedClient::new(Reply::Status(
            StatusCode::CONFLICT,
            r#"{"message":"login taken"}"#,
        ));
        let mut controller = RegisterFormController::new(&client, "/login");

        let outcome = controller
            .submit(RegistrationForm::new("alice", "password1", "password1"))
            .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "login taken".to_string()
            }
        );
        assert_eq!(controller.banner().message(), Some("login taken"));
        assert_eq!(controller.state(), FormState::Idle);
        assert!(controller.location().is_none());
    }

    #[tokio::test]
    async fn test_rejection_without_message_uses_fallback() {
        let client = ScriptedClient::new(Reply::Status(StatusCode::INTERNAL_SERVER_ERROR, "oops"));
        let mut controller = RegisterFormController::new(&client, "/login");

        controller
            .submit(RegistrationForm::new("alice", "password1", "password1"))
            .await;

        assert_eq!(controller.banner().message(), Some("Registration failed."));
    }

    #[tokio::test]
    async fn test_transport_failure_uses_generic_message() {
        let client = ScriptedClient::new(Reply::Unreachable);
        let mut controller = RegisterFormController::new(&client, "/login");

        let outcome = controller
            .submit(RegistrationForm::new("alice", "password1", "password1"))
            .await;

        assert_eq!(outcome, SubmitOutcome::TransportFailed);
        assert_eq!(
            controller.banner().message(),
            Some("An error occurred. Please try again later.")
        );
        assert_eq!(controller.state(), FormState::Idle);
    }

    #[tokio::test]
    async fn test_resubmission_clears_previous_error() {
        let client = ScriptedClient::new(Reply::Status(StatusCode::OK, ""));
        let mut controller = RegisterFormController::new(&client, "/login");

        controller
            .submit(RegistrationForm::new("alice", "a", "b"))
            .await;
        assert!(controller.is_repeat_password_invalid());

        controller
            .submit(RegistrationForm::new("alice", "password1", "password1"))
            .await;
        assert!(controller.banner().message().is_none());
        assert!(!controller.is_repeat_password_invalid());
        assert_eq!(client.sent().len(), 1);
    }

    #[test]
    fn test_display_error_twice_keeps_one_container() {
        let client = ScriptedClient::new(Reply::Unreachable);
        let mut controller = RegisterFormController::new(&client, "/login");

        controller.display_error("first");
        controller.display_error("second");

        let page = controller.page().render().into_string();
        assert_eq!(page.matches("id=\"error-container\"").count(), 1);
        assert!(page.contains(">second</div>"));
        assert!(!page.contains(">first<"));

        controller.remove_error();
        assert!(!controller.page().render().as_str().contains("error-container"));
    }
}
