use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Form, Json, Router,
    extract::{State, rejection::JsonRejection},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::cards::{self, Fragment};
use crate::config::WeatherTrackerConfig;
use crate::models::{Location, WeatherLocation};
use crate::register::{ApiClient, RegisterFormController, RegistrationForm, SubmitOutcome};
use crate::WeatherTrackerError;

#[derive(Clone)]
pub struct AppState {
    client: ApiClient,
    login_path: Arc<str>,
}

impl AppState {
    pub fn new(client: ApiClient, login_path: &str) -> Self {
        Self {
            client,
            login_path: Arc::from(login_path),
        }
    }

    fn controller(&self) -> RegisterFormController<ApiClient> {
        RegisterFormController::new(self.client.clone(), self.login_path.as_ref())
    }
}

impl IntoResponse for Fragment {
    fn into_response(self) -> Response {
        Html(self.into_string()).into_response()
    }
}

impl IntoResponse for WeatherTrackerError {
    fn into_response(self) -> Response {
        tracing::warn!("Request failed: {self}");
        let body = Json(json!({ "message": self.user_message() }));
        (self.status_code(), body).into_response()
    }
}

pub fn router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/register", get(register_page).post(submit_registration))
        .route("/cards/weather", post(render_weather_cards))
        .route("/cards/locations", post(render_location_cards))
        .fallback_service(ServeDir::new(static_dir))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(cors))
        .with_state(state)
}

pub async fn run(config: &WeatherTrackerConfig) -> Result<()> {
    let client = ApiClient::new(&config.api)?;
    tracing::info!("Registering users through {}", client.register_url());

    let app = router(
        AppState::new(client, &config.api.login_path),
        &config.server.static_dir,
    );

    let addr = config.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server stopped unexpectedly")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

async fn register_page(State(state): State<AppState>) -> Fragment {
    state.controller().page().render()
}

async fn submit_registration(
    State(state): State<AppState>,
    Form(form): Form<RegistrationForm>,
) -> Response {
    let mut controller = state.controller();
    match controller.submit(form).await {
        SubmitOutcome::Redirected { location } => Redirect::to(&location).into_response(),
        _ => controller.page().render().into_response(),
    }
}

impl From<JsonRejection> for WeatherTrackerError {
    fn from(rejection: JsonRejection) -> Self {
        WeatherTrackerError::validation(rejection.body_text())
    }
}

async fn render_weather_cards(
    payload: Result<Json<Vec<WeatherLocation>>, JsonRejection>,
) -> Result<Fragment, WeatherTrackerError> {
    let Json(locations) = payload?;
    for weather in &locations {
        weather.location.validate()?;
    }
    Ok(cards::weather_cards(&locations))
}

async fn render_location_cards(
    payload: Result<Json<Vec<Location>>, JsonRejection>,
) -> Result<Fragment, WeatherTrackerError> {
    let Json(locations) = payload?;
    for location in &locations {
        location.validate()?;
    }
    Ok(cards::location_cards(&locations))
}
