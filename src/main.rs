use std::path::PathBuf;

use anyhow::{Context, Result};
use weather_tracker::{WeatherTrackerConfig, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = WeatherTrackerConfig::load_from_path(config_path)
        .context("Failed to load configuration")?;

    let _log_guard = logging::init(&config.logging)?;
    tracing::info!(version = weather_tracker::VERSION, "Starting weather tracker");

    web::run(&config).await
}
