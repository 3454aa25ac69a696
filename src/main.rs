//! # Fridge Logbook Main Entry Point
//!
//! Loads configuration, connects to the database when one is configured and
//! serves the API; without a database the service starts in demo mode.

use std::sync::Arc;

use anyhow::Context;
use fridge_logbook::{
    availability::ServiceMode,
    config::ConfigLoader,
    db,
    repositories::{FridgeRepository, TempLogRepository},
    server::{AppState, run_server},
    services::{FridgeRegistry, TemperatureLogRecorder},
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from layered env files and variables
    let config = ConfigLoader::new()
        .load()
        .context("Failed to load configuration")?;

    telemetry::init_tracing(&config)?;

    match config.redacted_json() {
        Ok(redacted_json) => tracing::info!(
            profile = %config.profile,
            config = %redacted_json,
            "Loaded configuration"
        ),
        Err(error) => tracing::warn!(%error, "Failed to render configuration"),
    }

    let config = Arc::new(config);
    let state = match ServiceMode::from_config(&config) {
        ServiceMode::Live => {
            let db = Arc::new(db::connect_live(&config).await?);

            let fridges = Arc::new(FridgeRepository::new(Arc::clone(&db)));
            let logs = Arc::new(TempLogRepository::new(db));

            AppState {
                registry: FridgeRegistry::live(fridges.clone(), config.default_band()),
                recorder: TemperatureLogRecorder::live(fridges, logs),
                config,
            }
        }
        ServiceMode::Demo => {
            tracing::warn!("No database configured, serving demo data; fridge changes are disabled");
            AppState::demo(config)
        }
    };

    run_server(state).await
}
