//! # API Handlers
//!
//! This module contains all the HTTP endpoint handlers for the fridge logbook.

use crate::models::ServiceInfo;
use crate::server::AppState;
use crate::voice_config::{VOICE_CONFIG, VoiceConfig};
use axum::{extract::State, response::Json};

pub mod fridges;
pub mod temperature_logs;
pub mod types;

/// Root handler that returns basic service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo::for_mode(state.mode()))
}

/// Timing constants for the voice logging assistant
#[utoipa::path(
    get,
    path = "/voice-config",
    responses(
        (status = 200, description = "Voice assistant timings, retry limits, debug flags and audio cues", body = VoiceConfig)
    ),
    tag = "configuration"
)]
pub async fn voice_config() -> Json<VoiceConfig> {
    Json(VOICE_CONFIG)
}
