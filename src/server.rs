//! # Server Configuration
//!
//! This module contains the router, shared state and OpenAPI document of the
//! fridge logbook API.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    extract::Request,
    http::HeaderValue,
    middleware::{self, Next},
    response::Response,
    routing::{get, patch},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::availability::ServiceMode;
use crate::config::AppConfig;
use crate::handlers;
use crate::services::{FridgeRegistry, TemperatureLogRecorder};
use crate::telemetry::{self, TraceContext};

/// Header carrying the per-request trace ID back to the caller
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub registry: FridgeRegistry,
    pub recorder: TemperatureLogRecorder,
}

impl AppState {
    /// State for a service without a database; every operation runs in demo mode.
    pub fn demo(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            registry: FridgeRegistry::demo(),
            recorder: TemperatureLogRecorder::demo(),
        }
    }

    pub fn mode(&self) -> ServiceMode {
        self.registry.mode()
    }
}

/// Runs each request inside a fresh trace context and echoes its ID.
async fn trace_context_middleware(request: Request, next: Next) -> Response {
    let context = TraceContext::generate();
    let trace_id = context.trace_id.clone();

    let mut response = telemetry::with_trace_context(context, next.run(request)).await;
    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert(TRACE_ID_HEADER, value);
    }
    response
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/voice-config", get(handlers::voice_config))
        .route(
            "/sites/{site_id}/fridges",
            get(handlers::fridges::list_fridges).post(handlers::fridges::create_fridge),
        )
        .route(
            "/fridges/{fridge_id}",
            patch(handlers::fridges::rename_fridge)
                .delete(handlers::fridges::deactivate_fridge),
        )
        .route(
            "/sites/{site_id}/temperature-logs",
            get(handlers::temperature_logs::list_temperature_logs)
                .post(handlers::temperature_logs::record_temperature),
        )
        .route(
            "/sites/{site_id}/fridges/{fridge_id}/temperature-logs/today",
            get(handlers::temperature_logs::todays_temperature_logs),
        )
        .route(
            "/sites/{site_id}/fridges/{fridge_id}/temperature-logs/latest",
            get(handlers::temperature_logs::latest_temperature_log),
        )
        .route(
            "/sites/{site_id}/fridges/{fridge_id}/logged-today",
            get(handlers::temperature_logs::logged_today),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(trace_context_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Starts the server with the given state
pub async fn run_server(state: AppState) -> anyhow::Result<()> {
    let addr = state
        .config
        .bind_addr()
        .context("Invalid server address")?;
    let profile = state.config.profile.clone();
    let mode = state.mode();

    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, %profile, mode = mode.as_str(), "Server listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::voice_config,
        crate::handlers::fridges::list_fridges,
        crate::handlers::fridges::create_fridge,
        crate::handlers::fridges::rename_fridge,
        crate::handlers::fridges::deactivate_fridge,
        crate::handlers::temperature_logs::record_temperature,
        crate::handlers::temperature_logs::list_temperature_logs,
        crate::handlers::temperature_logs::todays_temperature_logs,
        crate::handlers::temperature_logs::latest_temperature_log,
        crate::handlers::temperature_logs::logged_today,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::error::ApiError,
            crate::compliance::ComplianceBand,
            crate::handlers::fridges::FridgeInfo,
            crate::handlers::fridges::CreateFridgeRequest,
            crate::handlers::fridges::RenameFridgeRequest,
            crate::handlers::temperature_logs::TempLogInfo,
            crate::handlers::temperature_logs::RecordTemperatureRequest,
            crate::handlers::temperature_logs::LoggedTodayResponse,
            crate::voice_config::VoiceConfig,
        )
    ),
    tags(
        (name = "root", description = "Service information"),
        (name = "fridges", description = "Fridge registry"),
        (name = "temperature-logs", description = "Temperature readings and compliance checks"),
        (name = "configuration", description = "Client configuration")
    ),
    info(
        title = "Fridge Logbook API",
        description = "Fridge registry and temperature compliance logging for kitchens",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
