//! Structured logging setup and the per-request trace ID.
//!
//! [`init_tracing`] installs a single global subscriber whose output format
//! follows `LOG_FORMAT`. Each HTTP request runs inside a [`TraceContext`]; its
//! ID ends up in the `x-trace-id` header and in every problem+json body.

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use log::LevelFilter;
use thiserror::Error;
use tokio::task_local;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt};

use crate::config::AppConfig;

/// Trace context carried by each HTTP request.
#[derive(Debug, Clone)]
pub struct TraceContext {
    pub trace_id: String,
}

impl TraceContext {
    /// Creates a context with a freshly generated 32-character trace ID.
    pub fn generate() -> Self {
        Self {
            trace_id: uuid::Uuid::new_v4().simple().to_string(),
        }
    }
}

task_local! {
    static REQUEST_TRACE: TraceContext;
}

#[derive(Debug, Error)]
pub enum TelemetryInitError {
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
    #[error("failed to bridge `log` records into tracing: {0}")]
    LogBridge(#[from] log::SetLoggerError),
}

/// Output format of the log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// `pretty` selects human-readable output; anything else logs JSON.
    pub fn from_config(config: &AppConfig) -> Self {
        match config.log_format.trim().to_ascii_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }

    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        match self {
            LogFormat::Pretty => fmt::layer().pretty().boxed(),
            LogFormat::Json => fmt::layer().json().boxed(),
        }
    }
}

static INSTALLED: Mutex<bool> = Mutex::new(false);

/// Installs the global subscriber once; later calls are no-ops.
///
/// `RUST_LOG` wins over the configured level. SeaORM and sqlx log through the
/// `log` crate, so those records are bridged into the same pipeline.
pub fn init_tracing(config: &AppConfig) -> Result<(), TelemetryInitError> {
    let mut installed = INSTALLED.lock().unwrap_or_else(PoisonError::into_inner);
    if *installed {
        return Ok(());
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let subscriber = Registry::default()
        .with(LogFormat::from_config(config).layer())
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;
    LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init()?;

    *installed = true;
    Ok(())
}

/// Runs `future` with `context` as the active request trace.
pub async fn with_trace_context<Fut, R>(context: TraceContext, future: Fut) -> R
where
    Fut: Future<Output = R>,
{
    REQUEST_TRACE.scope(context, future).await
}

/// Trace ID of the request the current task is serving, if any.
pub fn current_trace_id() -> Option<String> {
    REQUEST_TRACE.try_with(|ctx| ctx.trace_id.clone()).ok()
}
