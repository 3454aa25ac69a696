//! # Temperature Log Handlers
//!
//! Endpoints for recording fridge readings and reading back a site's log
//! history, today's checks and the latest reading per fridge.

use axum::{
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::error::{ApiError, validation_error};
use crate::handlers::types::ApiResponse;
use crate::models::fridge_temp_log;
use crate::repositories::LogQuery;
use crate::server::AppState;
use crate::services::NewTempLog;

/// Upper bound accepted for the `limit` query parameter
const MAX_LOG_LIMIT: u64 = 1000;

/// Temperature log information for API responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TempLogInfo {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    #[schema(example = "7f1c2a4e-3b5d-4c6e-8f9a-0b1c2d3e4f5a")]
    pub site_id: String,
    #[schema(example = "0d3e0000-0000-4000-8000-000000000001")]
    pub fridge_id: String,
    /// Reading in degrees Celsius
    #[schema(example = 3.5)]
    pub temperature: f64,
    /// Staff member who took the reading
    pub recorded_by: Option<String>,
    #[schema(example = "Sam")]
    pub recorded_by_name: Option<String>,
    pub notes: Option<String>,
    /// Whether the reading was inside the fridge's band when recorded
    pub is_compliant: bool,
    /// Recording timestamp (RFC 3339)
    #[schema(example = "2026-10-01T08:00:00Z")]
    pub created_at: String,
}

impl From<fridge_temp_log::Model> for TempLogInfo {
    fn from(model: fridge_temp_log::Model) -> Self {
        Self {
            id: model.id.to_string(),
            site_id: model.site_id.to_string(),
            fridge_id: model.fridge_id.to_string(),
            temperature: model.temperature,
            recorded_by: model.recorded_by.map(|id| id.to_string()),
            recorded_by_name: model.recorded_by_name,
            notes: model.notes,
            is_compliant: model.is_compliant,
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

/// Request payload for recording a reading
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecordTemperatureRequest {
    /// Fridge the reading was taken from
    pub fridge_id: Uuid,
    /// Reading in degrees Celsius
    #[schema(example = 3.5)]
    pub temperature: f64,
    pub recorded_by: Option<Uuid>,
    #[schema(example = "Sam")]
    pub recorded_by_name: Option<String>,
    #[schema(example = "Door left open during delivery")]
    pub notes: Option<String>,
}

/// Query parameters for listing temperature logs
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ListTempLogsQuery {
    /// Only logs of this fridge (UUID)
    pub fridge_id: Option<String>,
    /// Only logs recorded at or after this timestamp (RFC3339)
    pub start: Option<String>,
    /// Only logs recorded at or before this timestamp (RFC3339)
    pub end: Option<String>,
    /// Maximum number of logs to return (1 to 1000, default: all)
    pub limit: Option<u64>,
}

/// Response payload for the logged-today check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoggedTodayResponse {
    /// Whether the fridge has at least one reading since local midnight
    pub logged_today: bool,
}

fn parse_timestamp(field: &str, value: Option<&str>) -> Result<Option<DateTime<Utc>>, ApiError> {
    value
        .map(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| {
                    validation_error(
                        &format!("{field} must be a valid RFC3339 timestamp"),
                        json!({ "field": field }),
                    )
                })
        })
        .transpose()
}

impl ListTempLogsQuery {
    /// Validates the raw parameters into a typed [`LogQuery`].
    pub fn into_log_query(self) -> Result<LogQuery, ApiError> {
        let fridge_id = match self.fridge_id.as_deref() {
            Some(raw) => Some(Uuid::from_str(raw).map_err(|_| {
                validation_error(
                    "fridge_id must be a valid UUID",
                    json!({ "field": "fridge_id" }),
                )
            })?),
            None => None,
        };

        let start = parse_timestamp("start", self.start.as_deref())?;
        let end = parse_timestamp("end", self.end.as_deref())?;

        if let (Some(start), Some(end)) = (start, end)
            && start > end
        {
            return Err(validation_error(
                "start must not be after end",
                json!({ "field": "start" }),
            ));
        }

        if let Some(limit) = self.limit
            && !(1..=MAX_LOG_LIMIT).contains(&limit)
        {
            return Err(validation_error(
                &format!("limit must be between 1 and {MAX_LOG_LIMIT}"),
                json!({ "field": "limit" }),
            ));
        }

        Ok(LogQuery {
            fridge_id,
            start,
            end,
            limit: self.limit,
        })
    }
}

/// Record a temperature reading
///
/// Out-of-range readings are accepted and stored with `is_compliant = false`.
#[utoipa::path(
    post,
    path = "/sites/{site_id}/temperature-logs",
    params(
        ("site_id" = Uuid, Path, description = "Site UUID")
    ),
    request_body = RecordTemperatureRequest,
    responses(
        (status = 201, description = "Reading recorded", body = ApiResponse<TempLogInfo>),
        (status = 400, description = "Validation failed", body = ApiError, example = json!({
            "code": "VALIDATION_FAILED",
            "message": "Fridge does not belong to the given site",
            "trace_id": "3f2a9c1e5b7d4e8f9a0b1c2d3e4f5a6b"
        })),
        (status = 404, description = "Fridge not found", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tag = "temperature-logs"
)]
pub async fn record_temperature(
    State(state): State<AppState>,
    Path(site_id): Path<Uuid>,
    payload: Result<Json<RecordTemperatureRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<TempLogInfo>>), ApiError> {
    let Json(request) = payload?;

    let log = state
        .recorder
        .record_temperature(NewTempLog {
            site_id,
            fridge_id: request.fridge_id,
            temperature: request.temperature,
            recorded_by: request.recorded_by,
            recorded_by_name: request.recorded_by_name,
            notes: request.notes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(log.into()))))
}

/// List a site's temperature logs, newest first
#[utoipa::path(
    get,
    path = "/sites/{site_id}/temperature-logs",
    params(
        ("site_id" = Uuid, Path, description = "Site UUID"),
        ListTempLogsQuery
    ),
    responses(
        (status = 200, description = "Matching logs, newest first", body = ApiResponse<Vec<TempLogInfo>>),
        (status = 400, description = "Invalid query parameters", body = ApiError, example = json!({
            "code": "VALIDATION_FAILED",
            "message": "start must be a valid RFC3339 timestamp",
            "trace_id": "3f2a9c1e5b7d4e8f9a0b1c2d3e4f5a6b"
        })),
        (status = 500, description = "Internal server error", body = ApiError),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tag = "temperature-logs"
)]
pub async fn list_temperature_logs(
    State(state): State<AppState>,
    Path(site_id): Path<Uuid>,
    Query(query): Query<ListTempLogsQuery>,
) -> Result<Json<ApiResponse<Vec<TempLogInfo>>>, ApiError> {
    let log_query = query.into_log_query()?;

    let logs = state.recorder.query_logs(site_id, &log_query).await?;

    Ok(Json(ApiResponse::new(
        logs.into_iter().map(TempLogInfo::from).collect(),
    )))
}

/// Logs of a fridge recorded since local midnight, newest first
#[utoipa::path(
    get,
    path = "/sites/{site_id}/fridges/{fridge_id}/temperature-logs/today",
    params(
        ("site_id" = Uuid, Path, description = "Site UUID"),
        ("fridge_id" = Uuid, Path, description = "Fridge UUID")
    ),
    responses(
        (status = 200, description = "Today's logs", body = ApiResponse<Vec<TempLogInfo>>),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tag = "temperature-logs"
)]
pub async fn todays_temperature_logs(
    State(state): State<AppState>,
    Path((site_id, fridge_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<Vec<TempLogInfo>>>, ApiError> {
    let logs = state.recorder.query_todays_logs(site_id, fridge_id).await?;

    Ok(Json(ApiResponse::new(
        logs.into_iter().map(TempLogInfo::from).collect(),
    )))
}

/// Most recent reading of a fridge
///
/// Returns `data: null` when the fridge has no readings.
#[utoipa::path(
    get,
    path = "/sites/{site_id}/fridges/{fridge_id}/temperature-logs/latest",
    params(
        ("site_id" = Uuid, Path, description = "Site UUID"),
        ("fridge_id" = Uuid, Path, description = "Fridge UUID")
    ),
    responses(
        (status = 200, description = "Latest reading; `data` is null when the fridge has none", body = ApiResponse<TempLogInfo>),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tag = "temperature-logs"
)]
pub async fn latest_temperature_log(
    State(state): State<AppState>,
    Path((site_id, fridge_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<Option<TempLogInfo>>>, ApiError> {
    let latest = state.recorder.latest_log(site_id, fridge_id).await?;

    Ok(Json(ApiResponse::new(latest.map(TempLogInfo::from))))
}

/// Whether a fridge has been checked today
#[utoipa::path(
    get,
    path = "/sites/{site_id}/fridges/{fridge_id}/logged-today",
    params(
        ("site_id" = Uuid, Path, description = "Site UUID"),
        ("fridge_id" = Uuid, Path, description = "Fridge UUID")
    ),
    responses(
        (status = 200, description = "Logged-today flag", body = ApiResponse<LoggedTodayResponse>),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tag = "temperature-logs"
)]
pub async fn logged_today(
    State(state): State<AppState>,
    Path((site_id, fridge_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<LoggedTodayResponse>>, ApiError> {
    let logged_today = state.recorder.has_logged_today(site_id, fridge_id).await?;

    Ok(Json(ApiResponse::new(LoggedTodayResponse { logged_today })))
}
