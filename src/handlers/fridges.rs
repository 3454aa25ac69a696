//! # Fridge Handlers
//!
//! Endpoints for listing, creating, renaming and deactivating the fridges
//! of a site.

use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ApiError;
use crate::handlers::types::ApiResponse;
use crate::models::fridge;
use crate::server::AppState;

/// Fridge information for API responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FridgeInfo {
    /// Unique identifier for the fridge
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    /// Site (kitchen) owning the fridge
    #[schema(example = "7f1c2a4e-3b5d-4c6e-8f9a-0b1c2d3e4f5a")]
    pub site_id: String,
    /// Display name
    #[schema(example = "Walk-in Fridge")]
    pub name: String,
    /// Position in the site's fridge list, ascending
    #[schema(example = 0)]
    pub sort_order: i32,
    /// Lower bound of the compliance band in degrees Celsius
    #[schema(example = 0.0)]
    pub min_temp: f64,
    /// Upper bound of the compliance band in degrees Celsius
    #[schema(example = 5.0)]
    pub max_temp: f64,
    pub is_active: bool,
    /// Creation timestamp (RFC 3339)
    #[schema(example = "2026-10-01T08:00:00Z")]
    pub created_at: String,
    /// Last modification timestamp (RFC 3339)
    #[schema(example = "2026-10-01T08:00:00Z")]
    pub updated_at: String,
}

impl From<fridge::Model> for FridgeInfo {
    fn from(model: fridge::Model) -> Self {
        Self {
            id: model.id.to_string(),
            site_id: model.site_id.to_string(),
            name: model.name,
            sort_order: model.sort_order,
            min_temp: model.min_temp,
            max_temp: model.max_temp,
            is_active: model.is_active,
            created_at: model.created_at.to_rfc3339(),
            updated_at: model.updated_at.to_rfc3339(),
        }
    }
}

/// Request payload for creating a fridge
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateFridgeRequest {
    /// Display name (required, max 255 characters)
    #[schema(example = "Walk-in Fridge")]
    pub name: String,
}

/// Request payload for renaming a fridge
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RenameFridgeRequest {
    /// New display name (required, max 255 characters)
    #[schema(example = "Prep Fridge")]
    pub name: String,
}

/// List the active fridges of a site
#[utoipa::path(
    get,
    path = "/sites/{site_id}/fridges",
    params(
        ("site_id" = Uuid, Path, description = "Site UUID")
    ),
    responses(
        (status = 200, description = "Active fridges ordered by sort rank", body = ApiResponse<Vec<FridgeInfo>>),
        (status = 500, description = "Internal server error", body = ApiError),
        (status = 503, description = "Database unavailable", body = ApiError)
    ),
    tag = "fridges"
)]
pub async fn list_fridges(
    State(state): State<AppState>,
    Path(site_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<FridgeInfo>>>, ApiError> {
    let fridges = state.registry.list_fridges(site_id).await?;

    Ok(Json(ApiResponse::new(
        fridges.into_iter().map(FridgeInfo::from).collect(),
    )))
}

/// Create a fridge at the end of a site's list
#[utoipa::path(
    post,
    path = "/sites/{site_id}/fridges",
    params(
        ("site_id" = Uuid, Path, description = "Site UUID")
    ),
    request_body = CreateFridgeRequest,
    responses(
        (status = 201, description = "Fridge created", body = ApiResponse<FridgeInfo>, headers(
            ("Location", description = "URL of the created fridge")
        )),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 503, description = "No backend configured or database unavailable", body = ApiError, example = json!({
            "code": "BACKEND_NOT_CONFIGURED",
            "message": "No backend is configured; the service is running in demo mode",
            "details": { "operation": "create_fridge" },
            "trace_id": "3f2a9c1e5b7d4e8f9a0b1c2d3e4f5a6b"
        }))
    ),
    tag = "fridges"
)]
pub async fn create_fridge(
    State(state): State<AppState>,
    Path(site_id): Path<Uuid>,
    payload: Result<Json<CreateFridgeRequest>, JsonRejection>,
) -> Result<(StatusCode, [(&'static str, String); 1], Json<ApiResponse<FridgeInfo>>), ApiError> {
    let Json(request) = payload?;

    let fridge = state.registry.create_fridge(site_id, &request.name).await?;
    let location = format!("/fridges/{}", fridge.id);

    Ok((
        StatusCode::CREATED,
        [("Location", location)],
        Json(ApiResponse::new(fridge.into())),
    ))
}

/// Rename a fridge
#[utoipa::path(
    patch,
    path = "/fridges/{fridge_id}",
    params(
        ("fridge_id" = Uuid, Path, description = "Fridge UUID")
    ),
    request_body = RenameFridgeRequest,
    responses(
        (status = 200, description = "Fridge renamed", body = ApiResponse<FridgeInfo>),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 404, description = "Fridge not found", body = ApiError),
        (status = 503, description = "No backend configured or database unavailable", body = ApiError)
    ),
    tag = "fridges"
)]
pub async fn rename_fridge(
    State(state): State<AppState>,
    Path(fridge_id): Path<Uuid>,
    payload: Result<Json<RenameFridgeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<FridgeInfo>>, ApiError> {
    let Json(request) = payload?;

    let fridge = state
        .registry
        .rename_fridge(fridge_id, &request.name)
        .await?;

    Ok(Json(ApiResponse::new(fridge.into())))
}

/// Deactivate a fridge
///
/// The fridge disappears from listings; its temperature history is kept.
#[utoipa::path(
    delete,
    path = "/fridges/{fridge_id}",
    params(
        ("fridge_id" = Uuid, Path, description = "Fridge UUID")
    ),
    responses(
        (status = 204, description = "Fridge deactivated"),
        (status = 404, description = "Fridge not found", body = ApiError),
        (status = 503, description = "No backend configured or database unavailable", body = ApiError)
    ),
    tag = "fridges"
)]
pub async fn deactivate_fridge(
    State(state): State<AppState>,
    Path(fridge_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.registry.deactivate_fridge(fridge_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
