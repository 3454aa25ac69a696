//! # Common API Types
//!
//! Response envelope shared by the fridge and temperature log handlers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard response wrapper: the payload always sits under `data`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data (`null` when a lookup found nothing)
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
