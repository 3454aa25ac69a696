//! # Data Models
//!
//! This module contains the SeaORM entities persisted by the fridge logbook.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod fridge;
pub mod fridge_temp_log;

pub use fridge::Entity as Fridge;
pub use fridge_temp_log::Entity as FridgeTempLog;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
    /// Whether the service is backed by a database or serving demo data
    pub mode: String,
}

impl ServiceInfo {
    /// Service information for the given mode
    pub fn for_mode(mode: crate::availability::ServiceMode) -> Self {
        Self {
            service: "fridge-logbook".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            mode: mode.as_str().to_string(),
        }
    }
}
