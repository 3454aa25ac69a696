//! Placeholder data served while no backend is configured.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::compliance::DEMO_BAND;
use crate::models::{fridge, fridge_temp_log};
use crate::services::NewTempLog;

/// Identifier of the single fridge listed in demo mode.
pub const DEMO_FRIDGE_ID: Uuid = Uuid::from_u128(0x0d3e_0000_0000_4000_8000_0000_0000_0001);

/// Display name of the demo fridge.
pub const DEMO_FRIDGE_NAME: &str = "Main Fridge";

/// The one fridge every site sees in demo mode.
pub fn demo_fridge(site_id: Uuid, now: DateTime<Utc>) -> fridge::Model {
    fridge::Model {
        id: DEMO_FRIDGE_ID,
        site_id,
        name: DEMO_FRIDGE_NAME.to_string(),
        sort_order: 0,
        min_temp: DEMO_BAND.min_temp,
        max_temp: DEMO_BAND.max_temp,
        is_active: true,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

/// Builds the log a demo-mode recording returns; nothing is persisted.
///
/// The id is a UUIDv7 so it sorts by the time it was generated.
pub fn demo_log(new_log: NewTempLog, now: DateTime<Utc>) -> fridge_temp_log::Model {
    fridge_temp_log::Model {
        id: Uuid::now_v7(),
        site_id: new_log.site_id,
        fridge_id: new_log.fridge_id,
        temperature: new_log.temperature,
        recorded_by: new_log.recorded_by,
        recorded_by_name: new_log.recorded_by_name,
        notes: new_log.notes,
        is_compliant: DEMO_BAND.contains(new_log.temperature),
        created_at: now.into(),
    }
}
