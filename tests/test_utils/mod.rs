//! Test utilities for database testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations applied, and for wiring live registries and recorders on
//! top of them.

use anyhow::Result;
use chrono::{DateTime, Utc};
use fridge_logbook::compliance::ComplianceBand;
use fridge_logbook::models::{fridge, fridge_temp_log};
use fridge_logbook::repositories::{
    FridgeRepository, FridgeStore, NewFridge, TempLogRepository, TempLogStore,
};
use fridge_logbook::services::{FridgeRegistry, TemperatureLogRecorder};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use uuid::Uuid;

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Sets up an in-memory SQLite database with all migrations applied and returns an Arc.
#[allow(dead_code)]
pub async fn setup_test_db_arc() -> Result<Arc<DatabaseConnection>> {
    let db = setup_test_db().await?;
    Ok(Arc::new(db))
}

/// Live services sharing one in-memory database.
#[allow(dead_code)]
pub struct LiveServices {
    pub db: Arc<DatabaseConnection>,
    pub fridges: Arc<FridgeRepository>,
    pub logs: Arc<TempLogRepository>,
    pub registry: FridgeRegistry,
    pub recorder: TemperatureLogRecorder,
}

/// Builds a registry and recorder backed by a fresh database.
#[allow(dead_code)]
pub async fn live_services() -> Result<LiveServices> {
    let db = setup_test_db_arc().await?;
    let fridges = Arc::new(FridgeRepository::new(db.clone()));
    let logs = Arc::new(TempLogRepository::new(db.clone()));

    Ok(LiveServices {
        registry: FridgeRegistry::live(fridges.clone(), ComplianceBand::default()),
        recorder: TemperatureLogRecorder::live(fridges.clone(), logs.clone()),
        db,
        fridges,
        logs,
    })
}

/// Inserts a fridge with an explicit band.
#[allow(dead_code)]
pub async fn insert_fridge(
    fridges: &FridgeRepository,
    site_id: Uuid,
    name: &str,
    band: ComplianceBand,
) -> Result<fridge::Model> {
    let fridge = fridges
        .insert_ranked(NewFridge {
            site_id,
            name: name.to_string(),
            band,
        })
        .await?;
    Ok(fridge)
}

/// Inserts a log entry stamped with `created_at`, bypassing the recorder's clock.
#[allow(dead_code)]
pub async fn insert_log_at(
    logs: &TempLogRepository,
    fridge: &fridge::Model,
    temperature: f64,
    created_at: DateTime<Utc>,
) -> Result<fridge_temp_log::Model> {
    let log = logs
        .insert(fridge_temp_log::Model {
            id: Uuid::new_v4(),
            site_id: fridge.site_id,
            fridge_id: fridge.id,
            temperature,
            recorded_by: None,
            recorded_by_name: Some("Fixture".to_string()),
            notes: None,
            is_compliant: fridge.band().contains(temperature),
            created_at: created_at.into(),
        })
        .await?;
    Ok(log)
}
