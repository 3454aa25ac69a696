//! # Temperature Log Recorder
//!
//! Appends temperature readings to a fridge's ledger and answers the
//! date-range, "today" and "latest" questions kitchen checks rely on.

use std::sync::Arc;

use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

use crate::availability::ServiceMode;
use crate::demo;
use crate::error::{LogbookError, RepositoryError};
use crate::models::fridge_temp_log;
use crate::repositories::{FridgeStore, LogQuery, TempLogStore};

/// A reading to be recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTempLog {
    pub site_id: Uuid,
    pub fridge_id: Uuid,
    /// Degrees Celsius
    pub temperature: f64,
    pub recorded_by: Option<Uuid>,
    pub recorded_by_name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone)]
struct Stores {
    fridges: Arc<dyn FridgeStore>,
    logs: Arc<dyn TempLogStore>,
}

/// Records and reads fridge temperature logs.
#[derive(Clone)]
pub struct TemperatureLogRecorder {
    stores: Option<Stores>,
}

impl TemperatureLogRecorder {
    /// Recorder backed by live stores.
    pub fn live(fridges: Arc<dyn FridgeStore>, logs: Arc<dyn TempLogStore>) -> Self {
        Self {
            stores: Some(Stores { fridges, logs }),
        }
    }

    /// Recorder without a backend.
    pub fn demo() -> Self {
        Self { stores: None }
    }

    pub fn mode(&self) -> ServiceMode {
        if self.stores.is_some() {
            ServiceMode::Live
        } else {
            ServiceMode::Demo
        }
    }

    /// Records a reading and flags it against the fridge's band.
    ///
    /// Out-of-range readings are stored with `is_compliant = false`; only
    /// non-finite readings, unknown fridges and fridges of another site are
    /// rejected.
    pub async fn record_temperature(
        &self,
        new_log: NewTempLog,
    ) -> Result<fridge_temp_log::Model, LogbookError> {
        if !new_log.temperature.is_finite() {
            return Err(
                RepositoryError::validation_error("Temperature must be a finite number").into(),
            );
        }

        let Some(stores) = &self.stores else {
            let log = demo::demo_log(new_log, Utc::now());
            tracing::debug!(
                site_id = %log.site_id,
                fridge_id = %log.fridge_id,
                is_compliant = log.is_compliant,
                "No backend configured, returning demo temperature log"
            );
            return Ok(log);
        };

        let fridge = stores
            .fridges
            .find_by_id(new_log.fridge_id)
            .await?
            .ok_or_else(|| {
                RepositoryError::not_found(format!("Fridge {} not found", new_log.fridge_id))
            })?;

        if fridge.site_id != new_log.site_id {
            tracing::warn!(
                site_id = %new_log.site_id,
                fridge_id = %fridge.id,
                fridge_site_id = %fridge.site_id,
                "Rejected temperature log for a fridge of another site"
            );
            return Err(RepositoryError::validation_error(
                "Fridge does not belong to the given site",
            )
            .into());
        }

        let is_compliant = fridge.band().contains(new_log.temperature);
        let log = fridge_temp_log::Model {
            id: Uuid::new_v4(),
            site_id: new_log.site_id,
            fridge_id: new_log.fridge_id,
            temperature: new_log.temperature,
            recorded_by: new_log.recorded_by,
            recorded_by_name: new_log.recorded_by_name,
            notes: new_log.notes,
            is_compliant,
            created_at: Utc::now().into(),
        };

        let stored = stores.logs.insert(log).await.inspect_err(|error| {
            tracing::error!(
                site_id = %new_log.site_id,
                fridge_id = %new_log.fridge_id,
                %error,
                "Failed to store temperature log"
            );
        })?;

        tracing::info!(
            site_id = %stored.site_id,
            fridge_id = %stored.fridge_id,
            temperature = stored.temperature,
            is_compliant = stored.is_compliant,
            "Temperature recorded"
        );

        Ok(stored)
    }

    /// Logs of a site matching `query`, newest first. Empty in demo mode.
    pub async fn query_logs(
        &self,
        site_id: Uuid,
        query: &LogQuery,
    ) -> Result<Vec<fridge_temp_log::Model>, LogbookError> {
        let Some(stores) = &self.stores else {
            tracing::debug!(%site_id, "No backend configured, no temperature logs");
            return Ok(Vec::new());
        };

        Ok(stores.logs.query(site_id, query).await?)
    }

    /// Logs of one fridge recorded since local midnight.
    pub async fn query_todays_logs(
        &self,
        site_id: Uuid,
        fridge_id: Uuid,
    ) -> Result<Vec<fridge_temp_log::Model>, LogbookError> {
        let query = LogQuery::for_fridge(fridge_id).since(start_of_day(&Local::now()));
        self.query_logs(site_id, &query).await
    }

    /// Whether the fridge already has a reading today.
    pub async fn has_logged_today(
        &self,
        site_id: Uuid,
        fridge_id: Uuid,
    ) -> Result<bool, LogbookError> {
        Ok(!self.query_todays_logs(site_id, fridge_id).await?.is_empty())
    }

    /// Most recent reading of a fridge, if any.
    pub async fn latest_log(
        &self,
        site_id: Uuid,
        fridge_id: Uuid,
    ) -> Result<Option<fridge_temp_log::Model>, LogbookError> {
        let query = LogQuery::for_fridge(fridge_id).limit(1);
        Ok(self.query_logs(site_id, &query).await?.into_iter().next())
    }
}

/// Midnight at the start of `now`'s calendar day in its own time zone.
///
/// When a DST transition skips midnight, the first valid instant of the
/// following hour is used instead.
pub fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let tz = now.timezone();
    let midnight = now.date_naive().and_time(NaiveTime::MIN);

    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
        .map(|start| start.with_timezone(&Utc))
        .unwrap_or_else(|| now.with_timezone(&Utc))
}
