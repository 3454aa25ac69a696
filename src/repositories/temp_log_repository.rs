//! # Temperature Log Repository
//!
//! SeaORM access to the append-only fridge_temp_logs table. Only inserts and
//! filtered, newest-first reads are exposed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::TempLogStore;
use crate::error::RepositoryError;
use crate::models::fridge_temp_log::{self, Entity as FridgeTempLog};

/// Filters for reading temperature logs of one site.
///
/// `start` and `end` are both inclusive bounds on `created_at`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogQuery {
    pub fridge_id: Option<Uuid>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub limit: Option<u64>,
}

impl LogQuery {
    /// Logs of a single fridge
    pub fn for_fridge(fridge_id: Uuid) -> Self {
        Self {
            fridge_id: Some(fridge_id),
            ..Default::default()
        }
    }

    pub fn since(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn until(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Repository for temperature log database operations
#[derive(Debug, Clone)]
pub struct TempLogRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl TempLogRepository {
    /// Creates a new TempLogRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TempLogStore for TempLogRepository {
    async fn insert(
        &self,
        log: fridge_temp_log::Model,
    ) -> Result<fridge_temp_log::Model, RepositoryError> {
        let entry = fridge_temp_log::ActiveModel {
            id: Set(log.id),
            site_id: Set(log.site_id),
            fridge_id: Set(log.fridge_id),
            temperature: Set(log.temperature),
            recorded_by: Set(log.recorded_by),
            recorded_by_name: Set(log.recorded_by_name),
            notes: Set(log.notes),
            is_compliant: Set(log.is_compliant),
            created_at: Set(log.created_at),
        };

        entry
            .insert(&*self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    async fn query(
        &self,
        site_id: Uuid,
        query: &LogQuery,
    ) -> Result<Vec<fridge_temp_log::Model>, RepositoryError> {
        let mut select =
            FridgeTempLog::find().filter(fridge_temp_log::Column::SiteId.eq(site_id));

        if let Some(fridge_id) = query.fridge_id {
            select = select.filter(fridge_temp_log::Column::FridgeId.eq(fridge_id));
        }

        if let Some(start) = query.start {
            select = select.filter(fridge_temp_log::Column::CreatedAt.gte(start.fixed_offset()));
        }

        if let Some(end) = query.end {
            select = select.filter(fridge_temp_log::Column::CreatedAt.lte(end.fixed_offset()));
        }

        // Newest first, id breaks ties between identical timestamps
        select = select
            .order_by_desc(fridge_temp_log::Column::CreatedAt)
            .order_by_desc(fridge_temp_log::Column::Id);

        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        select
            .all(&*self.db)
            .await
            .map_err(RepositoryError::database_error)
    }
}
