//! Fridge repository for database operations
//!
//! This module provides the FridgeRepository struct which encapsulates
//! SeaORM operations for the fridges table with site-scoped methods.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::FridgeStore;
use crate::compliance::ComplianceBand;
use crate::error::RepositoryError;
use crate::models::fridge::{self, Entity as Fridge};

const MAX_NAME_LEN: usize = 255;

/// Request data for registering a new fridge
#[derive(Debug, Clone)]
pub struct NewFridge {
    /// Site that will own the fridge
    pub site_id: Uuid,
    /// Display name
    pub name: String,
    /// Compliance band assigned at creation
    pub band: ComplianceBand,
}

/// Repository for fridge database operations
#[derive(Debug, Clone)]
pub struct FridgeRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl FridgeRepository {
    /// Creates a new FridgeRepository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Trims a fridge name and checks it against the naming rules.
pub fn normalize_fridge_name(name: &str) -> Result<String, RepositoryError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(RepositoryError::validation_error(
            "Fridge name cannot be empty",
        ));
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(RepositoryError::validation_error(format!(
            "Fridge name cannot exceed {} characters",
            MAX_NAME_LEN
        )));
    }

    Ok(trimmed.to_string())
}

#[async_trait]
impl FridgeStore for FridgeRepository {
    async fn list_active(&self, site_id: Uuid) -> Result<Vec<fridge::Model>, RepositoryError> {
        Fridge::find()
            .filter(fridge::Column::SiteId.eq(site_id))
            .filter(fridge::Column::IsActive.eq(true))
            .order_by_asc(fridge::Column::SortOrder)
            .order_by_asc(fridge::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    async fn find_by_id(&self, fridge_id: Uuid) -> Result<Option<fridge::Model>, RepositoryError> {
        Fridge::find_by_id(fridge_id)
            .one(&*self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    async fn insert_ranked(&self, new_fridge: NewFridge) -> Result<fridge::Model, RepositoryError> {
        let name = normalize_fridge_name(&new_fridge.name)?;
        if !new_fridge.band.is_valid() {
            return Err(RepositoryError::validation_error(
                "Compliance band must be finite with min_temp <= max_temp",
            ));
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(RepositoryError::database_error)?;

        // Next rank is one past the highest active rank, not the active count:
        // after a deactivation the count can equal a rank still in use.
        // Rank and insert share one transaction; concurrent creates on the
        // same site may still pick the same rank under read committed.
        let highest_rank: Option<i32> = Fridge::find()
            .select_only()
            .column_as(fridge::Column::SortOrder.max(), "highest_rank")
            .filter(fridge::Column::SiteId.eq(new_fridge.site_id))
            .filter(fridge::Column::IsActive.eq(true))
            .into_tuple::<Option<i32>>()
            .one(&txn)
            .await
            .map_err(RepositoryError::database_error)?
            .flatten();
        let sort_order = highest_rank.map_or(0, |rank| rank + 1);

        let now = Utc::now();
        let fridge = fridge::ActiveModel {
            id: Set(Uuid::new_v4()),
            site_id: Set(new_fridge.site_id),
            name: Set(name),
            sort_order: Set(sort_order),
            min_temp: Set(new_fridge.band.min_temp),
            max_temp: Set(new_fridge.band.max_temp),
            is_active: Set(true),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let created = fridge
            .insert(&txn)
            .await
            .map_err(RepositoryError::database_error)?;

        txn.commit()
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(created)
    }

    async fn rename(
        &self,
        fridge_id: Uuid,
        name: String,
    ) -> Result<fridge::Model, RepositoryError> {
        let name = normalize_fridge_name(&name)?;

        let existing = self
            .find_by_id(fridge_id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(format!("Fridge {} not found", fridge_id)))?;

        let mut active_fridge = existing.into_active_model();
        active_fridge.name = Set(name);
        active_fridge.updated_at = Set(Utc::now().into());

        active_fridge
            .update(&*self.db)
            .await
            .map_err(RepositoryError::database_error)
    }

    async fn deactivate(&self, fridge_id: Uuid) -> Result<(), RepositoryError> {
        let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();

        let result = Fridge::update_many()
            .col_expr(fridge::Column::IsActive, Expr::value(false))
            .col_expr(fridge::Column::UpdatedAt, Expr::value(now))
            .filter(fridge::Column::Id.eq(fridge_id))
            .exec(&*self.db)
            .await
            .map_err(RepositoryError::database_error)?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found(format!(
                "Fridge {} not found",
                fridge_id
            )));
        }

        Ok(())
    }
}
