//! # Repository Layer
//!
//! Typed storage interfaces for fridges and their temperature logs, and the
//! SeaORM repositories that implement them. Services depend on the traits so
//! that the backing store can be swapped (or left out entirely in demo mode).

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::RepositoryError;
use crate::models::{fridge, fridge_temp_log};

pub mod fridge_repository;
pub mod temp_log_repository;

pub use fridge_repository::{FridgeRepository, NewFridge};
pub use temp_log_repository::{LogQuery, TempLogRepository};

/// Storage operations on the `fridges` collection.
#[async_trait]
pub trait FridgeStore: Send + Sync {
    /// Active fridges of a site ordered by ascending sort rank
    async fn list_active(&self, site_id: Uuid) -> Result<Vec<fridge::Model>, RepositoryError>;

    /// Looks up a fridge regardless of its active flag
    async fn find_by_id(&self, fridge_id: Uuid) -> Result<Option<fridge::Model>, RepositoryError>;

    /// Inserts a fridge at the next free rank of its site and returns it
    async fn insert_ranked(&self, new_fridge: NewFridge) -> Result<fridge::Model, RepositoryError>;

    /// Changes the display name and bumps `updated_at`
    async fn rename(&self, fridge_id: Uuid, name: String)
    -> Result<fridge::Model, RepositoryError>;

    /// Clears the active flag; the row itself is kept
    async fn deactivate(&self, fridge_id: Uuid) -> Result<(), RepositoryError>;
}

/// Storage operations on the append-only `fridge_temp_logs` collection.
#[async_trait]
pub trait TempLogStore: Send + Sync {
    /// Appends a log entry exactly as given
    async fn insert(
        &self,
        log: fridge_temp_log::Model,
    ) -> Result<fridge_temp_log::Model, RepositoryError>;

    /// Logs of a site matching `query`, newest first
    async fn query(
        &self,
        site_id: Uuid,
        query: &LogQuery,
    ) -> Result<Vec<fridge_temp_log::Model>, RepositoryError>;
}
