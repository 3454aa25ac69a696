//! Fridge entity model
//!
//! This module contains the SeaORM entity model for the fridges table,
//! which stores the refrigerators registered for each site.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::compliance::ComplianceBand;

/// Fridge entity owned by exactly one site
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fridges")]
pub struct Model {
    /// Unique identifier for the fridge (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Site that owns this fridge
    pub site_id: Uuid,

    /// Display name shown to kitchen staff
    pub name: String,

    /// Display rank among the site's active fridges (ascending)
    pub sort_order: i32,

    /// Lower bound of the compliance band, inclusive
    #[sea_orm(column_type = "Double")]
    pub min_temp: f64,

    /// Upper bound of the compliance band, inclusive
    #[sea_orm(column_type = "Double")]
    pub max_temp: f64,

    /// False once the fridge has been soft-deleted
    pub is_active: bool,

    /// Timestamp when the fridge was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the fridge was last updated
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// The inclusive temperature range this fridge must stay within.
    pub fn band(&self) -> ComplianceBand {
        ComplianceBand::new(self.min_temp, self.max_temp)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::fridge_temp_log::Entity")]
    TempLogs,
}

impl Related<super::fridge_temp_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TempLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
