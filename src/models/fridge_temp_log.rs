//! Fridge temperature log entity model
//!
//! This module contains the SeaORM entity model for the fridge_temp_logs
//! table. Rows are written once and never updated.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

/// A single temperature reading taken for a fridge
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fridge_temp_logs")]
pub struct Model {
    /// Unique identifier for the log entry (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Site that owns the fridge this reading belongs to
    pub site_id: Uuid,

    /// Fridge the reading was taken from
    pub fridge_id: Uuid,

    /// Reading in degrees Celsius
    #[sea_orm(column_type = "Double")]
    pub temperature: f64,

    /// Identity of the staff member who took the reading
    pub recorded_by: Option<Uuid>,

    /// Display name of the staff member who took the reading
    pub recorded_by_name: Option<String>,

    /// Free-text note attached to the reading
    pub notes: Option<String>,

    /// Whether the reading was inside the fridge's band when recorded
    pub is_compliant: bool,

    /// Timestamp when the reading was recorded
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fridge::Entity",
        from = "Column::FridgeId",
        to = "super::fridge::Column::Id"
    )]
    Fridge,
}

impl Related<super::fridge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fridge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
