//! Database migrations for the fridge logbook.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2026_10_01_000001_create_fridges;
mod m2026_10_01_000002_create_fridge_temp_logs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2026_10_01_000001_create_fridges::Migration),
            Box::new(m2026_10_01_000002_create_fridge_temp_logs::Migration),
        ]
    }
}
