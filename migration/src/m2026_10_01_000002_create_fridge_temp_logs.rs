//! Migration to create the fridge_temp_logs table.
//!
//! Temperature logs form an append-only ledger; the application never
//! updates or deletes rows in this table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FridgeTempLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FridgeTempLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FridgeTempLogs::SiteId).uuid().not_null())
                    .col(ColumnDef::new(FridgeTempLogs::FridgeId).uuid().not_null())
                    .col(
                        ColumnDef::new(FridgeTempLogs::Temperature)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FridgeTempLogs::RecordedBy).uuid().null())
                    .col(ColumnDef::new(FridgeTempLogs::RecordedByName).text().null())
                    .col(ColumnDef::new(FridgeTempLogs::Notes).text().null())
                    .col(
                        ColumnDef::new(FridgeTempLogs::IsCompliant)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FridgeTempLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fridge_temp_logs_fridge_id")
                            .from(FridgeTempLogs::Table, FridgeTempLogs::FridgeId)
                            .to(Fridges::Table, Fridges::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Site/fridge scoped range scans, newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_fridge_temp_logs_site_fridge_created")
                    .table(FridgeTempLogs::Table)
                    .col(FridgeTempLogs::SiteId)
                    .col(FridgeTempLogs::FridgeId)
                    .col(FridgeTempLogs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_fridge_temp_logs_site_fridge_created")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FridgeTempLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FridgeTempLogs {
    Table,
    Id,
    SiteId,
    FridgeId,
    Temperature,
    RecordedBy,
    RecordedByName,
    Notes,
    IsCompliant,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Fridges {
    Table,
    Id,
}
