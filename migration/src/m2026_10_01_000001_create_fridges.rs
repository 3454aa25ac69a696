//! Migration to create the fridges table.
//!
//! Fridges are site-scoped and soft-deleted through `is_active`; rows are
//! never removed so temperature logs keep a valid parent.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fridges::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Fridges::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Fridges::SiteId).uuid().not_null())
                    .col(ColumnDef::new(Fridges::Name).text().not_null())
                    .col(
                        ColumnDef::new(Fridges::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Fridges::MinTemp)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Fridges::MaxTemp)
                            .double()
                            .not_null()
                            .default(5.0),
                    )
                    .col(
                        ColumnDef::new(Fridges::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Fridges::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Fridges::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing reads active fridges of one site ordered by rank
        manager
            .create_index(
                Index::create()
                    .name("idx_fridges_site_active_sort")
                    .table(Fridges::Table)
                    .col(Fridges::SiteId)
                    .col(Fridges::IsActive)
                    .col(Fridges::SortOrder)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_fridges_site_active_sort")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Fridges::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Fridges {
    Table,
    Id,
    SiteId,
    Name,
    SortOrder,
    MinTemp,
    MaxTemp,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
