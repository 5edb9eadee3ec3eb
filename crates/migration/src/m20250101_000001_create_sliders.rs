//! Create `sliders` table.
//! One row per home-page slider image, pointing at a public storage URL.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sliders::Table)
                    .if_not_exists()
                    .col(pk_auto(Sliders::Id))
                    .col(string_len(Sliders::ImageUrl, 1024))
                    .col(integer(Sliders::OrderIndex).default(0))
                    .col(timestamp_with_time_zone(Sliders::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Sliders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Sliders {
    Table,
    Id,
    ImageUrl,
    OrderIndex,
    CreatedAt,
}
