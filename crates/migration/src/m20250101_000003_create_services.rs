//! Create `services` table (the pawning services offered, not code services).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(pk_auto(Services::Id))
                    .col(string_len(Services::Title, 256))
                    .col(text(Services::Description))
                    .col(string_len(Services::TitleSi, 256))
                    .col(text(Services::DescriptionSi))
                    .col(integer(Services::OrderIndex).default(0))
                    .col(timestamp_with_time_zone(Services::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Title,
    Description,
    TitleSi,
    DescriptionSi,
    OrderIndex,
    CreatedAt,
}
