//! Create `branches` table.
//! Branch listings with English/Sinhala text and optional contact details.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Branches::Table)
                    .if_not_exists()
                    .col(pk_auto(Branches::Id))
                    .col(string_len(Branches::Title, 256))
                    .col(text(Branches::Description))
                    .col(string_len(Branches::TitleSi, 256))
                    .col(text(Branches::DescriptionSi))
                    .col(string_len_null(Branches::Address, 512))
                    .col(string_len_null(Branches::AddressSi, 512))
                    .col(string_len_null(Branches::ContactNumber, 64))
                    .col(string_len_null(Branches::MapUrl, 1024))
                    .col(boolean(Branches::IsComingSoon).default(false))
                    .col(integer(Branches::OrderIndex).default(0))
                    .col(timestamp_with_time_zone(Branches::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Branches::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Branches {
    Table,
    Id,
    Title,
    Description,
    TitleSi,
    DescriptionSi,
    Address,
    AddressSi,
    ContactNumber,
    MapUrl,
    IsComingSoon,
    OrderIndex,
    CreatedAt,
}
