//! Create `news` table.
//! `order_index` is nullable: rows created before ordering existed have none.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(News::Table)
                    .if_not_exists()
                    .col(pk_auto(News::Id))
                    .col(string_len(News::Title, 256))
                    .col(string_len(News::TitleSi, 256))
                    .col(text(News::Description))
                    .col(text(News::DescriptionSi))
                    .col(date(News::Date))
                    .col(string_len_null(News::ImageUrl, 1024))
                    .col(integer_null(News::OrderIndex))
                    .col(timestamp_with_time_zone(News::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(News::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum News {
    Table,
    Id,
    Title,
    TitleSi,
    Description,
    DescriptionSi,
    Date,
    ImageUrl,
    OrderIndex,
    CreatedAt,
}
