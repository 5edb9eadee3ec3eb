//! Non-unique indexes on `order_index`. Uniqueness is not enforced by the
//! database: a whole-list reorder passes through duplicate values mid-way.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table) in order_index_targets() {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(table)
                        .col(OrderIndex)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table) in order_index_targets() {
            manager
                .drop_index(Index::drop().name(name).table(table).to_owned())
                .await?;
        }
        Ok(())
    }
}

fn order_index_targets() -> [(&'static str, Alias); 4] {
    [
        ("idx_sliders_order_index", Alias::new("sliders")),
        ("idx_branches_order_index", Alias::new("branches")),
        ("idx_services_order_index", Alias::new("services")),
        ("idx_news_order_index", Alias::new("news")),
    ]
}

#[derive(DeriveIden)]
struct OrderIndex;
