//! Migrator registering the content tables. Every table carries an
//! `order_index` column; the ordering indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_sliders;
mod m20250101_000002_create_branches;
mod m20250101_000003_create_services;
mod m20250101_000004_create_news;
mod m20250101_000005_add_order_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_sliders::Migration),
            Box::new(m20250101_000002_create_branches::Migration),
            Box::new(m20250101_000003_create_services::Migration),
            Box::new(m20250101_000004_create_news::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000005_add_order_indexes::Migration),
        ]
    }
}
