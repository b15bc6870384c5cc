//! Migrator registering the shop tables in dependency order.
//! Every table is created `IF NOT EXISTS`, so running it at each startup is safe.
pub use sea_orm_migration::prelude::*;

mod m20230826_000001_create_users;
mod m20230826_000002_create_products;
mod m20230826_000003_create_orders;
mod m20230826_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230826_000001_create_users::Migration),
            Box::new(m20230826_000002_create_products::Migration),
            Box::new(m20230826_000003_create_orders::Migration),
            // Indexes should always be applied last
            Box::new(m20230826_000004_add_indexes::Migration),
        ]
    }
}
