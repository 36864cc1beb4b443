use axum::async_trait;
use sea_orm_migration::prelude::*;

mod m_20231115_000002_create_categories_table;

pub struct Migrator;

#[async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m_20231115_000002_create_categories_table::Migration)]
    }
}
