//! Migrator registering entity-specific migrations.
//! Each table migration also creates that table's indexes.
pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_doctors;
mod m20220101_000002_create_patients;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_doctors::Migration),
            Box::new(m20220101_000002_create_patients::Migration),
        ]
    }
}
