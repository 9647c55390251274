//! Schema migrations for the vehicle registry and the operations ledger.
//!
//! Every statement is guarded with `IF NOT EXISTS`, so running the migrator
//! against a database created by earlier releases only fills in what is
//! missing.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_ledger;
mod m20240101_000002_vehicle_driver_column;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_ledger::Migration),
            Box::new(m20240101_000002_vehicle_driver_column::Migration),
        ]
    }
}
