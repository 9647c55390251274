use crate::m20240101_000001_create_ledger::Vehicles;
use sea_orm_migration::prelude::*;

/// Registries created before drivers were tracked lack `vehicles.driver`.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Vehicles::Table)
                    .add_column_if_not_exists(ColumnDef::new(Vehicles::Driver).text())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Vehicles::Table)
                    .drop_column(Vehicles::Driver)
                    .to_owned(),
            )
            .await
    }
}
