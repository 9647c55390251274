use sea_orm_migration::prelude::*;

/// Server default for `operations.recorded_at`: local wall-clock time of the yard.
const RECORDED_AT_DEFAULT: &str = "(now() AT TIME ZONE 'America/Bogota')";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Vehicle registry, keyed by plate
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehicles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Vehicles::Plate)
                            .text()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Vehicles::Type).text())
                    .col(ColumnDef::new(Vehicles::Driver).text())
                    .to_owned(),
            )
            .await?;

        // Operations ledger. No foreign key on plate: rows keep the plate
        // and driver as they were when the movement was recorded.
        manager
            .create_table(
                Table::create()
                    .table(Operations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Operations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Operations::RecordedAt)
                            .timestamp()
                            .default(Expr::cust(RECORDED_AT_DEFAULT)),
                    )
                    .col(ColumnDef::new(Operations::OperationDate).date().not_null())
                    .col(ColumnDef::new(Operations::Plate).text().not_null())
                    .col(ColumnDef::new(Operations::Driver).text())
                    .col(ColumnDef::new(Operations::Description).text())
                    .col(ColumnDef::new(Operations::SackCount).integer())
                    .col(ColumnDef::new(Operations::Tonnage).float())
                    .col(ColumnDef::new(Operations::ProofImage).binary())
                    .col(ColumnDef::new(Operations::ProofFilename).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_operations_date")
                    .table(Operations::Table)
                    .col(Operations::OperationDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_operations_plate")
                    .table(Operations::Table)
                    .col(Operations::Plate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Operations::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Vehicles::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Vehicles {
    Table,
    Id,
    Plate,
    Type,
    Driver,
}

#[derive(DeriveIden)]
enum Operations {
    Table,
    Id,
    RecordedAt,
    OperationDate,
    Plate,
    Driver,
    Description,
    SackCount,
    Tonnage,
    ProofImage,
    ProofFilename,
}
