//! Create `patients` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patients::Table)
                    .if_not_exists()
                    .col(pk_auto(Patients::Id))
                    .col(string(Patients::FirstName))
                    .col(string(Patients::LastName))
                    .col(date(Patients::DateOfBirth))
                    .to_owned(),
            )
            .await?;

        for (name, col) in [
            ("idx_patients_first_name", Patients::FirstName),
            ("idx_patients_last_name", Patients::LastName),
            ("idx_patients_date_of_birth", Patients::DateOfBirth),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Patients::Table)
                        .col(col)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Patients::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Patients { Table, Id, FirstName, LastName, DateOfBirth }
