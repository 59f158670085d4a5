//! Create `doctors` table.
//! `email` is unique; `special_interest` is nullable. Every name column is indexed.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Doctors::Table)
                    .if_not_exists()
                    .col(pk_auto(Doctors::Id))
                    .col(string(Doctors::FirstName))
                    .col(string(Doctors::LastName))
                    .col(string_null(Doctors::SpecialInterest))
                    .col(string(Doctors::Email).unique_key())
                    .to_owned(),
            )
            .await?;

        for (name, col) in [
            ("idx_doctors_first_name", Doctors::FirstName),
            ("idx_doctors_last_name", Doctors::LastName),
            ("idx_doctors_special_interest", Doctors::SpecialInterest),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Doctors::Table)
                        .col(col)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Doctors::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Doctors {
    Table,
    Id,
    FirstName,
    LastName,
    SpecialInterest,
    Email,
}
