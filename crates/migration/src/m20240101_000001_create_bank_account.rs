//! Create `bank_account` table.
//!
//! Identity is a database-generated BIGSERIAL; balance is an exact NUMERIC.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BankAccount::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BankAccount::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(BankAccount::AccountNumber, 64))
                    .col(string_len(BankAccount::AccountHolderName, 255))
                    .col(
                        ColumnDef::new(BankAccount::Balance)
                            .decimal_len(19, 2)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BankAccount::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BankAccount { Table, Id, AccountNumber, AccountHolderName, Balance }
