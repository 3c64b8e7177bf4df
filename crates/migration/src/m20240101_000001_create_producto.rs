//! Create `producto` table.
//!
//! Products are owned elsewhere; only what the category association needs lives here.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Producto::Table)
                    .if_not_exists()
                    .col(big_integer(Producto::Id).auto_increment().primary_key())
                    .col(text_null(Producto::Nombre))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Producto::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Producto { Table, Id, Nombre }
