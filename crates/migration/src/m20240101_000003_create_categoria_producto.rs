//! Create `categoria_producto` association table.
//! Composite primary key, no extra columns; rows go away with either side.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CategoriaProducto::Table)
                    .if_not_exists()
                    .col(big_integer(CategoriaProducto::CategoriaId))
                    .col(big_integer(CategoriaProducto::ProductoId))
                    .primary_key(
                        Index::create()
                            .name("pk_categoria_producto")
                            .col(CategoriaProducto::CategoriaId)
                            .col(CategoriaProducto::ProductoId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_categoria_producto_categoria")
                            .from(CategoriaProducto::Table, CategoriaProducto::CategoriaId)
                            .to(Categoria::Table, Categoria::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_categoria_producto_producto")
                            .from(CategoriaProducto::Table, CategoriaProducto::ProductoId)
                            .to(Producto::Table, Producto::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // reverse lookups: "which categories hold this product"
        manager
            .create_index(
                Index::create()
                    .name("idx_categoria_producto_producto")
                    .table(CategoriaProducto::Table)
                    .col(CategoriaProducto::ProductoId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CategoriaProducto::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CategoriaProducto { Table, CategoriaId, ProductoId }

#[derive(DeriveIden)]
enum Categoria { Table, Id }

#[derive(DeriveIden)]
enum Producto { Table, Id }
