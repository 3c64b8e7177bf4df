//! Migrator registering entity-specific migrations in dependency order.
//! The association table comes after both sides it references.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_producto;
mod m20240101_000002_create_categoria;
mod m20240101_000003_create_categoria_producto;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_producto::Migration),
            Box::new(m20240101_000002_create_categoria::Migration),
            Box::new(m20240101_000003_create_categoria_producto::Migration),
        ]
    }
}
