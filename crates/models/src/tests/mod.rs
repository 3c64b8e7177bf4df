//! Database-backed entity tests. They need a reachable Postgres via
//! `DATABASE_URL`; without it (or with `SKIP_DB_TESTS`) they return early.

use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, EntityTrait, ModelTrait};

use crate::db::connect;
use crate::{categoria, categoria_producto, producto};

/// Setup test database with migrations, or `None` when no database is configured.
async fn setup_test_db() -> Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}

#[tokio::test]
async fn test_categoria_crud() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let created = categoria::create(&db, Some("Books".into()), Some("Printed media".into())).await?;
    assert!(created.id > 0);
    assert_eq!(created.nombre.as_deref(), Some("Books"));

    assert!(categoria::exists(&db, created.id).await?);

    let replaced = categoria::replace(&db, created.id, Some("Updated".into()), None).await?.unwrap();
    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.nombre.as_deref(), Some("Updated"));
    assert!(replaced.descripcion.is_none());

    categoria::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(!categoria::exists(&db, created.id).await?);

    let missing = categoria::replace(&db, created.id, Some("ghost".into()), None).await?;
    assert!(missing.is_none());
    Ok(())
}

#[tokio::test]
async fn test_categoria_producto_association() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    let cat = categoria::create(&db, Some("Hardware".into()), None).await?;
    let p1 = producto::create(&db, "Hammer").await?;
    let p2 = producto::create(&db, "Saw").await?;
    categoria_producto::link(&db, cat.id, p1.id).await?;
    categoria_producto::link(&db, cat.id, p2.id).await?;

    let empty = categoria::create(&db, None, None).await?;

    let by_cat = categoria_producto::product_ids_by_categoria(&db, &[cat.id, empty.id]).await?;
    assert_eq!(by_cat[&cat.id].iter().copied().collect::<Vec<_>>(), vec![p1.id, p2.id]);
    assert!(by_cat[&empty.id].is_empty());

    // many-to-many through the association table
    let products = cat.find_related(producto::Entity).all(&db).await?;
    assert_eq!(products.len(), 2);

    // deleting the category cascades to association rows only
    categoria::Entity::delete_by_id(cat.id).exec(&db).await?;
    let after = categoria_producto::product_ids_by_categoria(&db, &[cat.id]).await?;
    assert!(after[&cat.id].is_empty());
    assert!(producto::Entity::find_by_id(p1.id).one(&db).await?.is_some());

    producto::Entity::delete_by_id(p1.id).exec(&db).await?;
    producto::Entity::delete_by_id(p2.id).exec(&db).await?;
    categoria::Entity::delete_by_id(empty.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_producto_requires_nombre() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let err = producto::create(&db, "  ").await;
    assert!(matches!(err, Err(crate::errors::ModelError::Validation(_))));
    Ok(())
}
