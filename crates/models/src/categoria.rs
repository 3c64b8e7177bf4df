//! `categoria` entity: a named grouping of products.
//!
//! Both text columns are nullable; the product set lives in `categoria_producto`.
use sea_orm::{entity::prelude::*, ActiveValue::{NotSet, Unchanged}, DatabaseConnection, PaginatorTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{categoria_producto, errors, producto};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categoria")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub nombre: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub descripcion: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { CategoriaProducto }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::CategoriaProducto => Entity::has_many(categoria_producto::Entity).into(),
        }
    }
}

impl Related<categoria_producto::Entity> for Entity {
    fn to() -> RelationDef { Relation::CategoriaProducto.def() }
}

impl Related<producto::Entity> for Entity {
    fn to() -> RelationDef { categoria_producto::Relation::Producto.def() }

    fn via() -> Option<RelationDef> { Some(categoria_producto::Relation::Categoria.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a new row; the id comes from the sequence.
pub async fn create(
    db: &DatabaseConnection,
    nombre: Option<String>,
    descripcion: Option<String>,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        nombre: Set(nombre),
        descripcion: Set(descripcion),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite both text columns of an existing row. `Ok(None)` when no row has `id`.
pub async fn replace(
    db: &DatabaseConnection,
    id: i64,
    nombre: Option<String>,
    descripcion: Option<String>,
) -> Result<Option<Model>, errors::ModelError> {
    let am = ActiveModel {
        id: Unchanged(id),
        nombre: Set(nombre),
        descripcion: Set(descripcion),
    };
    match am.update(db).await {
        Ok(m) => Ok(Some(m)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub async fn exists(db: &DatabaseConnection, id: i64) -> Result<bool, errors::ModelError> {
    let n = Entity::find_by_id(id).count(db).await?;
    Ok(n > 0)
}
