//! `producto` entity. Only the columns the category association relies on.
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{categoria, categoria_producto, errors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "producto")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub nombre: Option<String>,
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

impl Related<categoria::Entity> for Entity {
    fn to() -> RelationDef { categoria_producto::Relation::Categoria.def() }

    fn via() -> Option<RelationDef> { Some(categoria_producto::Relation::Producto.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, nombre: &str) -> Result<Model, errors::ModelError> {
    if nombre.trim().is_empty() { return Err(errors::ModelError::Validation("nombre required".into())); }
    let am = ActiveModel { id: NotSet, nombre: Set(Some(nombre.to_string())) };
    Ok(am.insert(db).await?)
}
