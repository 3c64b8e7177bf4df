//! `categoria_producto` association table (composite key, no payload).
use std::collections::{BTreeMap, BTreeSet};

use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::{categoria, errors, producto};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categoria_producto")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub categoria_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub producto_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Categoria, Producto }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Categoria => Entity::belongs_to(categoria::Entity)
                .from(Column::CategoriaId)
                .to(categoria::Column::Id)
                .into(),
            Relation::Producto => Entity::belongs_to(producto::Entity)
                .from(Column::ProductoId)
                .to(producto::Column::Id)
                .into(),
        }
    }
}

impl Related<categoria::Entity> for Entity {
    fn to() -> RelationDef { Relation::Categoria.def() }
}

impl Related<producto::Entity> for Entity {
    fn to() -> RelationDef { Relation::Producto.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Associate a product with a category. Category endpoints never call this;
/// it exists for seeding and tests.
pub async fn link(db: &DatabaseConnection, categoria_id: i64, producto_id: i64) -> Result<Model, errors::ModelError> {
    let am = ActiveModel { categoria_id: Set(categoria_id), producto_id: Set(producto_id) };
    Ok(am.insert(db).await?)
}

/// Product ids per category, for every id in `categoria_ids`.
/// Categories without products map to an empty set.
pub async fn product_ids_by_categoria(
    db: &DatabaseConnection,
    categoria_ids: &[i64],
) -> Result<BTreeMap<i64, BTreeSet<i64>>, errors::ModelError> {
    let mut out: BTreeMap<i64, BTreeSet<i64>> =
        categoria_ids.iter().map(|id| (*id, BTreeSet::new())).collect();
    if categoria_ids.is_empty() {
        return Ok(out);
    }
    let rows = Entity::find()
        .filter(Column::CategoriaId.is_in(categoria_ids.iter().copied()))
        .all(db)
        .await?;
    for row in rows {
        out.entry(row.categoria_id).or_default().insert(row.producto_id);
    }
    Ok(out)
}
