use sea_orm::{
    sea_query::NullOrdering, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryOrder,
};

use models::{categoria, categoria_producto};

use crate::categoria::domain::{Categoria, CategoriaSortField};
use crate::categoria::repository::CategoriaRepository;
use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest, SortDirection};

/// SeaORM-backed repository implementation.
pub struct SeaOrmCategoriaRepository {
    pub db: DatabaseConnection,
}

fn column(field: CategoriaSortField) -> categoria::Column {
    match field {
        CategoriaSortField::Id => categoria::Column::Id,
        CategoriaSortField::Name => categoria::Column::Nombre,
        CategoriaSortField::Description => categoria::Column::Descripcion,
    }
}

impl SeaOrmCategoriaRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn with_products(&self, m: categoria::Model) -> Result<Categoria, ServiceError> {
        let mut links = categoria_producto::product_ids_by_categoria(&self.db, &[m.id]).await?;
        let product_ids = links.remove(&m.id).unwrap_or_default();
        Ok(Categoria::from_model(m, product_ids))
    }
}

#[async_trait::async_trait]
impl CategoriaRepository for SeaOrmCategoriaRepository {
    async fn find_all_paged(&self, req: &PageRequest) -> Result<Page<Categoria>, ServiceError> {
        let mut finder = categoria::Entity::find();
        if let Some(sort) = &req.sort {
            let field = CategoriaSortField::parse(&sort.property)?;
            // nulls sort like `Option` does in the in-memory store: first when ascending
            let (order, nulls) = match sort.direction {
                SortDirection::Asc => (Order::Asc, NullOrdering::First),
                SortDirection::Desc => (Order::Desc, NullOrdering::Last),
            };
            finder = finder.order_by_with_nulls(column(field), order, nulls);
        }
        let paginator = finder
            .order_by_asc(categoria::Column::Id)
            .paginate(&self.db, req.size);
        let total = paginator.num_items().await.map_err(ServiceError::db)?;
        // past the end, or an offset Postgres cannot bind: nothing to fetch
        let in_range = req
            .page
            .checked_mul(req.size)
            .is_some_and(|offset| offset < total && i64::try_from(offset).is_ok());
        if !in_range {
            return Ok(Page::new(Vec::new(), total, req));
        }
        let rows = paginator.fetch_page(req.page).await.map_err(ServiceError::db)?;

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut links = categoria_producto::product_ids_by_categoria(&self.db, &ids).await?;
        let items = rows
            .into_iter()
            .map(|m| {
                let product_ids = links.remove(&m.id).unwrap_or_default();
                Categoria::from_model(m, product_ids)
            })
            .collect();
        Ok(Page::new(items, total, req))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Categoria>, ServiceError> {
        let found = categoria::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)?;
        match found {
            Some(m) => Ok(Some(self.with_products(m).await?)),
            None => Ok(None),
        }
    }

    async fn save(&self, c: Categoria) -> Result<Categoria, ServiceError> {
        let stored = match c.id {
            None => categoria::create(&self.db, c.name, c.description).await?,
            Some(id) => categoria::replace(&self.db, id, c.name, c.description)
                .await?
                .ok_or_else(|| ServiceError::not_found("categoria"))?,
        };
        self.with_products(stored).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        let res = categoria::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::db)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("categoria"));
        }
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(categoria::exists(&self.db, id).await?)
    }
}
