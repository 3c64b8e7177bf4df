use async_trait::async_trait;

use super::domain::Categoria;
use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest};

/// Repository abstraction for category persistence, keyed by the integer id.
#[async_trait]
pub trait CategoriaRepository: Send + Sync {
    /// Stable order: requested sort first, then id ascending.
    /// A page past the end is empty, not an error.
    async fn find_all_paged(&self, req: &PageRequest) -> Result<Page<Categoria>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Categoria>, ServiceError>;
    /// Insert when `id` is `None`, otherwise replace name and description of
    /// the existing row (absent fields become null). Product links are kept.
    async fn save(&self, categoria: Categoria) -> Result<Categoria, ServiceError>;
    /// `NotFound` when nothing was deleted.
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

/// In-process repository for tests and database-less runs.
pub mod memory {
    use super::*;
    use std::cmp::Ordering;
    use std::collections::{BTreeMap, BTreeSet};
    use tokio::sync::RwLock;

    use crate::categoria::domain::CategoriaSortField;
    use crate::pagination::SortDirection;

    struct Rows {
        by_id: BTreeMap<i64, Categoria>,
        next_id: i64,
    }

    pub struct InMemoryCategoriaRepository {
        inner: RwLock<Rows>,
    }

    impl Default for InMemoryCategoriaRepository {
        fn default() -> Self {
            Self { inner: RwLock::new(Rows { by_id: BTreeMap::new(), next_id: 1 }) }
        }
    }

    impl InMemoryCategoriaRepository {
        pub fn new() -> Self { Self::default() }

        /// Attach a product id to an existing category (seeding only).
        pub async fn link_producto(&self, categoria_id: i64, producto_id: i64) -> Result<(), ServiceError> {
            let mut rows = self.inner.write().await;
            let c = rows.by_id.get_mut(&categoria_id).ok_or_else(|| ServiceError::not_found("categoria"))?;
            c.product_ids.insert(producto_id);
            Ok(())
        }

        pub async fn len(&self) -> usize { self.inner.read().await.by_id.len() }

        pub async fn is_empty(&self) -> bool { self.len().await == 0 }
    }

    fn compare(field: CategoriaSortField, a: &Categoria, b: &Categoria) -> Ordering {
        match field {
            CategoriaSortField::Id => a.id.cmp(&b.id),
            CategoriaSortField::Name => a.name.cmp(&b.name),
            CategoriaSortField::Description => a.description.cmp(&b.description),
        }
    }

    #[async_trait]
    impl CategoriaRepository for InMemoryCategoriaRepository {
        async fn find_all_paged(&self, req: &PageRequest) -> Result<Page<Categoria>, ServiceError> {
            let sort = req
                .sort
                .as_ref()
                .map(|s| CategoriaSortField::parse(&s.property).map(|f| (f, s.direction)))
                .transpose()?;

            let rows = self.inner.read().await;
            let mut all: Vec<&Categoria> = rows.by_id.values().collect();
            if let Some((field, direction)) = sort {
                // stable sort keeps the id order among equal keys
                all.sort_by(|a, b| {
                    let ord = compare(field, a, b);
                    match direction {
                        SortDirection::Asc => ord,
                        SortDirection::Desc => ord.reverse(),
                    }
                });
            }
            let total = all.len() as u64;
            let offset = usize::try_from(req.offset()).unwrap_or(usize::MAX);
            let items = all
                .into_iter()
                .skip(offset)
                .take(req.size as usize)
                .cloned()
                .collect();
            Ok(Page::new(items, total, req))
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Categoria>, ServiceError> {
            Ok(self.inner.read().await.by_id.get(&id).cloned())
        }

        async fn save(&self, categoria: Categoria) -> Result<Categoria, ServiceError> {
            let mut rows = self.inner.write().await;
            match categoria.id {
                None => {
                    let id = rows.next_id;
                    rows.next_id += 1;
                    let stored = Categoria {
                        id: Some(id),
                        name: categoria.name,
                        description: categoria.description,
                        product_ids: BTreeSet::new(),
                    };
                    rows.by_id.insert(id, stored.clone());
                    Ok(stored)
                }
                Some(id) => {
                    let existing = rows.by_id.get_mut(&id).ok_or_else(|| ServiceError::not_found("categoria"))?;
                    existing.name = categoria.name;
                    existing.description = categoria.description;
                    Ok(existing.clone())
                }
            }
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            let mut rows = self.inner.write().await;
            match rows.by_id.remove(&id) {
                Some(_) => Ok(()),
                None => Err(ServiceError::not_found("categoria")),
            }
        }

        async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.inner.read().await.by_id.contains_key(&id))
        }
    }

}
