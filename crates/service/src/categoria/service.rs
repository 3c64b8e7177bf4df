use std::sync::Arc;
use tracing::{debug, instrument};

use crate::categoria::domain::Categoria;
use crate::categoria::repository::CategoriaRepository;
use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest};

/// Application service for categories.
///
/// Delegates straight to the repository today; category business rules belong
/// here rather than in handlers or stores.
#[derive(Clone)]
pub struct CategoriaService {
    repo: Arc<dyn CategoriaRepository>,
}

impl CategoriaService {
    pub fn new(repo: Arc<dyn CategoriaRepository>) -> Self { Self { repo } }

    #[instrument(skip(self), fields(page = req.page, size = req.size))]
    pub async fn find_all(&self, req: &PageRequest) -> Result<Page<Categoria>, ServiceError> {
        let page = self.repo.find_all_paged(req).await?;
        debug!(returned = page.items.len(), total = page.total_items, "categorias page");
        Ok(page)
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Categoria>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    #[instrument(skip(self, categoria), fields(id = ?categoria.id))]
    pub async fn save(&self, categoria: Categoria) -> Result<Categoria, ServiceError> {
        self.repo.save(categoria).await
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        self.repo.exists_by_id(id).await
    }
}
