//! Category module: domain, repository and service layers.
//!
//! Handlers only ever see `CategoriaService`; storage hides behind `CategoriaRepository`.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Categoria, CategoriaPatch};
pub use repository::{memory::InMemoryCategoriaRepository, CategoriaRepository};
pub use repo::seaorm::SeaOrmCategoriaRepository;
pub use service::CategoriaService;
