//! Service layer providing the category CRUD operations on top of models.
//! - `categoria::repository` is the storage seam (SeaORM or in-memory).
//! - `categoria::service` is what the HTTP layer talks to.
//! - Pagination and error types are shared by both.

pub mod errors;
pub mod pagination;
pub mod categoria;
#[cfg(test)]
pub mod test_support;
