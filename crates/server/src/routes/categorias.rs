//! `/api/v1/categorias` handlers.
//!
//! Mutating handlers check `exists_by_id` before touching the store so an
//! unknown id becomes a plain 404. The check and the write are separate calls:
//! two concurrent updates of the same id are last-write-wins.

use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use service::categoria::{Categoria, CategoriaPatch};
use service::pagination::{Page, PageRequest, Sort};

use crate::errors::ApiError;
use crate::openapi::{CategoriaDoc, CategoriaPageDoc, CategoriaPatchDoc};
use crate::routes::ServerState;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 0-based page index (default 0)
    pub page: Option<u64>,
    /// Page size, clamped to 1..=100 (default 20)
    pub size: Option<u64>,
    /// `field[,asc|desc]` with field one of `id`, `nombre`, `descripcion`
    pub sort: Option<String>,
}

impl PageQuery {
    pub fn into_request(self) -> Result<PageRequest, ApiError> {
        let req = PageRequest::new(self.page, self.size);
        match self.sort.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Ok(req.with_sort(Sort::parse(raw)?)),
            None => Ok(req),
        }
    }
}

#[utoipa::path(
    get, path = "/api/v1/categorias", tag = "categorias",
    params(PageQuery),
    responses(
        (status = 200, description = "Paginated categories", body = CategoriaPageDoc),
        (status = 400, description = "Invalid paging or sort parameters")
    )
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<PageQuery>) -> Result<Json<Page<Categoria>>, ApiError> {
    let req = q.into_request()?;
    let page = state.categorias.find_all(&req).await?;
    info!(page = page.page, size = page.size, returned = page.items.len(), total = page.total_items, "list categorias");
    Ok(Json(page))
}

#[utoipa::path(
    get, path = "/api/v1/categorias/{id}", tag = "categorias",
    params(("id" = i64, Path, description = "Categoria id")),
    responses(
        (status = 200, description = "Found", body = CategoriaDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<Categoria>, ApiError> {
    match state.categorias.find_by_id(id).await? {
        Some(c) => Ok(Json(c)),
        None => Err(ApiError::NotFound),
    }
}

#[utoipa::path(
    post, path = "/api/v1/categorias", tag = "categorias",
    request_body = CategoriaDoc,
    responses(
        (status = 201, description = "Created", body = CategoriaDoc),
        (status = 400, description = "Malformed body")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(mut input): Json<Categoria>) -> Result<(StatusCode, Json<Categoria>), ApiError> {
    // ids come from storage only
    input.id = None;
    let created = state.categorias.save(input).await?;
    info!(id = ?created.id, "created categoria");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/v1/categorias/{id}", tag = "categorias",
    params(("id" = i64, Path, description = "Categoria id")),
    request_body = CategoriaDoc,
    responses(
        (status = 200, description = "Replaced", body = CategoriaDoc),
        (status = 400, description = "Body id differs from path id"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(State(state): State<ServerState>, Path(id): Path<i64>, Json(mut input): Json<Categoria>) -> Result<Json<Categoria>, ApiError> {
    if !state.categorias.exists_by_id(id).await? {
        return Err(ApiError::NotFound);
    }
    if let Some(body_id) = input.id.filter(|b| *b != id) {
        return Err(ApiError::BadRequest(format!("body id {body_id} does not match path id {id}")));
    }
    input.id = Some(id);
    let updated = state.categorias.save(input).await?;
    info!(id, "replaced categoria");
    Ok(Json(updated))
}

#[utoipa::path(
    patch, path = "/api/v1/categorias/{id}", tag = "categorias",
    params(("id" = i64, Path, description = "Categoria id")),
    request_body = CategoriaPatchDoc,
    responses(
        (status = 200, description = "Partially updated", body = CategoriaDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn patch(State(state): State<ServerState>, Path(id): Path<i64>, Json(patch): Json<CategoriaPatch>) -> Result<Json<Categoria>, ApiError> {
    if !state.categorias.exists_by_id(id).await? {
        return Err(ApiError::NotFound);
    }
    // a concurrent delete can land between the two calls
    let mut current = state.categorias.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    let touched = !patch.is_empty();
    patch.apply_to(&mut current);
    let updated = state.categorias.save(current).await?;
    info!(id, touched, "patched categoria");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/v1/categorias/{id}", tag = "categorias",
    params(("id" = i64, Path, description = "Categoria id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    if !state.categorias.exists_by_id(id).await? {
        return Err(ApiError::NotFound);
    }
    state.categorias.delete_by_id(id).await?;
    info!(id, "deleted categoria");
    Ok(StatusCode::NO_CONTENT)
}
