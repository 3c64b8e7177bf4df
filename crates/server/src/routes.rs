use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::categoria::CategoriaService;

use crate::openapi::ApiDoc;

pub mod categorias;

pub const CATEGORIAS_PATH: &str = "/api/v1/categorias";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub categorias: CategoriaService,
}

impl ServerState {
    pub fn new(categorias: CategoriaService) -> Self { Self { categorias } }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, API docs and the category resource.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let categorias_item = format!("{CATEGORIAS_PATH}/:id");

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route(CATEGORIAS_PATH, get(categorias::list).post(categorias::create))
        .route(
            &categorias_item,
            get(categorias::get)
                .put(categorias::update)
                .patch(categorias::patch)
                .delete(categorias::delete),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx and friends
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
