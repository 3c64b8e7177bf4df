use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Category as sent and returned by the API. `productos` is read-only.
#[derive(ToSchema)]
pub struct CategoriaDoc {
    pub id: Option<i64>,
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
    pub productos: Vec<i64>,
}

/// Partial update body; keys other than these two are ignored.
#[derive(ToSchema)]
pub struct CategoriaPatchDoc {
    pub nombre: Option<String>,
    pub descripcion: Option<String>,
}

#[derive(ToSchema)]
pub struct CategoriaPageDoc {
    pub items: Vec<CategoriaDoc>,
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
    pub size: u64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::categorias::list,
        crate::routes::categorias::get,
        crate::routes::categorias::create,
        crate::routes::categorias::update,
        crate::routes::categorias::patch,
        crate::routes::categorias::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CategoriaDoc,
            CategoriaPatchDoc,
            CategoriaPageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "categorias")
    )
)]
pub struct ApiDoc;
