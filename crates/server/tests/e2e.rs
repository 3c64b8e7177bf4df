use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use server::routes::ServerState;
use server::startup;
use service::categoria::{CategoriaService, InMemoryCategoriaRepository};

/// Serve the app on an ephemeral port and return its base URL.
async fn spawn_server() -> anyhow::Result<String> {
    let repo = Arc::new(InMemoryCategoriaRepository::new());
    let app = startup::app(ServerState::new(CategoriaService::new(repo)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

#[tokio::test]
async fn categoria_lifecycle_over_http() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let client = reqwest::Client::new();
    let url = format!("{base}/api/v1/categorias");

    let res = client.post(&url).json(&json!({"nombre": "Books", "descripcion": "Printed media"})).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await?;
    let id = created["id"].as_i64().expect("id");
    let item = format!("{url}/{id}");

    let res = client.patch(&item).json(&json!({"descripcion": "Paper"})).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let patched: Value = res.json().await?;
    assert_eq!(patched["nombre"], "Books");
    assert_eq!(patched["descripcion"], "Paper");

    let res = client.put(&item).json(&json!({"id": id, "nombre": "Libros"})).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let replaced: Value = res.json().await?;
    assert_eq!(replaced["descripcion"], Value::Null);

    let page: Value = client.get(&url).query(&[("size", "5")]).send().await?.json().await?;
    assert_eq!(page["total_items"], 1);
    assert_eq!(page["items"][0]["nombre"], "Libros");

    let res = client.delete(&item).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = client.get(&item).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn health_over_http() -> anyhow::Result<()> {
    let base = spawn_server().await?;
    let res = reqwest::get(format!("{base}/health")).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}
