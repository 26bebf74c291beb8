//! Product endpoint end to end.

use lista_super::config::ErrorStatusPolicy;
use lista_super_sdk::{CatalogClient, NewProduct};
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

fn product(nombre: &str, categoria_id: i64, descripcion: Option<&str>) -> NewProduct {
    NewProduct {
        nombre: nombre.into(),
        categoria_id,
        descripcion: descripcion.map(Into::into),
    }
}

#[tokio::test]
async fn test_create_product_returns_id() {
    let server = common::spawn_server(ErrorStatusPolicy::Legacy).await;
    let api = CatalogClient::new(&server.base_url);
    let category = api.create_category("bebidas").await.unwrap().insert_id.unwrap();

    let id = api
        .create_product(&product("cola", category, Some("gaseosa")))
        .await
        .unwrap();
    let plain = api.create_product(&product("agua", category, None)).await.unwrap();
    assert_ne!(id, plain);

    let stored = server
        .gateway
        .products_in_category(&category.to_string())
        .await
        .unwrap();
    let cola = stored.iter().find(|p| p.id == id).unwrap();
    assert_eq!(cola.nombre, "COLA");
    assert_eq!(cola.descripcion, "gaseosa");
    let agua = stored.iter().find(|p| p.id == plain).unwrap();
    assert_eq!(agua.descripcion, "");
}

#[tokio::test]
async fn test_unknown_category() {
    let server = common::spawn_server(ErrorStatusPolicy::Legacy).await;
    let api = CatalogClient::new(&server.base_url);

    let err = api.create_product(&product("cola", 99, None)).await.unwrap_err();
    assert_eq!(err.message(), Some("Esa categoria no existe!"));
}

#[tokio::test]
async fn test_duplicate_product_name() {
    let server = common::spawn_server(ErrorStatusPolicy::Legacy).await;
    let api = CatalogClient::new(&server.base_url);
    let category = api.create_category("snacks").await.unwrap().insert_id.unwrap();

    api.create_product(&product("Papas", category, None)).await.unwrap();
    let err = api.create_product(&product("PAPAS", category, None)).await.unwrap_err();
    assert_eq!(err.message(), Some("Ese producto ya existe!"));
}

#[tokio::test]
async fn test_missing_fields_and_loose_category_id() {
    let server = common::spawn_server(ErrorStatusPolicy::Legacy).await;
    let api = CatalogClient::new(&server.base_url);
    let client = common::http_client();
    let url = format!("{}/producto", server.base_url);
    let category = api.create_category("limpieza").await.unwrap().insert_id.unwrap();

    for body in [
        json!({ "nombre": "lavandina" }),
        json!({ "categoria_id": category }),
        json!({ "nombre": "lavandina", "categoria_id": 0 }),
        json!({ "nombre": "", "categoria_id": category }),
        json!({ "nombre": false, "categoria_id": category }),
        json!({ "categoria_id": [1] }),
    ] {
        let res = client.post(&url).json(&body).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE, "{body}");
        let err: Value = res.json().await.unwrap();
        assert_eq!(err["Error"], "No enviaste todos los datos obligatorios!");
    }

    let res = client
        .post(&url)
        .json(&json!({ "nombre": "lavandina", "categoria_id": category.to_string() }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert!(body["respuesta"].is_i64());
}

#[tokio::test]
async fn test_tagged_unknown_category_is_404() {
    let server = common::spawn_server(ErrorStatusPolicy::Tagged).await;
    let res = common::http_client()
        .post(format!("{}/producto", server.base_url))
        .json(&json!({ "nombre": "cola", "categoria_id": 7 }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["kind"], "unknown_category");
}
