//! Route handlers for `/categoria` and `/producto`.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::http::request::Payload;
use crate::http::response::{respuesta, ApiError, Respuesta};
use crate::http::server::AppState;
use crate::rules::{CategoryInput, ProductInput};
use crate::store::{Category, InsertMetadata};

type ApiResult<T> = Result<Json<Respuesta<T>>, ApiError>;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Vec<Category>> {
    let rows = state.categories.list_all().await.map_err(|e| state.fail(e))?;
    Ok(respuesta(rows))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<Category>> {
    let rows = state.categories.get_by_id(&id).await.map_err(|e| state.fail(e))?;
    tracing::debug!(id = %id, rows = rows.len(), "Category lookup");
    Ok(respuesta(rows))
}

pub async fn create_category(
    State(state): State<AppState>,
    Payload(input): Payload<CategoryInput>,
) -> ApiResult<InsertMetadata> {
    let meta = state.categories.create(&input).await.map_err(|e| state.fail(e))?;
    Ok(respuesta(meta))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(input): Payload<CategoryInput>,
) -> ApiResult<u64> {
    let affected = state
        .categories
        .update(&id, &input)
        .await
        .map_err(|e| state.fail(e))?;
    Ok(respuesta(affected))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(input): Payload<CategoryInput>,
) -> ApiResult<u64> {
    let affected = state
        .categories
        .delete(&id, &input)
        .await
        .map_err(|e| state.fail(e))?;
    Ok(respuesta(affected))
}

pub async fn create_product(
    State(state): State<AppState>,
    Payload(input): Payload<ProductInput>,
) -> ApiResult<Option<i64>> {
    let id = state.products.create(&input).await.map_err(|e| state.fail(e))?;
    Ok(respuesta(id))
}
