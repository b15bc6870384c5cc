use axum::{extract::State, http::StatusCode, Json};
use common::types::StatusMessage;
use models::product::{self, NewProduct};
use service::products;
use tracing::info;

use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

pub const DELETED_MESSAGE: &str = "Товар удален";

#[utoipa::path(
    post, path = "/products/", tag = "products",
    request_body = crate::openapi::NewProductDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductDoc),
        (status = 422, description = "Invalid payload", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewProduct>,
) -> Result<(StatusCode, Json<product::Model>), ApiError> {
    let created = products::create_product(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/products/", tag = "products", responses((status = 200, description = "OK", body = [crate::openapi::ProductDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<product::Model>>, ApiError> {
    let items = products::list_products(&state.db).await?;
    info!(count = items.len(), "list products");
    Ok(Json(items))
}

/// `null` body when the id is unknown.
#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses((status = 200, description = "Product, or null if absent", body = crate::openapi::ProductDoc))
)]
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Option<product::Model>>, ApiError> {
    Ok(Json(products::get_product(&state.db, id).await?))
}

#[utoipa::path(
    put, path = "/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = crate::openapi::NewProductDoc,
    responses((status = 200, description = "Payload echoed with id", body = crate::openapi::ProductDoc))
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<NewProduct>,
) -> Result<Json<product::Model>, ApiError> {
    Ok(Json(products::update_product(&state.db, id, input).await?))
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses((status = 200, description = "Deleted", body = crate::openapi::StatusMessageDoc))
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<StatusMessage>, ApiError> {
    products::delete_product(&state.db, id).await?;
    Ok(Json(StatusMessage::new(DELETED_MESSAGE)))
}
