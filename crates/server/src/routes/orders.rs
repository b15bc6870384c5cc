use axum::{extract::State, http::StatusCode, Json};
use common::types::StatusMessage;
use models::order::{self, NewOrder};
use service::orders;
use tracing::info;

use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

pub const DELETED_MESSAGE: &str = "Заказ удален";

/// A `user_id`/`product_id` with no matching row fails in the store (500).
#[utoipa::path(
    post, path = "/orders/", tag = "orders",
    request_body = crate::openapi::NewOrderDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::OrderDoc),
        (status = 422, description = "Invalid payload", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewOrder>,
) -> Result<(StatusCode, Json<order::Model>), ApiError> {
    let created = orders::create_order(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/orders/", tag = "orders", responses((status = 200, description = "OK", body = [crate::openapi::OrderDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<order::Model>>, ApiError> {
    let items = orders::list_orders(&state.db).await?;
    info!(count = items.len(), "list orders");
    Ok(Json(items))
}

#[utoipa::path(
    get, path = "/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses((status = 200, description = "Order, or null if absent", body = crate::openapi::OrderDoc))
)]
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Option<order::Model>>, ApiError> {
    Ok(Json(orders::get_order(&state.db, id).await?))
}

#[utoipa::path(
    put, path = "/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    request_body = crate::openapi::NewOrderDoc,
    responses((status = 200, description = "Payload echoed with id", body = crate::openapi::OrderDoc))
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<NewOrder>,
) -> Result<Json<order::Model>, ApiError> {
    Ok(Json(orders::update_order(&state.db, id, input).await?))
}

#[utoipa::path(
    delete, path = "/orders/{id}", tag = "orders",
    params(("id" = i64, Path, description = "Order id")),
    responses((status = 200, description = "Deleted", body = crate::openapi::StatusMessageDoc))
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<StatusMessage>, ApiError> {
    orders::delete_order(&state.db, id).await?;
    Ok(Json(StatusMessage::new(DELETED_MESSAGE)))
}
