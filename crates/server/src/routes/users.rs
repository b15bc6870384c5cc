use axum::{extract::State, http::StatusCode, Json};
use common::types::StatusMessage;
use models::user::{self, NewUser};
use service::users;
use tracing::info;

use crate::errors::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

pub const DELETED_MESSAGE: &str = "Пользователь удален";

#[utoipa::path(
    post, path = "/users/", tag = "users",
    request_body = crate::openapi::NewUserDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::UserDoc),
        (status = 422, description = "Invalid payload", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewUser>,
) -> Result<(StatusCode, Json<user::Model>), ApiError> {
    let created = users::create_user(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/users/", tag = "users", responses((status = 200, description = "OK", body = [crate::openapi::UserDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<user::Model>>, ApiError> {
    let items = users::list_users(&state.db).await?;
    info!(count = items.len(), "list users");
    Ok(Json(items))
}

#[utoipa::path(
    get, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses((status = 200, description = "User, or null if absent", body = crate::openapi::UserDoc))
)]
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Option<user::Model>>, ApiError> {
    Ok(Json(users::get_user(&state.db, id).await?))
}

#[utoipa::path(
    put, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = crate::openapi::NewUserDoc,
    responses((status = 200, description = "Payload echoed with id", body = crate::openapi::UserDoc))
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<NewUser>,
) -> Result<Json<user::Model>, ApiError> {
    Ok(Json(users::update_user(&state.db, id, input).await?))
}

#[utoipa::path(
    delete, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses((status = 200, description = "Deleted", body = crate::openapi::StatusMessageDoc))
)]
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<StatusMessage>, ApiError> {
    users::delete_user(&state.db, id).await?;
    Ok(Json(StatusMessage::new(DELETED_MESSAGE)))
}
