use axum::{extract::State, Json};
use common::types::StatusMessage;
use service::fixtures;

use crate::errors::ApiError;
use crate::state::AppState;

pub const POPULATED_MESSAGE: &str = "Данные заполнены";

/// Not idempotent: each call appends another full fixture batch.
#[utoipa::path(
    post, path = "/populate_data/", tag = "fixtures",
    responses(
        (status = 200, description = "Fixtures inserted", body = crate::openapi::StatusMessageDoc),
        (status = 500, description = "Insert failed partway", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn populate(State(state): State<AppState>) -> Result<Json<StatusMessage>, ApiError> {
    fixtures::populate(&state.db).await?;
    Ok(Json(StatusMessage::new(POPULATED_MESSAGE)))
}
