use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Every failure a handler can surface. Rejections carry the field-level
/// message produced while decoding the request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Json(#[from] JsonRejection),
    #[error(transparent)]
    Path(#[from] PathRejection),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

fn json_error(status: StatusCode, detail: String) -> Response {
    let title = status.canonical_reason().unwrap_or("Error");
    (status, Json(serde_json::json!({"error": title, "detail": detail}))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Json(rejection) => {
                warn!(status = %rejection.status(), detail = %rejection.body_text(), "rejected request body");
                json_error(rejection.status(), rejection.body_text())
            }
            ApiError::Path(rejection) => {
                warn!(status = %rejection.status(), detail = %rejection.body_text(), "rejected path parameter");
                json_error(rejection.status(), rejection.body_text())
            }
            ApiError::Service(e) => {
                error!(error = %e, "store operation failed");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}
