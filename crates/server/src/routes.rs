pub mod fixtures;
pub mod orders;
pub mod products;
pub mod users;

use axum::{
    routing::{get, post},
    Json, Router,
};
use common::types::Health;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Collections answer on both `/name` and `/name/`.
fn collection(router: Router<AppState>, base: &str, list: axum::routing::MethodRouter<AppState>) -> Router<AppState> {
    router
        .route(base, list.clone())
        .route(&format!("{base}/"), list)
}

/// Build the full application router: the three collections, fixtures,
/// health and the OpenAPI document.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let mut api = Router::new();
    api = collection(api, "/products", get(products::list).post(products::create));
    api = api.route(
        "/products/:id",
        get(products::get).put(products::update).delete(products::delete),
    );
    api = collection(api, "/users", get(users::list).post(users::create));
    api = api.route(
        "/users/:id",
        get(users::get).put(users::update).delete(users::delete),
    );
    api = collection(api, "/orders", get(orders::list).post(orders::create));
    api = api.route(
        "/orders/:id",
        get(orders::get).put(orders::update).delete(orders::delete),
    );
    api = collection(api, "/populate_data", post(fixtures::populate));

    api.route("/health", get(health))
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
