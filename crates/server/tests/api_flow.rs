use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use configs::DatabaseConfig;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn build_app() -> anyhow::Result<Router> {
    let db = server::startup::init_db(&DatabaseConfig::in_memory()).await?;
    Ok(server::startup::build_app(db))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(&v)?)
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body)?).await?;
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

#[tokio::test]
async fn health_is_ok() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = call(&app, Method::GET, "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn product_scenario() -> anyhow::Result<()> {
    let app = build_app().await?;
    let pen = json!({"name": "Pen", "description": "Blue pen", "price": 1.5});
    let expected = json!({"id": 1, "name": "Pen", "description": "Blue pen", "price": 1.5});

    let (status, body) = call(&app, Method::POST, "/products/", Some(pen)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, expected);

    let (status, body) = call(&app, Method::GET, "/products/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, expected);

    let (status, body) = call(&app, Method::DELETE, "/products/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Товар удален"}));

    let (status, body) = call(&app, Method::GET, "/products/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
    Ok(())
}

#[tokio::test]
async fn user_update_and_delete() -> anyhow::Result<()> {
    let app = build_app().await?;
    let ivan = json!({"first_name": "Ivan", "last_name": "Ivanov", "email": "ivan@example.com", "password": "p1"});
    let (status, created) = call(&app, Method::POST, "/users/", Some(ivan)).await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let renamed = json!({"first_name": "Ivan", "last_name": "Sidorov", "email": "ivan@example.com", "password": "p2"});
    let (status, body) = call(&app, Method::PUT, &format!("/users/{id}"), Some(renamed.clone())).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["last_name"], "Sidorov");

    let (_, fetched) = call(&app, Method::GET, &format!("/users/{id}"), None).await?;
    assert_eq!(fetched["last_name"], "Sidorov");
    assert_eq!(fetched["password"], "p2");

    let (status, body) = call(&app, Method::DELETE, &format!("/users/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Пользователь удален");
    let (_, gone) = call(&app, Method::GET, &format!("/users/{id}"), None).await?;
    assert!(gone.is_null());
    Ok(())
}

#[tokio::test]
async fn missing_ids_are_not_errors() -> anyhow::Result<()> {
    let app = build_app().await?;
    let order = json!({"user_id": 1, "product_id": 1, "order_date": "2023-08-26", "status": "new"});

    let (status, body) = call(&app, Method::PUT, "/orders/42", Some(order.clone())).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 42);
    assert_eq!(body["status"], "new");

    let (status, body) = call(&app, Method::GET, "/orders/42", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let (status, body) = call(&app, Method::DELETE, "/orders/42", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Заказ удален");
    Ok(())
}

#[tokio::test]
async fn invalid_payload_names_the_field() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = call(&app, Method::POST, "/products/", Some(json!({"name": "Pen", "description": "x"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("price"));

    let (status, _) = call(&app, Method::POST, "/products/", Some(json!({"name": "Pen", "description": "x", "price": "cheap"}))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    Ok(())
}

#[tokio::test]
async fn non_integer_id_is_a_client_error() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = call(&app, Method::GET, "/users/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
    Ok(())
}

#[tokio::test]
async fn dangling_order_reference_is_stored() -> anyhow::Result<()> {
    let app = build_app().await?;
    let order = json!({"user_id": 5, "product_id": 5, "order_date": "2023-08-26", "status": "new"});
    let (status, body) = call(&app, Method::POST, "/orders/", Some(order)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user_id"], 5);

    let (_, fetched) = call(&app, Method::GET, &format!("/orders/{}", body["id"]), None).await?;
    assert_eq!(fetched, body);
    Ok(())
}

#[tokio::test]
async fn referenced_rows_delete_and_update_cleanly() -> anyhow::Result<()> {
    let app = build_app().await?;
    call(&app, Method::POST, "/populate_data/", None).await?;

    // Order 1 points at user 2; orders 5 and 10 at product 1.
    let (status, body) = call(&app, Method::DELETE, "/users/2", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Пользователь удален"}));
    let (status, body) = call(&app, Method::GET, "/users/2", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let (status, body) = call(&app, Method::DELETE, "/products/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Товар удален"}));

    let moved = json!({"user_id": 99, "product_id": 2, "order_date": "2023-08-26", "status": "в работе"});
    let (status, body) = call(&app, Method::PUT, "/orders/1", Some(moved)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["user_id"], 99);
    let (_, fetched) = call(&app, Method::GET, "/orders/1", None).await?;
    assert_eq!(fetched["user_id"], 99);
    Ok(())
}

#[tokio::test]
async fn ids_beyond_32_bits_are_accepted() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = call(&app, Method::GET, "/products/2147483648", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let order = json!({"user_id": 2147483648i64, "product_id": 1, "order_date": "2023-08-26", "status": "new"});
    let (status, body) = call(&app, Method::POST, "/orders/", Some(order)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user_id"], 2147483648i64);

    let (status, body) = call(&app, Method::DELETE, "/orders/4294967296", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Заказ удален"}));
    Ok(())
}

#[tokio::test]
async fn populate_twice_is_not_idempotent() -> anyhow::Result<()> {
    let app = build_app().await?;
    for _ in 0..2 {
        let (status, body) = call(&app, Method::POST, "/populate_data/", None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Данные заполнены");
    }
    let (_, users) = call(&app, Method::GET, "/users/", None).await?;
    let (_, products) = call(&app, Method::GET, "/products/", None).await?;
    let (_, orders) = call(&app, Method::GET, "/orders/", None).await?;
    assert_eq!(users.as_array().unwrap().len(), 20);
    assert_eq!(products.as_array().unwrap().len(), 10);
    assert_eq!(orders.as_array().unwrap().len(), 20);

    let (_, first) = call(&app, Method::GET, "/products/1", None).await?;
    assert_eq!(first["name"], "Товар1");
    assert_eq!(first["price"], 100.0);
    Ok(())
}

#[tokio::test]
async fn collections_answer_without_trailing_slash() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = call(&app, Method::GET, "/orders", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let app = build_app().await?;
    let (status, body) = call(&app, Method::GET, "/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/products/{id}"].is_object());
    Ok(())
}
