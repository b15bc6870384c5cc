use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct StatusMessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: String }

#[derive(ToSchema)]
pub struct NewUserDoc { pub first_name: String, pub last_name: String, pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct UserDoc { pub id: i64, pub first_name: String, pub last_name: String, pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct NewProductDoc { pub name: String, pub description: String, pub price: f64 }

#[derive(ToSchema)]
pub struct ProductDoc { pub id: i64, pub name: String, pub description: String, pub price: f64 }

#[derive(ToSchema)]
pub struct NewOrderDoc {
    pub user_id: i64,
    pub product_id: i64,
    #[schema(example = "2023-08-26")]
    pub order_date: String,
    pub status: String,
}

#[derive(ToSchema)]
pub struct OrderDoc {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub order_date: String,
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::create,
        crate::routes::products::list,
        crate::routes::products::get,
        crate::routes::products::update,
        crate::routes::products::delete,
        crate::routes::users::create,
        crate::routes::users::list,
        crate::routes::users::get,
        crate::routes::users::update,
        crate::routes::users::delete,
        crate::routes::orders::create,
        crate::routes::orders::list,
        crate::routes::orders::get,
        crate::routes::orders::update,
        crate::routes::orders::delete,
        crate::routes::fixtures::populate,
    ),
    components(
        schemas(
            HealthResponse,
            StatusMessageDoc,
            ErrorDoc,
            NewUserDoc,
            UserDoc,
            NewProductDoc,
            ProductDoc,
            NewOrderDoc,
            OrderDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products"),
        (name = "users"),
        (name = "orders"),
        (name = "fixtures")
    )
)]
pub struct ApiDoc;
