use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter};
use tracing::{debug, info};

use models::product::{self, NewProduct};
use crate::errors::ServiceError;

/// Insert a product and return it with its assigned id.
pub async fn create_product(db: &DatabaseConnection, input: NewProduct) -> Result<product::Model, ServiceError> {
    let created = input.into_active_model().insert(db).await?;
    info!(id = created.id, name = %created.name, "product created");
    Ok(created)
}

pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>, ServiceError> {
    Ok(product::Entity::find().all(db).await?)
}

pub async fn get_product(db: &DatabaseConnection, id: i64) -> Result<Option<product::Model>, ServiceError> {
    Ok(product::Entity::find_by_id(id).one(db).await?)
}

/// Full replacement; echoes `input` with `id` whether or not the row exists.
pub async fn update_product(db: &DatabaseConnection, id: i64, input: NewProduct) -> Result<product::Model, ServiceError> {
    let res = product::Entity::update_many()
        .set(input.clone().into_active_model())
        .filter(product::Column::Id.eq(id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        debug!(id, "update matched no product");
    }
    Ok(input.with_id(id))
}

pub async fn delete_product(db: &DatabaseConnection, id: i64) -> Result<u64, ServiceError> {
    let res = product::Entity::delete_by_id(id).exec(db).await?;
    info!(id, rows = res.rows_affected, "product delete");
    Ok(res.rows_affected)
}
