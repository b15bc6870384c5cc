use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter};
use tracing::{debug, info};

use models::user::{self, NewUser};
use crate::errors::ServiceError;

/// Insert a user and return it with the id assigned by the store.
pub async fn create_user(db: &DatabaseConnection, input: NewUser) -> Result<user::Model, ServiceError> {
    let created = input.into_active_model().insert(db).await?;
    info!(id = created.id, "user created");
    Ok(created)
}

/// Every user, in storage order.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>, ServiceError> {
    Ok(user::Entity::find().all(db).await?)
}

pub async fn get_user(db: &DatabaseConnection, id: i64) -> Result<Option<user::Model>, ServiceError> {
    Ok(user::Entity::find_by_id(id).one(db).await?)
}

/// Overwrite every column of user `id`. The payload is echoed back with `id`
/// even when no row matched.
pub async fn update_user(db: &DatabaseConnection, id: i64, input: NewUser) -> Result<user::Model, ServiceError> {
    let res = user::Entity::update_many()
        .set(input.clone().into_active_model())
        .filter(user::Column::Id.eq(id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        debug!(id, "update matched no user");
    }
    Ok(input.with_id(id))
}

/// Remove user `id`; returns the number of rows deleted (0 or 1).
pub async fn delete_user(db: &DatabaseConnection, id: i64) -> Result<u64, ServiceError> {
    let res = user::Entity::delete_by_id(id).exec(db).await?;
    info!(id, rows = res.rows_affected, "user delete");
    Ok(res.rows_affected)
}
