use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter};
use tracing::{debug, info};

use models::order::{self, NewOrder};
use crate::errors::ServiceError;

/// Insert an order. The referenced user and product are not looked up and the
/// store does not enforce the link, so a dangling reference is stored as given.
pub async fn create_order(db: &DatabaseConnection, input: NewOrder) -> Result<order::Model, ServiceError> {
    let created = input.into_active_model().insert(db).await?;
    info!(id = created.id, user_id = created.user_id, product_id = created.product_id, "order created");
    Ok(created)
}

pub async fn list_orders(db: &DatabaseConnection) -> Result<Vec<order::Model>, ServiceError> {
    Ok(order::Entity::find().all(db).await?)
}

pub async fn get_order(db: &DatabaseConnection, id: i64) -> Result<Option<order::Model>, ServiceError> {
    Ok(order::Entity::find_by_id(id).one(db).await?)
}

pub async fn update_order(db: &DatabaseConnection, id: i64, input: NewOrder) -> Result<order::Model, ServiceError> {
    let res = order::Entity::update_many()
        .set(input.clone().into_active_model())
        .filter(order::Column::Id.eq(id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        debug!(id, "update matched no order");
    }
    Ok(input.with_id(id))
}

pub async fn delete_order(db: &DatabaseConnection, id: i64) -> Result<u64, ServiceError> {
    let res = order::Entity::delete_by_id(id).exec(db).await?;
    info!(id, rows = res.rows_affected, "order delete");
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use crate::{products, users};
    use models::{product::NewProduct, user::NewUser};

    async fn seed_refs(db: &DatabaseConnection) -> Result<(i64, i64), anyhow::Error> {
        let u = users::create_user(db, NewUser {
            first_name: "Anna".into(),
            last_name: "Smirnova".into(),
            email: "anna@example.com".into(),
            password: "pw".into(),
        })
        .await?;
        let p = products::create_product(db, NewProduct {
            name: "Mug".into(),
            description: "Tea mug".into(),
            price: 300.0,
        })
        .await?;
        Ok((u.id, p.id))
    }

    #[tokio::test]
    async fn order_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (user_id, product_id) = seed_refs(&db).await?;

        let input = NewOrder { user_id, product_id, order_date: "2023-08-26".into(), status: "new".into() };
        let o = create_order(&db, input.clone()).await?;
        assert_eq!(o, input.with_id(o.id));
        assert_eq!(get_order(&db, o.id).await?, Some(o.clone()));

        let shipped = NewOrder { user_id, product_id, order_date: "2023-08-27".into(), status: "shipped".into() };
        update_order(&db, o.id, shipped.clone()).await?;
        assert_eq!(get_order(&db, o.id).await?, Some(shipped.with_id(o.id)));

        assert_eq!(list_orders(&db).await?.len(), 1);
        delete_order(&db, o.id).await?;
        assert!(get_order(&db, o.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn dangling_reference_is_stored_as_given() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let input = NewOrder {
            user_id: 77,
            product_id: 3_000_000_000,
            order_date: "2023-08-26".into(),
            status: "new".into(),
        };
        let o = create_order(&db, input.clone()).await?;
        assert_eq!(get_order(&db, o.id).await?, Some(input.clone().with_id(o.id)));

        let moved = NewOrder { user_id: 99, ..input };
        update_order(&db, o.id, moved).await?;
        assert_eq!(get_order(&db, o.id).await?.map(|x| x.user_id), Some(99));
        Ok(())
    }

    #[tokio::test]
    async fn referenced_rows_can_be_deleted() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (user_id, product_id) = seed_refs(&db).await?;
        let o = create_order(&db, NewOrder { user_id, product_id, order_date: "2023-08-26".into(), status: "new".into() }).await?;

        assert_eq!(users::delete_user(&db, user_id).await?, 1);
        assert_eq!(products::delete_product(&db, product_id).await?, 1);
        assert!(users::get_user(&db, user_id).await?.is_none());
        assert_eq!(get_order(&db, o.id).await?.map(|x| x.user_id), Some(user_id));
        Ok(())
    }
}
