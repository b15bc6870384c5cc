//! Deterministic sample data.
//!
//! Rows are inserted one statement at a time with no surrounding transaction,
//! so a failure partway leaves whatever was already written. Every call adds a
//! fresh batch with new ids.

use sea_orm::{DatabaseConnection, EntityTrait, IntoActiveModel};
use tracing::{error, info};

use models::{order::{self, NewOrder}, product::{self, NewProduct}, user::{self, NewUser}};
use crate::errors::ServiceError;

pub const FIXTURE_USERS: i32 = 10;
pub const FIXTURE_PRODUCTS: i32 = 5;
pub const FIXTURE_ORDERS: i32 = 10;
pub const FIXTURE_ORDER_DATE: &str = "2023-08-26";
pub const FIXTURE_ORDER_STATUS: &str = "в работе";

/// Rows written by one `populate` call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FixtureSummary {
    pub users: u32,
    pub products: u32,
    pub orders: u32,
}

pub fn fixture_users() -> impl Iterator<Item = NewUser> {
    (1..=FIXTURE_USERS).map(|i| NewUser {
        first_name: format!("Имя{i}"),
        last_name: format!("Фамилия{i}"),
        email: format!("user{i}@example.com"),
        password: format!("password{i}"),
    })
}

pub fn fixture_products() -> impl Iterator<Item = NewProduct> {
    (1..=FIXTURE_PRODUCTS).map(|i| NewProduct {
        name: format!("Товар{i}"),
        description: format!("Название Товара {i}"),
        price: f64::from(i) * 100.0,
    })
}

/// Orders cycle through user ids 2..=10,1 and product ids 2..=5,1.
pub fn fixture_orders() -> impl Iterator<Item = NewOrder> {
    (1..=FIXTURE_ORDERS).map(|i| NewOrder {
        user_id: i64::from(i % 10 + 1),
        product_id: i64::from(i % 5 + 1),
        order_date: FIXTURE_ORDER_DATE.to_string(),
        status: FIXTURE_ORDER_STATUS.to_string(),
    })
}

/// Insert 10 users, 5 products and 10 orders, in that order.
pub async fn populate(db: &DatabaseConnection) -> Result<FixtureSummary, ServiceError> {
    let mut summary = FixtureSummary::default();

    for u in fixture_users() {
        user::Entity::insert(u.into_active_model())
            .exec(db)
            .await
            .inspect_err(|e| error!(stage = "users", written = ?summary, error = %e, "fixture insert failed"))?;
        summary.users += 1;
    }
    for p in fixture_products() {
        product::Entity::insert(p.into_active_model())
            .exec(db)
            .await
            .inspect_err(|e| error!(stage = "products", written = ?summary, error = %e, "fixture insert failed"))?;
        summary.products += 1;
    }
    for o in fixture_orders() {
        order::Entity::insert(o.into_active_model())
            .exec(db)
            .await
            .inspect_err(|e| error!(stage = "orders", written = ?summary, error = %e, "fixture insert failed"))?;
        summary.orders += 1;
    }

    info!(users = summary.users, products = summary.products, orders = summary.orders, "fixtures populated");
    Ok(summary)
}
