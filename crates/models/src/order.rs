use sea_orm::entity::prelude::*;
use sea_orm::DeriveIntoActiveModel;
use serde::{Deserialize, Serialize};

use crate::{product, user};

/// An order line. `order_date` and `status` are free-form strings; the
/// referenced user and product are not checked before writing.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub order_date: String,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "user::Entity",
        from = "Column::UserId",
        to = "user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "product::Entity",
        from = "Column::ProductId",
        to = "product::Column::Id"
    )]
    Product,
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, DeriveIntoActiveModel)]
pub struct NewOrder {
    pub user_id: i64,
    pub product_id: i64,
    pub order_date: String,
    pub status: String,
}

impl NewOrder {
    pub fn with_id(self, id: i64) -> Model {
        Model {
            id,
            user_id: self.user_id,
            product_id: self.product_id,
            order_date: self.order_date,
            status: self.status,
        }
    }
}
