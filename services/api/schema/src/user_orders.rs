use sea_orm::entity::prelude::*;

/// Customer food order. Mutable for 30 minutes after `created_at`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    pub userid: String,
    pub userlocation: String,
    pub foodname: String,
    pub usernamecontactno: String,
    pub useremailid: String,
    pub description: String,
    pub quantity: i32,
    pub date: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
