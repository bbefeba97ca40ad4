use sea_orm::entity::prelude::*;

/// A vendor member's dated, priced listing of a catalog item.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "listings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub name: String,
    pub description: String,
    pub food_type: String,
    pub date: chrono::DateTime<chrono::Utc>,
    pub price: f64,
    pub category: String,
    pub food_image: String,
    /// The single branch this listing is offered at.
    pub location: String,
    /// `Available` or `Finished`.
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
