use sea_orm_migration::prelude::*;

mod m20260401_000001_create_users;
mod m20260401_000002_create_admins;
mod m20260401_000003_create_vendors;
mod m20260401_000004_create_vendor_members;
mod m20260401_000005_create_branches;
mod m20260401_000006_create_food_items;
mod m20260401_000007_create_listings;
mod m20260401_000008_create_user_orders;
mod m20260401_000009_create_feedback;
mod m20260401_000010_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260401_000001_create_users::Migration),
            Box::new(m20260401_000002_create_admins::Migration),
            Box::new(m20260401_000003_create_vendors::Migration),
            Box::new(m20260401_000004_create_vendor_members::Migration),
            Box::new(m20260401_000005_create_branches::Migration),
            Box::new(m20260401_000006_create_food_items::Migration),
            Box::new(m20260401_000007_create_listings::Migration),
            Box::new(m20260401_000008_create_user_orders::Migration),
            Box::new(m20260401_000009_create_feedback::Migration),
            Box::new(m20260401_000010_add_lookup_indexes::Migration),
        ]
    }
}
