//! sea-orm entities for the Canteen API database.

pub mod admins;
pub mod branches;
pub mod feedback;
pub mod food_items;
pub mod listings;
pub mod user_orders;
pub mod users;
pub mod vendor_members;
pub mod vendors;
