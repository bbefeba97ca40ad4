pub mod admin;
pub mod branch;
pub mod feedback;
pub mod food_item;
pub mod listing;
pub mod login;
pub mod order;
pub mod signup;
pub mod user;
pub mod vendor;
pub mod vendor_member;
