use chrono::{DateTime, Utc};
use uuid::Uuid;

use canteen_domain::feedback::FeedbackKind;
use canteen_domain::food::{FoodType, ListingStatus};

/// Customer account.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Platform operator account.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: Uuid,
    pub company_name: String,
    pub email: String,
    pub password_hash: String,
    pub contact_no: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Vendor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password_hash: String,
    pub locations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Employee of a vendor. `vendor_id` is trusted as sent by the client.
#[derive(Debug, Clone)]
pub struct VendorMember {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password_hash: String,
    pub locations: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// The fields every role's login needs.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub id: Uuid,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct Branch {
    pub id: Uuid,
    pub admin_id: String,
    pub company_name: String,
    pub country: String,
    pub city: String,
    pub branch: String,
    pub created_at: DateTime<Utc>,
}

/// Catalog template.
#[derive(Debug, Clone)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub food_type: FoodType,
    pub food_image: Option<String>,
    pub vendor_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A vendor member's priced listing at a single branch.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub name: String,
    pub description: String,
    pub food_type: FoodType,
    pub date: DateTime<Utc>,
    pub price: f64,
    pub category: String,
    pub food_image: String,
    pub location: String,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserOrder {
    pub id: Uuid,
    pub username: String,
    pub userid: String,
    pub userlocation: String,
    pub foodname: String,
    pub usernamecontactno: String,
    pub useremailid: String,
    pub description: String,
    pub quantity: i32,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Feedback {
    pub id: Uuid,
    pub user_id: String,
    pub username: String,
    pub mobile: String,
    pub kind: FeedbackKind,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
