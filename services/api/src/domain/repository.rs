#![allow(async_fn_in_trait)]

use uuid::Uuid;

use canteen_domain::role::Role;

use crate::domain::types::{
    Admin, Branch, Credentials, Feedback, FoodItem, Listing, User, UserOrder, Vendor,
    VendorMember,
};
use crate::error::ApiError;

/// Email lookup shared by every role's login.
pub trait CredentialRepository: Send + Sync {
    const ROLE: Role;

    /// `email` is already normalized by the caller.
    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>, ApiError>;
}

/// Repository for customer accounts.
pub trait UserRepository: CredentialRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn list(&self) -> Result<Vec<User>, ApiError>;
    /// Fails with `UniqueViolation` when the email is taken.
    async fn create(&self, user: &User) -> Result<(), ApiError>;
    async fn update(&self, user: &User) -> Result<(), ApiError>;
}

/// Repository for admin accounts.
pub trait AdminRepository: CredentialRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, ApiError>;
    async fn create(&self, admin: &Admin) -> Result<(), ApiError>;
    async fn update(&self, admin: &Admin) -> Result<(), ApiError>;
}

/// Repository for vendor accounts.
pub trait VendorRepository: CredentialRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vendor>, ApiError>;
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<Vendor>, ApiError>;
    async fn list(&self) -> Result<Vec<Vendor>, ApiError>;
    async fn create(&self, vendor: &Vendor) -> Result<(), ApiError>;
    async fn update(&self, vendor: &Vendor) -> Result<(), ApiError>;
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for vendor employee accounts.
pub trait VendorMemberRepository: CredentialRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<VendorMember>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<VendorMember>, ApiError>;
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<VendorMember>, ApiError>;
    async fn list(&self) -> Result<Vec<VendorMember>, ApiError>;
    async fn list_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<VendorMember>, ApiError>;
    async fn create(&self, member: &VendorMember) -> Result<(), ApiError>;
    async fn update(&self, member: &VendorMember) -> Result<(), ApiError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

pub trait BranchRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Branch>, ApiError>;
    async fn list(&self) -> Result<Vec<Branch>, ApiError>;
    async fn create(&self, branch: &Branch) -> Result<(), ApiError>;
    async fn update(&self, branch: &Branch) -> Result<(), ApiError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

pub trait FoodItemRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FoodItem>, ApiError>;
    async fn list(&self) -> Result<Vec<FoodItem>, ApiError>;
    async fn create(&self, item: &FoodItem) -> Result<(), ApiError>;
    async fn update(&self, item: &FoodItem) -> Result<(), ApiError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

pub trait ListingRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, ApiError>;
    async fn list_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<Listing>, ApiError>;
    async fn create(&self, listing: &Listing) -> Result<(), ApiError>;
    async fn update(&self, listing: &Listing) -> Result<(), ApiError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserOrder>, ApiError>;
    async fn list(&self) -> Result<Vec<UserOrder>, ApiError>;
    async fn list_by_userid(&self, userid: &str) -> Result<Vec<UserOrder>, ApiError>;
    async fn create(&self, order: &UserOrder) -> Result<(), ApiError>;
    async fn update(&self, order: &UserOrder) -> Result<(), ApiError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

pub trait FeedbackRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Feedback>, ApiError>;
    async fn list(&self) -> Result<Vec<Feedback>, ApiError>;
    async fn create(&self, feedback: &Feedback) -> Result<(), ApiError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}
