use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use canteen_api::domain::repository::{
    AdminRepository, BranchRepository, CredentialRepository, FeedbackRepository,
    FoodItemRepository, ListingRepository, OrderRepository, UserRepository,
    VendorMemberRepository, VendorRepository,
};
use canteen_api::domain::types::{
    Admin, Branch, Credentials, Feedback, FoodItem, Listing, User, UserOrder, Vendor,
    VendorMember,
};
use canteen_api::error::{ApiError, UniqueField};
use canteen_auth_types::password::hash_password;
use canteen_domain::role::Role;

pub use canteen_testing::auth::{TEST_JWT_SECRET, test_signer};

/// Shared in-memory table; clone the handle to inspect rows after a call.
pub type Rows<T> = Arc<Mutex<Vec<T>>>;

fn rows<T>(items: Vec<T>) -> Rows<T> {
    Arc::new(Mutex::new(items))
}

fn replace<T: Clone>(rows: &Rows<T>, item: &T, same: impl Fn(&T) -> bool) {
    let mut rows = rows.lock().unwrap();
    if let Some(slot) = rows.iter_mut().find(|r| same(r)) {
        *slot = item.clone();
    }
}

fn remove<T>(rows: &Rows<T>, matches: impl Fn(&T) -> bool) -> bool {
    let mut rows = rows.lock().unwrap();
    let before = rows.len();
    rows.retain(|r| !matches(r));
    rows.len() != before
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockUserRepo {
    pub users: Rows<User>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self { users: rows(users) }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn handle(&self) -> Rows<User> {
        Arc::clone(&self.users)
    }
}

impl CredentialRepository for MockUserRepo {
    const ROLE: Role = Role::User;

    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>, ApiError> {
        Ok(self.find_by_email(email).await?.map(|u| Credentials {
            id: u.id,
            password_hash: u.password_hash,
        }))
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(ApiError::UniqueViolation(UniqueField::Email));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), ApiError> {
        replace(&self.users, user, |u| u.id == user.id);
        Ok(())
    }
}

// ── MockAdminRepo ────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockAdminRepo {
    pub admins: Rows<Admin>,
}

impl MockAdminRepo {
    pub fn new(admins: Vec<Admin>) -> Self {
        Self {
            admins: rows(admins),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn handle(&self) -> Rows<Admin> {
        Arc::clone(&self.admins)
    }
}

impl CredentialRepository for MockAdminRepo {
    const ROLE: Role = Role::Admin;

    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>, ApiError> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .map(|a| Credentials {
                id: a.id,
                password_hash: a.password_hash.clone(),
            }))
    }
}

impl AdminRepository for MockAdminRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, ApiError> {
        Ok(self.admins.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn create(&self, admin: &Admin) -> Result<(), ApiError> {
        let mut admins = self.admins.lock().unwrap();
        if admins.iter().any(|a| a.email == admin.email) {
            return Err(ApiError::UniqueViolation(UniqueField::Email));
        }
        admins.push(admin.clone());
        Ok(())
    }

    async fn update(&self, admin: &Admin) -> Result<(), ApiError> {
        replace(&self.admins, admin, |a| a.id == admin.id);
        Ok(())
    }
}

// ── MockVendorRepo ───────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockVendorRepo {
    pub vendors: Rows<Vendor>,
}

impl MockVendorRepo {
    pub fn new(vendors: Vec<Vendor>) -> Self {
        Self {
            vendors: rows(vendors),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn handle(&self) -> Rows<Vendor> {
        Arc::clone(&self.vendors)
    }
}

impl CredentialRepository for MockVendorRepo {
    const ROLE: Role = Role::Vendor;

    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>, ApiError> {
        Ok(self
            .vendors
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.email == email)
            .map(|v| Credentials {
                id: v.id,
                password_hash: v.password_hash.clone(),
            }))
    }
}

impl VendorRepository for MockVendorRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vendor>, ApiError> {
        Ok(self.vendors.lock().unwrap().iter().find(|v| v.id == id).cloned())
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<Vendor>, ApiError> {
        Ok(self
            .vendors
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.mobile == mobile)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Vendor>, ApiError> {
        Ok(self.vendors.lock().unwrap().clone())
    }

    async fn create(&self, vendor: &Vendor) -> Result<(), ApiError> {
        let mut vendors = self.vendors.lock().unwrap();
        if vendors.iter().any(|v| v.mobile == vendor.mobile) {
            return Err(ApiError::UniqueViolation(UniqueField::Mobile));
        }
        if vendors.iter().any(|v| v.email == vendor.email) {
            return Err(ApiError::UniqueViolation(UniqueField::Email));
        }
        vendors.push(vendor.clone());
        Ok(())
    }

    async fn update(&self, vendor: &Vendor) -> Result<(), ApiError> {
        replace(&self.vendors, vendor, |v| v.id == vendor.id);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        Ok(remove(&self.vendors, |v| v.id == id))
    }
}

// ── MockVendorMemberRepo ─────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockVendorMemberRepo {
    pub members: Rows<VendorMember>,
}

impl MockVendorMemberRepo {
    pub fn new(members: Vec<VendorMember>) -> Self {
        Self {
            members: rows(members),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn handle(&self) -> Rows<VendorMember> {
        Arc::clone(&self.members)
    }
}

impl CredentialRepository for MockVendorMemberRepo {
    const ROLE: Role = Role::VendorMember;

    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>, ApiError> {
        Ok(self.find_by_email(email).await?.map(|m| Credentials {
            id: m.id,
            password_hash: m.password_hash,
        }))
    }
}

impl VendorMemberRepository for MockVendorMemberRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<VendorMember>, ApiError> {
        Ok(self.members.lock().unwrap().iter().find(|m| m.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<VendorMember>, ApiError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.email == email)
            .cloned())
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<VendorMember>, ApiError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.mobile == mobile)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<VendorMember>, ApiError> {
        Ok(self.members.lock().unwrap().clone())
    }

    async fn list_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<VendorMember>, ApiError> {
        Ok(self
            .members
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.vendor_id == vendor_id)
            .cloned()
            .collect())
    }

    async fn create(&self, member: &VendorMember) -> Result<(), ApiError> {
        self.members.lock().unwrap().push(member.clone());
        Ok(())
    }

    async fn update(&self, member: &VendorMember) -> Result<(), ApiError> {
        replace(&self.members, member, |m| m.id == member.id);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        Ok(remove(&self.members, |m| m.id == id))
    }
}

// ── Resource repos ───────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockBranchRepo {
    pub branches: Rows<Branch>,
}

impl BranchRepository for MockBranchRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Branch>, ApiError> {
        Ok(self.branches.lock().unwrap().iter().find(|b| b.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Branch>, ApiError> {
        Ok(self.branches.lock().unwrap().clone())
    }

    async fn create(&self, branch: &Branch) -> Result<(), ApiError> {
        self.branches.lock().unwrap().push(branch.clone());
        Ok(())
    }

    async fn update(&self, branch: &Branch) -> Result<(), ApiError> {
        replace(&self.branches, branch, |b| b.id == branch.id);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        Ok(remove(&self.branches, |b| b.id == id))
    }
}

#[derive(Default)]
pub struct MockFoodItemRepo {
    pub items: Rows<FoodItem>,
}

impl FoodItemRepository for MockFoodItemRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FoodItem>, ApiError> {
        Ok(self.items.lock().unwrap().iter().find(|i| i.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<FoodItem>, ApiError> {
        Ok(self.items.lock().unwrap().clone())
    }

    async fn create(&self, item: &FoodItem) -> Result<(), ApiError> {
        self.items.lock().unwrap().push(item.clone());
        Ok(())
    }

    async fn update(&self, item: &FoodItem) -> Result<(), ApiError> {
        replace(&self.items, item, |i| i.id == item.id);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        Ok(remove(&self.items, |i| i.id == id))
    }
}

#[derive(Default)]
pub struct MockListingRepo {
    pub listings: Rows<Listing>,
}

impl ListingRepository for MockListingRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, ApiError> {
        Ok(self.listings.lock().unwrap().iter().find(|l| l.id == id).cloned())
    }

    async fn list_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<Listing>, ApiError> {
        Ok(self
            .listings
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.vendor_id == vendor_id)
            .cloned()
            .collect())
    }

    async fn create(&self, listing: &Listing) -> Result<(), ApiError> {
        self.listings.lock().unwrap().push(listing.clone());
        Ok(())
    }

    async fn update(&self, listing: &Listing) -> Result<(), ApiError> {
        replace(&self.listings, listing, |l| l.id == listing.id);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        Ok(remove(&self.listings, |l| l.id == id))
    }
}

#[derive(Default)]
pub struct MockOrderRepo {
    pub orders: Rows<UserOrder>,
}

impl MockOrderRepo {
    pub fn new(orders: Vec<UserOrder>) -> Self {
        Self {
            orders: rows(orders),
        }
    }
}

impl OrderRepository for MockOrderRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserOrder>, ApiError> {
        Ok(self.orders.lock().unwrap().iter().find(|o| o.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<UserOrder>, ApiError> {
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn list_by_userid(&self, userid: &str) -> Result<Vec<UserOrder>, ApiError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.userid == userid)
            .cloned()
            .collect())
    }

    async fn create(&self, order: &UserOrder) -> Result<(), ApiError> {
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }

    async fn update(&self, order: &UserOrder) -> Result<(), ApiError> {
        replace(&self.orders, order, |o| o.id == order.id);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        Ok(remove(&self.orders, |o| o.id == id))
    }
}

#[derive(Default)]
pub struct MockFeedbackRepo {
    pub feedback: Rows<Feedback>,
}

impl FeedbackRepository for MockFeedbackRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Feedback>, ApiError> {
        Ok(self.feedback.lock().unwrap().iter().find(|f| f.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Feedback>, ApiError> {
        Ok(self.feedback.lock().unwrap().clone())
    }

    async fn create(&self, feedback: &Feedback) -> Result<(), ApiError> {
        self.feedback.lock().unwrap().push(feedback.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        Ok(remove(&self.feedback, |f| f.id == id))
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub async fn test_user(email: &str, password: &str) -> User {
    User {
        id: Uuid::now_v7(),
        name: "Asha".to_owned(),
        email: email.to_owned(),
        mobile: "9876543210".to_owned(),
        password_hash: hash_password(password).await.unwrap(),
        created_at: Utc::now(),
    }
}

pub async fn test_admin(email: &str, password: &str) -> Admin {
    Admin {
        id: Uuid::now_v7(),
        company_name: "Acme Foods".to_owned(),
        email: email.to_owned(),
        password_hash: hash_password(password).await.unwrap(),
        contact_no: "9123456780".to_owned(),
        created_at: Utc::now(),
    }
}

pub async fn test_vendor(email: &str, mobile: &str, password: &str) -> Vendor {
    Vendor {
        id: Uuid::now_v7(),
        name: "Spice Hub".to_owned(),
        email: email.to_owned(),
        mobile: mobile.to_owned(),
        password_hash: hash_password(password).await.unwrap(),
        locations: vec!["Pune".to_owned()],
        created_at: Utc::now(),
    }
}

pub async fn test_member(vendor_id: Uuid, email: &str, password: &str) -> VendorMember {
    VendorMember {
        id: Uuid::now_v7(),
        vendor_id,
        name: "Ravi".to_owned(),
        email: email.to_owned(),
        mobile: "9000000001".to_owned(),
        password_hash: hash_password(password).await.unwrap(),
        locations: vec!["Pune".to_owned()],
        created_at: Utc::now(),
    }
}

pub fn test_order(created_at: DateTime<Utc>) -> UserOrder {
    UserOrder {
        id: Uuid::now_v7(),
        username: "Asha".to_owned(),
        userid: "user-1".to_owned(),
        userlocation: "Pune".to_owned(),
        foodname: "Veg Thali".to_owned(),
        usernamecontactno: "9876543210".to_owned(),
        useremailid: "asha@example.com".to_owned(),
        description: "Less spicy".to_owned(),
        quantity: 2,
        date: created_at,
        created_at,
    }
}
