use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, SqlErr,
};
use uuid::Uuid;

use canteen_api_schema::{
    admins, branches, feedback, food_items, listings, user_orders, users, vendor_members,
    vendors,
};
use canteen_domain::role::Role;

use crate::domain::repository::{
    AdminRepository, BranchRepository, CredentialRepository, FeedbackRepository,
    FoodItemRepository, ListingRepository, OrderRepository, UserRepository,
    VendorMemberRepository, VendorRepository,
};
use crate::domain::types::{
    Admin, Branch, Credentials, Feedback, FoodItem, Listing, User, UserOrder, Vendor,
    VendorMember,
};
use crate::error::{ApiError, UniqueField};

/// Map a failed write, surfacing unique-index hits so callers can word them.
fn write_err(err: DbErr, action: &'static str) -> ApiError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            let field = if detail.contains("mobile") {
                UniqueField::Mobile
            } else {
                UniqueField::Email
            };
            ApiError::UniqueViolation(field)
        }
        _ => ApiError::Internal(anyhow::Error::new(err).context(action)),
    }
}

/// Map a failed update; a row removed since the caller read it is `NotFound`.
fn update_err(err: DbErr, action: &'static str, what: &'static str) -> ApiError {
    match err {
        DbErr::RecordNotUpdated => ApiError::NotFound(what),
        other => write_err(other, action),
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl CredentialRepository for DbUserRepository {
    const ROLE: Role = Role::User;

    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>, ApiError> {
        Ok(self.find_by_email(email).await?.map(|u| Credentials {
            id: u.id,
            password_hash: u.password_hash,
        }))
    }
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        user_active_model(user)
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, "create user"))?;
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), ApiError> {
        user_active_model(user)
            .update(&self.db)
            .await
            .map_err(|e| update_err(e, "update user", "User"))?;
        Ok(())
    }
}

fn user_active_model(user: &User) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(user.id),
        name: Set(user.name.clone()),
        email: Set(user.email.clone()),
        mobile: Set(user.mobile.clone()),
        password_hash: Set(user.password_hash.clone()),
        created_at: Set(user.created_at),
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        mobile: model.mobile,
        password_hash: model.password_hash,
        created_at: model.created_at,
    }
}

// ── Admin repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAdminRepository {
    pub db: DatabaseConnection,
}

impl CredentialRepository for DbAdminRepository {
    const ROLE: Role = Role::Admin;

    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>, ApiError> {
        let model = admins::Entity::find()
            .filter(admins::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find admin by email")?;
        Ok(model.map(|a| Credentials {
            id: a.id,
            password_hash: a.password_hash,
        }))
    }
}

impl AdminRepository for DbAdminRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, ApiError> {
        let model = admins::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find admin by id")?;
        Ok(model.map(admin_from_model))
    }

    async fn create(&self, admin: &Admin) -> Result<(), ApiError> {
        admin_active_model(admin)
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, "create admin"))?;
        Ok(())
    }

    async fn update(&self, admin: &Admin) -> Result<(), ApiError> {
        admin_active_model(admin)
            .update(&self.db)
            .await
            .map_err(|e| update_err(e, "update admin", "Admin"))?;
        Ok(())
    }
}

fn admin_active_model(admin: &Admin) -> admins::ActiveModel {
    admins::ActiveModel {
        id: Set(admin.id),
        company_name: Set(admin.company_name.clone()),
        email: Set(admin.email.clone()),
        password_hash: Set(admin.password_hash.clone()),
        contact_no: Set(admin.contact_no.clone()),
        created_at: Set(admin.created_at),
    }
}

fn admin_from_model(model: admins::Model) -> Admin {
    Admin {
        id: model.id,
        company_name: model.company_name,
        email: model.email,
        password_hash: model.password_hash,
        contact_no: model.contact_no,
        created_at: model.created_at,
    }
}

// ── Vendor repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVendorRepository {
    pub db: DatabaseConnection,
}

impl CredentialRepository for DbVendorRepository {
    const ROLE: Role = Role::Vendor;

    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>, ApiError> {
        let model = vendors::Entity::find()
            .filter(vendors::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find vendor by email")?;
        Ok(model.map(|v| Credentials {
            id: v.id,
            password_hash: v.password_hash,
        }))
    }
}

impl VendorRepository for DbVendorRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vendor>, ApiError> {
        let model = vendors::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find vendor by id")?;
        Ok(model.map(vendor_from_model))
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<Vendor>, ApiError> {
        let model = vendors::Entity::find()
            .filter(vendors::Column::Mobile.eq(mobile))
            .one(&self.db)
            .await
            .context("find vendor by mobile")?;
        Ok(model.map(vendor_from_model))
    }

    async fn list(&self) -> Result<Vec<Vendor>, ApiError> {
        let models = vendors::Entity::find()
            .order_by_asc(vendors::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list vendors")?;
        Ok(models.into_iter().map(vendor_from_model).collect())
    }

    async fn create(&self, vendor: &Vendor) -> Result<(), ApiError> {
        vendor_active_model(vendor)
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, "create vendor"))?;
        Ok(())
    }

    async fn update(&self, vendor: &Vendor) -> Result<(), ApiError> {
        vendor_active_model(vendor)
            .update(&self.db)
            .await
            .map_err(|e| update_err(e, "update vendor", "Vendor"))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = vendors::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete vendor")?;
        Ok(result.rows_affected > 0)
    }
}

fn vendor_active_model(vendor: &Vendor) -> vendors::ActiveModel {
    vendors::ActiveModel {
        id: Set(vendor.id),
        name: Set(vendor.name.clone()),
        email: Set(vendor.email.clone()),
        mobile: Set(vendor.mobile.clone()),
        password_hash: Set(vendor.password_hash.clone()),
        locations: Set(vendor.locations.clone()),
        created_at: Set(vendor.created_at),
    }
}

fn vendor_from_model(model: vendors::Model) -> Vendor {
    Vendor {
        id: model.id,
        name: model.name,
        email: model.email,
        mobile: model.mobile,
        password_hash: model.password_hash,
        locations: model.locations,
        created_at: model.created_at,
    }
}

// ── Vendor member repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVendorMemberRepository {
    pub db: DatabaseConnection,
}

impl CredentialRepository for DbVendorMemberRepository {
    const ROLE: Role = Role::VendorMember;

    async fn find_credentials(&self, email: &str) -> Result<Option<Credentials>, ApiError> {
        Ok(self.find_by_email(email).await?.map(|m| Credentials {
            id: m.id,
            password_hash: m.password_hash,
        }))
    }
}

impl VendorMemberRepository for DbVendorMemberRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<VendorMember>, ApiError> {
        let model = vendor_members::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find vendor member by id")?;
        Ok(model.map(vendor_member_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<VendorMember>, ApiError> {
        let model = vendor_members::Entity::find()
            .filter(vendor_members::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find vendor member by email")?;
        Ok(model.map(vendor_member_from_model))
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<VendorMember>, ApiError> {
        let model = vendor_members::Entity::find()
            .filter(vendor_members::Column::Mobile.eq(mobile))
            .one(&self.db)
            .await
            .context("find vendor member by mobile")?;
        Ok(model.map(vendor_member_from_model))
    }

    async fn list(&self) -> Result<Vec<VendorMember>, ApiError> {
        let models = vendor_members::Entity::find()
            .order_by_asc(vendor_members::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list vendor members")?;
        Ok(models.into_iter().map(vendor_member_from_model).collect())
    }

    async fn list_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<VendorMember>, ApiError> {
        let models = vendor_members::Entity::find()
            .filter(vendor_members::Column::VendorId.eq(vendor_id))
            .order_by_asc(vendor_members::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list vendor members by vendor")?;
        Ok(models.into_iter().map(vendor_member_from_model).collect())
    }

    async fn create(&self, member: &VendorMember) -> Result<(), ApiError> {
        vendor_member_active_model(member)
            .insert(&self.db)
            .await
            .map_err(|e| write_err(e, "create vendor member"))?;
        Ok(())
    }

    async fn update(&self, member: &VendorMember) -> Result<(), ApiError> {
        vendor_member_active_model(member)
            .update(&self.db)
            .await
            .map_err(|e| update_err(e, "update vendor member", "Vendor member"))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = vendor_members::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete vendor member")?;
        Ok(result.rows_affected > 0)
    }
}

fn vendor_member_active_model(member: &VendorMember) -> vendor_members::ActiveModel {
    vendor_members::ActiveModel {
        id: Set(member.id),
        vendor_id: Set(member.vendor_id),
        name: Set(member.name.clone()),
        email: Set(member.email.clone()),
        mobile: Set(member.mobile.clone()),
        password_hash: Set(member.password_hash.clone()),
        locations: Set(member.locations.clone()),
        created_at: Set(member.created_at),
    }
}

fn vendor_member_from_model(model: vendor_members::Model) -> VendorMember {
    VendorMember {
        id: model.id,
        vendor_id: model.vendor_id,
        name: model.name,
        email: model.email,
        mobile: model.mobile,
        password_hash: model.password_hash,
        locations: model.locations,
        created_at: model.created_at,
    }
}

// ── Branch repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBranchRepository {
    pub db: DatabaseConnection,
}

impl BranchRepository for DbBranchRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Branch>, ApiError> {
        let model = branches::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find branch by id")?;
        Ok(model.map(branch_from_model))
    }

    async fn list(&self) -> Result<Vec<Branch>, ApiError> {
        let models = branches::Entity::find()
            .order_by_asc(branches::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list branches")?;
        Ok(models.into_iter().map(branch_from_model).collect())
    }

    async fn create(&self, branch: &Branch) -> Result<(), ApiError> {
        branch_active_model(branch)
            .insert(&self.db)
            .await
            .context("create branch")?;
        Ok(())
    }

    async fn update(&self, branch: &Branch) -> Result<(), ApiError> {
        branch_active_model(branch)
            .update(&self.db)
            .await
            .map_err(|e| update_err(e, "update branch", "Branch"))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = branches::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete branch")?;
        Ok(result.rows_affected > 0)
    }
}

fn branch_active_model(branch: &Branch) -> branches::ActiveModel {
    branches::ActiveModel {
        id: Set(branch.id),
        admin_id: Set(branch.admin_id.clone()),
        company_name: Set(branch.company_name.clone()),
        country: Set(branch.country.clone()),
        city: Set(branch.city.clone()),
        branch: Set(branch.branch.clone()),
        created_at: Set(branch.created_at),
    }
}

fn branch_from_model(model: branches::Model) -> Branch {
    Branch {
        id: model.id,
        admin_id: model.admin_id,
        company_name: model.company_name,
        country: model.country,
        city: model.city,
        branch: model.branch,
        created_at: model.created_at,
    }
}

// ── Food catalog repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFoodItemRepository {
    pub db: DatabaseConnection,
}

impl FoodItemRepository for DbFoodItemRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FoodItem>, ApiError> {
        let model = food_items::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find food item by id")?;
        model.map(food_item_from_model).transpose()
    }

    async fn list(&self) -> Result<Vec<FoodItem>, ApiError> {
        let models = food_items::Entity::find()
            .order_by_asc(food_items::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list food items")?;
        models.into_iter().map(food_item_from_model).collect()
    }

    async fn create(&self, item: &FoodItem) -> Result<(), ApiError> {
        food_item_active_model(item)
            .insert(&self.db)
            .await
            .context("create food item")?;
        Ok(())
    }

    async fn update(&self, item: &FoodItem) -> Result<(), ApiError> {
        food_item_active_model(item)
            .update(&self.db)
            .await
            .map_err(|e| update_err(e, "update food item", "Food item"))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = food_items::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete food item")?;
        Ok(result.rows_affected > 0)
    }
}

fn food_item_active_model(item: &FoodItem) -> food_items::ActiveModel {
    food_items::ActiveModel {
        id: Set(item.id),
        name: Set(item.name.clone()),
        description: Set(item.description.clone()),
        food_type: Set(item.food_type.as_str().to_owned()),
        food_image: Set(item.food_image.clone()),
        vendor_id: Set(item.vendor_id.clone()),
        created_at: Set(item.created_at),
    }
}

fn food_item_from_model(model: food_items::Model) -> Result<FoodItem, ApiError> {
    Ok(FoodItem {
        id: model.id,
        name: model.name,
        description: model.description,
        food_type: model.food_type.parse().context("decode food type")?,
        food_image: model.food_image,
        vendor_id: model.vendor_id,
        created_at: model.created_at,
    })
}

// ── Listing repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbListingRepository {
    pub db: DatabaseConnection,
}

impl ListingRepository for DbListingRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, ApiError> {
        let model = listings::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find listing by id")?;
        model.map(listing_from_model).transpose()
    }

    async fn list_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<Listing>, ApiError> {
        let models = listings::Entity::find()
            .filter(listings::Column::VendorId.eq(vendor_id))
            .order_by_asc(listings::Column::Date)
            .all(&self.db)
            .await
            .context("list listings by vendor")?;
        models.into_iter().map(listing_from_model).collect()
    }

    async fn create(&self, listing: &Listing) -> Result<(), ApiError> {
        listing_active_model(listing)
            .insert(&self.db)
            .await
            .context("create listing")?;
        Ok(())
    }

    async fn update(&self, listing: &Listing) -> Result<(), ApiError> {
        listing_active_model(listing)
            .update(&self.db)
            .await
            .map_err(|e| update_err(e, "update listing", "Food item"))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = listings::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete listing")?;
        Ok(result.rows_affected > 0)
    }
}

fn listing_active_model(listing: &Listing) -> listings::ActiveModel {
    listings::ActiveModel {
        id: Set(listing.id),
        vendor_id: Set(listing.vendor_id),
        name: Set(listing.name.clone()),
        description: Set(listing.description.clone()),
        food_type: Set(listing.food_type.as_str().to_owned()),
        date: Set(listing.date),
        price: Set(listing.price),
        category: Set(listing.category.clone()),
        food_image: Set(listing.food_image.clone()),
        location: Set(listing.location.clone()),
        status: Set(listing.status.as_str().to_owned()),
        created_at: Set(listing.created_at),
    }
}

fn listing_from_model(model: listings::Model) -> Result<Listing, ApiError> {
    Ok(Listing {
        id: model.id,
        vendor_id: model.vendor_id,
        name: model.name,
        description: model.description,
        food_type: model.food_type.parse().context("decode food type")?,
        date: model.date,
        price: model.price,
        category: model.category,
        food_image: model.food_image,
        location: model.location,
        status: model.status.parse().context("decode listing status")?,
        created_at: model.created_at,
    })
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserOrder>, ApiError> {
        let model = user_orders::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find order by id")?;
        Ok(model.map(order_from_model))
    }

    async fn list(&self) -> Result<Vec<UserOrder>, ApiError> {
        let models = user_orders::Entity::find()
            .order_by_desc(user_orders::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list orders")?;
        Ok(models.into_iter().map(order_from_model).collect())
    }

    async fn list_by_userid(&self, userid: &str) -> Result<Vec<UserOrder>, ApiError> {
        let models = user_orders::Entity::find()
            .filter(user_orders::Column::Userid.eq(userid))
            .order_by_desc(user_orders::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list orders by userid")?;
        Ok(models.into_iter().map(order_from_model).collect())
    }

    async fn create(&self, order: &UserOrder) -> Result<(), ApiError> {
        order_active_model(order)
            .insert(&self.db)
            .await
            .context("create order")?;
        Ok(())
    }

    async fn update(&self, order: &UserOrder) -> Result<(), ApiError> {
        order_active_model(order)
            .update(&self.db)
            .await
            .map_err(|e| update_err(e, "update order", "UserOrder"))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = user_orders::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete order")?;
        Ok(result.rows_affected > 0)
    }
}

fn order_active_model(order: &UserOrder) -> user_orders::ActiveModel {
    user_orders::ActiveModel {
        id: Set(order.id),
        username: Set(order.username.clone()),
        userid: Set(order.userid.clone()),
        userlocation: Set(order.userlocation.clone()),
        foodname: Set(order.foodname.clone()),
        usernamecontactno: Set(order.usernamecontactno.clone()),
        useremailid: Set(order.useremailid.clone()),
        description: Set(order.description.clone()),
        quantity: Set(order.quantity),
        date: Set(order.date),
        created_at: Set(order.created_at),
    }
}

fn order_from_model(model: user_orders::Model) -> UserOrder {
    UserOrder {
        id: model.id,
        username: model.username,
        userid: model.userid,
        userlocation: model.userlocation,
        foodname: model.foodname,
        usernamecontactno: model.usernamecontactno,
        useremailid: model.useremailid,
        description: model.description,
        quantity: model.quantity,
        date: model.date,
        created_at: model.created_at,
    }
}

// ── Feedback repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFeedbackRepository {
    pub db: DatabaseConnection,
}

impl FeedbackRepository for DbFeedbackRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Feedback>, ApiError> {
        let model = feedback::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find feedback by id")?;
        model.map(feedback_from_model).transpose()
    }

    async fn list(&self) -> Result<Vec<Feedback>, ApiError> {
        let models = feedback::Entity::find()
            .order_by_desc(feedback::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list feedback")?;
        models.into_iter().map(feedback_from_model).collect()
    }

    async fn create(&self, entry: &Feedback) -> Result<(), ApiError> {
        feedback::ActiveModel {
            id: Set(entry.id),
            user_id: Set(entry.user_id.clone()),
            username: Set(entry.username.clone()),
            mobile: Set(entry.mobile.clone()),
            kind: Set(entry.kind.as_str().to_owned()),
            description: Set(entry.description.clone()),
            created_at: Set(entry.created_at),
        }
        .insert(&self.db)
        .await
        .context("create feedback")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = feedback::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete feedback")?;
        Ok(result.rows_affected > 0)
    }
}

fn feedback_from_model(model: feedback::Model) -> Result<Feedback, ApiError> {
    Ok(Feedback {
        id: model.id,
        user_id: model.user_id,
        username: model.username,
        mobile: model.mobile,
        kind: model.kind.parse().context("decode feedback kind")?,
        description: model.description,
        created_at: model.created_at,
    })
}
