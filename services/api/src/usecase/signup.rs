use chrono::Utc;
use uuid::Uuid;

use canteen_auth_types::password::hash_password;
use canteen_auth_types::token::TokenSigner;
use canteen_domain::contact::normalize_email;
use canteen_domain::role::Role;

use crate::domain::repository::{UserRepository, VendorMemberRepository, VendorRepository};
use crate::domain::types::{User, Vendor, VendorMember};
use crate::error::{ApiError, UniqueField};

pub const USER_EXISTS: &str = "User already exists";
pub const VENDOR_MOBILE_EXISTS: &str = "Vendor already exists with this mobile number";
pub const VENDOR_EMAIL_EXISTS: &str = "Vendor already exists with this email";
pub const MEMBER_MOBILE_EXISTS: &str = "Vendor member already exists with this mobile number";
pub const MEMBER_EMAIL_EXISTS: &str = "Vendor member already exists with this email";

/// New principal id plus a token for it.
#[derive(Debug)]
pub struct SignupOutput {
    pub id: Uuid,
    pub token: String,
}

/// The pre-checks are best effort; a unique-index hit on insert is the real guard
/// and gets the same wording.
fn conflict(err: ApiError, on_mobile: &str, on_email: &str) -> ApiError {
    match err {
        ApiError::UniqueViolation(UniqueField::Mobile) => ApiError::AlreadyExists(on_mobile.into()),
        ApiError::UniqueViolation(UniqueField::Email) => ApiError::AlreadyExists(on_email.into()),
        other => other,
    }
}

// ── UserSignup ───────────────────────────────────────────────────────────────

pub struct UserSignupInput {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
}

pub struct UserSignupUseCase<R: UserRepository> {
    pub repo: R,
    pub signer: TokenSigner,
}

impl<R: UserRepository> UserSignupUseCase<R> {
    pub async fn execute(&self, input: UserSignupInput) -> Result<SignupOutput, ApiError> {
        let email = normalize_email(&input.email);
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(ApiError::AlreadyExists(USER_EXISTS.into()));
        }
        let user = User {
            id: Uuid::now_v7(),
            name: input.name,
            email,
            mobile: input.mobile,
            password_hash: hash_password(&input.password).await?,
            created_at: Utc::now(),
        };
        self.repo
            .create(&user)
            .await
            .map_err(|e| conflict(e, USER_EXISTS, USER_EXISTS))?;
        let token = self.signer.issue(Role::User, user.id)?;
        Ok(SignupOutput { id: user.id, token })
    }
}

// ── VendorSignup ─────────────────────────────────────────────────────────────

pub struct VendorSignupInput {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub locations: Vec<String>,
}

pub struct VendorSignupUseCase<R: VendorRepository> {
    pub repo: R,
    pub signer: TokenSigner,
}

impl<R: VendorRepository> VendorSignupUseCase<R> {
    pub async fn execute(&self, input: VendorSignupInput) -> Result<SignupOutput, ApiError> {
        if self.repo.find_by_mobile(&input.mobile).await?.is_some() {
            return Err(ApiError::AlreadyExists(VENDOR_MOBILE_EXISTS.into()));
        }
        let vendor = Vendor {
            id: Uuid::now_v7(),
            name: input.name.trim().to_owned(),
            email: normalize_email(&input.email),
            mobile: input.mobile,
            password_hash: hash_password(&input.password).await?,
            locations: input.locations,
            created_at: Utc::now(),
        };
        self.repo
            .create(&vendor)
            .await
            .map_err(|e| conflict(e, VENDOR_MOBILE_EXISTS, VENDOR_EMAIL_EXISTS))?;
        let token = self.signer.issue(Role::Vendor, vendor.id)?;
        Ok(SignupOutput {
            id: vendor.id,
            token,
        })
    }
}

// ── VendorMemberSignup ───────────────────────────────────────────────────────

pub struct VendorMemberSignupInput {
    pub vendor_id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub locations: Vec<String>,
}

pub struct VendorMemberSignupUseCase<R: VendorMemberRepository> {
    pub repo: R,
    pub signer: TokenSigner,
}

impl<R: VendorMemberRepository> VendorMemberSignupUseCase<R> {
    pub async fn execute(&self, input: VendorMemberSignupInput) -> Result<SignupOutput, ApiError> {
        let email = normalize_email(&input.email);
        if self.repo.find_by_mobile(&input.mobile).await?.is_some() {
            return Err(ApiError::AlreadyExists(MEMBER_MOBILE_EXISTS.into()));
        }
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(ApiError::AlreadyExists(MEMBER_EMAIL_EXISTS.into()));
        }
        let member = VendorMember {
            id: Uuid::now_v7(),
            vendor_id: input.vendor_id,
            name: input.name.trim().to_owned(),
            email,
            mobile: input.mobile,
            password_hash: hash_password(&input.password).await?,
            locations: input.locations,
            created_at: Utc::now(),
        };
        self.repo
            .create(&member)
            .await
            .map_err(|e| conflict(e, MEMBER_MOBILE_EXISTS, MEMBER_EMAIL_EXISTS))?;
        let token = self.signer.issue(Role::VendorMember, member.id)?;
        Ok(SignupOutput {
            id: member.id,
            token,
        })
    }
}
