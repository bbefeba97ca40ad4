use chrono::Utc;
use uuid::Uuid;

use canteen_auth_types::password::hash_password;
use canteen_domain::contact::normalize_email;

use crate::domain::repository::AdminRepository;
use crate::domain::types::Admin;
use crate::error::{ApiError, UniqueField};

pub const ADMIN_EXISTS: &str = "Admin already exists with this email";

// ── GetAdmin ─────────────────────────────────────────────────────────────────

pub struct GetAdminUseCase<R: AdminRepository> {
    pub repo: R,
}

impl<R: AdminRepository> GetAdminUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Admin, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Admin"))
    }
}

// ── UpdateAdmin ──────────────────────────────────────────────────────────────

pub struct UpdateAdminInput {
    pub company_name: String,
    pub contact_no: String,
}

pub struct UpdateAdminUseCase<R: AdminRepository> {
    pub repo: R,
}

impl<R: AdminRepository> UpdateAdminUseCase<R> {
    pub async fn execute(&self, id: Uuid, input: UpdateAdminInput) -> Result<Admin, ApiError> {
        let mut admin = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Admin"))?;
        admin.company_name = input.company_name;
        admin.contact_no = input.contact_no;
        self.repo.update(&admin).await?;
        Ok(admin)
    }
}

// ── ChangeAdminPassword ──────────────────────────────────────────────────────

pub struct ChangeAdminPasswordUseCase<R: AdminRepository> {
    pub repo: R,
}

impl<R: AdminRepository> ChangeAdminPasswordUseCase<R> {
    /// `new_password` length is checked by the caller.
    pub async fn execute(&self, id: Uuid, new_password: &str) -> Result<(), ApiError> {
        let mut admin = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Admin"))?;
        admin.password_hash = hash_password(new_password).await?;
        self.repo.update(&admin).await
    }
}

// ── SeedAdmin ────────────────────────────────────────────────────────────────

pub struct SeedAdminInput {
    pub company_name: String,
    pub email: String,
    pub password: String,
    pub contact_no: String,
}

pub struct SeedAdminUseCase<R: AdminRepository> {
    pub repo: R,
}

impl<R: AdminRepository> SeedAdminUseCase<R> {
    pub async fn execute(&self, input: SeedAdminInput) -> Result<Admin, ApiError> {
        let admin = Admin {
            id: Uuid::now_v7(),
            company_name: input.company_name,
            email: normalize_email(&input.email),
            password_hash: hash_password(&input.password).await?,
            contact_no: input.contact_no,
            created_at: Utc::now(),
        };
        self.repo.create(&admin).await.map_err(|e| match e {
            ApiError::UniqueViolation(UniqueField::Email) => {
                ApiError::AlreadyExists(ADMIN_EXISTS.into())
            }
            other => other,
        })?;
        Ok(admin)
    }
}
