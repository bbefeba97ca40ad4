use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::BranchRepository;
use crate::domain::types::Branch;
use crate::error::ApiError;

// ── CreateBranch ─────────────────────────────────────────────────────────────

pub struct CreateBranchInput {
    pub admin_id: String,
    pub company_name: String,
    pub country: String,
    pub city: String,
    pub branch: String,
}

pub struct CreateBranchUseCase<R: BranchRepository> {
    pub repo: R,
}

impl<R: BranchRepository> CreateBranchUseCase<R> {
    pub async fn execute(&self, input: CreateBranchInput) -> Result<Branch, ApiError> {
        let branch = Branch {
            id: Uuid::now_v7(),
            admin_id: input.admin_id,
            company_name: input.company_name,
            country: input.country,
            city: input.city,
            branch: input.branch,
            created_at: Utc::now(),
        };
        self.repo.create(&branch).await?;
        Ok(branch)
    }
}

// ── ListBranches ─────────────────────────────────────────────────────────────

pub struct ListBranchesUseCase<R: BranchRepository> {
    pub repo: R,
}

impl<R: BranchRepository> ListBranchesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Branch>, ApiError> {
        self.repo.list().await
    }
}

// ── GetBranch ────────────────────────────────────────────────────────────────

pub struct GetBranchUseCase<R: BranchRepository> {
    pub repo: R,
}

impl<R: BranchRepository> GetBranchUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Branch, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Branch"))
    }
}

// ── UpdateBranch ─────────────────────────────────────────────────────────────

/// Owner and company stay fixed after creation.
pub struct UpdateBranchInput {
    pub country: String,
    pub city: String,
    pub branch: String,
}

pub struct UpdateBranchUseCase<R: BranchRepository> {
    pub repo: R,
}

impl<R: BranchRepository> UpdateBranchUseCase<R> {
    pub async fn execute(&self, id: Uuid, input: UpdateBranchInput) -> Result<Branch, ApiError> {
        let mut branch = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Branch"))?;
        branch.country = input.country;
        branch.city = input.city;
        branch.branch = input.branch;
        self.repo.update(&branch).await?;
        Ok(branch)
    }
}

// ── DeleteBranch ─────────────────────────────────────────────────────────────

pub struct DeleteBranchUseCase<R: BranchRepository> {
    pub repo: R,
}

impl<R: BranchRepository> DeleteBranchUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiError> {
        if !self.repo.delete(id).await? {
            return Err(ApiError::NotFound("Branch"));
        }
        Ok(())
    }
}
