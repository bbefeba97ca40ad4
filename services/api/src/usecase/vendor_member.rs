use uuid::Uuid;

use crate::domain::repository::VendorMemberRepository;
use crate::domain::types::VendorMember;
use crate::error::{ApiError, UniqueField};

pub const MOBILE_TAKEN: &str = "Mobile number is already associated with another vendor member";
pub const NO_MEMBERS: &str = "No vendor members found for this vendor";

// ── GetVendorMember ──────────────────────────────────────────────────────────

pub struct GetVendorMemberUseCase<R: VendorMemberRepository> {
    pub repo: R,
}

impl<R: VendorMemberRepository> GetVendorMemberUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<VendorMember, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Vendor member"))
    }
}

// ── ListVendorMembers ────────────────────────────────────────────────────────

pub struct ListVendorMembersUseCase<R: VendorMemberRepository> {
    pub repo: R,
}

impl<R: VendorMemberRepository> ListVendorMembersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<VendorMember>, ApiError> {
        self.repo.list().await
    }
}

// ── ListVendorMembersByVendor ────────────────────────────────────────────────

pub struct ListVendorMembersByVendorUseCase<R: VendorMemberRepository> {
    pub repo: R,
}

impl<R: VendorMemberRepository> ListVendorMembersByVendorUseCase<R> {
    pub async fn execute(&self, vendor_id: Uuid) -> Result<Vec<VendorMember>, ApiError> {
        let members = self.repo.list_by_vendor(vendor_id).await?;
        if members.is_empty() {
            return Err(ApiError::NoneFound(NO_MEMBERS));
        }
        Ok(members)
    }
}

// ── UpdateVendorMember ───────────────────────────────────────────────────────

pub struct UpdateVendorMemberInput {
    pub name: String,
    pub mobile: String,
    pub locations: Option<Vec<String>>,
}

pub struct UpdateVendorMemberUseCase<R: VendorMemberRepository> {
    pub repo: R,
}

impl<R: VendorMemberRepository> UpdateVendorMemberUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        input: UpdateVendorMemberInput,
    ) -> Result<VendorMember, ApiError> {
        let mut member = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Vendor member"))?;
        if let Some(holder) = self.repo.find_by_mobile(&input.mobile).await? {
            if holder.id != id {
                return Err(ApiError::AlreadyExists(MOBILE_TAKEN.into()));
            }
        }
        member.name = input.name.trim().to_owned();
        member.mobile = input.mobile;
        if let Some(locations) = input.locations {
            member.locations = locations;
        }
        self.repo.update(&member).await.map_err(|e| match e {
            ApiError::UniqueViolation(UniqueField::Mobile) => {
                ApiError::AlreadyExists(MOBILE_TAKEN.into())
            }
            other => other,
        })?;
        Ok(member)
    }
}

// ── DeleteVendorMember ───────────────────────────────────────────────────────

pub struct DeleteVendorMemberUseCase<R: VendorMemberRepository> {
    pub repo: R,
}

impl<R: VendorMemberRepository> DeleteVendorMemberUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiError> {
        if !self.repo.delete(id).await? {
            return Err(ApiError::NotFound("Vendor member"));
        }
        Ok(())
    }
}
