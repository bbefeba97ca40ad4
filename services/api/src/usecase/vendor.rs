use uuid::Uuid;

use crate::domain::repository::VendorRepository;
use crate::domain::types::Vendor;
use crate::error::{ApiError, UniqueField};

pub const MOBILE_TAKEN: &str = "Mobile number is already associated with another vendor";

// ── GetVendor ────────────────────────────────────────────────────────────────

pub struct GetVendorUseCase<R: VendorRepository> {
    pub repo: R,
}

impl<R: VendorRepository> GetVendorUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Vendor, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Vendor"))
    }
}

// ── ListVendors ──────────────────────────────────────────────────────────────

pub struct ListVendorsUseCase<R: VendorRepository> {
    pub repo: R,
}

impl<R: VendorRepository> ListVendorsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Vendor>, ApiError> {
        self.repo.list().await
    }
}

// ── UpdateVendor ─────────────────────────────────────────────────────────────

pub struct UpdateVendorInput {
    pub name: String,
    pub mobile: String,
    /// `None` keeps the current locations.
    pub locations: Option<Vec<String>>,
}

pub struct UpdateVendorUseCase<R: VendorRepository> {
    pub repo: R,
}

impl<R: VendorRepository> UpdateVendorUseCase<R> {
    pub async fn execute(&self, id: Uuid, input: UpdateVendorInput) -> Result<Vendor, ApiError> {
        let mut vendor = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Vendor"))?;
        if let Some(holder) = self.repo.find_by_mobile(&input.mobile).await? {
            if holder.id != id {
                return Err(ApiError::AlreadyExists(MOBILE_TAKEN.into()));
            }
        }
        vendor.name = input.name.trim().to_owned();
        vendor.mobile = input.mobile;
        if let Some(locations) = input.locations {
            vendor.locations = locations;
        }
        self.repo.update(&vendor).await.map_err(|e| match e {
            ApiError::UniqueViolation(UniqueField::Mobile) => {
                ApiError::AlreadyExists(MOBILE_TAKEN.into())
            }
            other => other,
        })?;
        Ok(vendor)
    }
}

// ── DeleteVendor ─────────────────────────────────────────────────────────────

pub struct DeleteVendorUseCase<R: VendorRepository> {
    pub repo: R,
}

impl<R: VendorRepository> DeleteVendorUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiError> {
        if !self.repo.delete(id).await? {
            return Err(ApiError::NotFound("Vendor"));
        }
        Ok(())
    }
}
