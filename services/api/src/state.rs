use sea_orm::DatabaseConnection;

use canteen_auth_types::token::TokenSigner;

use crate::infra::db::{
    DbAdminRepository, DbBranchRepository, DbFeedbackRepository, DbFoodItemRepository,
    DbListingRepository, DbOrderRepository, DbUserRepository, DbVendorMemberRepository,
    DbVendorRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub signer: TokenSigner,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn admin_repo(&self) -> DbAdminRepository {
        DbAdminRepository {
            db: self.db.clone(),
        }
    }

    pub fn vendor_repo(&self) -> DbVendorRepository {
        DbVendorRepository {
            db: self.db.clone(),
        }
    }

    pub fn vendor_member_repo(&self) -> DbVendorMemberRepository {
        DbVendorMemberRepository {
            db: self.db.clone(),
        }
    }

    pub fn branch_repo(&self) -> DbBranchRepository {
        DbBranchRepository {
            db: self.db.clone(),
        }
    }

    pub fn food_item_repo(&self) -> DbFoodItemRepository {
        DbFoodItemRepository {
            db: self.db.clone(),
        }
    }

    pub fn listing_repo(&self) -> DbListingRepository {
        DbListingRepository {
            db: self.db.clone(),
        }
    }

    pub fn order_repo(&self) -> DbOrderRepository {
        DbOrderRepository {
            db: self.db.clone(),
        }
    }

    pub fn feedback_repo(&self) -> DbFeedbackRepository {
        DbFeedbackRepository {
            db: self.db.clone(),
        }
    }
}
