//! Principal roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of account a principal belongs to.
///
/// Each role lives in its own table, so the same email or mobile number may
/// appear under two roles. Tokens are role-scoped through [`Role::claim_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Admin,
    Vendor,
    VendorMember,
}

impl Role {
    /// Order in which the unified login tries the role tables.
    pub const LOGIN_ORDER: [Role; 4] = [Role::User, Role::Admin, Role::Vendor, Role::VendorMember];

    /// Name of the JWT claim carrying the principal id for this role.
    ///
    /// Wire names match the client payloads (`userId`, `adminId`, ...).
    pub fn claim_key(self) -> &'static str {
        match self {
            Self::User => "userId",
            Self::Admin => "adminId",
            Self::Vendor => "vendorId",
            Self::VendorMember => "vendorMemberId",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Vendor => "vendor",
            Self::VendorMember => "vendor_member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
