//! Role-scoped JWT signing and validation.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use canteen_domain::role::Role;

/// Default token lifetime in seconds (7 days).
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 604_800;

/// Errors returned by [`TokenSigner`].
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    /// Signature is fine but the token was issued for another role.
    #[error("token not issued for {0}")]
    WrongRole(Role),
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// JWT claims payload.
///
/// Exactly one of the id claims is present; its key names the role:
///
/// | Role | Claim |
/// |------|-------|
/// | user | `userId` |
/// | admin | `adminId` |
/// | vendor | `vendorId` |
/// | vendor member | `vendorMemberId` |
///
/// A verifier only reads the claim of the role it guards, so a vendor token
/// never resolves against the user table.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RoleClaims {
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "adminId", default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
    #[serde(rename = "vendorId", default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    #[serde(
        rename = "vendorMemberId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vendor_member_id: Option<String>,
    /// Issued-at, seconds since UNIX epoch.
    pub iat: u64,
    /// Expiration, seconds since UNIX epoch.
    pub exp: u64,
}

impl RoleClaims {
    pub fn new(role: Role, principal_id: Uuid, iat: u64, exp: u64) -> Self {
        let id = Some(principal_id.to_string());
        let mut claims = Self {
            iat,
            exp,
            ..Default::default()
        };
        match role {
            Role::User => claims.user_id = id,
            Role::Admin => claims.admin_id = id,
            Role::Vendor => claims.vendor_id = id,
            Role::VendorMember => claims.vendor_member_id = id,
        }
        claims
    }

    /// The raw id carried under `role`'s claim key, if any.
    pub fn principal(&self, role: Role) -> Option<&str> {
        match role {
            Role::User => self.user_id.as_deref(),
            Role::Admin => self.admin_id.as_deref(),
            Role::Vendor => self.vendor_id.as_deref(),
            Role::VendorMember => self.vendor_member_id.as_deref(),
        }
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Signs and verifies tokens for every role with one HMAC secret.
#[derive(Clone)]
pub struct TokenSigner {
    secret: String,
    ttl_secs: u64,
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenSigner {
    pub fn new(secret: impl Into<String>, ttl_secs: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Sign a token embedding `principal_id` under `role`'s claim key.
    pub fn issue(&self, role: Role, principal_id: Uuid) -> Result<String, TokenError> {
        let iat = now_secs();
        let claims = RoleClaims::new(role, principal_id, iat, iat.saturating_add(self.ttl_secs));
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(TokenError::Signing)
    }

    /// Verify signature and expiry, then read the id claimed for `role`.
    ///
    /// Default leeway = 60s.
    pub fn verify(&self, token: &str, role: Role) -> Result<Uuid, TokenError> {
        let claims = self.decode(token)?;
        let raw = claims.principal(role).ok_or(TokenError::WrongRole(role))?;
        raw.parse::<Uuid>().map_err(|_| TokenError::Malformed)
    }

    fn decode(&self, token: &str) -> Result<RoleClaims, TokenError> {
        let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
        validation.validate_exp = true;
        validation.required_spec_claims.clear();
        validation.set_required_spec_claims(&["exp"]);

        let data = decode::<RoleClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        })?;

        Ok(data.claims)
    }
}
