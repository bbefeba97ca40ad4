use canteen_auth_types::password::verify_password;
use canteen_auth_types::session::ActiveSession;
use canteen_auth_types::token::TokenSigner;
use canteen_domain::contact::normalize_email;

use crate::domain::repository::{
    AdminRepository, CredentialRepository, UserRepository, VendorMemberRepository,
    VendorRepository,
};
use crate::error::ApiError;

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// `Ok(None)` covers both an unknown email and a wrong password.
async fn attempt<R: CredentialRepository>(
    repo: &R,
    signer: &TokenSigner,
    input: &LoginInput,
) -> Result<Option<ActiveSession>, ApiError> {
    let email = normalize_email(&input.email);
    let Some(creds) = repo.find_credentials(&email).await? else {
        return Ok(None);
    };
    if !verify_password(&input.password, &creds.password_hash).await? {
        return Ok(None);
    }
    let token = signer.issue(R::ROLE, creds.id)?;
    Ok(Some(ActiveSession {
        role: R::ROLE,
        principal_id: creds.id,
        token,
    }))
}

// ── Login (single role) ──────────────────────────────────────────────────────

pub struct LoginUseCase<R: CredentialRepository> {
    pub repo: R,
    pub signer: TokenSigner,
}

impl<R: CredentialRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<ActiveSession, ApiError> {
        attempt(&self.repo, &self.signer, &input)
            .await?
            .ok_or(ApiError::InvalidCredentials)
    }
}

// ── UnifiedLogin ─────────────────────────────────────────────────────────────

/// Tries each role in `Role::LOGIN_ORDER`; the first password match wins.
///
/// An email registered under several roles with different passwords falls
/// through to the next role instead of failing on the first hit.
pub struct UnifiedLoginUseCase<U, A, V, M>
where
    U: UserRepository,
    A: AdminRepository,
    V: VendorRepository,
    M: VendorMemberRepository,
{
    pub users: U,
    pub admins: A,
    pub vendors: V,
    pub members: M,
    pub signer: TokenSigner,
}

impl<U, A, V, M> UnifiedLoginUseCase<U, A, V, M>
where
    U: UserRepository,
    A: AdminRepository,
    V: VendorRepository,
    M: VendorMemberRepository,
{
    pub async fn execute(&self, input: LoginInput) -> Result<ActiveSession, ApiError> {
        if let Some(session) = attempt(&self.users, &self.signer, &input).await? {
            return Ok(session);
        }
        if let Some(session) = attempt(&self.admins, &self.signer, &input).await? {
            return Ok(session);
        }
        if let Some(session) = attempt(&self.vendors, &self.signer, &input).await? {
            return Ok(session);
        }
        attempt(&self.members, &self.signer, &input)
            .await?
            .ok_or(ApiError::InvalidCredentials)
    }
}
