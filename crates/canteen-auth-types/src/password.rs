//! bcrypt password hashing.
//!
//! Hashing runs on the blocking pool so a signup burst does not stall the
//! request workers.

/// bcrypt cost factor for every stored credential.
pub const PASSWORD_COST: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Hash `plain` with a fresh random salt.
pub async fn hash_password(plain: &str) -> Result<String, PasswordError> {
    let plain = plain.to_owned();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plain, PASSWORD_COST)).await??;
    Ok(hashed)
}

/// Compare `plain` against a stored bcrypt hash.
pub async fn verify_password(plain: &str, hash: &str) -> Result<bool, PasswordError> {
    let plain = plain.to_owned();
    let hash = hash.to_owned();
    let matched = tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hash)).await??;
    Ok(matched)
}
