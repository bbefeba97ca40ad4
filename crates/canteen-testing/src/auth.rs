//! Bearer-token helpers for integration tests.
//!
//! Signs real role-scoped tokens with a test secret so requests go through
//! the same verifier as production traffic.

use axum::http::{HeaderName, HeaderValue, header::AUTHORIZATION};
use uuid::Uuid;

use canteen_auth_types::token::TokenSigner;
use canteen_domain::role::Role;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-unit-tests-only";

pub fn test_signer() -> TokenSigner {
    TokenSigner::new(TEST_JWT_SECRET, 3600)
}

/// A principal to authenticate test requests as.
pub struct MockAuth {
    pub role: Role,
    pub principal_id: Uuid,
}

impl MockAuth {
    pub fn new(role: Role, principal_id: Uuid) -> Self {
        Self { role, principal_id }
    }

    pub fn token(&self) -> String {
        test_signer()
            .issue(self.role, self.principal_id)
            .expect("sign test token")
    }

    /// `Authorization: Bearer <token>` header pair.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        let value = HeaderValue::from_str(&format!("Bearer {}", self.token()))
            .expect("bearer header value");
        (AUTHORIZATION, value)
    }
}
