//! Client-side session state.
//!
//! A client holds credentials for at most one role at a time. Signing in as
//! any role replaces the previous session wholesale, so no per-role slots
//! ever need clearing.

use http::HeaderValue;
use http::header::InvalidHeaderValue;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use canteen_domain::role::Role;

/// The credentials of the signed-in principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    pub role: Role,
    pub principal_id: Uuid,
    pub token: String,
}

impl ActiveSession {
    /// `Authorization` header value for authenticated requests.
    pub fn authorization(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::from_str(&format!("Bearer {}", self.token))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    active: Option<ActiveSession>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `session` the active one, returning whatever it replaced.
    pub fn sign_in(&mut self, session: ActiveSession) -> Option<ActiveSession> {
        self.active.replace(session)
    }

    pub fn sign_out(&mut self) -> Option<ActiveSession> {
        self.active.take()
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    pub fn active_role(&self) -> Option<Role> {
        self.active.as_ref().map(|s| s.role)
    }

    /// The stored token, only if the active session belongs to `role`.
    pub fn token_for(&self, role: Role) -> Option<&str> {
        self.active
            .as_ref()
            .filter(|s| s.role == role)
            .map(|s| s.token.as_str())
    }
}
