use axum::extract::State;
use axum::Json;
use serde::Serialize;

use canteen_auth_types::session::ActiveSession;

use crate::error::ApiError;
use crate::extract::{AsAdmin, AsUser, AsVendor, AsVendorMember, Authenticated, ValidatedJson};
use crate::handlers::WithMessage;
use crate::handlers::user::LoginRequest;
use crate::state::AppState;
use crate::usecase::login::UnifiedLoginUseCase;

// ── POST /api/auth/login ─────────────────────────────────────────────────────

pub async fn unified_login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<Json<WithMessage<ActiveSession>>, ApiError> {
    let usecase = UnifiedLoginUseCase {
        users: state.user_repo(),
        admins: state.admin_repo(),
        vendors: state.vendor_repo(),
        members: state.vendor_member_repo(),
        signer: state.signer.clone(),
    };
    let session = usecase.execute(body.into()).await?;
    Ok(WithMessage::new(session, "Login successful"))
}

// ── Token checks ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EmailResponse {
    pub email: String,
}

/// `GET /`
pub async fn check_user(auth: Authenticated<AsUser>) -> Json<EmailResponse> {
    Json(EmailResponse {
        email: auth.into_inner().email,
    })
}

/// `GET /admintoken`
pub async fn check_admin(auth: Authenticated<AsAdmin>) -> Json<EmailResponse> {
    Json(EmailResponse {
        email: auth.into_inner().email,
    })
}

/// `GET /vendorToken`
pub async fn check_vendor(auth: Authenticated<AsVendor>) -> Json<EmailResponse> {
    Json(EmailResponse {
        email: auth.into_inner().email,
    })
}

/// `GET /vendormemberToken`
pub async fn check_vendor_member(auth: Authenticated<AsVendorMember>) -> Json<EmailResponse> {
    Json(EmailResponse {
        email: auth.into_inner().email,
    })
}
