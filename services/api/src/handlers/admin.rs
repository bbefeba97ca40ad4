use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::types::Admin;
use crate::error::ApiError;
use crate::extract::{FieldOrder, ValidatedJson, parse_id};
use crate::handlers::user::LoginRequest;
use crate::handlers::{MessageResponse, WithMessage, message, token_reply};
use crate::state::AppState;
use crate::usecase::admin::{
    ChangeAdminPasswordUseCase, GetAdminUseCase, UpdateAdminInput, UpdateAdminUseCase,
};
use crate::usecase::login::LoginUseCase;

// ── POST /api/admin/login ────────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let usecase = LoginUseCase {
        repo: state.admin_repo(),
        signer: state.signer.clone(),
    };
    let session = usecase.execute(body.into()).await?;
    Ok(token_reply(
        session.role,
        session.principal_id,
        session.token,
        "Login successful",
    ))
}

// ── GET /api/admin/{id} ──────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminResponse {
    pub admin_id: String,
    pub company_name: String,
    pub email: String,
    pub contact_no: String,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            admin_id: admin.id.to_string(),
            company_name: admin.company_name,
            email: admin.email,
            contact_no: admin.contact_no,
        }
    }
}

pub async fn get_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AdminResponse>, ApiError> {
    let id = parse_id(&id, "admin")?;
    let usecase = GetAdminUseCase {
        repo: state.admin_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PUT /api/admin/{id} ──────────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Company Name is required"))]
    pub company_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Contact Number is required"))]
    pub contact_no: String,
}

impl FieldOrder for UpdateAdminRequest {
    const FIELDS: &'static [&'static str] = &["companyName", "contactNo"];
}

pub async fn update_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateAdminRequest>,
) -> Result<Json<WithMessage<AdminResponse>>, ApiError> {
    let id = parse_id(&id, "admin")?;
    let usecase = UpdateAdminUseCase {
        repo: state.admin_repo(),
    };
    let admin = usecase
        .execute(
            id,
            UpdateAdminInput {
                company_name: body.company_name,
                contact_no: body.contact_no,
            },
        )
        .await?;
    Ok(WithMessage::new(
        admin.into(),
        "Admin details updated successfully",
    ))
}

// ── PUT /api/admin/password/{id} ─────────────────────────────────────────────

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    #[validate(length(min = 6, message = "New Password must be at least 6 characters long"))]
    pub new_password: String,
}

impl FieldOrder for ChangePasswordRequest {
    const FIELDS: &'static [&'static str] = &["newPassword"];
}

pub async fn change_password(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id, "admin")?;
    let usecase = ChangeAdminPasswordUseCase {
        repo: state.admin_repo(),
    };
    usecase.execute(id, &body.new_password).await?;
    Ok(message("Password updated successfully"))
}
