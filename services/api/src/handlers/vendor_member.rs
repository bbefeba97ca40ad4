use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use canteen_domain::role::Role;

use crate::domain::types::VendorMember;
use crate::error::ApiError;
use crate::extract::{FieldOrder, ValidatedJson, parse_id};
use crate::handlers::user::LoginRequest;
use crate::handlers::{MessageResponse, WithMessage, message, token_reply};
use crate::state::AppState;
use crate::usecase::login::LoginUseCase;
use crate::usecase::signup::{VendorMemberSignupInput, VendorMemberSignupUseCase};
use crate::usecase::vendor_member::{
    DeleteVendorMemberUseCase, GetVendorMemberUseCase, ListVendorMembersByVendorUseCase,
    ListVendorMembersUseCase, UpdateVendorMemberInput, UpdateVendorMemberUseCase,
};

// ── POST /api/vendormember/signup ────────────────────────────────────────────

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VendorMemberSignupRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email must be a valid email")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Mobile is required"))]
    pub mobile: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[serde(default)]
    #[validate(must_match(other = "password", message = "Passwords must match"))]
    pub confirm_password: String,
    #[serde(default)]
    pub locations: Vec<String>,
    /// Owning vendor's id.
    #[serde(default)]
    #[validate(length(min = 1, message = "Vendor is required"))]
    pub vendor: String,
}

impl FieldOrder for VendorMemberSignupRequest {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "email",
        "mobile",
        "password",
        "confirmPassword",
        "locations",
        "vendor",
    ];
}

pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<VendorMemberSignupRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let vendor_id = parse_id(&body.vendor, "vendor")?;
    let usecase = VendorMemberSignupUseCase {
        repo: state.vendor_member_repo(),
        signer: state.signer.clone(),
    };
    let out = usecase
        .execute(VendorMemberSignupInput {
            vendor_id,
            name: body.name,
            email: body.email,
            mobile: body.mobile,
            password: body.password,
            locations: body.locations,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        token_reply(
            Role::VendorMember,
            out.id,
            out.token,
            "Vendor member registered successfully",
        ),
    ))
}

// ── POST /api/vendormember/login ─────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let usecase = LoginUseCase {
        repo: state.vendor_member_repo(),
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

// ── GET /api/vendormember/{id} ───────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorMemberResponse {
    pub vendor_member_id: String,
    pub vendor_id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub locations: Vec<String>,
}

impl From<VendorMember> for VendorMemberResponse {
    fn from(member: VendorMember) -> Self {
        Self {
            vendor_member_id: member.id.to_string(),
            vendor_id: member.vendor_id.to_string(),
            name: member.name,
            email: member.email,
            mobile: member.mobile,
            locations: member.locations,
        }
    }
}

pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VendorMemberResponse>, ApiError> {
    let id = parse_id(&id, "vendor member")?;
    let usecase = GetVendorMemberUseCase {
        repo: state.vendor_member_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── GET /api/vendormember/getallmembers ──────────────────────────────────────

pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<VendorMemberResponse>>, ApiError> {
    let usecase = ListVendorMembersUseCase {
        repo: state.vendor_member_repo(),
    };
    let members = usecase.execute().await?;
    Ok(Json(
        members.into_iter().map(VendorMemberResponse::from).collect(),
    ))
}

// ── GET /api/vendormember/byvendor/{vendorId} ────────────────────────────────

pub async fn list_members_by_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> Result<Json<Vec<VendorMemberResponse>>, ApiError> {
    let vendor_id = parse_id(&vendor_id, "vendor")?;
    let usecase = ListVendorMembersByVendorUseCase {
        repo: state.vendor_member_repo(),
    };
    let members = usecase.execute(vendor_id).await?;
    Ok(Json(
        members.into_iter().map(VendorMemberResponse::from).collect(),
    ))
}

// ── PUT /api/vendormember/{id} ───────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct UpdateVendorMemberRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Mobile is required"))]
    pub mobile: String,
    pub locations: Option<Vec<String>>,
}

impl FieldOrder for UpdateVendorMemberRequest {
    const FIELDS: &'static [&'static str] = &["name", "mobile", "locations"];
}

pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateVendorMemberRequest>,
) -> Result<Json<WithMessage<VendorMemberResponse>>, ApiError> {
    let id = parse_id(&id, "vendor member")?;
    let usecase = UpdateVendorMemberUseCase {
        repo: state.vendor_member_repo(),
    };
    let member = usecase
        .execute(
            id,
            UpdateVendorMemberInput {
                name: body.name,
                mobile: body.mobile,
                locations: body.locations,
            },
        )
        .await?;
    Ok(WithMessage::new(
        member.into(),
        "Vendor member details updated successfully",
    ))
}

// ── DELETE /api/vendormember/{id} ────────────────────────────────────────────

pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id, "vendor member")?;
    let usecase = DeleteVendorMemberUseCase {
        repo: state.vendor_member_repo(),
    };
    usecase.execute(id).await?;
    Ok(message("Vendor member deleted successfully"))
}
