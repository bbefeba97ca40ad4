use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use canteen_domain::role::Role;

use crate::domain::types::Vendor;
use crate::error::ApiError;
use crate::extract::{FieldOrder, ValidatedJson, parse_id};
use crate::handlers::user::LoginRequest;
use crate::handlers::{MessageResponse, WithMessage, message, token_reply};
use crate::state::AppState;
use crate::usecase::login::LoginUseCase;
use crate::usecase::signup::{VendorSignupInput, VendorSignupUseCase};
use crate::usecase::vendor::{
    DeleteVendorUseCase, GetVendorUseCase, ListVendorsUseCase, UpdateVendorInput,
    UpdateVendorUseCase,
};

// ── POST /api/vendor/signup ──────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VendorSignupRequest {
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
}

impl FieldOrder for VendorSignupRequest {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "email",
        "mobile",
        "password",
        "confirmPassword",
        "locations",
    ];
}

pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<VendorSignupRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let usecase = VendorSignupUseCase {
        repo: state.vendor_repo(),
        signer: state.signer.clone(),
    };
    let out = usecase
        .execute(VendorSignupInput {
            name: body.name,
            email: body.email,
            mobile: body.mobile,
            password: body.password,
            locations: body.locations,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        token_reply(Role::Vendor, out.id, out.token, "Vendor registered successfully"),
    ))
}

// ── POST /api/vendor/login ───────────────────────────────────────────────────

pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let usecase = LoginUseCase {
        repo: state.vendor_repo(),
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

// ── GET /api/vendor/vendor/{id} ──────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorResponse {
    pub vendor_id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub locations: Vec<String>,
}

impl From<Vendor> for VendorResponse {
    fn from(vendor: Vendor) -> Self {
        Self {
            vendor_id: vendor.id.to_string(),
            name: vendor.name,
            email: vendor.email,
            mobile: vendor.mobile,
            locations: vendor.locations,
        }
    }
}

pub async fn get_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VendorResponse>, ApiError> {
    let id = parse_id(&id, "vendor")?;
    let usecase = GetVendorUseCase {
        repo: state.vendor_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── GET /api/vendor/getallvendor ─────────────────────────────────────────────

pub async fn list_vendors(
    State(state): State<AppState>,
) -> Result<Json<Vec<VendorResponse>>, ApiError> {
    let usecase = ListVendorsUseCase {
        repo: state.vendor_repo(),
    };
    let vendors = usecase.execute().await?;
    Ok(Json(vendors.into_iter().map(VendorResponse::from).collect()))
}

// ── PUT /api/vendor/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct UpdateVendorRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Mobile is required"))]
    pub mobile: String,
    pub locations: Option<Vec<String>>,
}

impl FieldOrder for UpdateVendorRequest {
    const FIELDS: &'static [&'static str] = &["name", "mobile", "locations"];
}

pub async fn update_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateVendorRequest>,
) -> Result<Json<WithMessage<VendorResponse>>, ApiError> {
    let id = parse_id(&id, "vendor")?;
    let usecase = UpdateVendorUseCase {
        repo: state.vendor_repo(),
    };
    let vendor = usecase
        .execute(
            id,
            UpdateVendorInput {
                name: body.name,
                mobile: body.mobile,
                locations: body.locations,
            },
        )
        .await?;
    Ok(WithMessage::new(
        vendor.into(),
        "Vendor details updated successfully",
    ))
}

// ── DELETE /api/vendor/{id} ──────────────────────────────────────────────────

pub async fn delete_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id, "vendor")?;
    let usecase = DeleteVendorUseCase {
        repo: state.vendor_repo(),
    };
    usecase.execute(id).await?;
    Ok(message("Vendor deleted successfully"))
}
