use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::types::Branch;
use crate::error::ApiError;
use crate::extract::{FieldOrder, ValidatedJson, parse_id};
use crate::handlers::{MessageResponse, message};
use crate::state::AppState;
use crate::usecase::branch::{
    CreateBranchInput, CreateBranchUseCase, DeleteBranchUseCase, GetBranchUseCase,
    ListBranchesUseCase, UpdateBranchInput, UpdateBranchUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchResponse {
    pub id: String,
    pub admin_id: String,
    pub company_name: String,
    pub country: String,
    pub city: String,
    pub branch: String,
    #[serde(serialize_with = "canteen_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Branch> for BranchResponse {
    fn from(b: Branch) -> Self {
        Self {
            id: b.id.to_string(),
            admin_id: b.admin_id,
            company_name: b.company_name,
            country: b.country,
            city: b.city,
            branch: b.branch,
            created_at: b.created_at,
        }
    }
}

// ── POST /api/branchRoutes/addbranch ─────────────────────────────────────────

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "adminId is required"))]
    pub admin_id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "companyName is required"))]
    pub company_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "country is required"))]
    pub country: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "branch is required"))]
    pub branch: String,
}

impl FieldOrder for CreateBranchRequest {
    const FIELDS: &'static [&'static str] = &[
        "adminId",
        "companyName",
        "country",
        "city",
        "branch",
    ];
}

pub async fn create_branch(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateBranchRequest>,
) -> Result<(StatusCode, Json<BranchResponse>), ApiError> {
    let usecase = CreateBranchUseCase {
        repo: state.branch_repo(),
    };
    let branch = usecase
        .execute(CreateBranchInput {
            admin_id: body.admin_id,
            company_name: body.company_name,
            country: body.country,
            city: body.city,
            branch: body.branch,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(branch.into())))
}

// ── GET /api/branchRoutes/viewallbranch ──────────────────────────────────────

pub async fn list_branches(
    State(state): State<AppState>,
) -> Result<Json<Vec<BranchResponse>>, ApiError> {
    let usecase = ListBranchesUseCase {
        repo: state.branch_repo(),
    };
    let branches = usecase.execute().await?;
    Ok(Json(branches.into_iter().map(BranchResponse::from).collect()))
}

// ── GET /api/branchRoutes/viewbranch/{id} ────────────────────────────────────

pub async fn get_branch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BranchResponse>, ApiError> {
    let id = parse_id(&id, "branch")?;
    let usecase = GetBranchUseCase {
        repo: state.branch_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PUT /api/branchRoutes/editbranch/{id} ────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct UpdateBranchRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "country is required"))]
    pub country: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "city is required"))]
    pub city: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "branch is required"))]
    pub branch: String,
}

impl FieldOrder for UpdateBranchRequest {
    const FIELDS: &'static [&'static str] = &["country", "city", "branch"];
}

pub async fn update_branch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateBranchRequest>,
) -> Result<Json<BranchResponse>, ApiError> {
    let id = parse_id(&id, "branch")?;
    let usecase = UpdateBranchUseCase {
        repo: state.branch_repo(),
    };
    let branch = usecase
        .execute(
            id,
            UpdateBranchInput {
                country: body.country,
                city: body.city,
                branch: body.branch,
            },
        )
        .await?;
    Ok(Json(branch.into()))
}

// ── DELETE /api/branchRoutes/deletebranch/{id} ───────────────────────────────

pub async fn delete_branch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id, "branch")?;
    let usecase = DeleteBranchUseCase {
        repo: state.branch_repo(),
    };
    usecase.execute(id).await?;
    Ok(message("Branch deleted successfully"))
}
