use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use canteen_domain::feedback::FeedbackKind;

use crate::domain::types::Feedback;
use crate::error::ApiError;
use crate::extract::{JsonBody, parse_id};
use crate::handlers::{MessageResponse, message};
use crate::state::AppState;
use crate::usecase::feedback::{
    DeleteFeedbackUseCase, GetFeedbackUseCase, ListFeedbackUseCase, SubmitFeedbackInput,
    SubmitFeedbackUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub mobile: String,
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub description: String,
    #[serde(serialize_with = "canteen_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Feedback> for FeedbackResponse {
    fn from(f: Feedback) -> Self {
        Self {
            id: f.id.to_string(),
            user_id: f.user_id,
            username: f.username,
            mobile: f.mobile,
            kind: f.kind,
            description: f.description,
            created_at: f.created_at,
        }
    }
}

// ── POST /api/user/feedback/submit-feedback ──────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub mobile: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
}

pub async fn submit_feedback(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SubmitFeedbackRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let usecase = SubmitFeedbackUseCase {
        repo: state.feedback_repo(),
    };
    usecase
        .execute(SubmitFeedbackInput {
            user_id: body.user_id,
            username: body.username,
            mobile: body.mobile,
            kind: body.kind,
            description: body.description,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        message("Feedback submitted successfully"),
    ))
}

// ── GET /api/user/feedback/get-all-feedback ──────────────────────────────────

pub async fn list_feedback(
    State(state): State<AppState>,
) -> Result<Json<Vec<FeedbackResponse>>, ApiError> {
    let usecase = ListFeedbackUseCase {
        repo: state.feedback_repo(),
    };
    let all = usecase.execute().await?;
    Ok(Json(all.into_iter().map(FeedbackResponse::from).collect()))
}

// ── GET /api/user/feedback/get-feedback/{id} ─────────────────────────────────

pub async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let id = parse_id(&id, "feedback")?;
    let usecase = GetFeedbackUseCase {
        repo: state.feedback_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── DELETE /api/user/feedback/delete-feedback/{id} ───────────────────────────

pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id, "feedback")?;
    let usecase = DeleteFeedbackUseCase {
        repo: state.feedback_repo(),
    };
    usecase.execute(id).await?;
    Ok(message("Feedback deleted successfully"))
}
