use chrono::Utc;
use uuid::Uuid;

use canteen_domain::feedback::FeedbackKind;

use crate::domain::repository::FeedbackRepository;
use crate::domain::types::Feedback;
use crate::error::ApiError;

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const INVALID_KIND: &str = "Invalid feedback type";

#[derive(Debug, Default)]
pub struct SubmitFeedbackInput {
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub mobile: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
}

// ── SubmitFeedback ───────────────────────────────────────────────────────────

pub struct SubmitFeedbackUseCase<R: FeedbackRepository> {
    pub repo: R,
}

impl<R: FeedbackRepository> SubmitFeedbackUseCase<R> {
    pub async fn execute(&self, input: SubmitFeedbackInput) -> Result<Feedback, ApiError> {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        let (Some(user_id), Some(username), Some(mobile), Some(kind), Some(description)) = (
            non_blank(input.user_id),
            non_blank(input.username),
            non_blank(input.mobile),
            non_blank(input.kind),
            non_blank(input.description),
        ) else {
            return Err(ApiError::Validation(MISSING_FIELDS.into()));
        };
        let kind = kind
            .parse::<FeedbackKind>()
            .map_err(|_| ApiError::Validation(INVALID_KIND.into()))?;
        let feedback = Feedback {
            id: Uuid::now_v7(),
            user_id,
            username,
            mobile,
            kind,
            description,
            created_at: Utc::now(),
        };
        self.repo.create(&feedback).await?;
        Ok(feedback)
    }
}

// ── ListFeedback ─────────────────────────────────────────────────────────────

pub struct ListFeedbackUseCase<R: FeedbackRepository> {
    pub repo: R,
}

impl<R: FeedbackRepository> ListFeedbackUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Feedback>, ApiError> {
        self.repo.list().await
    }
}

// ── GetFeedback ──────────────────────────────────────────────────────────────

pub struct GetFeedbackUseCase<R: FeedbackRepository> {
    pub repo: R,
}

impl<R: FeedbackRepository> GetFeedbackUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Feedback, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("Feedback"))
    }
}

// ── DeleteFeedback ───────────────────────────────────────────────────────────

pub struct DeleteFeedbackUseCase<R: FeedbackRepository> {
    pub repo: R,
}

impl<R: FeedbackRepository> DeleteFeedbackUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiError> {
        if !self.repo.delete(id).await? {
            return Err(ApiError::NotFound("Feedback"));
        }
        Ok(())
    }
}
