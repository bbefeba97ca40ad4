use std::collections::BTreeMap;
use std::fmt;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use validator::ValidationErrors;

use canteen_auth_types::password::PasswordError;
use canteen_auth_types::token::TokenError;

/// Which order mutation hit the closed edit window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Edit,
    Delete,
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Edit => "edit",
            Self::Delete => "delete",
        })
    }
}

/// Column a unique index rejected an insert or update on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Email,
    Mobile,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Email => "email",
            Self::Mobile => "mobile",
        })
    }
}

/// API service error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    /// Field-keyed validation failure; `message` repeats one of the entries.
    #[error("{message}")]
    InvalidFields {
        message: String,
        errors: BTreeMap<String, String>,
    },
    #[error("Invalid {0} ID")]
    InvalidId(&'static str),
    #[error("{0}")]
    AlreadyExists(String),
    /// Raised by repositories; use cases translate it into `AlreadyExists`.
    #[error("duplicate value for {0}")]
    UniqueViolation(UniqueField),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("You must be logged in")]
    NotLoggedIn,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Not authorized")]
    NotAuthorized,
    #[error("Cannot {0} order after 30 minutes")]
    OrderLocked(OrderAction),
    #[error("{0} not found")]
    NotFound(&'static str),
    /// A filtered list came back empty.
    #[error("{0}")]
    NoneFound(&'static str),
    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::InvalidFields { .. } => "INVALID_FIELDS",
            Self::InvalidId(_) => "INVALID_ID",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::UniqueViolation(_) => "DUPLICATE",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotLoggedIn => "NOT_LOGGED_IN",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::NotAuthorized => "NOT_AUTHORIZED",
            Self::OrderLocked(_) => "ORDER_LOCKED",
            Self::NotFound(_) | Self::NoneFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Build a field-keyed error. The reported message belongs to the first
    /// failing field in `order`, the body's declared field order.
    pub fn invalid_fields(errors: BTreeMap<String, String>, order: &[&str]) -> Self {
        let message = order
            .iter()
            .find_map(|field| errors.get(*field))
            .or_else(|| errors.values().next())
            .cloned()
            .unwrap_or_else(|| "Invalid request".to_owned());
        Self::InvalidFields { message, errors }
    }

    /// Field-keyed error from `validator` output, keyed by JSON field name.
    pub fn from_validation(errs: ValidationErrors, order: &[&str]) -> Self {
        let errors = errs
            .field_errors()
            .into_iter()
            .map(|(field, list)| {
                let message = list
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", camel_case(&field)));
                (camel_case(&field), message)
            })
            .collect();
        Self::invalid_fields(errors, order)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PasswordError> for ApiError {
    fn from(e: PasswordError) -> Self {
        Self::Internal(anyhow::Error::new(e).context("password hashing"))
    }
}

impl From<TokenError> for ApiError {
    fn from(e: TokenError) -> Self {
        Self::Internal(anyhow::Error::new(e).context("token signing"))
    }
}

/// `confirm_password` -> `confirmPassword`, matching the JSON field names.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_)
            | Self::InvalidFields { .. }
            | Self::InvalidId(_)
            | Self::AlreadyExists(_)
            | Self::UniqueViolation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials
            | Self::NotLoggedIn
            | Self::InvalidToken
            | Self::NotAuthorized => StatusCode::UNAUTHORIZED,
            Self::OrderLocked(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) | Self::NoneFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let mut body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if let Self::InvalidFields { errors, .. } = &self {
            body["errors"] = serde_json::json!(errors);
        }
        (status, axum::Json(body)).into_response()
    }
}
