use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use canteen_domain::role::Role;

use crate::domain::types::User;
use crate::error::ApiError;
use crate::extract::{FieldOrder, ValidatedJson, parse_id};
use crate::handlers::{WithMessage, token_reply};
use crate::state::AppState;
use crate::usecase::login::{LoginInput, LoginUseCase};
use crate::usecase::signup::{UserSignupInput, UserSignupUseCase};
use crate::usecase::user::{GetUserUseCase, ListUsersUseCase, UpdateUserInput, UpdateUserUseCase};

// ── POST /api/user/Usersignup ────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserSignupRequest {
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
}

impl FieldOrder for UserSignupRequest {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "email",
        "mobile",
        "password",
        "confirmPassword",
    ];
}

pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<UserSignupRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let usecase = UserSignupUseCase {
        repo: state.user_repo(),
        signer: state.signer.clone(),
    };
    let out = usecase
        .execute(UserSignupInput {
            name: body.name,
            email: body.email,
            mobile: body.mobile,
            password: body.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        token_reply(Role::User, out.id, out.token, "User registered successfully"),
    ))
}

// ── POST /api/user/Userlogin ─────────────────────────────────────────────────

/// Login body shared by every role.
#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email must be a valid email")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl FieldOrder for LoginRequest {
    const FIELDS: &'static [&'static str] = &["email", "password"];
}

impl From<LoginRequest> for LoginInput {
    fn from(body: LoginRequest) -> Self {
        Self {
            email: body.email,
            password: body.password,
        }
    }
}

pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let usecase = LoginUseCase {
        repo: state.user_repo(),
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

// ── GET /api/user/{id} ───────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id.to_string(),
            name: user.name,
            email: user.email,
            mobile: user.mobile,
        }
    }
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let id = parse_id(&id, "user")?;
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PUT /api/user/{id} ───────────────────────────────────────────────────────

#[derive(Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Mobile is required"))]
    pub mobile: String,
}

impl FieldOrder for UpdateUserRequest {
    const FIELDS: &'static [&'static str] = &["name", "mobile"];
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<WithMessage<UserResponse>>, ApiError> {
    let id = parse_id(&id, "user")?;
    let usecase = UpdateUserUseCase {
        repo: state.user_repo(),
    };
    let user = usecase
        .execute(
            id,
            UpdateUserInput {
                name: body.name,
                mobile: body.mobile,
            },
        )
        .await?;
    Ok(WithMessage::new(
        user.into(),
        "User details updated successfully",
    ))
}

// ── GET /api/user ────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
