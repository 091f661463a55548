//! Auth handlers — register, login, me.

use axum::extract::State;
use axum::{Form, Json};
use http::StatusCode;

use campushub_core::error::AppError;
use campushub_entity::user::Role;
use campushub_service::user::NewUser;

use crate::dto::request::{LoginForm, RegisterRequest};
use crate::dto::response::{TokenResponse, UserResponse};
use crate::dto::validate_request;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    validate_request(&req)?;

    let user = state
        .user_service
        .create_user(NewUser {
            email: req.email,
            username: req.username,
            full_name: req.full_name,
            password: req.password,
            role: req.role.unwrap_or(Role::Student),
            grade: req.grade,
            student_id: req.student_id,
            department: req.department,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Form(req): Form<LoginForm>,
) -> Result<Json<TokenResponse>, AppError> {
    validate_request(&req)?;

    let outcome = state.auth_service.login(&req.username, &req.password).await?;

    Ok(Json(TokenResponse {
        access_token: outcome.access_token,
        token_type: "bearer".to_string(),
        user: outcome.user.into(),
    }))
}

/// GET /auth/me
pub async fn me(current: CurrentUser) -> Json<UserResponse> {
    Json(current.0.into())
}
