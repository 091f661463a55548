//! Administrator handlers — user and location management, dashboard stats.

use axum::extract::{Query, State};
use axum::Json;
use http::StatusCode;

use campushub_core::error::AppError;
use campushub_entity::location::model::CreateLocation;
use campushub_entity::location::Location;
use campushub_service::stats::AdminStats;
use campushub_service::user::NewUser;

use crate::dto::request::{CreateLocationRequest, CreateUserRequest};
use crate::dto::response::UserResponse;
use crate::dto::validate_request;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::middleware::rbac::require_administrator;
use crate::state::AppState;

/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    require_administrator(&current)?;

    let users = state.user_service.list_users(&params.into_page()).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /admin/users
pub async fn create_user(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    require_administrator(&current)?;
    validate_request(&req)?;

    let user = state
        .user_service
        .create_user(NewUser {
            email: req.email,
            username: req.username,
            full_name: req.full_name,
            password: req.password,
            role: req.role,
            grade: req.grade,
            student_id: req.student_id,
            department: req.department,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /admin/locations
pub async fn list_locations(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<Location>>, AppError> {
    require_administrator(&current)?;

    let locations = state
        .location_service
        .list_locations(&params.into_page())
        .await?;

    Ok(Json(locations))
}

/// POST /admin/locations
pub async fn create_location(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(req): Json<CreateLocationRequest>,
) -> Result<(StatusCode, Json<Location>), AppError> {
    require_administrator(&current)?;
    validate_request(&req)?;

    let location = state
        .location_service
        .create_location(CreateLocation {
            name: req.name,
            description: req.description,
            building: req.building,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(location)))
}

/// GET /admin/dashboard/stats
pub async fn dashboard_stats(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<AdminStats>, AppError> {
    require_administrator(&current)?;

    let stats = state.stats_service.admin_stats().await?;

    Ok(Json(stats))
}
