//! Student handlers — own leave requests and dashboard stats.

use axum::extract::{Query, State};
use axum::Json;
use http::StatusCode;

use campushub_core::error::AppError;
use campushub_entity::leave::LeaveRequest;
use campushub_service::stats::StudentStats;

use crate::dto::request::CreateLeaveRequestBody;
use crate::dto::validate_request;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::middleware::rbac::require_student;
use crate::state::AppState;

/// GET /student/leave-requests
pub async fn list_leave_requests(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<LeaveRequest>>, AppError> {
    require_student(&current)?;

    let requests = state
        .leave_service
        .list_for_student(current.id, &params.into_page())
        .await?;

    Ok(Json(requests))
}

/// POST /student/leave-requests
pub async fn create_leave_request(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(req): Json<CreateLeaveRequestBody>,
) -> Result<(StatusCode, Json<LeaveRequest>), AppError> {
    require_student(&current)?;
    validate_request(&req)?;

    let request = state
        .leave_service
        .submit(current.id, req.reason, req.start_date, req.end_date)
        .await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /student/dashboard/stats
pub async fn dashboard_stats(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<StudentStats>, AppError> {
    require_student(&current)?;

    let stats = state
        .stats_service
        .student_stats(current.id, current.current_location_id)
        .await?;

    Ok(Json(stats))
}
