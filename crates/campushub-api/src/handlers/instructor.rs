//! Instructor handlers — student roster, leave review, roll calls, stats.
//!
//! Administrators pass every gate here.

use axum::extract::{Path, Query, State};
use axum::Json;
use http::StatusCode;

use campushub_core::error::AppError;
use campushub_entity::leave::{LeaveRequest, LeaveStatus};
use campushub_entity::roll_call::{RollCall, RollCallEntry};
use campushub_service::stats::InstructorStats;

use crate::dto::request::{
    AssignLocationQuery, CreateRollCallRequest, MarkAttendanceRequest, ReviewLeaveRequest,
};
use crate::dto::response::UserResponse;
use crate::dto::validate_request;
use crate::extractors::{CurrentUser, PaginationParams};
use crate::middleware::rbac::require_instructor;
use crate::state::AppState;

/// GET /instructor/students
pub async fn list_students(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    require_instructor(&current)?;

    let students = state.user_service.list_students(&params.into_page()).await?;

    Ok(Json(students.into_iter().map(UserResponse::from).collect()))
}

/// PUT /instructor/students/{id}/location
pub async fn assign_student_location(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(student_id): Path<i64>,
    Query(query): Query<AssignLocationQuery>,
) -> Result<Json<UserResponse>, AppError> {
    require_instructor(&current)?;

    let student = state
        .user_service
        .assign_location(student_id, query.location_id)
        .await?;

    Ok(Json(student.into()))
}

/// GET /instructor/dashboard/stats
pub async fn dashboard_stats(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<InstructorStats>, AppError> {
    require_instructor(&current)?;

    let stats = state.stats_service.instructor_stats(current.id).await?;

    Ok(Json(stats))
}

/// GET /instructor/leave-requests
pub async fn list_leave_requests(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<LeaveRequest>>, AppError> {
    require_instructor(&current)?;

    let requests = state.leave_service.list_all(&params.into_page()).await?;

    Ok(Json(requests))
}

/// PUT /instructor/leave-requests/{id}/status
pub async fn review_leave_request(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(request_id): Path<i64>,
    Json(req): Json<ReviewLeaveRequest>,
) -> Result<Json<LeaveRequest>, AppError> {
    require_instructor(&current)?;

    let decision = match req.status.as_str() {
        "approved" => LeaveStatus::Approved,
        "rejected" => LeaveStatus::Rejected,
        _ => {
            return Err(AppError::validation(
                "Status must be 'approved' or 'rejected'",
            ));
        }
    };

    let updated = state
        .leave_service
        .review(request_id, decision, current.id)
        .await?;

    Ok(Json(updated))
}

/// POST /instructor/roll-calls
pub async fn create_roll_call(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(req): Json<CreateRollCallRequest>,
) -> Result<(StatusCode, Json<RollCall>), AppError> {
    require_instructor(&current)?;
    validate_request(&req)?;

    let roll_call = state
        .roll_call_service
        .create(req.name, req.location_id, current.id, req.scheduled_time)
        .await?;

    Ok((StatusCode::CREATED, Json(roll_call)))
}

/// GET /instructor/roll-calls
pub async fn list_roll_calls(
    State(state): State<AppState>,
    current: CurrentUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<RollCall>>, AppError> {
    require_instructor(&current)?;

    let roll_calls = state
        .roll_call_service
        .list_for_conductor(current.id, &params.into_page())
        .await?;

    Ok(Json(roll_calls))
}

/// POST /instructor/roll-calls/{id}/entries
pub async fn mark_attendance(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(roll_call_id): Path<i64>,
    Json(req): Json<MarkAttendanceRequest>,
) -> Result<(StatusCode, Json<RollCallEntry>), AppError> {
    require_instructor(&current)?;

    let entry = state
        .roll_call_service
        .mark(roll_call_id, req.student_id, req.status, req.notes, current.id)
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /instructor/roll-calls/{id}/entries
pub async fn list_roll_call_entries(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(roll_call_id): Path<i64>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<RollCallEntry>>, AppError> {
    require_instructor(&current)?;

    let entries = state
        .roll_call_service
        .entries(roll_call_id, &params.into_page())
        .await?;

    Ok(Json(entries))
}
