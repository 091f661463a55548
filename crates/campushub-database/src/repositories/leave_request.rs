//! Leave request repository implementation.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_core::types::pagination::Page;
use campushub_entity::leave::model::CreateLeaveRequest;
use campushub_entity::leave::{LeaveRequest, LeaveStatus};

/// Repository for leave request CRUD and status transitions.
#[derive(Debug, Clone)]
pub struct LeaveRequestRepository {
    pool: SqlitePool,
}

impl LeaveRequestRepository {
    /// Create a new leave request repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a leave request by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<LeaveRequest>> {
        sqlx::query_as::<_, LeaveRequest>("SELECT * FROM leave_requests WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find leave request", e)
            })
    }

    /// List all leave requests with pagination.
    pub async fn list(&self, page: &Page) -> AppResult<Vec<LeaveRequest>> {
        sqlx::query_as::<_, LeaveRequest>(
            "SELECT * FROM leave_requests ORDER BY id ASC LIMIT ? OFFSET ?",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list leave requests", e))
    }

    /// List one student's leave requests with pagination.
    pub async fn list_by_student(&self, student_id: i64, page: &Page) -> AppResult<Vec<LeaveRequest>> {
        sqlx::query_as::<_, LeaveRequest>(
            "SELECT * FROM leave_requests WHERE student_id = ? ORDER BY id ASC LIMIT ? OFFSET ?",
        )
        .bind(student_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list student leave requests", e)
        })
    }

    /// Create a new leave request with status `pending`.
    pub async fn create(&self, data: &CreateLeaveRequest) -> AppResult<LeaveRequest> {
        let now = Utc::now();
        sqlx::query_as::<_, LeaveRequest>(
            "INSERT INTO leave_requests \
             (student_id, reason, start_date, end_date, status, created_at, updated_at) \
             VALUES (?, ?, ?, ?, 'pending', ?, ?) \
             RETURNING *",
        )
        .bind(data.student_id)
        .bind(&data.reason)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create leave request", e)
        })
    }

    /// Transition a request's status, recording the approver and time.
    ///
    /// Last write wins on concurrent transitions; the status column is the
    /// only compounding state.
    pub async fn set_status(
        &self,
        id: i64,
        status: LeaveStatus,
        approved_by: i64,
        approved_at: DateTime<Utc>,
    ) -> AppResult<LeaveRequest> {
        sqlx::query_as::<_, LeaveRequest>(
            "UPDATE leave_requests \
             SET status = ?, approved_by = ?, approved_at = ?, updated_at = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(status)
        .bind(approved_by)
        .bind(approved_at)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update leave request status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Leave request {id} not found")))
    }

    /// Count one student's leave requests.
    pub async fn count_by_student(&self, student_id: i64) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM leave_requests WHERE student_id = ?")
            .bind(student_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count leave requests", e)
            })
    }

    /// Count one student's leave requests in a given status.
    pub async fn count_by_student_and_status(
        &self,
        student_id: i64,
        status: LeaveStatus,
    ) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM leave_requests WHERE student_id = ? AND status = ?")
            .bind(student_id)
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to count leave requests by status",
                    e,
                )
            })
    }
}
