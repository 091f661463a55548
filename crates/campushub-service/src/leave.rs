//! Leave request workflow — student submission and instructor review.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use campushub_core::error::AppError;
use campushub_core::types::pagination::Page;
use campushub_database::repositories::leave_request::LeaveRequestRepository;
use campushub_entity::leave::model::CreateLeaveRequest;
use campushub_entity::leave::{LeaveRequest, LeaveStatus};

/// Validates the date window of a new leave request.
///
/// The window must be non-empty and must not start in the past. `now` is
/// passed in so callers (and tests) control the clock.
fn validate_leave_window(
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    if start_date >= end_date {
        return Err(AppError::validation("Start date must be before end date"));
    }
    if start_date < now {
        return Err(AppError::validation("Start date cannot be in the past"));
    }
    Ok(())
}

/// Handles leave request submission and review.
#[derive(Debug, Clone)]
pub struct LeaveRequestService {
    /// Leave request repository.
    leave_repo: Arc<LeaveRequestRepository>,
}

impl LeaveRequestService {
    /// Creates a new leave request service.
    pub fn new(leave_repo: Arc<LeaveRequestRepository>) -> Self {
        Self { leave_repo }
    }

    /// Submits a leave request for a student after validating the window.
    pub async fn submit(
        &self,
        student_id: i64,
        reason: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<LeaveRequest, AppError> {
        validate_leave_window(start_date, end_date, Utc::now())?;

        let request = self
            .leave_repo
            .create(&CreateLeaveRequest {
                student_id,
                reason,
                start_date,
                end_date,
            })
            .await?;

        info!(
            leave_request_id = request.id,
            student_id, "Leave request submitted"
        );

        Ok(request)
    }

    /// Lists a student's own leave requests with pagination.
    pub async fn list_for_student(
        &self,
        student_id: i64,
        page: &Page,
    ) -> Result<Vec<LeaveRequest>, AppError> {
        self.leave_repo.list_by_student(student_id, page).await
    }

    /// Lists all leave requests with pagination.
    pub async fn list_all(&self, page: &Page) -> Result<Vec<LeaveRequest>, AppError> {
        self.leave_repo.list(page).await
    }

    /// Reviews a pending leave request, setting it approved or rejected.
    ///
    /// Only pending requests may be reviewed, and the decision must be a
    /// terminal status.
    pub async fn review(
        &self,
        request_id: i64,
        decision: LeaveStatus,
        reviewer_id: i64,
    ) -> Result<LeaveRequest, AppError> {
        if decision == LeaveStatus::Pending {
            return Err(AppError::validation(
                "Status must be 'approved' or 'rejected'",
            ));
        }

        let request = self
            .leave_repo
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| AppError::not_found("Leave request not found"))?;

        if request.status != LeaveStatus::Pending {
            return Err(AppError::validation(
                "Only pending leave requests can be reviewed",
            ));
        }

        let updated = self
            .leave_repo
            .set_status(request.id, decision, reviewer_id, Utc::now())
            .await?;

        info!(
            leave_request_id = updated.id,
            status = %updated.status,
            reviewer_id,
            "Leave request reviewed"
        );

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_window_must_not_be_empty() {
        let now = Utc::now();
        let start = now + Duration::days(1);

        let err = validate_leave_window(start, start, now).unwrap_err();
        assert_eq!(err.message, "Start date must be before end date");

        let err = validate_leave_window(start, start - Duration::hours(1), now).unwrap_err();
        assert_eq!(err.message, "Start date must be before end date");
    }

    #[test]
    fn test_window_must_not_start_in_past() {
        let now = Utc::now();
        let start = now - Duration::hours(1);
        let end = now + Duration::days(1);

        let err = validate_leave_window(start, end, now).unwrap_err();
        assert_eq!(err.message, "Start date cannot be in the past");
    }

    #[test]
    fn test_valid_window_passes() {
        let now = Utc::now();
        let start = now + Duration::hours(1);
        let end = start + Duration::days(2);

        assert!(validate_leave_window(start, end, now).is_ok());
    }
}
