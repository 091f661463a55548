//! Leave request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::LeaveStatus;

/// A student-submitted request for an absence over a date range.
///
/// The student, reason, and date fields are immutable after creation;
/// only the status (and the approver bookkeeping that goes with it)
/// changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LeaveRequest {
    /// Unique request identifier.
    pub id: i64,
    /// The student who submitted the request.
    pub student_id: i64,
    /// Why the absence is requested.
    pub reason: String,
    /// First day of the absence.
    pub start_date: DateTime<Utc>,
    /// Last day of the absence.
    pub end_date: DateTime<Utc>,
    /// Review state.
    pub status: LeaveStatus,
    /// Who approved or rejected the request.
    pub approved_by: Option<i64>,
    /// When the request was approved or rejected.
    pub approved_at: Option<DateTime<Utc>>,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
    /// When the request was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new leave request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    /// The submitting student.
    pub student_id: i64,
    /// Why the absence is requested.
    pub reason: String,
    /// First day of the absence.
    pub start_date: DateTime<Utc>,
    /// Last day of the absence.
    pub end_date: DateTime<Utc>,
}
