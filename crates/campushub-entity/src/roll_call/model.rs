//! Roll call and roll call entry entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::AttendanceStatus;

/// A scheduled attendance-taking event, owned by its conductor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RollCall {
    /// Unique roll call identifier.
    pub id: i64,
    /// Display name, e.g. "Morning assembly".
    pub name: String,
    /// Where the roll call takes place, if anywhere specific.
    pub location_id: Option<i64>,
    /// The instructor or administrator conducting it.
    pub conducted_by: i64,
    /// When attendance is scheduled to be taken.
    pub scheduled_time: DateTime<Utc>,
    /// When attendance was actually taken.
    pub conducted_at: Option<DateTime<Utc>>,
    /// Whether the roll call is still open.
    pub is_active: bool,
    /// When the roll call was created.
    pub created_at: DateTime<Utc>,
    /// When the roll call was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Per-student attendance record for a roll call.
///
/// Unique on `(roll_call_id, student_id)`; re-marking a student updates
/// the existing entry in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RollCallEntry {
    /// Unique entry identifier.
    pub id: i64,
    /// The roll call this entry belongs to.
    pub roll_call_id: i64,
    /// The student being marked.
    pub student_id: i64,
    /// Attendance outcome (defaults to absent).
    pub status: AttendanceStatus,
    /// Free-form notes from the marker.
    pub notes: Option<String>,
    /// Who recorded the mark.
    pub marked_by: Option<i64>,
    /// When the mark was recorded.
    pub marked_at: DateTime<Utc>,
}

/// Data required to create a new roll call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRollCall {
    /// Display name.
    pub name: String,
    /// Optional location.
    pub location_id: Option<i64>,
    /// The conducting instructor or administrator.
    pub conducted_by: i64,
    /// When attendance is scheduled to be taken.
    pub scheduled_time: DateTime<Utc>,
}

/// Data for marking (or re-marking) a student's attendance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAttendance {
    /// The student being marked.
    pub student_id: i64,
    /// Attendance outcome.
    pub status: AttendanceStatus,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Who recorded the mark.
    pub marked_by: i64,
}
