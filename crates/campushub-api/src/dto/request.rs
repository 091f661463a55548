//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use campushub_entity::roll_call::AttendanceStatus;
use campushub_entity::user::Role;

/// Login form body (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Self-registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Desired username.
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    /// Full name.
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Role; defaults to student when omitted.
    pub role: Option<Role>,
    /// Grade level (students).
    pub grade: Option<String>,
    /// Institutional student number (students).
    pub student_id: Option<String>,
    /// Department (instructors).
    pub department: Option<String>,
}

/// Admin user-creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Username.
    #[validate(length(min = 3, max = 100))]
    pub username: String,
    /// Full name.
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Assigned role.
    pub role: Role,
    /// Grade level (students).
    pub grade: Option<String>,
    /// Institutional student number (students).
    pub student_id: Option<String>,
    /// Department (instructors).
    pub department: Option<String>,
}

/// Location creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLocationRequest {
    /// Location name (unique).
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Building.
    pub building: Option<String>,
}

/// Leave request submission body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLeaveRequestBody {
    /// Why the leave is requested.
    #[validate(length(min = 1, message = "Reason is required"))]
    pub reason: String,
    /// Start of the leave window.
    pub start_date: DateTime<Utc>,
    /// End of the leave window.
    pub end_date: DateTime<Utc>,
}

/// Leave review body; status is parsed by hand so unknown values produce a
/// 400 rather than a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewLeaveRequest {
    /// Target status: "approved" or "rejected".
    pub status: String,
}

/// Roll call creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRollCallRequest {
    /// Session name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Where the roll call happens, if anywhere specific.
    pub location_id: Option<i64>,
    /// When the session is scheduled.
    pub scheduled_time: DateTime<Utc>,
}

/// Attendance marking request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAttendanceRequest {
    /// The student being marked.
    pub student_id: i64,
    /// Attendance outcome; defaults to absent.
    #[serde(default)]
    pub status: AttendanceStatus,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Query parameter for moving a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignLocationQuery {
    /// Target location.
    pub location_id: i64,
}
