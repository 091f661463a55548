//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use campushub_entity::user::{Role, User};

/// Service banner for the root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerResponse {
    /// Greeting message.
    pub message: String,
    /// Crate version.
    pub version: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
}

/// User record for responses; never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Email address.
    pub email: String,
    /// Username.
    pub username: String,
    /// Full name.
    pub full_name: String,
    /// Role.
    pub role: Role,
    /// Whether the account may log in.
    pub is_active: bool,
    /// Grade level (students).
    pub grade: Option<String>,
    /// Institutional student number (students).
    pub student_id: Option<String>,
    /// Department (instructors).
    pub department: Option<String>,
    /// Current location, if assigned.
    pub current_location_id: Option<i64>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            full_name: user.full_name,
            role: user.role,
            is_active: user.is_active,
            grade: user.grade,
            student_id: user.student_id,
            department: user.department,
            current_location_id: user.current_location_id,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed bearer token.
    pub access_token: String,
    /// Always "bearer".
    pub token_type: String,
    /// The authenticated user.
    pub user: UserResponse,
}
