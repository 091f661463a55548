//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::Role;

/// A registered user: administrator, instructor, or student.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Email address (unique).
    pub email: String,
    /// Unique login name.
    pub username: String,
    /// Human-readable full name.
    pub full_name: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// User role (RBAC).
    pub role: Role,
    /// Whether the account may authenticate.
    pub is_active: bool,
    /// Grade level (students only).
    pub grade: Option<String>,
    /// Institutional student number (students only, unique).
    pub student_id: Option<String>,
    /// Department (instructors only).
    pub department: Option<String>,
    /// Where the user currently is, if tracked.
    pub current_location_id: Option<i64>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has administrator privileges.
    pub fn is_administrator(&self) -> bool {
        self.role.is_administrator()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address (unique).
    pub email: String,
    /// Desired username.
    pub username: String,
    /// Full name.
    pub full_name: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: Role,
    /// Grade level (students only).
    pub grade: Option<String>,
    /// Institutional student number (students only).
    pub student_id: Option<String>,
    /// Department (instructors only).
    pub department: Option<String>,
}
