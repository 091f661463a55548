//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the role-based access control system.
///
/// The serialized tag for the admin role is `"administrator"` everywhere;
/// `"admin"` is not accepted as an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full system administrator.
    Administrator,
    /// Conducts roll calls, reviews leave requests, manages student locations.
    Instructor,
    /// Submits leave requests and views locations.
    Student,
}

impl Role {
    /// Return the privilege level (higher = more privileged).
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::Administrator => 3,
            Self::Instructor => 2,
            Self::Student => 1,
        }
    }

    /// Check if this role has at least the given role's privileges.
    ///
    /// An administrator passes every gate an instructor passes; the reverse
    /// never holds.
    pub fn has_at_least(&self, other: &Role) -> bool {
        self.privilege_level() >= other.privilege_level()
    }

    /// Check if this role is the administrator role.
    pub fn is_administrator(&self) -> bool {
        matches!(self, Self::Administrator)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Instructor => "instructor",
            Self::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = campushub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "administrator" => Ok(Self::Administrator),
            "instructor" => Ok(Self::Instructor),
            "student" => Ok(Self::Student),
            _ => Err(campushub_core::AppError::validation(format!(
                "Invalid role: '{s}'. Expected one of: administrator, instructor, student"
            ))),
        }
    }
}
