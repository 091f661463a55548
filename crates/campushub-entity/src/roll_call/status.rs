//! Attendance status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-student attendance outcome for a roll call entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    /// The student was present.
    Present,
    /// The student was absent.
    Absent,
    /// The student arrived late.
    Late,
    /// The absence was excused.
    Excused,
}

impl AttendanceStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
            Self::Excused => "excused",
        }
    }
}

impl Default for AttendanceStatus {
    fn default() -> Self {
        Self::Absent
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
