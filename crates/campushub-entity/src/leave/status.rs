//! Leave request status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a leave request.
///
/// Requests start `Pending`; an approver transitions them to `Approved`
/// or `Rejected`. There is no transition back to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    /// Awaiting review.
    Pending,
    /// Approved by an instructor or administrator.
    Approved,
    /// Rejected by an instructor or administrator.
    Rejected,
}

impl LeaveStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
