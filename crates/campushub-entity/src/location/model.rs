//! Location entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named place on campus (unique name).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    /// Unique location identifier.
    pub id: i64,
    /// Location name (unique).
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Building the location belongs to.
    pub building: Option<String>,
    /// Whether the location is currently in use.
    pub is_active: bool,
    /// When the location was created.
    pub created_at: DateTime<Utc>,
    /// When the location was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLocation {
    /// Location name (unique).
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Building the location belongs to.
    pub building: Option<String>,
}
