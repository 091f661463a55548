//! Roll call and roll call entry repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_core::types::pagination::Page;
use campushub_entity::roll_call::model::{CreateRollCall, MarkAttendance};
use campushub_entity::roll_call::{RollCall, RollCallEntry};

/// Repository for roll calls and their attendance entries.
#[derive(Debug, Clone)]
pub struct RollCallRepository {
    pool: SqlitePool,
}

impl RollCallRepository {
    /// Create a new roll call repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a roll call by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<RollCall>> {
        sqlx::query_as::<_, RollCall>("SELECT * FROM roll_calls WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find roll call", e))
    }

    /// List roll calls conducted by one user, with pagination.
    pub async fn list_by_conductor(&self, conducted_by: i64, page: &Page) -> AppResult<Vec<RollCall>> {
        sqlx::query_as::<_, RollCall>(
            "SELECT * FROM roll_calls WHERE conducted_by = ? ORDER BY id ASC LIMIT ? OFFSET ?",
        )
        .bind(conducted_by)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list roll calls", e))
    }

    /// Create a new roll call.
    pub async fn create(&self, data: &CreateRollCall) -> AppResult<RollCall> {
        let now = Utc::now();
        sqlx::query_as::<_, RollCall>(
            "INSERT INTO roll_calls \
             (name, location_id, conducted_by, scheduled_time, is_active, created_at, updated_at) \
             VALUES (?, ?, ?, ?, TRUE, ?, ?) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(data.location_id)
        .bind(data.conducted_by)
        .bind(data.scheduled_time)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create roll call", e))
    }

    /// Count roll calls conducted by one user.
    pub async fn count_by_conductor(&self, conducted_by: i64) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM roll_calls WHERE conducted_by = ?")
            .bind(conducted_by)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count roll calls", e))
    }

    /// Mark a student's attendance on a roll call.
    ///
    /// Upserts on `(roll_call_id, student_id)`: re-marking a student
    /// replaces the previous status, notes, marker, and mark time.
    pub async fn mark_entry(&self, roll_call_id: i64, data: &MarkAttendance) -> AppResult<RollCallEntry> {
        sqlx::query_as::<_, RollCallEntry>(
            "INSERT INTO roll_call_entries \
             (roll_call_id, student_id, status, notes, marked_by, marked_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             ON CONFLICT(roll_call_id, student_id) DO UPDATE SET \
               status = excluded.status, \
               notes = excluded.notes, \
               marked_by = excluded.marked_by, \
               marked_at = excluded.marked_at \
             RETURNING *",
        )
        .bind(roll_call_id)
        .bind(data.student_id)
        .bind(data.status)
        .bind(&data.notes)
        .bind(data.marked_by)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark attendance", e))
    }

    /// List the entries of one roll call, with pagination.
    pub async fn list_entries(&self, roll_call_id: i64, page: &Page) -> AppResult<Vec<RollCallEntry>> {
        sqlx::query_as::<_, RollCallEntry>(
            "SELECT * FROM roll_call_entries WHERE roll_call_id = ? ORDER BY id ASC LIMIT ? OFFSET ?",
        )
        .bind(roll_call_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list roll call entries", e)
        })
    }
}
