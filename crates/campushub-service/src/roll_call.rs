//! Roll call management — session creation and attendance marking.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use campushub_core::error::AppError;
use campushub_core::types::pagination::Page;
use campushub_database::repositories::location::LocationRepository;
use campushub_database::repositories::roll_call::RollCallRepository;
use campushub_database::repositories::user::UserRepository;
use campushub_entity::roll_call::model::{CreateRollCall, MarkAttendance};
use campushub_entity::roll_call::{AttendanceStatus, RollCall, RollCallEntry};
use campushub_entity::user::Role;

/// Handles roll call sessions and attendance entries.
#[derive(Debug, Clone)]
pub struct RollCallService {
    /// Roll call repository.
    roll_call_repo: Arc<RollCallRepository>,
    /// Location repository.
    location_repo: Arc<LocationRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl RollCallService {
    /// Creates a new roll call service.
    pub fn new(
        roll_call_repo: Arc<RollCallRepository>,
        location_repo: Arc<LocationRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            roll_call_repo,
            location_repo,
            user_repo,
        }
    }

    /// Creates a roll call session conducted by the given instructor.
    ///
    /// If a location is given it must exist.
    pub async fn create(
        &self,
        name: String,
        location_id: Option<i64>,
        conducted_by: i64,
        scheduled_time: DateTime<Utc>,
    ) -> Result<RollCall, AppError> {
        if let Some(location_id) = location_id {
            self.location_repo
                .find_by_id(location_id)
                .await?
                .ok_or_else(|| AppError::not_found("Location not found"))?;
        }

        let roll_call = self
            .roll_call_repo
            .create(&CreateRollCall {
                name,
                location_id,
                conducted_by,
                scheduled_time,
            })
            .await?;

        info!(
            roll_call_id = roll_call.id,
            conducted_by, "Roll call created"
        );

        Ok(roll_call)
    }

    /// Lists roll calls conducted by the given instructor.
    pub async fn list_for_conductor(
        &self,
        conducted_by: i64,
        page: &Page,
    ) -> Result<Vec<RollCall>, AppError> {
        self.roll_call_repo.list_by_conductor(conducted_by, page).await
    }

    /// Marks a student's attendance on a roll call.
    ///
    /// Re-marking the same student replaces the previous entry. The roll
    /// call must exist and the student must be a user with the student
    /// role.
    pub async fn mark(
        &self,
        roll_call_id: i64,
        student_id: i64,
        status: AttendanceStatus,
        notes: Option<String>,
        marked_by: i64,
    ) -> Result<RollCallEntry, AppError> {
        self.roll_call_repo
            .find_by_id(roll_call_id)
            .await?
            .ok_or_else(|| AppError::not_found("Roll call not found"))?;

        self.user_repo
            .find_by_id(student_id)
            .await?
            .filter(|u| u.role == Role::Student)
            .ok_or_else(|| AppError::not_found("Student not found"))?;

        let entry = self
            .roll_call_repo
            .mark_entry(
                roll_call_id,
                &MarkAttendance {
                    student_id,
                    status,
                    notes,
                    marked_by,
                },
            )
            .await?;

        info!(
            roll_call_id,
            student_id,
            status = %entry.status,
            "Attendance marked"
        );

        Ok(entry)
    }

    /// Lists the attendance entries of a roll call.
    pub async fn entries(
        &self,
        roll_call_id: i64,
        page: &Page,
    ) -> Result<Vec<RollCallEntry>, AppError> {
        self.roll_call_repo
            .find_by_id(roll_call_id)
            .await?
            .ok_or_else(|| AppError::not_found("Roll call not found"))?;

        self.roll_call_repo.list_entries(roll_call_id, page).await
    }
}
