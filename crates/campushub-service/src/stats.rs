//! Role-scoped dashboard statistics.

use std::sync::Arc;

use serde::Serialize;

use campushub_core::error::AppError;
use campushub_database::repositories::leave_request::LeaveRequestRepository;
use campushub_database::repositories::location::LocationRepository;
use campushub_database::repositories::roll_call::RollCallRepository;
use campushub_database::repositories::user::UserRepository;
use campushub_entity::leave::LeaveStatus;
use campushub_entity::user::Role;

/// System-wide counts for the administrator dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct AdminStats {
    /// Number of student accounts.
    pub total_students: i64,
    /// Number of instructor accounts.
    pub total_instructors: i64,
    /// Number of active locations.
    pub total_locations: i64,
}

/// Per-instructor counts.
#[derive(Debug, Clone, Serialize)]
pub struct InstructorStats {
    /// Number of student accounts.
    pub total_students: i64,
    /// Roll calls conducted by this instructor.
    pub total_roll_calls: i64,
}

/// Per-student counts.
#[derive(Debug, Clone, Serialize)]
pub struct StudentStats {
    /// Leave requests submitted by this student.
    pub total_leave_requests: i64,
    /// Of those, how many are still pending.
    pub pending_leave_requests: i64,
    /// The student's current location, if assigned.
    pub current_location_id: Option<i64>,
}

/// Aggregates counts across repositories for the dashboard endpoints.
#[derive(Debug, Clone)]
pub struct StatsService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Location repository.
    location_repo: Arc<LocationRepository>,
    /// Leave request repository.
    leave_repo: Arc<LeaveRequestRepository>,
    /// Roll call repository.
    roll_call_repo: Arc<RollCallRepository>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        location_repo: Arc<LocationRepository>,
        leave_repo: Arc<LeaveRequestRepository>,
        roll_call_repo: Arc<RollCallRepository>,
    ) -> Self {
        Self {
            user_repo,
            location_repo,
            leave_repo,
            roll_call_repo,
        }
    }

    /// Counts for the administrator dashboard.
    pub async fn admin_stats(&self) -> Result<AdminStats, AppError> {
        Ok(AdminStats {
            total_students: self.user_repo.count_by_role(Role::Student).await?,
            total_instructors: self.user_repo.count_by_role(Role::Instructor).await?,
            total_locations: self.location_repo.count_active().await?,
        })
    }

    /// Counts for an instructor's dashboard.
    pub async fn instructor_stats(&self, instructor_id: i64) -> Result<InstructorStats, AppError> {
        Ok(InstructorStats {
            total_students: self.user_repo.count_by_role(Role::Student).await?,
            total_roll_calls: self.roll_call_repo.count_by_conductor(instructor_id).await?,
        })
    }

    /// Counts for a student's dashboard.
    pub async fn student_stats(
        &self,
        student_id: i64,
        current_location_id: Option<i64>,
    ) -> Result<StudentStats, AppError> {
        Ok(StudentStats {
            total_leave_requests: self.leave_repo.count_by_student(student_id).await?,
            pending_leave_requests: self
                .leave_repo
                .count_by_student_and_status(student_id, LeaveStatus::Pending)
                .await?,
            current_location_id,
        })
    }
}
