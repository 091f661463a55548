//! User management — registration, admin user creation, student queries,
//! and location assignment.

use std::sync::Arc;

use tracing::info;

use campushub_auth::password::PasswordHasher;
use campushub_core::error::AppError;
use campushub_core::types::pagination::Page;
use campushub_database::repositories::location::LocationRepository;
use campushub_database::repositories::user::UserRepository;
use campushub_entity::user::model::CreateUser;
use campushub_entity::user::{Role, User};

/// Input for creating a user (self-registration or admin creation).
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Email address (unique).
    pub email: String,
    /// Desired username (unique).
    pub username: String,
    /// Full name.
    pub full_name: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
    /// Assigned role.
    pub role: Role,
    /// Grade level (students only).
    pub grade: Option<String>,
    /// Institutional student number (students only).
    pub student_id: Option<String>,
    /// Department (instructors only).
    pub department: Option<String>,
}

/// Handles user creation and queries.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Location repository.
    location_repo: Arc<LocationRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        location_repo: Arc<LocationRepository>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            user_repo,
            location_repo,
            hasher,
        }
    }

    /// Lists all users with pagination.
    pub async fn list_users(&self, page: &Page) -> Result<Vec<User>, AppError> {
        self.user_repo.list(page).await
    }

    /// Lists student users with pagination.
    pub async fn list_students(&self, page: &Page) -> Result<Vec<User>, AppError> {
        self.user_repo.list_by_role(Role::Student, page).await
    }

    /// Creates a new user.
    ///
    /// Duplicate usernames and emails are rejected before the password is
    /// hashed or anything is written.
    pub async fn create_user(&self, req: NewUser) -> Result<User, AppError> {
        if self
            .user_repo
            .find_by_username(&req.username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Username already registered"));
        }

        if self.user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                email: req.email,
                username: req.username,
                full_name: req.full_name,
                password_hash,
                role: req.role,
                grade: req.grade,
                student_id: req.student_id,
                department: req.department,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, role = %user.role, "User created");

        Ok(user)
    }

    /// Moves a student to a location.
    ///
    /// Both the student (a user with the student role) and the location
    /// must exist; anything else is `NotFound`.
    pub async fn assign_location(&self, student_id: i64, location_id: i64) -> Result<User, AppError> {
        let student = self
            .user_repo
            .find_by_id(student_id)
            .await?
            .filter(|u| u.role == Role::Student)
            .ok_or_else(|| AppError::not_found("Student not found"))?;

        self.location_repo
            .find_by_id(location_id)
            .await?
            .ok_or_else(|| AppError::not_found("Location not found"))?;

        let updated = self
            .user_repo
            .set_current_location(student.id, location_id)
            .await?;

        info!(
            student_id = student.id,
            location_id, "Student location updated"
        );

        Ok(updated)
    }
}
