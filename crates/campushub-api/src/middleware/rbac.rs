//! Role guards for route families.
//!
//! Administrators pass any gate that admits instructors; the student gate
//! admits students only.

use campushub_core::error::AppError;
use campushub_entity::user::Role;

use crate::extractors::CurrentUser;

/// Checks that the caller is an administrator.
pub fn require_administrator(current: &CurrentUser) -> Result<(), AppError> {
    if current.role != Role::Administrator {
        return Err(AppError::forbidden("Administrator access required"));
    }
    Ok(())
}

/// Checks that the caller is an instructor or an administrator.
pub fn require_instructor(current: &CurrentUser) -> Result<(), AppError> {
    match current.role {
        Role::Administrator | Role::Instructor => Ok(()),
        _ => Err(AppError::forbidden(
            "Instructor or administrator access required",
        )),
    }
}

/// Checks that the caller is a student.
pub fn require_student(current: &CurrentUser) -> Result<(), AppError> {
    if current.role != Role::Student {
        return Err(AppError::forbidden("Student access required"));
    }
    Ok(())
}
