//! Request and response DTOs.

pub mod request;
pub mod response;

use campushub_core::error::AppError;
use validator::Validate;

/// Runs validator-derived checks, mapping the first failure to a 400.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
