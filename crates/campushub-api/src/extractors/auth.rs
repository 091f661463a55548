//! `CurrentUser` extractor — pulls the bearer token from the Authorization
//! header, validates it, and injects the authenticated user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use campushub_core::error::AppError;
use campushub_entity::user::User;

use crate::state::AppState;

/// Authenticated user available to handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// Returns the inner user record.
    pub fn user(&self) -> &User {
        &self.0
    }
}

impl std::ops::Deref for CurrentUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let user = state.auth_service.authenticate(token).await?;

        Ok(CurrentUser(user))
    }
}
