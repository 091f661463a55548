//! Authentication service — login and per-request authentication.

use std::sync::Arc;

use tracing::info;

use campushub_auth::jwt::{TokenDecoder, TokenEncoder};
use campushub_auth::password::PasswordHasher;
use campushub_core::error::AppError;
use campushub_database::repositories::user::UserRepository;
use campushub_entity::user::User;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The signed bearer token.
    pub access_token: String,
    /// The authenticated user.
    pub user: User,
}

/// Handles credential verification, token issuance, and the per-request
/// token → user resolution.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// JWT encoder.
    encoder: Arc<TokenEncoder>,
    /// JWT decoder.
    decoder: Arc<TokenDecoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<TokenEncoder>,
        decoder: Arc<TokenDecoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
            decoder,
        }
    }

    /// Verifies a username/password pair and issues an access token.
    ///
    /// Unknown usernames and wrong passwords produce the same message, so
    /// login failures never reveal which half was wrong.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let user = self.user_repo.find_by_username(username).await?;

        let user = match user {
            Some(u) if self.hasher.verify_password(password, &u.password_hash)? => u,
            _ => return Err(AppError::unauthorized("Incorrect username or password")),
        };

        if !user.is_active {
            return Err(AppError::validation("Inactive user"));
        }

        let access_token = self.encoder.issue(user.id)?;

        info!(user_id = user.id, username = %user.username, "User logged in");

        Ok(LoginOutcome { access_token, user })
    }

    /// Resolves a bearer token to an active user record.
    ///
    /// Fails `Unauthorized` unless the token verifies and the subject still
    /// exists; an existing but deactivated user is a `Validation` failure.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let claims = self.decoder.verify(token)?;

        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthorized("User not found"))?;

        if !user.is_active {
            return Err(AppError::validation("Inactive user"));
        }

        Ok(user)
    }
}
