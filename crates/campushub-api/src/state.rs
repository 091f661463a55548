//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use campushub_auth::jwt::{TokenDecoder, TokenEncoder};
use campushub_auth::password::PasswordHasher;
use campushub_core::config::AppConfig;
use campushub_database::repositories::leave_request::LeaveRequestRepository;
use campushub_database::repositories::location::LocationRepository;
use campushub_database::repositories::roll_call::RollCallRepository;
use campushub_database::repositories::user::UserRepository;
use campushub_service::{
    AuthService, LeaveRequestService, LocationService, RollCallService, StatsService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// SQLite connection pool
    pub db_pool: SqlitePool,
    /// Authentication service
    pub auth_service: Arc<AuthService>,
    /// User management service
    pub user_service: Arc<UserService>,
    /// Location service
    pub location_service: Arc<LocationService>,
    /// Leave request service
    pub leave_service: Arc<LeaveRequestService>,
    /// Roll call service
    pub roll_call_service: Arc<RollCallService>,
    /// Dashboard statistics service
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    /// Wires repositories, auth primitives, and services onto a connected
    /// pool.
    pub fn initialize(config: AppConfig, db_pool: SqlitePool) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let location_repo = Arc::new(LocationRepository::new(db_pool.clone()));
        let leave_repo = Arc::new(LeaveRequestRepository::new(db_pool.clone()));
        let roll_call_repo = Arc::new(RollCallRepository::new(db_pool.clone()));

        let hasher = Arc::new(PasswordHasher::new());
        let encoder = Arc::new(TokenEncoder::new(&config.auth));
        let decoder = Arc::new(TokenDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repo),
            Arc::clone(&hasher),
            encoder,
            decoder,
        ));
        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repo),
            Arc::clone(&location_repo),
            hasher,
        ));
        let location_service = Arc::new(LocationService::new(Arc::clone(&location_repo)));
        let leave_service = Arc::new(LeaveRequestService::new(Arc::clone(&leave_repo)));
        let roll_call_service = Arc::new(RollCallService::new(
            Arc::clone(&roll_call_repo),
            Arc::clone(&location_repo),
            Arc::clone(&user_repo),
        ));
        let stats_service = Arc::new(StatsService::new(
            user_repo,
            location_repo,
            leave_repo,
            roll_call_repo,
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            auth_service,
            user_service,
            location_service,
            leave_service,
            roll_call_service,
            stats_service,
        }
    }
}
