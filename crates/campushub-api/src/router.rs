//! Route definitions for the CampusHub HTTP API.
//!
//! Routes are organized by role family. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(root_routes())
        .merge(auth_routes())
        .merge(admin_routes())
        .merge(instructor_routes())
        .merge(student_routes())
        .merge(common_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Service banner and health check
fn root_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::banner))
        .route("/health", get(handlers::health::health))
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Administrator-only management endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/users",
            get(handlers::admin::list_users).post(handlers::admin::create_user),
        )
        .route(
            "/admin/locations",
            get(handlers::admin::list_locations).post(handlers::admin::create_location),
        )
        .route(
            "/admin/dashboard/stats",
            get(handlers::admin::dashboard_stats),
        )
}

/// Instructor endpoints (administrators implicitly allowed)
fn instructor_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/instructor/students",
            get(handlers::instructor::list_students),
        )
        .route(
            "/instructor/students/{id}/location",
            put(handlers::instructor::assign_student_location),
        )
        .route(
            "/instructor/dashboard/stats",
            get(handlers::instructor::dashboard_stats),
        )
        .route(
            "/instructor/leave-requests",
            get(handlers::instructor::list_leave_requests),
        )
        .route(
            "/instructor/leave-requests/{id}/status",
            put(handlers::instructor::review_leave_request),
        )
        .route(
            "/instructor/roll-calls",
            get(handlers::instructor::list_roll_calls)
                .post(handlers::instructor::create_roll_call),
        )
        .route(
            "/instructor/roll-calls/{id}/entries",
            get(handlers::instructor::list_roll_call_entries)
                .post(handlers::instructor::mark_attendance),
        )
}

/// Student self-service endpoints
fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/student/leave-requests",
            get(handlers::student::list_leave_requests)
                .post(handlers::student::create_leave_request),
        )
        .route(
            "/student/dashboard/stats",
            get(handlers::student::dashboard_stats),
        )
}

/// Endpoints open to any authenticated role
fn common_routes() -> Router<AppState> {
    Router::new().route(
        "/common/locations",
        get(handlers::common::list_active_locations),
    )
}
