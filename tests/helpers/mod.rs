//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use campushub_api::{AppState, build_router};
use campushub_core::config::AppConfig;
use campushub_database::migration::run_migrations;
use campushub_entity::user::{Role, User};
use campushub_service::user::NewUser;

/// Test application context backed by an in-memory SQLite database.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application state for direct service access
    pub state: AppState,
}

/// A decoded test response.
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// JSON body (or `Value::Null` for empty bodies)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application on a fresh in-memory database.
    pub async fn new() -> Self {
        // A single connection keeps every query on the same in-memory DB.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        run_migrations(&pool).await.expect("Failed to run migrations");

        let state = AppState::initialize(AppConfig::default(), pool);
        let router = build_router(state.clone());

        Self { router, state }
    }

    /// Send a request with an optional JSON body and bearer token.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("Failed to build request"),
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };

        self.send(request).await
    }

    /// Send a form-encoded request (used for login).
    pub async fn form_request(&self, path: &str, form: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .expect("Failed to build request");

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Seed a user directly through the service layer.
    pub async fn create_user(&self, username: &str, password: &str, role: Role) -> User {
        self.state
            .user_service
            .create_user(NewUser {
                email: format!("{username}@example.com"),
                username: username.to_string(),
                full_name: username.to_string(),
                password: password.to_string(),
                role,
                grade: None,
                student_id: None,
                department: None,
            })
            .await
            .expect("Failed to seed user")
    }

    /// Log in and return the access token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .form_request(
                "/auth/login",
                &format!("username={username}&password={password}"),
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);

        response.body["access_token"]
            .as_str()
            .expect("No access token in login response")
            .to_string()
    }

    /// Seed a user and log them in, returning the token.
    pub async fn create_and_login(&self, username: &str, role: Role) -> String {
        self.create_user(username, "password123", role).await;
        self.login(username, "password123").await
    }
}
