//! Integration tests for the authentication flow.

mod helpers;

use http::StatusCode;

use campushub_entity::user::Role;

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    app.create_user("alice", "password123", Role::Student).await;

    let response = app
        .form_request("/auth/login", "username=alice&password=password123")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("access_token").is_some());
    assert_eq!(response.body["token_type"], "bearer");
    assert_eq!(response.body["user"]["username"], "alice");
    assert!(response.body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = helpers::TestApp::new().await;
    app.create_user("bob", "password123", Role::Student).await;

    let response = app
        .form_request("/auth/login", "username=bob&password=wrongpassword")
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["detail"], "Incorrect username or password");
}

#[tokio::test]
async fn test_login_unknown_user_same_message() {
    let app = helpers::TestApp::new().await;

    let response = app
        .form_request("/auth/login", "username=nobody&password=password123")
        .await;

    // Unknown usernames and wrong passwords are indistinguishable.
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["detail"], "Incorrect username or password");
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("carol", Role::Instructor).await;

    let response = app.request("GET", "/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], "carol");
    assert_eq!(response.body["role"], "instructor");
}

#[tokio::test]
async fn test_me_without_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["detail"], "Missing Authorization header");
}

#[tokio::test]
async fn test_me_with_garbage_token() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/auth/me", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["detail"], "Could not validate credentials");
}

#[tokio::test]
async fn test_inactive_user_cannot_login() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("dormant", "password123", Role::Student).await;
    let token = app.login("dormant", "password123").await;

    sqlx::query("UPDATE users SET is_active = 0 WHERE id = ?")
        .bind(user.id)
        .execute(&app.state.db_pool)
        .await
        .expect("Failed to deactivate user");

    let response = app
        .form_request("/auth/login", "username=dormant&password=password123")
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["detail"], "Inactive user");

    // An already-issued token stops working too.
    let response = app.request("GET", "/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["detail"], "Inactive user");
}

#[tokio::test]
async fn test_health_and_banner() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");

    let response = app.request("GET", "/", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Student Life Management System API");
    assert!(response.body.get("version").is_some());
}
