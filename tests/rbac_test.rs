//! Integration tests for role gating across route families.

mod helpers;

use http::StatusCode;

use campushub_entity::user::Role;

#[tokio::test]
async fn test_student_cannot_reach_admin_routes() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("student1", Role::Student).await;

    let response = app.request("GET", "/admin/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["detail"], "Administrator access required");
}

#[tokio::test]
async fn test_instructor_cannot_reach_admin_routes() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("teach1", Role::Instructor).await;

    let response = app
        .request("GET", "/admin/dashboard/stats", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_administrator_passes_instructor_gate() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("admin1", Role::Administrator).await;

    let response = app
        .request("GET", "/instructor/students", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_student_cannot_reach_instructor_routes() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("student2", Role::Student).await;

    let response = app
        .request("GET", "/instructor/students", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body["detail"],
        "Instructor or administrator access required"
    );
}

#[tokio::test]
async fn test_student_gate_rejects_higher_roles() {
    let app = helpers::TestApp::new().await;

    // The student family is personal; no implicit widening for
    // administrators or instructors.
    for (name, role) in [
        ("admin2", Role::Administrator),
        ("teach2", Role::Instructor),
    ] {
        let token = app.create_and_login(name, role).await;
        let response = app
            .request("GET", "/student/dashboard/stats", None, Some(&token))
            .await;

        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(response.body["detail"], "Student access required");
    }
}

#[tokio::test]
async fn test_common_routes_open_to_all_roles() {
    let app = helpers::TestApp::new().await;

    for (name, role) in [
        ("admin3", Role::Administrator),
        ("teach3", Role::Instructor),
        ("student3", Role::Student),
    ] {
        let token = app.create_and_login(name, role).await;
        let response = app
            .request("GET", "/common/locations", None, Some(&token))
            .await;

        assert_eq!(response.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_common_routes_require_authentication() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/common/locations", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
