//! Integration tests for the leave request workflow.

mod helpers;

use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::json;

use campushub_entity::user::Role;

fn window(start_days: i64, end_days: i64) -> (String, String) {
    let now = Utc::now();
    (
        (now + Duration::days(start_days)).to_rfc3339(),
        (now + Duration::days(end_days)).to_rfc3339(),
    )
}

#[tokio::test]
async fn test_student_submits_and_lists_leave_request() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("student1", Role::Student).await;
    let (start, end) = window(1, 3);

    let response = app
        .request(
            "POST",
            "/student/leave-requests",
            Some(json!({
                "reason": "Family visit",
                "start_date": start,
                "end_date": end,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "pending");
    assert_eq!(response.body["reason"], "Family visit");
    assert!(response.body["approved_by"].is_null());

    let response = app
        .request("GET", "/student/leave-requests", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_students_see_only_their_own_requests() {
    let app = helpers::TestApp::new().await;
    let token_a = app.create_and_login("studenta", Role::Student).await;
    let token_b = app.create_and_login("studentb", Role::Student).await;
    let (start, end) = window(1, 2);

    app.request(
        "POST",
        "/student/leave-requests",
        Some(json!({"reason": "Trip", "start_date": start, "end_date": end})),
        Some(&token_a),
    )
    .await;

    let response = app
        .request("GET", "/student/leave-requests", None, Some(&token_b))
        .await;
    assert_eq!(response.body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_empty_window_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("student2", Role::Student).await;
    let (start, _) = window(2, 3);

    let response = app
        .request(
            "POST",
            "/student/leave-requests",
            Some(json!({"reason": "Oops", "start_date": start, "end_date": start})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["detail"], "Start date must be before end date");
}

#[tokio::test]
async fn test_past_start_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("student3", Role::Student).await;
    let (start, end) = window(-2, 3);

    let response = app
        .request(
            "POST",
            "/student/leave-requests",
            Some(json!({"reason": "Late", "start_date": start, "end_date": end})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["detail"], "Start date cannot be in the past");
}

#[tokio::test]
async fn test_instructor_reviews_leave_request() {
    let app = helpers::TestApp::new().await;
    let student_token = app.create_and_login("student4", Role::Student).await;
    let instructor_token = app.create_and_login("teach1", Role::Instructor).await;
    let (start, end) = window(1, 4);

    let created = app
        .request(
            "POST",
            "/student/leave-requests",
            Some(json!({"reason": "Medical", "start_date": start, "end_date": end})),
            Some(&student_token),
        )
        .await;
    let id = created.body["id"].as_i64().expect("request id");

    let response = app
        .request(
            "PUT",
            &format!("/instructor/leave-requests/{id}/status"),
            Some(json!({"status": "approved"})),
            Some(&instructor_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "approved");
    assert!(response.body["approved_by"].is_i64());
    assert!(!response.body["approved_at"].is_null());

    // The decision is terminal; a second review fails.
    let response = app
        .request(
            "PUT",
            &format!("/instructor/leave-requests/{id}/status"),
            Some(json!({"status": "rejected"})),
            Some(&instructor_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["detail"],
        "Only pending leave requests can be reviewed"
    );
}

#[tokio::test]
async fn test_review_rejects_pending_and_unknown_targets() {
    let app = helpers::TestApp::new().await;
    let student_token = app.create_and_login("student5", Role::Student).await;
    let instructor_token = app.create_and_login("teach2", Role::Instructor).await;
    let (start, end) = window(1, 2);

    let created = app
        .request(
            "POST",
            "/student/leave-requests",
            Some(json!({"reason": "Event", "start_date": start, "end_date": end})),
            Some(&student_token),
        )
        .await;
    let id = created.body["id"].as_i64().expect("request id");

    for status in ["pending", "maybe"] {
        let response = app
            .request(
                "PUT",
                &format!("/instructor/leave-requests/{id}/status"),
                Some(json!({"status": status})),
                Some(&instructor_token),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body["detail"],
            "Status must be 'approved' or 'rejected'"
        );
    }
}

#[tokio::test]
async fn test_review_missing_request_is_404() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("teach3", Role::Instructor).await;

    let response = app
        .request(
            "PUT",
            "/instructor/leave-requests/9999/status",
            Some(json!({"status": "approved"})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["detail"], "Leave request not found");
}

#[tokio::test]
async fn test_student_stats_count_pending() {
    let app = helpers::TestApp::new().await;
    let student_token = app.create_and_login("student6", Role::Student).await;
    let instructor_token = app.create_and_login("teach4", Role::Instructor).await;
    let (start, end) = window(1, 2);

    for reason in ["One", "Two"] {
        app.request(
            "POST",
            "/student/leave-requests",
            Some(json!({"reason": reason, "start_date": start, "end_date": end})),
            Some(&student_token),
        )
        .await;
    }

    let listed = app
        .request("GET", "/instructor/leave-requests", None, Some(&instructor_token))
        .await;
    let first_id = listed.body[0]["id"].as_i64().expect("request id");

    app.request(
        "PUT",
        &format!("/instructor/leave-requests/{first_id}/status"),
        Some(json!({"status": "rejected"})),
        Some(&instructor_token),
    )
    .await;

    let response = app
        .request("GET", "/student/dashboard/stats", None, Some(&student_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_leave_requests"], 2);
    assert_eq!(response.body["pending_leave_requests"], 1);
}
