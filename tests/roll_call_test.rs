//! Integration tests for roll calls and attendance marking.

mod helpers;

use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::json;

use campushub_entity::user::Role;

#[tokio::test]
async fn test_instructor_creates_and_lists_roll_calls() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("teach1", Role::Instructor).await;
    let scheduled = (Utc::now() + Duration::hours(1)).to_rfc3339();

    let response = app
        .request(
            "POST",
            "/instructor/roll-calls",
            Some(json!({"name": "Morning assembly", "scheduled_time": scheduled})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "Morning assembly");
    assert!(response.body["location_id"].is_null());

    let response = app
        .request("GET", "/instructor/roll-calls", None, Some(&token))
        .await;
    assert_eq!(response.body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_roll_calls_are_scoped_to_conductor() {
    let app = helpers::TestApp::new().await;
    let token_a = app.create_and_login("teacha", Role::Instructor).await;
    let token_b = app.create_and_login("teachb", Role::Instructor).await;
    let scheduled = (Utc::now() + Duration::hours(1)).to_rfc3339();

    app.request(
        "POST",
        "/instructor/roll-calls",
        Some(json!({"name": "Homeroom", "scheduled_time": scheduled})),
        Some(&token_a),
    )
    .await;

    let response = app
        .request("GET", "/instructor/roll-calls", None, Some(&token_b))
        .await;
    assert_eq!(response.body.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_roll_call_unknown_location_is_404() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("teach2", Role::Instructor).await;
    let scheduled = (Utc::now() + Duration::hours(1)).to_rfc3339();

    let response = app
        .request(
            "POST",
            "/instructor/roll-calls",
            Some(json!({
                "name": "Field trip",
                "location_id": 9999,
                "scheduled_time": scheduled,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["detail"], "Location not found");
}

#[tokio::test]
async fn test_mark_attendance_defaults_to_absent() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("teach3", Role::Instructor).await;
    let student = app.create_user("student1", "password123", Role::Student).await;
    let scheduled = (Utc::now() + Duration::hours(1)).to_rfc3339();

    let created = app
        .request(
            "POST",
            "/instructor/roll-calls",
            Some(json!({"name": "Evening check", "scheduled_time": scheduled})),
            Some(&token),
        )
        .await;
    let roll_call_id = created.body["id"].as_i64().expect("roll call id");

    let response = app
        .request(
            "POST",
            &format!("/instructor/roll-calls/{roll_call_id}/entries"),
            Some(json!({"student_id": student.id})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "absent");
    assert!(response.body["marked_by"].is_i64());
}

#[tokio::test]
async fn test_remark_replaces_entry() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("teach4", Role::Instructor).await;
    let student = app.create_user("student2", "password123", Role::Student).await;
    let scheduled = (Utc::now() + Duration::hours(1)).to_rfc3339();

    let created = app
        .request(
            "POST",
            "/instructor/roll-calls",
            Some(json!({"name": "Homeroom", "scheduled_time": scheduled})),
            Some(&token),
        )
        .await;
    let roll_call_id = created.body["id"].as_i64().expect("roll call id");

    app.request(
        "POST",
        &format!("/instructor/roll-calls/{roll_call_id}/entries"),
        Some(json!({"student_id": student.id, "status": "absent"})),
        Some(&token),
    )
    .await;

    let response = app
        .request(
            "POST",
            &format!("/instructor/roll-calls/{roll_call_id}/entries"),
            Some(json!({"student_id": student.id, "status": "late", "notes": "Arrived 10m in"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["status"], "late");

    let entries = app
        .request(
            "GET",
            &format!("/instructor/roll-calls/{roll_call_id}/entries"),
            None,
            Some(&token),
        )
        .await;
    let entries = entries.body.as_array().expect("entries array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["status"], "late");
    assert_eq!(entries[0]["notes"], "Arrived 10m in");
}

#[tokio::test]
async fn test_mark_unknown_student_is_404() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("teach5", Role::Instructor).await;
    let scheduled = (Utc::now() + Duration::hours(1)).to_rfc3339();

    let created = app
        .request(
            "POST",
            "/instructor/roll-calls",
            Some(json!({"name": "Homeroom", "scheduled_time": scheduled})),
            Some(&token),
        )
        .await;
    let roll_call_id = created.body["id"].as_i64().expect("roll call id");

    let response = app
        .request(
            "POST",
            &format!("/instructor/roll-calls/{roll_call_id}/entries"),
            Some(json!({"student_id": 9999})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["detail"], "Student not found");
}

#[tokio::test]
async fn test_mark_on_missing_roll_call_is_404() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("teach6", Role::Instructor).await;
    let student = app.create_user("student3", "password123", Role::Student).await;

    let response = app
        .request(
            "POST",
            "/instructor/roll-calls/9999/entries",
            Some(json!({"student_id": student.id})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["detail"], "Roll call not found");
}

#[tokio::test]
async fn test_instructor_stats_count_roll_calls() {
    let app = helpers::TestApp::new().await;
    let token = app.create_and_login("teach7", Role::Instructor).await;
    app.create_user("student4", "password123", Role::Student).await;
    let scheduled = (Utc::now() + Duration::hours(1)).to_rfc3339();

    for name in ["Morning", "Evening"] {
        app.request(
            "POST",
            "/instructor/roll-calls",
            Some(json!({"name": name, "scheduled_time": scheduled})),
            Some(&token),
        )
        .await;
    }

    let response = app
        .request("GET", "/instructor/dashboard/stats", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_students"], 1);
    assert_eq!(response.body["total_roll_calls"], 2);
}
