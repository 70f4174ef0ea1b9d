//! Integration tests for the exercise log endpoints

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::json;

fn today_calendar_string() -> String {
    Utc::now().date_naive().format("%a %b %d %Y").to_string()
}

async fn unique_user(app: &common::TestApp) -> String {
    let username = format!("exercise_test_{}", uuid::Uuid::new_v4());
    app.create_test_user(&username).await
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_add_exercise_without_date_uses_today() {
    let app = common::TestApp::new().await;
    let id = unique_user(&app).await;

    let body = json!({ "description": "test run", "duration": 30 });
    let (status, response) = app
        .post_json(&format!("/api/users/{}/exercises", id), &body.to_string())
        .await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["id"], id.as_str());
    assert_eq!(response["description"], "test run");
    assert_eq!(response["duration"], 30);
    assert_eq!(response["date"], today_calendar_string());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_add_exercise_formats_explicit_date() {
    let app = common::TestApp::new().await;
    let id = unique_user(&app).await;

    let body = json!({ "description": "morning swim", "duration": 45, "date": "2023-01-01" });
    let (status, response) = app
        .post_json(&format!("/api/users/{}/exercises", id), &body.to_string())
        .await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["date"], "Sun Jan 01 2023");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_add_exercise_unparsable_date_falls_back_to_today() {
    let app = common::TestApp::new().await;
    let id = unique_user(&app).await;

    let body = json!({ "description": "test run", "duration": 30, "date": "not-a-date" });
    let (status, response) = app
        .post_json(&format!("/api/users/{}/exercises", id), &body.to_string())
        .await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["date"], today_calendar_string());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_add_exercise_accepts_form_body_with_string_duration() {
    let app = common::TestApp::new().await;
    let id = unique_user(&app).await;

    let (status, response) = app
        .post_form(
            &format!("/api/users/{}/exercises", id),
            "description=test+run&duration=30&date=2023-01-01",
        )
        .await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["duration"], 30);
    assert_eq!(response["date"], "Sun Jan 01 2023");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_add_exercise_unknown_user_returns_not_found() {
    let app = common::TestApp::new().await;

    let missing = uuid::Uuid::new_v4();
    let body = json!({ "description": "test run", "duration": 30 });
    let (status, response) = app
        .post_json(&format!("/api/users/{}/exercises", missing), &body.to_string())
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response, "User not found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_unknown_user_returns_not_found() {
    let app = common::TestApp::new().await;

    let missing = uuid::Uuid::new_v4();
    let (status, response) = app.get(&format!("/api/users/{}/logs", missing)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response, "User not found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_malformed_user_id_returns_not_found() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/users/not-a-uuid/logs").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

async fn seed_three_entries(app: &common::TestApp, id: &str) {
    for (description, date) in [
        ("new year run", "2023-01-01"),
        ("midsummer swim", "2023-06-15"),
        ("year end walk", "2023-12-31"),
    ] {
        let body = json!({ "description": description, "duration": 30, "date": date });
        let (status, _) = app
            .post_json(&format!("/api/users/{}/exercises", id), &body.to_string())
            .await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_returns_all_entries_with_count() {
    let app = common::TestApp::new().await;
    let id = unique_user(&app).await;
    seed_three_entries(&app, &id).await;

    let (status, response) = app.get(&format!("/api/users/{}/logs", id)).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["id"], id.as_str());
    assert_eq!(response["count"], 3);
    assert_eq!(response["log"].as_array().unwrap().len(), 3);

    let first = &response["log"][0];
    assert!(first["description"].is_string());
    assert!(first["duration"].is_number());
    assert!(first["date"].is_string());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_limit_caps_returned_entries() {
    let app = common::TestApp::new().await;
    let id = unique_user(&app).await;
    seed_three_entries(&app, &id).await;

    let (status, response) = app.get(&format!("/api/users/{}/logs?limit=1", id)).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["count"], 1);
    assert_eq!(response["log"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_date_bounds_are_inclusive() {
    let app = common::TestApp::new().await;
    let id = unique_user(&app).await;
    seed_three_entries(&app, &id).await;

    let (status, response) = app
        .get(&format!("/api/users/{}/logs?from=2023-06-15&to=2023-12-31", id))
        .await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["count"], 2);

    let dates: Vec<&str> = response["log"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap())
        .collect();
    assert!(dates.contains(&"Thu Jun 15 2023"));
    assert!(dates.contains(&"Sun Dec 31 2023"));
    assert!(!dates.contains(&"Sun Jan 01 2023"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_log_ignores_unparsable_filters() {
    let app = common::TestApp::new().await;
    let id = unique_user(&app).await;
    seed_three_entries(&app, &id).await;

    let (status, response) = app
        .get(&format!("/api/users/{}/logs?from=whenever&limit=abc", id))
        .await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["count"], 3);
}
