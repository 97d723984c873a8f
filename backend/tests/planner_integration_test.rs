//! Integration tests for planner and achievement endpoints

mod common;

use axum::http::StatusCode;
use common::{date, exercise, planned, TestApp};
use rstest::rstest;
use serde_json::{json, Value};
use uuid::Uuid;

#[rstest]
#[case::exact(json!({"sets": 3, "reps": 10, "weight_kg": 20.0}), json!({"status": "percentage", "percentage": 100}))]
#[case::half(json!({"sets": 3, "reps": 5, "weight_kg": 0.0}), json!({"status": "percentage", "percentage": 50}))]
#[case::missing(Value::Null, json!({"status": "not_performed"}))]
#[tokio::test]
async fn test_compare_completion(#[case] actual: Value, #[case] expected: Value) {
    let app = TestApp::new();

    let body = json!({
        "planned": planned("Bench press", date(2024, 5, 15), 3, 10, 20.0),
        "actual": actual,
    });

    let (status, response) = app.post_json("/api/v1/planner/compare", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["completion"], expected);
}

#[tokio::test]
async fn test_compare_zero_targets_is_indeterminate() {
    let app = TestApp::new();

    let body = json!({
        "planned": planned("Plank", date(2024, 5, 15), 0, 0, 0.0),
        "actual": {"sets": 3, "reps": 1, "weight_kg": 0.0},
    });

    let (status, response) = app.post_json("/api/v1/planner/compare", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["completion"]["status"], "indeterminate");
}

#[tokio::test]
async fn test_week_defaults_to_current_week() {
    let app = TestApp::new(); // Wednesday 2024-05-15
    let monday = date(2024, 5, 13);

    let body = json!({
        "user_id": Uuid::new_v4(),
        "planned": [
            planned("Bench press", monday, 3, 10, 60.0),
            planned("Bench press", date(2024, 5, 20), 3, 10, 60.0),
        ],
        "logged": [exercise("BENCH PRESS", "Pecho", monday, 3, 8, 60.0)],
    });

    let (status, response) = app.post_json("/api/v1/planner/week", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["week_start"], "2024-05-13");
    assert_eq!(response["days"].as_array().unwrap().len(), 7);
    assert_eq!(response["days"][0]["workouts"].as_array().unwrap().len(), 1);

    let comparisons = response["comparisons"].as_array().unwrap();
    assert_eq!(comparisons.len(), 1);
    // (100 + 80 + 100) / 3
    assert_eq!(comparisons[0]["completion"]["percentage"], 93);
}

#[tokio::test]
async fn test_week_for_selected_date() {
    let app = TestApp::new();

    let body = json!({
        "user_id": Uuid::new_v4(),
        "selected_date": "2025-01-01",
        "planned": [],
        "logged": [],
    });

    let (status, response) = app.post_json("/api/v1/planner/week", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["week_start"], "2024-12-30");
    assert_eq!(response["days"][6]["date"], "2025-01-05");
}

#[tokio::test]
async fn test_evaluate_achievements() {
    let app = TestApp::new();
    let day = date(2024, 5, 10);
    let workouts: Vec<_> = (0..10)
        .map(|_| exercise("Squat", "Piernas", day, 5, 5, 20.0))
        .collect();

    let body = json!({
        "user_id": Uuid::new_v4(),
        "workouts": workouts,
        "achievements": [{
            "id": Uuid::new_v4(),
            "title": "First Workout",
            "achieved_at": "2024-05-01T10:00:00Z",
        }],
    });

    let (status, response) = app.post_json("/api/v1/achievements/evaluate", &body).await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = response["unlocked"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Initial Dedication", "Emerging Strength"]);
    // 10 workouts (1000) + 3 achievements (1500)
    assert_eq!(response["level"]["total_xp"], 2500);
    assert_eq!(response["level"]["level"], 3);
    assert_eq!(response["remaining"], 17);
}
