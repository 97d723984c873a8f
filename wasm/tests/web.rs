//! Browser tests for the exported bindings
//!
//! Run with `wasm-pack test --headless --firefox wasm`.

#![cfg(target_arch = "wasm32")]

use gym_tracker_wasm::{
    completion_percentage, exercise_guide, level_and_xp, monthly_stats, workout_streak,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn level_and_xp_round_trips_as_json() {
    let json = level_and_xp(12, 1).unwrap();
    assert!(json.contains("\"level\":2"));
    assert!(json.contains("\"xp\":700"));
}

#[wasm_bindgen_test]
fn invalid_date_becomes_js_error() {
    let err = workout_streak("yesterday", "[]").unwrap_err();
    assert!(err.as_string().unwrap().contains("Invalid date"));
}

#[wasm_bindgen_test]
fn indeterminate_completion_is_undefined() {
    assert_eq!(completion_percentage(0, 0, 0.0, 1, 1, 1.0), None);
}

#[wasm_bindgen_test]
fn invalid_snapshot_becomes_js_error() {
    let workouts = r#"[{"id":"7f1c9a52-3c1e-4c7a-9a57-0d9f6a1b2c03","name":"","muscle_group":"Pecho",
        "date":"2024-05-10","sets":0,"reps":10,"weight_kg":-50.0}]"#;
    let err = monthly_stats("2024-05-31", workouts, None, Some(400)).unwrap_err();
    assert!(err.as_string().unwrap().starts_with("Validation error"));
}

#[wasm_bindgen_test]
fn guide_without_group_is_empty() {
    let json = exercise_guide("[]", None, "", "Todos").unwrap();
    assert!(json.contains("\"exercises\":[]"));
}
