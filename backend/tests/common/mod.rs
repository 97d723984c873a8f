//! Common test utilities for integration tests
//!
//! The engine is stateless, so every test builds its own router in memory.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use fake::faker::lorem::en::Word;
use fake::Fake;
use gym_tracker_backend::{config::AppConfig, routes, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub today: NaiveDate,
}

impl TestApp {
    /// Application whose "today" is fixed to 2024-05-15 (a Wednesday)
    pub fn new() -> Self {
        Self::with_today(date(2024, 5, 15))
    }

    pub fn with_today(today: NaiveDate) -> Self {
        let state = AppState::with_fixed_today(AppConfig::default(), today);
        let app = routes::create_router(state);
        Self { app, today }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// POST a JSON value and parse the JSON response
    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let (status, body) = self.post(path, &body.to_string()).await;
        let value = serde_json::from_str(&body).unwrap_or(Value::Null);
        (status, value)
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// JSON for a logged exercise
pub fn exercise(name: &str, muscle_group: &str, date: NaiveDate, sets: u32, reps: u32, weight_kg: f64) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "name": name,
        "muscle_group": muscle_group,
        "date": date,
        "sets": sets,
        "reps": reps,
        "weight_kg": weight_kg,
    })
}

/// JSON for a logged exercise with a random name
pub fn any_exercise(muscle_group: &str, date: NaiveDate, sets: u32, reps: u32, weight_kg: f64) -> Value {
    let name: String = Word().fake();
    exercise(&name, muscle_group, date, sets, reps, weight_kg)
}

/// JSON for a catalog exercise of the muscle guide
pub fn catalog_exercise(name: &str, muscle_group: &str, difficulty: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "name": name,
        "muscle_group": muscle_group,
        "difficulty": difficulty,
        "description": format!("{} ({})", name, muscle_group),
    })
}

/// JSON for a planned workout
pub fn planned(name: &str, date: NaiveDate, sets: u32, reps: u32, weight_kg: f64) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "date": date,
        "exercise": {
            "id": Uuid::new_v4(),
            "name": name,
            "muscle_group": "Pecho",
        },
        "planned_sets": sets,
        "planned_reps": reps,
        "planned_weight_kg": weight_kg,
    })
}
